//! Line-oriented text form of a game in progress:
//!
//! ```text
//! <active factor>
//! <turn flag: 1 = Human, 0 = Computer>
//! <BOARD_SIZE rows of BOARD_SIZE ownership codes: 0 empty, 1 Human, 2 Computer>
//! ```

use crate::error::SaveError;
use crate::game::{Board, GameState, Owner, Player, BOARD_SIZE, FACTORS};

/// A fully validated saved game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGame {
    pub state: GameState,
    pub board: Board,
}

pub fn serialize(board: &Board, state: &GameState) -> String {
    let turn_flag = match state.turn() {
        Player::Human => 1,
        Player::Computer => 0,
    };
    let mut out = format!("{}\n{}\n", state.active_factor(), turn_flag);
    for row in board.owners() {
        let codes: Vec<String> = row.iter().map(|o| o.code().to_string()).collect();
        out.push_str(&codes.join(" "));
        out.push('\n');
    }
    out
}

/// Parse and validate a save. Nothing is returned unless every line checks out.
pub fn deserialize(text: &str) -> Result<SavedGame, SaveError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let (n, line) = lines
        .next()
        .ok_or_else(|| SaveError::malformed(1, "missing active factor"))?;
    let active_factor: u8 = line
        .parse()
        .map_err(|_| SaveError::malformed(n, format!("active factor '{line}' is not a number")))?;
    if !FACTORS.contains(&active_factor) {
        return Err(SaveError::malformed(
            n,
            format!("active factor {active_factor} is outside 1..=9"),
        ));
    }

    let (n, line) = lines
        .next()
        .ok_or_else(|| SaveError::malformed(2, "missing turn flag"))?;
    let turn = match line {
        "1" => Player::Human,
        "0" => Player::Computer,
        other => {
            return Err(SaveError::malformed(
                n,
                format!("turn flag '{other}' is not 0 or 1"),
            ))
        }
    };

    let mut owners = [[Owner::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, slot) in owners.iter_mut().enumerate() {
        let (n, line) = lines.next().ok_or_else(|| {
            SaveError::malformed(
                row + 3,
                format!("expected {BOARD_SIZE} board rows, found {row}"),
            )
        })?;
        *slot = parse_row(n, line)?;
    }

    if let Some((n, _)) = lines.find(|(_, l)| !l.is_empty()) {
        return Err(SaveError::malformed(n, "unexpected data after the board"));
    }

    let state = GameState::new(active_factor, turn)
        .ok_or_else(|| SaveError::malformed(1, "active factor out of range"))?;
    Ok(SavedGame {
        state,
        board: Board::from_owners(owners),
    })
}

fn parse_row(n: usize, line: &str) -> Result<[Owner; BOARD_SIZE], SaveError> {
    let mut row = [Owner::Empty; BOARD_SIZE];
    let mut tokens = line.split_whitespace();
    for slot in row.iter_mut() {
        let token = tokens.next().ok_or_else(|| {
            SaveError::malformed(n, format!("row has fewer than {BOARD_SIZE} cells"))
        })?;
        *slot = token
            .parse::<u8>()
            .ok()
            .and_then(Owner::from_code)
            .ok_or_else(|| {
                SaveError::malformed(n, format!("ownership code '{token}' is not 0, 1 or 2"))
            })?;
    }
    if tokens.next().is_some() {
        return Err(SaveError::malformed(
            n,
            format!("row has more than {BOARD_SIZE} cells"),
        ));
    }
    Ok(row)
}
