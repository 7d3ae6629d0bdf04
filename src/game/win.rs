use super::{Board, Player, Position};

/// Marks in an unbroken line needed to win.
pub const WIN_LENGTH: usize = 4;

/// The four line axes as forward direction vectors: right, down, down-right,
/// down-left. Every run has an end cell whose forward scan covers it.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Find a player holding `WIN_LENGTH` cells in a row, scanning row-major.
pub fn find_winner(board: &Board) -> Option<Player> {
    for start in board.positions() {
        let Some(player) = board.owner(start).player() else {
            continue;
        };
        for &(dr, dc) in &DIRECTIONS {
            if line_from(board, start, dr, dc, player) {
                return Some(player);
            }
        }
    }
    None
}

/// Check the `WIN_LENGTH - 1` cells after `start` along (dr, dc)
fn line_from(board: &Board, start: Position, dr: isize, dc: isize, player: Player) -> bool {
    (1..WIN_LENGTH as isize).all(|k| {
        start
            .offset(dr, dc, k)
            .is_some_and(|pos| board.owner(pos).player() == Some(player))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BOARD_SIZE;

    fn board_with(human: &[u32], computer: &[u32]) -> Board {
        let mut board = Board::new();
        for &p in human {
            board.claim(p, Player::Human).unwrap();
        }
        for &p in computer {
            board.claim(p, Player::Computer).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(find_winner(&Board::new()), None);
    }

    #[test]
    fn test_horizontal_win() {
        // Row 2: 15 16 18 20 21 24
        let board = board_with(&[16, 18, 20, 21], &[]);
        assert_eq!(find_winner(&board), Some(Player::Human));
    }

    #[test]
    fn test_vertical_win() {
        // Column 5: 6 14 24 35 49 81
        let board = board_with(&[], &[14, 24, 35, 49]);
        assert_eq!(find_winner(&board), Some(Player::Computer));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        // (0,0) (1,1) (2,2) (3,3)
        let board = board_with(&[1, 8, 18, 30], &[]);
        assert_eq!(find_winner(&board), Some(Player::Human));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        // (1,5) (2,4) (3,3) (4,2)
        let board = board_with(&[], &[14, 21, 30, 42]);
        assert_eq!(find_winner(&board), Some(Player::Computer));
    }

    #[test]
    fn test_no_win_with_three() {
        let board = board_with(&[1, 2, 3], &[7, 15, 25]);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        // Row 3 with the opponent in the middle: 25 27 [28] 30 32
        let board = board_with(&[25, 27, 30, 32], &[28]);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_line_does_not_wrap_rows() {
        // 5 6 at the end of row 0, 7 8 at the start of row 1
        let board = board_with(&[5, 6, 7, 8], &[]);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_every_straight_run_is_detected() {
        for &(dr, dc) in &DIRECTIONS {
            let mut found = 0;
            let empty = Board::new();
            for start in empty.positions() {
                let cells: Option<Vec<Position>> = (0..WIN_LENGTH as isize)
                    .map(|k| start.offset(dr, dc, k))
                    .collect();
                let Some(cells) = cells else { continue };
                let mut owners = [[crate::game::Owner::Empty; BOARD_SIZE]; BOARD_SIZE];
                for pos in &cells {
                    owners[pos.row][pos.col] = crate::game::Owner::Computer;
                }
                let board = Board::from_owners(owners);
                assert_eq!(
                    find_winner(&board),
                    Some(Player::Computer),
                    "missed run from {start:?} along ({dr}, {dc})"
                );
                found += 1;
            }
            assert!(found > 0);
        }
    }
}
