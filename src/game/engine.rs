use rand::Rng;
use tracing::{debug, error, info, instrument, warn};

use super::state::{legal_factors, FACTORS};
use super::{find_winner, Board, Cell, GameState, Player, Position, BOARD_SIZE};
use crate::ai::Agent;
use crate::error::{MoveError, SaveError};
use crate::persistence::{self, SavedGame};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Player),
    Won(Player),
    Draw,
    Quit,
}

/// What happened when a turn was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStart {
    /// The player to move has at least one legal factor.
    Ready(Player),
    /// The player had nothing legal; the other player moves instead.
    Passed { from: Player, to: Player },
    /// Neither player can move.
    Draw,
}

/// A move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub player: Player,
    pub factor: u8,
    pub product: u32,
    pub position: Position,
    pub winner: Option<Player>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerTurn {
    Moved(MoveOutcome),
    Passed,
}

/// Read-only view handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub active_factor: u8,
    pub turn: Player,
    pub status: GameStatus,
}

/// Turn engine: owns the board and drives every state transition.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    status: GameStatus,
}

impl Game {
    /// Fresh game with a random active factor and first player
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Game::from_saved(SavedGame {
            state: GameState::random(rng),
            board: Board::new(),
        })
    }

    /// Game resumed from a validated save
    pub fn from_saved(saved: SavedGame) -> Self {
        let status = match find_winner(&saved.board) {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::AwaitingMove(saved.state.turn()),
        };
        Game {
            board: saved.board,
            state: saved.state,
            status,
        }
    }

    /// Clear the board and reroll the opening state
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board.reset();
        self.state = GameState::random(rng);
        self.status = GameStatus::AwaitingMove(self.state.turn());
        self.log_start("new");
    }

    fn log_start(&self, kind: &str) {
        info!(
            kind,
            active_factor = self.state.active_factor(),
            first = self.state.turn().name(),
            "game started"
        );
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn active_factor(&self) -> u8 {
        self.state.active_factor()
    }

    pub fn turn(&self) -> Player {
        self.state.turn()
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::AwaitingMove(_))
    }

    /// Legal factors for whoever is to move
    pub fn legal_factors(&self) -> Vec<u8> {
        legal_factors(&self.board, self.state.active_factor())
    }

    fn can_move(&self) -> bool {
        !self.legal_factors().is_empty()
    }

    /// Resolve passes before the current player is asked for a factor.
    #[instrument(skip(self), fields(turn = self.turn().name(), active_factor = self.active_factor()))]
    pub fn begin_turn(&mut self) -> Result<TurnStart, MoveError> {
        let GameStatus::AwaitingMove(player) = self.status else {
            return Err(MoveError::GameOver);
        };
        if self.can_move() {
            return Ok(TurnStart::Ready(player));
        }
        Ok(self.pass_turn())
    }

    /// The current player has nothing legal: hand the turn over, or end in a
    /// draw if the other player is stuck as well.
    fn pass_turn(&mut self) -> TurnStart {
        let from = self.turn();
        self.state.swap_turn();
        let to = self.turn();
        if self.can_move() {
            info!(from = from.name(), "no legal factor, passing turn");
            self.status = GameStatus::AwaitingMove(to);
            TurnStart::Passed { from, to }
        } else {
            info!("neither player can move, game drawn");
            self.status = GameStatus::Draw;
            TurnStart::Draw
        }
    }

    /// Apply a factor typed in by the human.
    #[instrument(skip(self))]
    pub fn submit_human_factor(&mut self, factor: u8) -> Result<MoveOutcome, MoveError> {
        self.expect_turn(Player::Human)?;
        self.apply_factor(Player::Human, factor)
    }

    /// Ask `agent` for the computer's factor and apply it.
    #[instrument(skip(self, agent), fields(agent = agent.name()))]
    pub fn play_computer_turn(&mut self, agent: &mut dyn Agent) -> Result<ComputerTurn, MoveError> {
        self.expect_turn(Player::Computer)?;
        match agent.choose_factor(&mut self.board, &self.state) {
            Some(factor) => self.apply_factor(Player::Computer, factor).map(ComputerTurn::Moved),
            None => {
                // Only reachable when begin_turn was skipped
                self.pass_turn();
                Ok(ComputerTurn::Passed)
            }
        }
    }

    fn expect_turn(&self, player: Player) -> Result<(), MoveError> {
        match self.status {
            GameStatus::AwaitingMove(p) if p == player => Ok(()),
            GameStatus::AwaitingMove(_) => Err(MoveError::NotYourTurn(player)),
            _ => Err(MoveError::GameOver),
        }
    }

    fn apply_factor(&mut self, player: Player, factor: u8) -> Result<MoveOutcome, MoveError> {
        if !FACTORS.contains(&factor) {
            return Err(MoveError::InvalidFactor(factor));
        }
        let active_factor = self.state.active_factor();
        let product = self.state.product_for(factor);
        if !self.board.is_legal(product) {
            return Err(MoveError::IllegalMove {
                factor,
                active_factor,
                product,
            });
        }

        let position = match self.board.claim(product, player) {
            Ok(position) => position,
            Err(e) => {
                error!(error = %e, product, "claim failed after legality check");
                self.state.swap_turn();
                self.status = GameStatus::AwaitingMove(self.turn());
                return Err(MoveError::InternalInconsistency { product });
            }
        };
        self.state.set_active_factor(factor);

        let winner = find_winner(&self.board);
        debug!(
            player = player.name(),
            factor,
            product,
            row = position.row,
            col = position.col,
            "move applied"
        );
        match winner {
            Some(w) => {
                info!(winner = w.name(), "game won");
                self.status = GameStatus::Won(w);
            }
            None => {
                self.state.swap_turn();
                self.status = GameStatus::AwaitingMove(self.turn());
            }
        }

        Ok(MoveOutcome {
            player,
            factor,
            product,
            position,
            winner,
        })
    }

    /// Stop the game where it stands
    pub fn request_quit(&mut self) {
        if let GameStatus::AwaitingMove(player) = self.status {
            info!(turn = player.name(), "game quit");
            self.status = GameStatus::Quit;
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut cells = [[Cell {
            value: 0,
            owner: super::Owner::Empty,
        }; BOARD_SIZE]; BOARD_SIZE];
        for pos in self.board.positions() {
            cells[pos.row][pos.col] = self.board.get(pos.row, pos.col);
        }
        GameSnapshot {
            cells,
            active_factor: self.state.active_factor(),
            turn: self.state.turn(),
            status: self.status,
        }
    }

    /// Serialize the current position in the save format
    pub fn save_text(&self) -> String {
        persistence::serialize(&self.board, &self.state)
    }

    /// Replace the whole game with a saved one. On error nothing changes.
    pub fn load_text(&mut self, text: &str) -> Result<(), SaveError> {
        match persistence::deserialize(text) {
            Ok(saved) => {
                *self = Game::from_saved(saved);
                self.log_start("loaded");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "rejected saved game");
                Err(e)
            }
        }
    }
}
