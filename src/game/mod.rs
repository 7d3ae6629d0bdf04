//! Core game logic: the product board, players, win detection and the turn
//! engine that ties them together.

mod board;
mod engine;
mod player;
mod state;
mod win;

pub use board::{Board, BoardError, Cell, Owner, Position, BOARD_SIZE, PRODUCTS};
pub use engine::{ComputerTurn, Game, GameSnapshot, GameStatus, MoveOutcome, TurnStart};
pub use player::Player;
pub use state::{legal_factors, product, GameState, FACTORS};
pub use win::{find_winner, DIRECTIONS, WIN_LENGTH};
