//! Terminal UI: main menu, rules screen, and the game board with factor input.

mod app;
mod game_view;
pub mod input;
mod menu;

pub use app::App;
