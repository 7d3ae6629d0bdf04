//! # Multiplication Four
//!
//! A two-player product board game: each turn the mover multiplies the shared
//! active factor by a factor of their own (1-9) and claims the cell holding
//! that product. Four claimed cells in a line win. The computer opponent is a
//! one-ply heuristic player. Features a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] - Board, players, win detection, turn engine
//! - [`ai`] - Agent trait, line heuristic, decision policy, random fallback
//! - [`persistence`] - Save text format and the on-disk save slot
//! - [`ui`] - Terminal UI: menu, rules, game view
//! - [`config`] - TOML configuration loading and validation
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod persistence;
pub mod ui;
