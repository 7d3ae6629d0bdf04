use std::path::PathBuf;

use crate::game::Player;

/// Errors from applying a move to the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid factor {0}! Must be between 1 and 9.")]
    InvalidFactor(u8),

    #[error("Product {product} ({factor}*{active_factor}) is not available!")]
    IllegalMove {
        factor: u8,
        active_factor: u8,
        product: u32,
    },

    #[error("it is not {}'s turn", .0.name())]
    NotYourTurn(Player),

    #[error("the game is over")]
    GameOver,

    #[error("internal error: failed to mark legal product {product}")]
    InternalInconsistency { product: u32 },
}

/// Errors from reading or writing a saved game.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("malformed save at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("no save file at {0}")]
    NotFound(PathBuf),

    #[error("I/O error on save file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SaveError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        SaveError::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Errors from turning raw input text into a factor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactorParseError {
    #[error("No factor entered.")]
    Empty,

    #[error("Invalid number format.")]
    NotANumber,

    #[error("Invalid factor! Must be between 1 and 9.")]
    OutOfRange,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
