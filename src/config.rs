use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::persistence::SaveStoreConfig;

/// Upper bound on the cosmetic "thinking" pause.
const MAX_THINKING_DELAY_MS: u64 = 10_000;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub save: SaveStoreConfig,
    pub logging: LoggingConfig,
}

/// Pacing and randomness of a game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Shortest pause before the computer moves.
    pub thinking_delay_min_ms: u64,
    /// Longest pause before the computer moves.
    pub thinking_delay_max_ms: u64,
    /// Fixed seed for the opening state and the computer's random fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            thinking_delay_min_ms: 800,
            thinking_delay_max_ms: 1500,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` wins when set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: PathBuf::from("multiplication_game.log"),
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.thinking_delay_min_ms > self.game.thinking_delay_max_ms {
            return Err(ConfigError::Validation(
                "game.thinking_delay_min_ms must be <= game.thinking_delay_max_ms".into(),
            ));
        }
        if self.game.thinking_delay_max_ms > MAX_THINKING_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "game.thinking_delay_max_ms must be <= {MAX_THINKING_DELAY_MS}"
            )));
        }
        if self.save.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("save.path must not be empty".into()));
        }
        if self.logging.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "logging.file must not be empty".into(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
