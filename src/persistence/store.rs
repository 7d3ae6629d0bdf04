use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::codec::{deserialize, SavedGame};
use crate::error::SaveError;

/// Configuration for the save store.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SaveStoreConfig {
    pub path: PathBuf,
}

impl Default for SaveStoreConfig {
    fn default() -> Self {
        SaveStoreConfig {
            path: PathBuf::from("multiplication_save.txt"),
        }
    }
}

/// Reads and writes the single save slot on disk.
pub struct SaveStore {
    config: SaveStoreConfig,
}

impl SaveStore {
    pub fn new(config: SaveStoreConfig) -> Self {
        SaveStore { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn exists(&self) -> bool {
        self.config.path.is_file()
    }

    /// Write the save text, replacing any previous save.
    pub fn save(&self, text: &str) -> Result<(), SaveError> {
        let path = &self.config.path;
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        fs::write(&tmp, text).map_err(|e| io_error(&tmp, e))?;

        // Atomic rename
        fs::rename(&tmp, path).map_err(|e| io_error(path, e))?;
        info!(path = %path.display(), "game saved");
        Ok(())
    }

    /// Read the raw save text.
    pub fn load_text(&self) -> Result<String, SaveError> {
        let path = &self.config.path;
        match fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), bytes = text.len(), "save read");
                Ok(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SaveError::NotFound(path.clone())),
            Err(e) => Err(io_error(path, e)),
        }
    }

    /// Read and validate the save.
    pub fn load(&self) -> Result<SavedGame, SaveError> {
        deserialize(&self.load_text()?)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> SaveError {
    SaveError::Io {
        path: path.to_path_buf(),
        source,
    }
}
