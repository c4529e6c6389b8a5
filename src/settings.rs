//! User-scoped settings storage.
//!
//! Settings live in `<data_dir>/settings.json`. The only value the
//! generation workflow reads is the OpenAI API key.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// The settings file name inside the data directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Persisted user settings.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// API key forwarded to the generation endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
}

impl Settings {
    /// Settings holding only an API key.
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            openai_api_key: Some(key.into()),
        }
    }

    /// The stored API key, verbatim, unless it is blank.
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    /// True when nothing worth persisting is set.
    pub fn is_empty(&self) -> bool {
        self.openai_api_key.is_none()
    }
}

// The key must never reach a log line through `{:?}`.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Manages settings storage and retrieval.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    settings_path: PathBuf,
}

impl SettingsManager {
    /// Create a manager for `<data_dir>/settings.json`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            settings_path: data_dir.join(SETTINGS_FILE),
        }
    }

    /// Get the path to the settings file.
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk.
    ///
    /// A missing file yields default settings; a malformed file is an error.
    pub fn load(&self) -> io::Result<Settings> {
        let file = match File::open(&self.settings_path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => return Err(e),
        };

        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save settings to disk, creating the data directory if needed.
    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.settings_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, settings)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writer.flush()
    }

    /// Remove the settings file. Succeeds if it did not exist.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.settings_path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
