//! Viewer configuration
//!
//! Persisted as `config.json` next to the executable. Every field is
//! optional and a field of the wrong JSON type is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

/// File name of the config, looked up beside the executable
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Couldn't open Config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bad formed Config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file is not a JSON object")]
    NotAnObject,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Persisted viewer state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Last font directory
    #[serde(rename = "mCurrentFontDir", skip_serializing_if = "Option::is_none")]
    pub current_font_dir: Option<String>,
    /// Last selected font file name
    #[serde(rename = "mCurrentFontFile", skip_serializing_if = "Option::is_none")]
    pub current_font_file: Option<String>,
    /// Content of the char code entry
    #[serde(rename = "le_CharCode", skip_serializing_if = "Option::is_none")]
    pub char_code: Option<String>,
}

impl Config {
    /// Default location: beside the running executable
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default()
            .join(CONFIG_FILE_NAME)
    }

    /// Parse a config from JSON text
    pub fn from_json_str(data: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(data)?;
        let json = value.as_object().ok_or(ConfigError::NotAnObject)?;
        let string = |key: &str| json.get(key).and_then(Value::as_str).map(str::to_string);

        Ok(Self {
            current_font_dir: string("mCurrentFontDir"),
            current_font_file: string("mCurrentFontFile"),
            char_code: string("le_CharCode"),
        })
    }

    /// Read a config file
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Read a config file, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) => {
                tracing::warn!("Couldn't open Config file {}: {}", path.display(), e);
                Self::default()
            }
            Err(e) => {
                tracing::error!("{} ({})", e, path.display());
                Self::default()
            }
        }
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Write the config, logging instead of failing
    pub fn save_or_log(&self, path: &Path) -> bool {
        match self.save(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Couldn't save Config file {}: {}", path.display(), e);
                false
            }
        }
    }
}
