//! Configuration loading and saving
//!
//! Config types are plain serde structs; the [`Config`] trait adds file I/O
//! with the format chosen by extension (TOML or RON).

use serde::{de::DeserializeOwned, Serialize};

/// Configuration trait
pub trait Config: Serialize + DeserializeOwned + Default {
    /// Load configuration from a file, format chosen by extension
    ///
    /// # Errors
    /// I/O failures, parse failures, or an unsupported extension.
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Load configuration from a file, falling back to defaults
    ///
    /// A missing or unreadable file logs at debug level; a file that exists
    /// but does not parse logs a warning. Both fall back to `Self::default()`.
    fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) => {
                log::debug!("No config at {path} ({e}), using defaults");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring config at {path}: {e}");
                Self::default()
            }
        }
    }

    /// Save configuration to a file, format chosen by extension
    ///
    /// # Errors
    /// Serialization failures, I/O failures, or an unsupported extension.
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
