// src/infrastructure/config.rs
use crate::constants::{DEFAULT_NOTE_TYPE, DEFAULT_SERVER_URL, DEFAULT_SUBJECT, DEFAULT_TIMEOUT_SECS};
use crate::domain::Preferences;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// TOML configuration of the note generator client
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct StorageConfig {
    /// Empty means `<platform data dir>/notegen`
    #[serde(default)]
    pub data_dir: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Defaults {
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_note_type")]
    pub note_type: String,
}

// Default value functions
fn default_base_url() -> String { DEFAULT_SERVER_URL.to_string() }
fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT_SECS }
fn default_subject() -> String { DEFAULT_SUBJECT.to_string() }
fn default_note_type() -> String { DEFAULT_NOTE_TYPE.to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            note_type: default_note_type(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.server.timeout_secs)
    }

    /// Configured data directory, or the platform default
    pub fn data_dir(&self) -> Result<PathBuf> {
        if !self.storage.data_dir.is_empty() {
            return Ok(PathBuf::from(&self.storage.data_dir));
        }
        let base = dirs::data_dir().context("Could not find data directory")?;
        Ok(base.join("notegen"))
    }

    /// Preferences to use when none are stored yet
    pub fn default_preferences(&self) -> Preferences {
        Preferences {
            subject: self.defaults.subject.clone(),
            note_type: self.defaults.note_type.clone(),
        }
    }
}

/// `<platform config dir>/notegen/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not find config directory")?;
    Ok(base.join("notegen").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn given_toml_file_when_loading_then_reads_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("load_test.toml");

        let toml_content = r#"
[server]
base_url = "http://notes.local:8080"
timeout_secs = 5

[storage]
data_dir = "/var/lib/notegen"

[defaults]
subject = "history"
note_type = "detailed"
"#;
        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.server.base_url, "http://notes.local:8080");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/var/lib/notegen"));
        assert_eq!(config.default_preferences().note_type, "detailed");
    }

    #[test]
    fn given_partial_toml_when_loading_then_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        fs::write(&config_path, "[defaults]\nsubject = \"science\"\n").unwrap();

        let config = Config::load(&config_path).unwrap();

        assert_eq!(config.defaults.subject, "science");
        assert_eq!(config.defaults.note_type, "summary");
        assert_eq!(config.server.base_url, DEFAULT_SERVER_URL);
        assert_eq!(config.server.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn given_missing_file_when_loading_or_default_then_returns_defaults() {
        let config = Config::load_or_default("/nonexistent/path/config.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn given_nonexistent_file_when_loading_then_returns_error() {
        assert!(Config::load("/nonexistent/path/config.toml").is_err());
    }

    #[test]
    fn given_invalid_toml_when_loading_then_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "[server\nbase_url = ").unwrap();

        assert!(Config::load(&config_path).is_err());
    }
}
