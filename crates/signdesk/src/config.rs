//! Configuration management for signdesk.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "signdesk";

/// Default state database file name.
const STATE_FILE_NAME: &str = "state.db";

/// The default shared password.
///
/// Ships in the binary on purpose: the gate is advisory-only and the
/// original tool embedded the same secret client-side as a deliberate
/// simplification. Teams can override it via config file or
/// `SIGNDESK_SESSION_PASSWORD`.
const DEFAULT_PASSWORD: &str = "MoonRiver2025!";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (`SIGNDESK_SESSION_PASSWORD`,
///    `SIGNDESK_STORAGE_STATE_PATH`)
/// 2. TOML config file at `~/.config/signdesk/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Session configuration.
    pub session: SessionConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the state database file.
    /// Defaults to `~/.local/share/signdesk/state.db`
    pub state_path: Option<PathBuf>,
}

/// Session-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// The shared password gating the knowledge base.
    pub password: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `SIGNDESK_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("SIGNDESK_").map(|key| env_key_to_dotted(key.as_str()).into()));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.session.password.is_empty() {
            return Err(Error::ConfigValidation {
                message: "session password must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Get the state database path, resolving defaults if not set.
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.storage
            .state_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(STATE_FILE_NAME))
    }
}

/// Map an environment key (prefix already stripped) to a dotted config path.
///
/// Splitting only at the section boundary keeps field names with underscores
/// intact: `STORAGE_STATE_PATH` becomes `storage.state_path`, not
/// `storage.state.path`.
fn env_key_to_dotted(key: &str) -> String {
    key.to_ascii_lowercase()
        .replacen("storage_", "storage.", 1)
        .replacen("session_", "session.", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.session.password, DEFAULT_PASSWORD);
        assert!(config.storage.state_path.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_password() {
        let mut config = Config::default();
        config.session.password = String::new();

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("password"));
    }

    #[test]
    fn test_state_path_default() {
        let config = Config::default();
        let path = config.state_path();
        assert!(path.to_string_lossy().contains("state.db"));
        assert!(path.to_string_lossy().contains("signdesk"));
    }

    #[test]
    fn test_state_path_custom() {
        let mut config = Config::default();
        config.storage.state_path = Some(PathBuf::from("/custom/path/state.sqlite"));

        assert_eq!(
            config.state_path(),
            PathBuf::from("/custom/path/state.sqlite")
        );
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("signdesk"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config.session.password, DEFAULT_PASSWORD);
    }

    #[test]
    fn test_env_key_splits_only_at_section_boundary() {
        assert_eq!(env_key_to_dotted("SESSION_PASSWORD"), "session.password");
        assert_eq!(
            env_key_to_dotted("STORAGE_STATE_PATH"),
            "storage.state_path"
        );
    }

    #[test]
    fn test_env_override_state_path() {
        std::env::set_var("SIGNDESK_STORAGE_STATE_PATH", "/tmp/override/state.db");
        let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
        std::env::remove_var("SIGNDESK_STORAGE_STATE_PATH");

        assert_eq!(
            config.state_path(),
            PathBuf::from("/tmp/override/state.db")
        );
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("state_path"));
        assert!(json.contains("password"));
    }

    #[test]
    fn test_session_config_deserialize() {
        let json = r#"{"password": "NewSecret1!"}"#;
        let session: SessionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(session.password, "NewSecret1!");
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
