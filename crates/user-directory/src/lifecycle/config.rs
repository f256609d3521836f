//! Runtime configuration for the directory process.
//!
//! Every field has a default, so an empty JSON object (or no file at all) is a valid
//! configuration. Unknown keys are rejected.

use crate::directory::ValidationRules;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the path of a JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "USER_DIRECTORY_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration for the user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectoryConfig {
    /// Capacity of the request channel in front of the directory actor.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    #[serde(default = "default_max_username_length")]
    pub max_username_length: usize,
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
            max_username_length: default_max_username_length(),
            log_level: default_log_level(),
        }
    }
}

fn default_channel_capacity() -> usize {
    32
}

fn default_max_username_length() -> usize {
    64
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DirectoryConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Loads the file named by `USER_DIRECTORY_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be greater than zero".to_string(),
            ));
        }
        if self.max_username_length == 0 {
            return Err(ConfigError::Invalid(
                "max_username_length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            max_username_length: self.max_username_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_yields_defaults() {
        let config = DirectoryConfig::from_json_str("{}").unwrap();

        assert_eq!(config, DirectoryConfig::default());
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn overrides_are_applied() {
        let config =
            DirectoryConfig::from_json_str(r#"{"channel_capacity": 4, "max_username_length": 8}"#)
                .unwrap();

        assert_eq!(config.channel_capacity, 4);
        assert_eq!(config.validation_rules().max_username_length, 8);
    }

    #[test]
    fn zero_capacity_is_invalid() {
        let err = DirectoryConfig::from_json_str(r#"{"channel_capacity": 0}"#).unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = DirectoryConfig::from_json_str(r#"{"persist": true}"#).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn reads_from_file() {
        let path = std::env::temp_dir().join(format!(
            "user-directory-config-{}.json",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{"log_level": "debug"}}"#).unwrap();
        drop(file);

        let config = DirectoryConfig::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DirectoryConfig::from_file("/definitely/not/here.json").unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
