//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pipeline::scaffold::DEFAULT_FILE_NAME;

/// Environment variable overriding [`Config::pipeline_file`].
pub const FILE_ENV: &str = "CCS_FILE";
/// Environment variable overriding [`Config::log_level`].
pub const LOG_LEVEL_ENV: &str = "CCS_LOG_LEVEL";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Pipeline file read by `validate` and written by `init`
    pub pipeline_file: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipeline_file: PathBuf::from(DEFAULT_FILE_NAME),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by `CCS_FILE` and `CCS_LOG_LEVEL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns; blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(file) = non_blank(FILE_ENV) {
            config.pipeline_file = PathBuf::from(file);
        }
        if let Some(level) = non_blank(LOG_LEVEL_ENV) {
            config.log_level = level;
        }

        config
    }
}
