mod session;

pub use session::{ScopeHistory, Session};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::compose::{Category, defaults};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid category at position {index}: {reason}")]
    InvalidCategory { index: usize, reason: &'static str },
    #[error("Config directory not found")]
    NoConfigDir,
}

/// User settings, read from `config.json`. Every key is optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Selectable categories, in registration order
    pub categories: Vec<Category>,
    /// Scopes offered as completions from the start of each session
    pub scopes: Vec<String>,
    /// Remember new scopes for the rest of the session
    pub scopes_accrue: bool,
    pub comment_prefix: String,
    pub cursor_placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: defaults::categories(),
            scopes: vec![],
            scopes_accrue: true,
            comment_prefix: defaults::COMMENT_PREFIX.to_string(),
            cursor_placeholder: defaults::CURSOR_PLACEHOLDER.to_string(),
        }
    }
}

impl Config {
    /// Load the config from `path`, or from the default location when `None`. A missing file
    /// gives the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            debug!(?path, "Config not found; using defaults");
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&config_str)?;
        config.validate()?;
        info!(?path, categories = config.categories.len(), "Config loaded");

        Ok(config)
    }

    fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("commit-compose").join("config.json"))
            .ok_or(ConfigError::NoConfigDir)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (index, category) in self.categories.iter().enumerate() {
            if category.name.is_empty() {
                return Err(ConfigError::InvalidCategory {
                    index,
                    reason: "empty name",
                });
            }
            if category.short_code.is_empty() {
                return Err(ConfigError::InvalidCategory {
                    index,
                    reason: "empty short code",
                });
            }
        }
        Ok(())
    }
}
