//! Reader configuration.
//!
//! Settings can be built in code or loaded from a TOML document:
//!
//! ```toml
//! skip_invalid_games = true
//! max_games = 500
//! require_result = false
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading reader configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document is not valid TOML for [`ReaderConfig`].
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A setting holds a value the reader cannot work with.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// How a [`PgnScanner`](crate::PgnScanner) treats its input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Skip games that fail to parse instead of yielding the error.
    pub skip_invalid_games: bool,
    /// Stop after this many games have been returned.
    pub max_games: Option<usize>,
    /// Treat movetext without a result marker as an error.
    pub require_result: bool,
}

impl ReaderConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ReaderConfig = toml::from_str(content)?;
        if config.max_games == Some(0) {
            return Err(ConfigError::Invalid(
                "max_games must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}
