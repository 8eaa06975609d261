//! Checker configuration.

use std::path::PathBuf;
use thiserror::Error;

pub const BLACKLIST_PATH_VAR: &str = "PWD_BLACKLIST_PATH";
pub const GUESSES_PER_SECOND_VAR: &str = "PWD_GUESSES_PER_SECOND";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckerConfig {
    /// Passwords at least this long pass regardless of character rules.
    pub passphrase_length: usize,
    /// Attacker speed used for the crack-time estimate.
    pub guesses_per_second: f64,
    pub blacklist_path: PathBuf,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            passphrase_length: 16,
            guesses_per_second: 10.0,
            blacklist_path: PathBuf::from(DEFAULT_BLACKLIST_PATH),
        }
    }
}

impl CheckerConfig {
    /// Builds a configuration from the environment, falling back to the
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a numeric variable does not
    /// parse or is not positive.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var(BLACKLIST_PATH_VAR) {
            config.blacklist_path = PathBuf::from(path);
        }
        if let Ok(value) = std::env::var(GUESSES_PER_SECOND_VAR) {
            config.guesses_per_second = match value.trim().parse::<f64>() {
                Ok(n) if n.is_finite() && n > 0.0 => n,
                _ => return Err(invalid(GUESSES_PER_SECOND_VAR, value)),
            };
        }

        Ok(config)
    }
}

fn invalid(key: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue { key, value }
}
