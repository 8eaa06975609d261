//! Common-password blacklist.
//!
//! Loaded from a newline-delimited file ordered from most to least common.
//! Each entry keeps its rank, which the crack-time estimate uses as the
//! number of guesses an attacker working down the list would need.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::CheckerConfig;

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blacklist {
    ranks: HashMap<String, usize>,
}

impl Blacklist {
    /// Loads the blacklist named by the configuration.
    pub fn from_config(config: &CheckerConfig) -> Result<Self, BlacklistError> {
        Self::load(&config.blacklist_path)
    }

    /// Loads a blacklist file.
    ///
    /// Entries are trimmed and lowercased; blank lines are skipped and
    /// duplicates keep their first rank.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist: Blacklist = content.lines().collect();

        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", blacklist.len(), path);

        Ok(blacklist)
    }

    /// Returns the 1-based rank of a password, ignoring case.
    pub fn rank(&self, password: &str) -> Option<usize> {
        self.ranks.get(&password.to_lowercase()).copied()
    }

    pub fn contains(&self, password: &str) -> bool {
        self.rank(password).is_some()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Blacklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut ranks = HashMap::new();
        for entry in iter {
            let entry = entry.as_ref().trim().to_lowercase();
            if entry.is_empty() {
                continue;
            }
            let next_rank = ranks.len() + 1;
            ranks.entry(entry).or_insert(next_rank);
        }
        Self { ranks }
    }
}
