//! Password status record produced by the rule checker.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const SECONDS_PER_MINUTE: f64 = 60.0;
pub(crate) const SECONDS_PER_HOUR: f64 = 60.0 * SECONDS_PER_MINUTE;
pub(crate) const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;
pub(crate) const SECONDS_PER_MONTH: f64 = 30.0 * SECONDS_PER_DAY;
pub(crate) const SECONDS_PER_YEAR: f64 = 365.0 * SECONDS_PER_DAY;
const SECONDS_PER_CENTURY: f64 = 100.0 * SECONDS_PER_YEAR;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Malformed password status: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Estimated time to crack a password.
///
/// Upstream validators report either a number of seconds or a preformatted
/// string, so both shapes are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CrackTime {
    Seconds(f64),
    Text(String),
}

impl CrackTime {
    /// Returns the estimate in seconds, if it is numeric.
    pub fn as_seconds(&self) -> Option<f64> {
        match self {
            CrackTime::Seconds(seconds) => Some(*seconds),
            CrackTime::Text(_) => None,
        }
    }

    /// Human-readable label for the crack-time row.
    ///
    /// Numeric estimates are truncated to the largest whole unit
    /// (`"3 hours"`, `"1 year"`); anything past a hundred years is
    /// `"centuries"`. Text estimates are returned unchanged.
    pub fn label(&self) -> String {
        match self {
            CrackTime::Text(text) => text.clone(),
            CrackTime::Seconds(seconds) => seconds_label(*seconds),
        }
    }
}

impl From<f64> for CrackTime {
    fn from(seconds: f64) -> Self {
        CrackTime::Seconds(seconds)
    }
}

impl From<String> for CrackTime {
    fn from(text: String) -> Self {
        CrackTime::Text(text)
    }
}

fn seconds_label(seconds: f64) -> String {
    if seconds.is_nan() || seconds < 1.0 {
        return "less than a second".to_string();
    }
    if seconds >= SECONDS_PER_CENTURY {
        return "centuries".to_string();
    }

    let units = [
        (SECONDS_PER_YEAR, "year"),
        (SECONDS_PER_MONTH, "month"),
        (SECONDS_PER_DAY, "day"),
        (SECONDS_PER_HOUR, "hour"),
        (SECONDS_PER_MINUTE, "minute"),
        (1.0, "second"),
    ];
    let (size, name) = units
        .iter()
        .copied()
        .find(|(size, _)| seconds >= *size)
        .unwrap_or((1.0, "second"));

    let count = (seconds / size).floor() as u64;
    if count == 1 {
        format!("1 {}", name)
    } else {
        format!("{} {}s", count, name)
    }
}

/// Result of checking a password against the account password rules.
///
/// Every flag is required when decoding: a record missing any of them is
/// rejected rather than read as "rule satisfied".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStatus {
    pub too_short: bool,
    pub no_lower_case: bool,
    pub no_upper_case: bool,
    pub no_number: bool,
    pub passed: bool,
    pub seconds_to_crack: CrackTime,
}

impl PasswordStatus {
    /// Decodes a status record from JSON.
    ///
    /// # Errors
    ///
    /// Returns `StatusError::Malformed` if a field is missing or has the
    /// wrong type.
    pub fn from_json(json: &str) -> Result<Self, StatusError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a status record from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, StatusError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Returns `true` if every character rule holds.
    pub fn all_rules_met(&self) -> bool {
        !(self.too_short || self.no_lower_case || self.no_upper_case || self.no_number)
    }
}
