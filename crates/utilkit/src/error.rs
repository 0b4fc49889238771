//! Error types for utilkit operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid week start: {0} (expected 0 = Sunday through 6 = Saturday)")]
    InvalidWeekStart(i64),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Formatting failed: {0}")]
    Formatting(String),

    /// The input did not have the `H:MM AM` / `H:MM PM` shape. The original
    /// string is kept untouched so callers can fall back to it.
    #[error("Malformed time string: '{input}'")]
    MalformedTimeString { input: String },

    #[error("Not a timestamp: {0}")]
    NotATimestamp(String),

    #[error("Not a number: {0}")]
    NotANumber(String),
}

impl UtilError {
    /// The untouched input of a [`UtilError::MalformedTimeString`].
    pub fn malformed_input(&self) -> Option<&str> {
        match self {
            UtilError::MalformedTimeString { input } => Some(input),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;
