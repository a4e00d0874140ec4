//! Engine error taxonomy.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ziwei_calendar::CalendarError;

/// Errors surfaced by chart assembly, horoscope resolution and configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// Solar or lunar date outside the supported calendar span.
    DateOutOfRange(String),
    /// Malformed caller input: time index, gender token, date text, or a
    /// target date no period covers.
    InvalidInput(String),
    /// Configuration rejected at engine construction.
    ConfigurationConflict(String),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateOutOfRange(msg) => write!(f, "date out of range: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::ConfigurationConflict(msg) => write!(f, "configuration conflict: {msg}"),
        }
    }
}

impl Error for EngineError {}

impl From<CalendarError> for EngineError {
    fn from(value: CalendarError) -> Self {
        match value {
            CalendarError::OutOfRange(msg) => Self::DateOutOfRange(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigurationConflict(value.to_string())
    }
}
