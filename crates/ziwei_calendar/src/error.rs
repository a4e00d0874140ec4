//! Error types for calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar/lunar conversion, pillar computation or date parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Date lies outside the supported 1900-2100 span.
    OutOfRange(String),
    /// Date does not exist (e.g. Feb 30, or day 30 of a 29-day lunar month).
    InvalidDate(String),
    /// Time slot index outside 0..=12.
    InvalidTimeIndex(u8),
    /// Date text could not be parsed.
    Parse(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(msg) => write!(f, "date out of supported range: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidTimeIndex(i) => write!(f, "invalid time index {i} (expected 0-12)"),
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for CalendarError {}
