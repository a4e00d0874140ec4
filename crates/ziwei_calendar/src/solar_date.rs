//! Gregorian calendar date.
//!
//! Provides `SolarDate`, the canonical civil-date representation used
//! throughout the workspace. Text form is `YYYY-M-D` (no zero padding).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::CalendarError;
use crate::julian::{civil_to_jdn, days_in_month, jdn_to_civil};

/// Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    /// Validated constructor; rejects dates that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate(format!("{year}-{month}-{day}")));
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        civil_to_jdn(self.year, self.month, self.day)
    }

    /// Date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_civil(jdn);
        Self { year, month, day }
    }

    /// Date `days` later (or earlier when negative).
    pub fn add_days(self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = CalendarError;

    /// Parse `YYYY-M-D`; `/` and `.` are accepted as separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(['-', '/', '.']).collect();
        if parts.len() != 3 {
            return Err(CalendarError::Parse(format!("expected YYYY-M-D, got {s}")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|e| CalendarError::Parse(format!("year in {s}: {e}")))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| CalendarError::Parse(format!("month in {s}: {e}")))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|e| CalendarError::Parse(format!("day in {s}: {e}")))?;
        Self::new(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_unpadded_and_padded() {
        let a: SolarDate = "2000-8-16".parse().unwrap();
        let b: SolarDate = "2000-08-16".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "2000-8-16");
    }

    #[test]
    fn parse_slash_separator() {
        let d: SolarDate = "1987/12/5".parse().unwrap();
        assert_eq!(d, SolarDate::new(1987, 12, 5).unwrap());
    }

    #[test]
    fn rejects_nonexistent_dates() {
        assert!(matches!(
            SolarDate::new(2023, 2, 29),
            Err(CalendarError::InvalidDate(_))
        ));
        assert!(SolarDate::new(2024, 2, 29).is_ok());
        assert!(SolarDate::new(2024, 13, 1).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            "2000-8".parse::<SolarDate>(),
            Err(CalendarError::Parse(_))
        ));
        assert!(matches!(
            "2000-x-1".parse::<SolarDate>(),
            Err(CalendarError::Parse(_))
        ));
    }

    #[test]
    fn add_days_crosses_year() {
        let d = SolarDate::new(1999, 12, 31).unwrap();
        assert_eq!(d.add_days(1), SolarDate::new(2000, 1, 1).unwrap());
        assert_eq!(d.add_days(-365), SolarDate::new(1998, 12, 31).unwrap());
    }

    #[test]
    fn ordering_follows_calendar() {
        let a = SolarDate::new(2000, 2, 4).unwrap();
        let b = SolarDate::new(2000, 11, 1).unwrap();
        assert!(a < b);
    }
}
