//! Birth time slots (时辰).
//!
//! Thirteen slots: 0 is the early zi hour (00:00-01:00), 1..=11 are the
//! two-hour branches 丑..亥, and 12 is the late zi hour (23:00-00:00),
//! which counts toward the following day.

use std::fmt::{Display, Formatter};

use crate::error::CalendarError;
use crate::ganzhi::EarthlyBranch;

const SLOT_NAMES: [&str; 13] = [
    "早子时", "丑时", "寅时", "卯时", "辰时", "巳时", "午时", "未时", "申时", "酉时", "戌时",
    "亥时", "晚子时",
];

const SLOT_RANGES: [&str; 13] = [
    "00:00~01:00",
    "01:00~03:00",
    "03:00~05:00",
    "05:00~07:00",
    "07:00~09:00",
    "09:00~11:00",
    "11:00~13:00",
    "13:00~15:00",
    "15:00~17:00",
    "17:00~19:00",
    "19:00~21:00",
    "21:00~23:00",
    "23:00~00:00",
];

/// Birth time slot, 0..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeIndex(u8);

impl TimeIndex {
    pub const EARLY_ZI: Self = Self(0);
    pub const LATE_ZI: Self = Self(12);

    /// Validated constructor.
    pub fn new(index: u8) -> Result<Self, CalendarError> {
        if index > 12 {
            return Err(CalendarError::InvalidTimeIndex(index));
        }
        Ok(Self(index))
    }

    /// Slot containing a clock hour (0..=23).
    pub fn from_hour(hour: u32) -> Result<Self, CalendarError> {
        match hour {
            0 => Ok(Self(0)),
            23 => Ok(Self(12)),
            1..=22 => Ok(Self(hour.div_ceil(2) as u8)),
            _ => Err(CalendarError::InvalidDate(format!("hour {hour}"))),
        }
    }

    /// Raw slot number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Slot as `i64`, for index arithmetic.
    pub const fn value(self) -> i64 {
        self.0 as i64
    }

    pub const fn is_late_zi(self) -> bool {
        self.0 == 12
    }

    /// Branch of the slot; both zi slots map to 子.
    pub const fn branch(self) -> EarthlyBranch {
        if self.0 == 12 {
            EarthlyBranch::Zi
        } else {
            EarthlyBranch::from_index(self.0 as i64)
        }
    }

    /// Slot name, e.g. `寅时`.
    pub const fn name(self) -> &'static str {
        SLOT_NAMES[self.0 as usize]
    }

    /// Clock range, e.g. `03:00~05:00`.
    pub const fn range(self) -> &'static str {
        SLOT_RANGES[self.0 as usize]
    }

    /// All thirteen slots.
    pub fn all() -> impl Iterator<Item = TimeIndex> {
        (0..=12).map(Self)
    }
}

impl Display for TimeIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for TimeIndex {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
