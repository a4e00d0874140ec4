//! Calendar primitives for chart casting.
//!
//! This crate provides:
//! - Gregorian dates and Julian Day Number conversions
//! - Chinese lunisolar calendar conversions (1900-2100)
//! - The 24 solar terms from a low-precision solar theory
//! - Heavenly stems, earthly branches and the four pillars
//! - Birth time slots, zodiac animals and western signs

pub mod error;
pub mod ganzhi;
pub mod julian;
pub mod lunar;
pub mod sign;
pub mod solar_date;
pub mod solar_term;
pub mod time_index;

pub use error::CalendarError;
pub use ganzhi::{
    ALL_BRANCHES, ALL_STEMS, ALL_ZODIACS, EarthlyBranch, HeavenlyStem, PillarOptions, Pillars,
    StemBranch, YearDivide, YinYang, Zodiac, day_pillar, hour_pillar, month_pillar, pillars,
    year_pillar,
};
pub use julian::{civil_to_jdn, days_in_month, is_leap_year, jdn_to_civil};
pub use lunar::{
    FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR, LunarDate, MAX_SOLAR_DATE, MIN_SOLAR_DATE,
    days_in_lunar_month, leap_month, lunar_month_days_of, lunar_to_solar, month_days,
    solar_to_lunar,
};
pub use sign::{ALL_SIGNS, WesternSign};
pub use solar_date::SolarDate;
pub use solar_term::{ALL_SOLAR_TERMS, JIE_TERMS, SolarTerm, current_jie, solar_term_date};
pub use time_index::TimeIndex;
