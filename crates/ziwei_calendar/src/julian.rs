//! Julian Day Number ↔ proleptic Gregorian calendar conversions.
//!
//! Integer algorithms from Fliegel & Van Flandern (1968); the fractional
//! form follows Meeus, *Astronomical Algorithms*, ch. 7.

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day Number (noon-based integer day) of a Gregorian date.
pub fn civil_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Gregorian (year, month, day) of a Julian Day Number.
pub fn jdn_to_civil(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}

/// Julian Date for a calendar date with fractional day (day 1.5 = 1st at 12:00).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let whole = day_frac.floor();
    civil_to_jdn(year, month, whole as u32) as f64 - 0.5 + (day_frac - whole)
}

/// Julian Day Number of the civil day containing `jd` at a fixed UTC offset.
pub fn jd_to_jdn_at_offset(jd: f64, offset_hours: f64) -> i64 {
    (jd + 0.5 + offset_hours / 24.0).floor() as i64
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month (0 for an invalid month).
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
