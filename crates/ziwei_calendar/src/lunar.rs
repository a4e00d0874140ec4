//! Chinese lunisolar calendar, 1900-2100.
//!
//! Month data is the widely published packed table (one `u32` per lunar
//! year): bits 15..4 flag 30-day months (bit 15 = first month), the low
//! nibble is the leap month (0 = none), bit 16 flags a 30-day leap month.
//! Lunar 1900-01-01 falls on Gregorian 1900-01-31.

use std::fmt::{Display, Formatter};

use crate::error::CalendarError;
use crate::solar_date::SolarDate;

/// First lunar year covered by the table.
pub const FIRST_LUNAR_YEAR: i32 = 1900;
/// Last lunar year covered by the table.
pub const LAST_LUNAR_YEAR: i32 = 2100;

#[rustfmt::skip]
const LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                   // 2100
];

/// First supported solar date (lunar 1900-01-01).
pub const MIN_SOLAR_DATE: SolarDate = SolarDate {
    year: 1900,
    month: 1,
    day: 31,
};

/// Last supported solar date.
pub const MAX_SOLAR_DATE: SolarDate = SolarDate {
    year: 2100,
    month: 12,
    day: 31,
};

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    /// 1..=30
    pub day: u32,
    /// True when `month` is the intercalary repeat of that month.
    pub is_leap: bool,
}

fn info(year: i32) -> Result<u32, CalendarError> {
    if !(FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR).contains(&year) {
        return Err(CalendarError::OutOfRange(format!("lunar year {year}")));
    }
    Ok(LUNAR_INFO[(year - FIRST_LUNAR_YEAR) as usize])
}

/// Leap month of a lunar year, if any.
pub fn leap_month(year: i32) -> Result<Option<u32>, CalendarError> {
    let m = info(year)? & 0xf;
    Ok(if m == 0 { None } else { Some(m) })
}

/// Length of the leap month (0 when the year has none).
pub fn leap_month_days(year: i32) -> Result<u32, CalendarError> {
    let bits = info(year)?;
    if bits & 0xf == 0 {
        return Ok(0);
    }
    Ok(if bits & 0x10000 != 0 { 30 } else { 29 })
}

/// Length of an ordinary (non-leap) lunar month.
pub fn month_days(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidDate(format!(
            "lunar month {month} of {year}"
        )));
    }
    Ok(if info(year)? & (0x10000 >> month) != 0 {
        30
    } else {
        29
    })
}

/// Total days in a lunar year, leap month included.
pub fn year_days(year: i32) -> Result<u32, CalendarError> {
    let bits = info(year)?;
    let long_months = (bits & 0xfff0).count_ones();
    Ok(348 + long_months + leap_month_days(year)?)
}

/// Days in the lunar month identified by `date` (leap aware).
pub fn days_in_lunar_month(date: &LunarDate) -> Result<u32, CalendarError> {
    if date.is_leap && leap_month(date.year)? == Some(date.month) {
        leap_month_days(date.year)
    } else {
        month_days(date.year, date.month)
    }
}

fn check_solar_range(date: SolarDate) -> Result<(), CalendarError> {
    if date < MIN_SOLAR_DATE || date > MAX_SOLAR_DATE {
        return Err(CalendarError::OutOfRange(format!(
            "{date} (supported {MIN_SOLAR_DATE} .. {MAX_SOLAR_DATE})"
        )));
    }
    Ok(())
}

/// Convert a Gregorian date to its lunar date.
pub fn solar_to_lunar(date: SolarDate) -> Result<LunarDate, CalendarError> {
    check_solar_range(date)?;
    let mut offset = (date.jdn() - MIN_SOLAR_DATE.jdn()) as u32;

    let mut year = FIRST_LUNAR_YEAR;
    loop {
        let days = year_days(year)?;
        if offset < days {
            break;
        }
        offset -= days;
        year += 1;
    }

    let leap = leap_month(year)?;
    for month in 1..=12 {
        let days = month_days(year, month)?;
        if offset < days {
            return Ok(LunarDate {
                year,
                month,
                day: offset + 1,
                is_leap: false,
            });
        }
        offset -= days;

        if leap == Some(month) {
            let days = leap_month_days(year)?;
            if offset < days {
                return Ok(LunarDate {
                    year,
                    month,
                    day: offset + 1,
                    is_leap: true,
                });
            }
            offset -= days;
        }
    }

    Err(CalendarError::OutOfRange(format!("{date}")))
}

/// Convert a lunar date to Gregorian.
///
/// `is_leap` is ignored when the month has no leap repeat that year.
pub fn lunar_to_solar(
    year: i32,
    month: u32,
    day: u32,
    is_leap: bool,
) -> Result<SolarDate, CalendarError> {
    let leap = leap_month(year)?;
    let use_leap = is_leap && leap == Some(month);
    let max_day = if use_leap {
        leap_month_days(year)?
    } else {
        month_days(year, month)?
    };
    if day == 0 || day > max_day {
        return Err(CalendarError::InvalidDate(format!(
            "lunar {year}-{month}-{day} (month has {max_day} days)"
        )));
    }

    let mut offset: i64 = 0;
    for y in FIRST_LUNAR_YEAR..year {
        offset += year_days(y)? as i64;
    }
    for m in 1..month {
        offset += month_days(year, m)? as i64;
        if leap == Some(m) {
            offset += leap_month_days(year)? as i64;
        }
    }
    if use_leap {
        offset += month_days(year, month)? as i64;
    }
    offset += (day - 1) as i64;

    let date = MIN_SOLAR_DATE.add_days(offset);
    check_solar_range(date)?;
    Ok(date)
}

/// Days in the lunar month containing a solar date.
pub fn lunar_month_days_of(date: SolarDate) -> Result<u32, CalendarError> {
    days_in_lunar_month(&solar_to_lunar(date)?)
}

const CN_DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
const CN_MONTHS: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];
const CN_DAY_TENS: [&str; 4] = ["初", "十", "廿", "卅"];
const CN_DAY_UNITS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

impl LunarDate {
    /// Chinese month label, e.g. `七月`, `闰二月`, `腊月`.
    pub fn chinese_month(&self) -> String {
        let leap = if self.is_leap { "闰" } else { "" };
        let idx = (self.month as usize).clamp(1, 12) - 1;
        format!("{leap}{}月", CN_MONTHS[idx])
    }

    /// Chinese day label, e.g. `初一`, `十五`, `廿三`, `三十`.
    pub fn chinese_day(&self) -> String {
        match self.day {
            10 => "初十".to_string(),
            20 => "二十".to_string(),
            30 => "三十".to_string(),
            d => {
                let tens = CN_DAY_TENS[(d / 10).min(3) as usize];
                format!("{tens}{}", CN_DAY_UNITS[(d % 10) as usize])
            }
        }
    }

    /// Chinese year digits, e.g. `二〇〇〇`.
    pub fn chinese_year(&self) -> String {
        self.year
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| CN_DIGITS[d as usize])
            .collect()
    }
}

impl Display for LunarDate {
    /// Full Chinese form, e.g. `二〇〇〇年七月十七`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}{}",
            self.chinese_year(),
            self.chinese_month(),
            self.chinese_day()
        )
    }
}
