//! Golden-value tests for lunar conversions and solar terms against
//! published Chinese almanac dates.

use ziwei_calendar::{
    CalendarError, LunarDate, MAX_SOLAR_DATE, MIN_SOLAR_DATE, SolarDate, SolarTerm, leap_month,
    lunar_to_solar, solar_term_date, solar_to_lunar,
};

fn solar(y: i32, m: u32, d: u32) -> SolarDate {
    SolarDate::new(y, m, d).unwrap()
}

#[test]
fn reference_birthday() {
    let lunar = solar_to_lunar(solar(2000, 8, 16)).unwrap();
    assert_eq!(
        lunar,
        LunarDate {
            year: 2000,
            month: 7,
            day: 17,
            is_leap: false
        }
    );
    assert_eq!(lunar.to_string(), "二〇〇〇年七月十七");
}

#[test]
fn new_year_days() {
    assert_eq!(lunar_to_solar(2024, 1, 1, false).unwrap(), solar(2024, 2, 10));
    assert_eq!(lunar_to_solar(2000, 1, 1, false).unwrap(), solar(2000, 2, 5));
    assert_eq!(lunar_to_solar(1900, 1, 1, false).unwrap(), MIN_SOLAR_DATE);
}

#[test]
fn leap_months() {
    assert_eq!(leap_month(2023).unwrap(), Some(2));
    assert_eq!(leap_month(2020).unwrap(), Some(4));
    assert_eq!(leap_month(2024).unwrap(), None);
}

#[test]
fn leap_month_conversion() {
    // 闰二月初一 2023 = 2023-03-22.
    let date = lunar_to_solar(2023, 2, 1, true).unwrap();
    assert_eq!(date, solar(2023, 3, 22));
    let back = solar_to_lunar(date).unwrap();
    assert!(back.is_leap);
    assert_eq!(back.chinese_month(), "闰二月");
}

#[test]
fn leap_flag_ignored_for_regular_month() {
    let a = lunar_to_solar(2023, 5, 10, true).unwrap();
    let b = lunar_to_solar(2023, 5, 10, false).unwrap();
    assert_eq!(a, b);
}

#[test]
fn round_trip_across_range() {
    let mut date = MIN_SOLAR_DATE;
    while date <= MAX_SOLAR_DATE {
        let lunar = solar_to_lunar(date).unwrap();
        let back = lunar_to_solar(lunar.year, lunar.month, lunar.day, lunar.is_leap).unwrap();
        assert_eq!(back, date, "via {lunar:?}");
        date = date.add_days(1);
    }
}

#[test]
fn out_of_range() {
    assert!(matches!(
        solar_to_lunar(solar(1900, 1, 30)),
        Err(CalendarError::OutOfRange(_))
    ));
    assert!(matches!(
        solar_to_lunar(solar(2101, 1, 1)),
        Err(CalendarError::OutOfRange(_))
    ));
}

#[test]
fn invalid_lunar_day() {
    // Lunar 2000 month 3 has 29 days.
    assert!(matches!(
        lunar_to_solar(2000, 3, 30, false),
        Err(CalendarError::InvalidDate(_))
    ));
}

#[test]
fn lichun_dates() {
    assert_eq!(solar_term_date(2000, SolarTerm::LiChun), solar(2000, 2, 4));
    assert_eq!(solar_term_date(2021, SolarTerm::LiChun), solar(2021, 2, 3));
    assert_eq!(solar_term_date(2024, SolarTerm::LiChun), solar(2024, 2, 4));
}

#[test]
fn other_terms() {
    assert_eq!(solar_term_date(2000, SolarTerm::LiQiu), solar(2000, 8, 7));
    assert_eq!(solar_term_date(2023, SolarTerm::DongZhi), solar(2023, 12, 22));
    assert_eq!(solar_term_date(2024, SolarTerm::XiaoHan), solar(2024, 1, 6));
}
