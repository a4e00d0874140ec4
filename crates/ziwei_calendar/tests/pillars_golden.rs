//! Golden-value tests for the four pillars.

use ziwei_calendar::{
    PillarOptions, SolarDate, TimeIndex, YearDivide, day_pillar, month_pillar, pillars,
    year_pillar,
};

fn solar(y: i32, m: u32, d: u32) -> SolarDate {
    SolarDate::new(y, m, d).unwrap()
}

fn t(i: u8) -> TimeIndex {
    TimeIndex::new(i).unwrap()
}

#[test]
fn reference_birthday_exact() {
    let p = pillars(solar(2000, 8, 16), t(2), PillarOptions::default()).unwrap();
    assert_eq!(p.to_string(), "庚辰 甲申 丙午 庚寅");
}

#[test]
fn reference_birthday_normal() {
    let opts = PillarOptions {
        year: YearDivide::Normal,
        month: YearDivide::Normal,
    };
    // Lunar 七月 of 庚辰 is also 甲申.
    let p = pillars(solar(2000, 8, 16), t(2), opts).unwrap();
    assert_eq!(p.to_string(), "庚辰 甲申 丙午 庚寅");
}

#[test]
fn late_zi_rolls_day() {
    let early = pillars(solar(2000, 8, 16), t(0), PillarOptions::default()).unwrap();
    let late = pillars(solar(2000, 8, 16), t(12), PillarOptions::default()).unwrap();
    assert_eq!(early.daily.to_string(), "丙午");
    assert_eq!(late.daily.to_string(), "丁未");
    assert_eq!(late.hourly.to_string(), "庚子");
    assert_eq!(late.yearly, early.yearly);
    assert_eq!(late.monthly, early.monthly);
}

#[test]
fn known_day_pillars() {
    assert_eq!(day_pillar(solar(2000, 1, 1)).to_string(), "戊午");
    assert_eq!(day_pillar(solar(2024, 2, 10)).to_string(), "甲辰");
}

#[test]
fn month_before_xiaohan_is_zi_month() {
    let m = month_pillar(solar(2024, 1, 2), YearDivide::Exact).unwrap();
    // 癸卯 year: 子 month is 甲子.
    assert_eq!(m.to_string(), "甲子");
}

#[test]
fn month_switches_at_jie() {
    // 惊蛰 2024 fell on Mar 5.
    let before = month_pillar(solar(2024, 3, 4), YearDivide::Exact).unwrap();
    let after = month_pillar(solar(2024, 3, 5), YearDivide::Exact).unwrap();
    assert_eq!(before.to_string(), "丙寅");
    assert_eq!(after.to_string(), "丁卯");
}

#[test]
fn jie_just_after_midnight() {
    // 惊蛰 2014-03-06 00:02 CST, 小暑 2016-07-07 00:03 CST.
    let opts = PillarOptions::default();
    assert_eq!(pillars(solar(2014, 3, 5), t(6), opts).unwrap().monthly.to_string(), "丙寅");
    assert_eq!(pillars(solar(2014, 3, 6), t(6), opts).unwrap().monthly.to_string(), "丁卯");
    assert_eq!(pillars(solar(2016, 7, 6), t(6), opts).unwrap().monthly.to_string(), "甲午");
    assert_eq!(pillars(solar(2016, 7, 7), t(6), opts).unwrap().monthly.to_string(), "乙未");
}

#[test]
fn lichun_just_after_midnight() {
    // 立春 2013-02-04 00:13 CST, 1980-02-05 00:10 CST.
    assert_eq!(year_pillar(solar(2013, 2, 3), YearDivide::Exact).unwrap().to_string(), "壬辰");
    assert_eq!(year_pillar(solar(2013, 2, 4), YearDivide::Exact).unwrap().to_string(), "癸巳");
    assert_eq!(year_pillar(solar(1980, 2, 4), YearDivide::Exact).unwrap().to_string(), "己未");
    assert_eq!(year_pillar(solar(1980, 2, 5), YearDivide::Exact).unwrap().to_string(), "庚申");
}
