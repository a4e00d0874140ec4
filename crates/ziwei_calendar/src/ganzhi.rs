//! Heavenly stems, earthly branches and the four sexagenary pillars.
//!
//! Clean-room from the traditional rules:
//! - Day pillar: sexagenary index = (JDN + 49) mod 60.
//! - Five Tigers (五虎遁): year stem → stem of the 寅 month.
//! - Five Rats (五鼠遁): day stem → stem of the 子 hour.

use std::fmt::{Display, Formatter};

use crate::error::CalendarError;
use crate::lunar::solar_to_lunar;
use crate::solar_date::SolarDate;
use crate::solar_term::{SolarTerm, current_jie, solar_term_date};
use crate::time_index::TimeIndex;

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}

/// The 10 heavenly stems (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = 甲).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Stable pinyin key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// 0-based index (甲 = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at a (possibly negative or overflowing) index, wrapped mod 10.
    pub const fn from_index(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Even index (甲 = 0) is yang.
    pub const fn yin_yang(self) -> YinYang {
        if self.index() % 2 == 0 {
            YinYang::Yang
        } else {
            YinYang::Yin
        }
    }

    /// Stem of the 寅 month / palace for a year stem (五虎遁).
    pub const fn tiger_start(self) -> Self {
        match self {
            Self::Jia | Self::Ji => Self::Bing,
            Self::Yi | Self::Geng => Self::Wu,
            Self::Bing | Self::Xin => Self::Geng,
            Self::Ding | Self::Ren => Self::Ren,
            Self::Wu | Self::Gui => Self::Jia,
        }
    }

    /// Stem `n` steps later.
    pub const fn offset(self, n: i64) -> Self {
        Self::from_index(self.index() as i64 + n)
    }

    pub const fn all() -> &'static [HeavenlyStem; 10] {
        &ALL_STEMS
    }
}

/// The 12 earthly branches (地支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = 子).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

impl EarthlyBranch {
    /// Chinese character.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Stable pinyin key (`woo` for 午, keeping it distinct from 戊).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "woo",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// 0-based index (子 = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at a (possibly negative or overflowing) index, wrapped mod 12.
    pub const fn from_index(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    pub const fn yin_yang(self) -> YinYang {
        if self.index() % 2 == 0 {
            YinYang::Yang
        } else {
            YinYang::Yin
        }
    }

    /// Branch `n` steps later.
    pub const fn offset(self, n: i64) -> Self {
        Self::from_index(self.index() as i64 + n)
    }

    /// Zodiac animal of this branch.
    pub const fn zodiac(self) -> Zodiac {
        ALL_ZODIACS[self.index() as usize]
    }

    pub const fn all() -> &'static [EarthlyBranch; 12] {
        &ALL_BRANCHES
    }
}

/// The 12 zodiac animals (生肖).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 animals in branch order.
pub const ALL_ZODIACS: [Zodiac; 12] = [
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
];

impl Zodiac {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龙",
            Self::Snake => "蛇",
            Self::Horse => "马",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "鸡",
            Self::Dog => "狗",
            Self::Pig => "猪",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// A stem + branch pair (one of the 60 sexagenary combinations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl StemBranch {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Pair at a position of the 60-term cycle (0 = 甲子).
    pub const fn from_cycle(i: i64) -> Self {
        let n = i.rem_euclid(60);
        Self {
            stem: HeavenlyStem::from_index(n),
            branch: EarthlyBranch::from_index(n),
        }
    }

    /// Position in the 60-term cycle, 0..60.
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        // Solve n ≡ s (mod 10), n ≡ b (mod 12); s and b share parity.
        ((6 * s - 5 * b).rem_euclid(60)) as u8
    }

    /// Year pillar for a year number (4 CE = 甲子).
    pub const fn from_year(year: i32) -> Self {
        Self::from_cycle(year as i64 - 4)
    }
}

impl Display for StemBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

/// Where the year (and month) boundary falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearDivide {
    /// Lunar New Year (正月初一); months follow the lunar month.
    Normal,
    /// 立春 for the year; 节 solar terms for months.
    #[default]
    Exact,
}

/// Boundary conventions for [`pillars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PillarOptions {
    pub year: YearDivide,
    pub month: YearDivide,
}

/// Year, month, day and hour stem-branch pairs (四柱).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillars {
    pub yearly: StemBranch,
    pub monthly: StemBranch,
    pub daily: StemBranch,
    pub hourly: StemBranch,
}

impl Display for Pillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.yearly, self.monthly, self.daily, self.hourly
        )
    }
}

/// Year pillar under the given boundary.
pub fn year_pillar(date: SolarDate, divide: YearDivide) -> Result<StemBranch, CalendarError> {
    match divide {
        YearDivide::Normal => Ok(StemBranch::from_year(solar_to_lunar(date)?.year)),
        YearDivide::Exact => {
            // Range check shared with the lunar table.
            solar_to_lunar(date)?;
            let spring = solar_term_date(date.year, SolarTerm::LiChun);
            let year = if date < spring {
                date.year - 1
            } else {
                date.year
            };
            Ok(StemBranch::from_year(year))
        }
    }
}

/// Month pillar under the given boundary.
pub fn month_pillar(date: SolarDate, divide: YearDivide) -> Result<StemBranch, CalendarError> {
    match divide {
        YearDivide::Normal => {
            let lunar = solar_to_lunar(date)?;
            let year_stem = StemBranch::from_year(lunar.year).stem;
            let offset = lunar.month as i64 - 1;
            Ok(StemBranch::new(
                year_stem.tiger_start().offset(offset),
                EarthlyBranch::Yin.offset(offset),
            ))
        }
        YearDivide::Exact => {
            let year_stem = year_pillar(date, YearDivide::Exact)?.stem;
            let (_, jie) = current_jie(date);
            // JIE_TERMS[0] (小寒) opens the 丑 month.
            let branch = EarthlyBranch::Chou.offset(jie as i64);
            let offset = (branch.index() as i64 - 2).rem_euclid(12);
            Ok(StemBranch::new(year_stem.tiger_start().offset(offset), branch))
        }
    }
}

/// Day pillar of a civil date.
pub fn day_pillar(date: SolarDate) -> StemBranch {
    StemBranch::from_cycle(date.jdn() + 49)
}

/// Hour pillar from the day stem and the hour branch (五鼠遁).
pub fn hour_pillar(day_stem: HeavenlyStem, hour_branch: EarthlyBranch) -> StemBranch {
    let stem = HeavenlyStem::from_index((day_stem.index() % 5) as i64 * 2 + hour_branch.index() as i64);
    StemBranch::new(stem, hour_branch)
}

/// Four pillars for a birth date and time slot.
///
/// The late zi hour (slot 12) belongs to the following day for the day and
/// hour pillars; year and month stay on the civil date.
pub fn pillars(
    date: SolarDate,
    time: TimeIndex,
    options: PillarOptions,
) -> Result<Pillars, CalendarError> {
    let yearly = year_pillar(date, options.year)?;
    let monthly = month_pillar(date, options.month)?;
    let day_date = if time.is_late_zi() {
        date.add_days(1)
    } else {
        date
    };
    let daily = day_pillar(day_date);
    let hourly = hour_pillar(daily.stem, time.branch());
    Ok(Pillars {
        yearly,
        monthly,
        daily,
        hourly,
    })
}
