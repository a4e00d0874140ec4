//! Horoscope periods (运限) for a target date.
//!
//! Periods nest: decadal (or childhood), small limit, yearly, monthly, daily
//! and hourly. Each carries its own anchor palace, palace-name table, stem
//! mutagens and period stars.

use log::debug;
use ziwei_base::{
    CHILDHOOD_PALACES, HoroscopeStar, Jiangqian12, Mutagen, MutagenRow, PalaceName, Scope,
    Suiqian12, branch_slot, fix_index, jiangqian12, nominal_age, palace_names,
    place_horoscope_stars, suiqian12,
};
use ziwei_calendar::{
    EarthlyBranch, HeavenlyStem, LunarDate, PillarOptions, SolarDate, StemBranch, TimeIndex,
    pillars, solar_to_lunar,
};

use crate::analyzer::SurroundedPalaces;
use crate::astrolabe::{Astrolabe, Palace};
use crate::engine::ZiweiEngine;
use crate::error::EngineError;

/// Label of a horoscope period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodName {
    /// 童限: before the first decadal starts.
    Childhood,
    Decadal,
    /// 小限
    Age,
    Yearly,
    Monthly,
    Daily,
    Hourly,
}

impl PeriodName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Childhood => "童限",
            Self::Decadal => "大限",
            Self::Age => "小限",
            Self::Yearly => "流年",
            Self::Monthly => "流月",
            Self::Daily => "流日",
            Self::Hourly => "流时",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Childhood => "childhood",
            Self::Decadal => "decadal",
            Self::Age => "turn",
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }
}

/// One resolved period.
#[derive(Debug, Clone, PartialEq)]
pub struct HoroscopeItem {
    /// Slot acting as this period's soul palace.
    pub index: usize,
    pub name: PeriodName,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    /// Period palace name of every slot.
    pub palace_names: [PalaceName; 12],
    /// 禄 权 科 忌 stars of the period stem.
    pub mutagens: MutagenRow,
    /// Period stars with their slots.
    pub stars: Vec<(HoroscopeStar, usize)>,
}

impl HoroscopeItem {
    fn new(
        index: usize,
        name: PeriodName,
        stem: HeavenlyStem,
        branch: EarthlyBranch,
        scope: Scope,
        mutagens: MutagenRow,
    ) -> Self {
        Self {
            index,
            name,
            stem,
            branch,
            palace_names: palace_names(index),
            mutagens,
            stars: place_horoscope_stars(stem, branch, scope),
        }
    }

    /// Period stars sitting in a slot.
    pub fn stars_in(&self, slot: usize) -> impl Iterator<Item = HoroscopeStar> + '_ {
        self.stars
            .iter()
            .filter(move |(_, s)| *s == slot)
            .map(|(star, _)| *star)
    }
}

/// The small limit (小限).
#[derive(Debug, Clone, PartialEq)]
pub struct AgeItem {
    pub index: usize,
    pub nominal_age: u32,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub palace_names: [PalaceName; 12],
    pub mutagens: MutagenRow,
}

/// The 将前 and 岁前 rings of the target year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyDecStar {
    pub jiangqian12: [Jiangqian12; 12],
    pub suiqian12: [Suiqian12; 12],
}

/// All periods active at a target date.
#[derive(Debug, Clone, PartialEq)]
pub struct Horoscope {
    pub solar_date: SolarDate,
    pub lunar_date: LunarDate,
    pub decadal: HoroscopeItem,
    pub age: AgeItem,
    pub yearly: HoroscopeItem,
    pub yearly_dec_star: YearlyDecStar,
    pub monthly: HoroscopeItem,
    pub daily: HoroscopeItem,
    pub hourly: HoroscopeItem,
}

impl ZiweiEngine {
    /// Resolve every period of `chart` at `date` in time slot `time`.
    pub fn horoscope(
        &self,
        chart: &Astrolabe,
        date: SolarDate,
        time: TimeIndex,
    ) -> Result<Horoscope, EngineError> {
        let birth = chart.lunar_date;
        let target = solar_to_lunar(date)?;
        let p = pillars(
            date,
            time,
            PillarOptions {
                year: self.config.horoscope_divide,
                month: self.config.horoscope_divide,
            },
        )?;

        let age = nominal_age(&birth, &target, self.config.age_divide);
        if age <= 0 {
            return Err(EngineError::InvalidInput(format!(
                "{date} precedes the birth year (nominal age {age})"
            )));
        }
        let age = age as u32;

        let decadal = match chart.palaces.iter().find(|p| p.decadal.contains(age)) {
            Some(palace) => HoroscopeItem::new(
                palace.index,
                PeriodName::Decadal,
                palace.decadal.stem,
                palace.decadal.branch,
                Scope::Decadal,
                chart.mutagens_of(palace.decadal.stem),
            ),
            None => {
                let palace = CHILDHOOD_PALACES
                    .get(age as usize - 1)
                    .and_then(|name| chart.palace(*name))
                    .ok_or_else(|| {
                        EngineError::InvalidInput(format!("nominal age {age} has no decadal"))
                    })?;
                HoroscopeItem::new(
                    palace.index,
                    PeriodName::Childhood,
                    palace.stem,
                    palace.branch,
                    Scope::Decadal,
                    chart.mutagens_of(palace.stem),
                )
            }
        };

        let age_palace = chart
            .palaces
            .iter()
            .find(|p| p.ages.contains(&age))
            .ok_or_else(|| {
                EngineError::InvalidInput(format!("nominal age {age} has no small limit"))
            })?;
        let age_item = AgeItem {
            index: age_palace.index,
            nominal_age: age,
            stem: age_palace.stem,
            branch: age_palace.branch,
            palace_names: palace_names(age_palace.index),
            mutagens: chart.mutagens_of(age_palace.stem),
        };

        let yearly_index = branch_slot(p.yearly.branch);
        let leap_shift = |d: &LunarDate| i64::from(d.is_leap && d.day > 15);
        let monthly_index = fix_index(
            yearly_index as i64 - (i64::from(birth.month) + leap_shift(&birth))
                + i64::from(chart.chinese_date.hourly.branch.index())
                + (i64::from(target.month) + leap_shift(&target)),
        );
        let daily_index = fix_index(monthly_index as i64 + i64::from(target.day) - 1);
        let hourly_index = fix_index(daily_index as i64 + i64::from(p.hourly.branch.index()));
        debug!(
            "horoscope {date}: age {age}, decadal {}, age {}, yearly {yearly_index}, monthly {monthly_index}, daily {daily_index}, hourly {hourly_index}",
            decadal.index, age_item.index
        );

        let item = |index, name, sb: StemBranch, scope| {
            HoroscopeItem::new(index, name, sb.stem, sb.branch, scope, chart.mutagens_of(sb.stem))
        };
        Ok(Horoscope {
            solar_date: date,
            lunar_date: target,
            decadal,
            age: age_item,
            yearly: item(yearly_index, PeriodName::Yearly, p.yearly, Scope::Yearly),
            yearly_dec_star: YearlyDecStar {
                jiangqian12: jiangqian12(p.yearly.branch),
                suiqian12: suiqian12(p.yearly.branch),
            },
            monthly: item(monthly_index, PeriodName::Monthly, p.monthly, Scope::Monthly),
            daily: item(daily_index, PeriodName::Daily, p.daily, Scope::Daily),
            hourly: item(hourly_index, PeriodName::Hourly, p.hourly, Scope::Hourly),
        })
    }

    /// [`Self::horoscope`] with the slot taken from a clock hour (0-23).
    pub fn horoscope_at_hour(
        &self,
        chart: &Astrolabe,
        date: SolarDate,
        hour: u32,
    ) -> Result<Horoscope, EngineError> {
        self.horoscope(chart, date, TimeIndex::from_hour(hour)?)
    }
}

impl Horoscope {
    /// The period of a scope; `None` for the natal scope.
    pub fn item(&self, scope: Scope) -> Option<&HoroscopeItem> {
        match scope {
            Scope::Origin => None,
            Scope::Decadal => Some(&self.decadal),
            Scope::Yearly => Some(&self.yearly),
            Scope::Monthly => Some(&self.monthly),
            Scope::Daily => Some(&self.daily),
            Scope::Hourly => Some(&self.hourly),
        }
    }

    /// Slot carrying `name` in the given scope's palace-name table.
    pub fn palace_index(&self, chart: &Astrolabe, name: PalaceName, scope: Scope) -> Option<usize> {
        match self.item(scope) {
            None => chart.index_of(name),
            Some(item) => item.palace_names.iter().position(|n| *n == name),
        }
    }

    /// Natal palace that plays `name` in the given scope.
    pub fn palace<'a>(
        &self,
        chart: &'a Astrolabe,
        name: PalaceName,
        scope: Scope,
    ) -> Option<&'a Palace> {
        self.palace_index(chart, name, scope)
            .map(|i| &chart.palaces[i])
    }

    /// 三方四正 of the scope's `name` palace.
    pub fn surrounded_palaces<'a>(
        &self,
        chart: &'a Astrolabe,
        name: PalaceName,
        scope: Scope,
    ) -> Option<SurroundedPalaces<'a>> {
        self.palace_index(chart, name, scope)
            .and_then(|i| chart.surrounded_palaces(i))
    }

    /// Decadal and yearly period stars in one slot.
    fn merged_stars(&self, slot: usize) -> Vec<HoroscopeStar> {
        self.decadal
            .stars_in(slot)
            .chain(self.yearly.stars_in(slot))
            .collect()
    }

    /// Whether the scope's `name` palace holds every listed decadal/yearly star.
    pub fn has_horoscope_stars(
        &self,
        chart: &Astrolabe,
        name: PalaceName,
        scope: Scope,
        stars: &[HoroscopeStar],
    ) -> bool {
        match self.palace_index(chart, name, scope) {
            Some(i) => {
                let present = self.merged_stars(i);
                stars.iter().all(|s| present.contains(s))
            }
            None => false,
        }
    }

    pub fn not_have_horoscope_stars(
        &self,
        chart: &Astrolabe,
        name: PalaceName,
        scope: Scope,
        stars: &[HoroscopeStar],
    ) -> bool {
        match self.palace_index(chart, name, scope) {
            Some(i) => {
                let present = self.merged_stars(i);
                !stars.iter().any(|s| present.contains(s))
            }
            None => false,
        }
    }

    pub fn has_one_of_horoscope_stars(
        &self,
        chart: &Astrolabe,
        name: PalaceName,
        scope: Scope,
        stars: &[HoroscopeStar],
    ) -> bool {
        match self.palace_index(chart, name, scope) {
            Some(i) => {
                let present = self.merged_stars(i);
                stars.iter().any(|s| present.contains(s))
            }
            None => false,
        }
    }

    /// Whether the natal `name` palace holds the star that `scope`'s stem
    /// turns into `mutagen`. Always false for the natal scope.
    pub fn has_horoscope_mutagen(
        &self,
        chart: &Astrolabe,
        name: PalaceName,
        scope: Scope,
        mutagen: Mutagen,
    ) -> bool {
        let (Some(item), Some(palace)) = (self.item(scope), chart.palace(name)) else {
            return false;
        };
        let target = item.mutagens[mutagen.index()];
        palace.principal_stars().any(|s| s.name == target)
    }

    /// Palace of the small limit.
    pub fn age_palace<'a>(&self, chart: &'a Astrolabe) -> &'a Palace {
        &chart.palaces[self.age.index % 12]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use ziwei_base::{Gender, HoroscopeStarKind};

    fn setup() -> (ZiweiEngine, Astrolabe) {
        let engine = ZiweiEngine::new(ChartConfig::default()).unwrap();
        let chart = engine
            .by_solar(
                SolarDate::new(2000, 8, 16).unwrap(),
                TimeIndex::new(2).unwrap(),
                Gender::Female,
                true,
            )
            .unwrap();
        (engine, chart)
    }

    #[test]
    fn decadal_contains_nominal_age() {
        let (engine, chart) = setup();
        let h = engine
            .horoscope(&chart, SolarDate::new(2023, 8, 19).unwrap(), TimeIndex::new(3).unwrap())
            .unwrap();
        assert_eq!(h.age.nominal_age, 24);
        assert_eq!(h.decadal.name, PeriodName::Decadal);
        assert!(chart.palaces[h.decadal.index].decadal.contains(24));
        assert!(chart.palaces[h.age.index].ages.contains(&24));
        // 2023 is 癸卯; 卯 sits one slot after 寅.
        assert_eq!(h.yearly.stem, HeavenlyStem::Gui);
        assert_eq!(h.yearly.index, 1);
        assert_eq!(h.yearly.palace_names[1], PalaceName::Soul);
    }

    #[test]
    fn childhood_before_first_decadal() {
        let (engine, chart) = setup();
        // Wood bureau: first decadal starts at 3, so age 2 is childhood.
        let h = engine
            .horoscope(&chart, SolarDate::new(2001, 6, 1).unwrap(), TimeIndex::new(0).unwrap())
            .unwrap();
        assert_eq!(h.age.nominal_age, 2);
        assert_eq!(h.decadal.name, PeriodName::Childhood);
        assert_eq!(chart.palaces[h.decadal.index].name, PalaceName::Wealth);
    }

    #[test]
    fn before_birth_year_is_rejected() {
        let (engine, chart) = setup();
        let err = engine
            .horoscope(&chart, SolarDate::new(1999, 6, 1).unwrap(), TimeIndex::new(0).unwrap())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn nesting_chain() {
        let (engine, chart) = setup();
        let date = SolarDate::new(2024, 3, 10).unwrap();
        let a = engine.horoscope(&chart, date, TimeIndex::new(5).unwrap()).unwrap();
        let b = engine.horoscope(&chart, date, TimeIndex::new(9).unwrap()).unwrap();
        assert_eq!(a.daily.index, b.daily.index);
        assert_eq!(
            a.daily.index,
            fix_index(a.monthly.index as i64 + i64::from(a.lunar_date.day) - 1)
        );
        assert_eq!(
            b.hourly.index,
            fix_index(b.daily.index as i64 + i64::from(b.hourly.branch.index()))
        );
    }

    #[test]
    fn period_star_counts() {
        let (engine, chart) = setup();
        let h = engine
            .horoscope(&chart, SolarDate::new(2023, 8, 19).unwrap(), TimeIndex::new(3).unwrap())
            .unwrap();
        assert_eq!(h.decadal.stars.len(), 8);
        assert_eq!(h.yearly.stars.len(), 11);
        assert_eq!(h.hourly.stars.len(), 8);
    }

    #[test]
    fn horoscope_star_queries() {
        let (engine, chart) = setup();
        let h = engine
            .horoscope(&chart, SolarDate::new(2023, 8, 19).unwrap(), TimeIndex::new(3).unwrap())
            .unwrap();
        let lu = HoroscopeStar {
            scope: Scope::Yearly,
            kind: HoroscopeStarKind::Lu,
        };
        let slot = h.yearly.stars.iter().find(|(s, _)| *s == lu).unwrap().1;
        let name = chart.palaces[slot].name;
        assert!(h.has_horoscope_stars(&chart, name, Scope::Origin, &[lu]));
        assert!(h.has_one_of_horoscope_stars(&chart, name, Scope::Origin, &[lu]));
        assert!(!h.not_have_horoscope_stars(&chart, name, Scope::Origin, &[lu]));
    }

    #[test]
    fn horoscope_mutagen_follows_period_stem() {
        let (engine, chart) = setup();
        let h = engine
            .horoscope(&chart, SolarDate::new(2023, 8, 19).unwrap(), TimeIndex::new(3).unwrap())
            .unwrap();
        let lu_star = h.yearly.mutagens[0];
        let holder = chart
            .palaces
            .iter()
            .find(|p| p.principal_stars().any(|s| s.name == lu_star));
        if let Some(p) = holder {
            assert!(h.has_horoscope_mutagen(&chart, p.name, Scope::Yearly, Mutagen::Lu));
        }
        assert!(!h.has_horoscope_mutagen(&chart, PalaceName::Soul, Scope::Origin, Mutagen::Lu));
    }
}
