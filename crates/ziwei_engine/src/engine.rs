//! Chart assembly.
//!
//! [`ZiweiEngine`] binds a validated [`ChartConfig`] and an ordered list of
//! post-processing transforms. Every method takes `&self`; one engine can
//! serve many threads.

use std::fmt::{Debug, Formatter};

use log::{debug, trace};
use ziwei_base::{
    AdjectiveStarInput, FiveElementsClass, Gender, MinorStarInput, PalaceName, StarName,
    StarPlacement, YearlyStarInput, ages, body_master, boshi12, changsheng12, decadals,
    jiangqian12, month_index, mutagen_in, palace_names, palace_stems, place_adjective_stars,
    place_major_stars, place_minor_stars, runs_forward, slot_branch, soul_and_body, soul_master,
    suiqian12, ziwei_day, ziwei_index,
};
use ziwei_calendar::{
    ALL_STEMS, EarthlyBranch, LunarDate, PillarOptions, SolarDate, StemBranch, TimeIndex,
    WesternSign, Zodiac, days_in_lunar_month, lunar_to_solar, pillars, solar_to_lunar,
    year_pillar,
};

use crate::astrolabe::{AstroType, Astrolabe, Palace, Star};
use crate::config::{ChartConfig, DayDivide, StarTables};
use crate::error::EngineError;

/// Post-processing step applied to every assembled chart.
pub type Transform = Box<dyn Fn(Astrolabe) -> Astrolabe + Send + Sync>;

/// Birth date in either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthDate {
    Solar(SolarDate),
    /// Lunar date; `is_leap` is ignored when the month has no leap repeat.
    Lunar(LunarDate),
}

/// Everything needed to cast one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub date: BirthDate,
    pub time: TimeIndex,
    pub gender: Gender,
    /// Split a leap month at day 15 between the two neighbouring months.
    pub fix_leap: bool,
    pub astro_type: AstroType,
}

impl ChartOptions {
    pub fn solar(date: SolarDate, time: TimeIndex, gender: Gender) -> Self {
        Self {
            date: BirthDate::Solar(date),
            time,
            gender,
            fix_leap: true,
            astro_type: AstroType::Heaven,
        }
    }

    pub fn with_fix_leap(mut self, fix_leap: bool) -> Self {
        self.fix_leap = fix_leap;
        self
    }

    pub fn with_astro_type(mut self, astro_type: AstroType) -> Self {
        self.astro_type = astro_type;
        self
    }
}

/// Calendar facts shared by every placement step of one chart.
struct Birth {
    date: SolarDate,
    lunar: LunarDate,
    time: TimeIndex,
    /// Slot used for placement after the day-divide rule.
    place_time: TimeIndex,
    gender: Gender,
    year: StemBranch,
    horoscope_year: StemBranch,
    month_index: usize,
}

/// Chart and horoscope engine.
pub struct ZiweiEngine {
    pub(crate) config: ChartConfig,
    pub(crate) tables: StarTables,
    transforms: Vec<Transform>,
}

impl Debug for ZiweiEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZiweiEngine")
            .field("config", &self.config)
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

impl ZiweiEngine {
    /// Validate the configuration and resolve its tables.
    pub fn new(config: ChartConfig) -> Result<Self, EngineError> {
        let tables = StarTables::from_config(&config)?;
        Ok(Self {
            config,
            tables,
            transforms: Vec::new(),
        })
    }

    /// Append a transform; transforms run in registration order.
    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(Astrolabe) -> Astrolabe + Send + Sync + 'static,
    {
        self.transforms.push(Box::new(transform));
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn tables(&self) -> &StarTables {
        &self.tables
    }

    /// Chart from a Gregorian birth date.
    pub fn by_solar(
        &self,
        date: SolarDate,
        time: TimeIndex,
        gender: Gender,
        fix_leap: bool,
    ) -> Result<Astrolabe, EngineError> {
        self.with_options(&ChartOptions::solar(date, time, gender).with_fix_leap(fix_leap))
    }

    /// Chart from a lunar birth date.
    pub fn by_lunar(
        &self,
        date: LunarDate,
        time: TimeIndex,
        gender: Gender,
        fix_leap: bool,
    ) -> Result<Astrolabe, EngineError> {
        self.with_options(&ChartOptions {
            date: BirthDate::Lunar(date),
            time,
            gender,
            fix_leap,
            astro_type: AstroType::Heaven,
        })
    }

    /// Chart from full options, including the anchoring system.
    pub fn with_options(&self, options: &ChartOptions) -> Result<Astrolabe, EngineError> {
        let date = resolve_date(options.date)?;
        let birth = self.birth(date, options.time, options.gender, options.fix_leap)?;
        let mut chart = self.assemble(&birth)?;
        let anchor = match options.astro_type {
            AstroType::Heaven => None,
            AstroType::Earth => chart.body_palace().map(|p| StemBranch::new(p.stem, p.branch)),
            AstroType::Human => chart
                .index_of(PalaceName::Spirit)
                .map(|i| StemBranch::new(chart.palaces[i].stem, chart.palaces[i].branch)),
        };
        if let Some(anchor) = anchor {
            self.rearrange(&mut chart, &birth, anchor)?;
            chart.astro_type = options.astro_type;
        }
        Ok(self.transforms.iter().fold(chart, |chart, t| t(chart)))
    }

    fn birth(
        &self,
        date: SolarDate,
        time: TimeIndex,
        gender: Gender,
        fix_leap: bool,
    ) -> Result<Birth, EngineError> {
        let place_time = if self.config.day_divide == DayDivide::Current && time.is_late_zi() {
            TimeIndex::EARLY_ZI
        } else {
            time
        };
        let lunar = solar_to_lunar(date)?;
        let year = year_pillar(date, self.config.year_divide)?;
        let horoscope_year = year_pillar(date, self.config.horoscope_divide)?;
        let month_index = month_index(lunar.month, lunar.is_leap, lunar.day, place_time, fix_leap);
        Ok(Birth {
            date,
            lunar,
            time,
            place_time,
            gender,
            year,
            horoscope_year,
            month_index,
        })
    }

    fn star(&self, placement: StarPlacement, year: StemBranch) -> Star {
        let name = placement.star;
        let brightness = if name.is_principal() {
            self.tables.brightness(name, placement.slot)
        } else {
            None
        };
        let mutagen = if name.takes_mutagen() {
            mutagen_in(&self.tables.mutagens(year.stem), name)
        } else {
            None
        };
        Star {
            name,
            brightness,
            mutagen,
        }
    }

    fn bucket(&self, placed: &[StarPlacement], year: StemBranch) -> [Vec<Star>; 12] {
        let mut slots: [Vec<Star>; 12] = Default::default();
        for p in placed {
            trace!("{} -> {}", p.star.name(), slot_branch(p.slot).name());
            slots[p.slot % 12].push(self.star(*p, year));
        }
        slots
    }

    fn major_stars(
        &self,
        birth: &Birth,
        class: FiveElementsClass,
    ) -> Result<[Vec<Star>; 12], EngineError> {
        let month_days = days_in_lunar_month(&birth.lunar)?;
        let day = ziwei_day(birth.lunar.day, month_days, birth.place_time);
        let ziwei = ziwei_index(day, class.bureau());
        trace!("ziwei day {day}, bureau {}, slot {ziwei}", class.bureau());
        Ok(self.bucket(&place_major_stars(ziwei), birth.year))
    }

    fn assemble(&self, birth: &Birth) -> Result<Astrolabe, EngineError> {
        let year = birth.year;
        let sb = soul_and_body(birth.month_index, birth.place_time, year.stem, None);
        let class = FiveElementsClass::of(sb.soul_stem, sb.soul_branch);
        debug!(
            "chart {} {}: soul {}, body {}, {}",
            birth.date,
            birth.time.name(),
            sb.soul_branch.name(),
            slot_branch(sb.body_index).name(),
            class.name()
        );

        let mut majors = self.major_stars(birth, class)?;
        let mut minors = self.bucket(
            &place_minor_stars(MinorStarInput {
                month_index: birth.month_index,
                time: birth.place_time,
                year_stem: year.stem,
                year_branch: year.branch,
            }),
            year,
        );
        let mut adjectives = self.bucket(
            &place_adjective_stars(AdjectiveStarInput {
                month_index: birth.month_index,
                time: birth.place_time,
                lunar_day: birth.lunar.day,
                luan_xi_branch: year.branch,
                yearly: YearlyStarInput {
                    year_stem: birth.horoscope_year.stem,
                    year_branch: birth.horoscope_year.branch,
                    soul_index: sb.soul_index,
                    body_index: sb.body_index,
                    gender: birth.gender,
                    algorithm: self.config.algorithm,
                },
            }),
            year,
        );

        let forward = runs_forward(birth.gender, year.branch);
        let lucun = ziwei_base::location::lu_yang_tuo_ma(year.stem, year.branch).lu;
        let changsheng = changsheng12(class, forward);
        let boshi = boshi12(lucun, forward);
        let jiangqian = jiangqian12(birth.horoscope_year.branch);
        let suiqian = suiqian12(birth.horoscope_year.branch);
        let decadal = decadals(sb.soul_index, class, year.stem, forward);
        let age_table = ages(year.branch, birth.gender);
        let names = palace_names(sb.soul_index);
        let stems = palace_stems(year.stem);

        let palaces: [Palace; 12] = std::array::from_fn(|i| {
            let branch = slot_branch(i);
            Palace {
                index: i,
                name: names[i],
                is_body_palace: i == sb.body_index,
                is_original_palace: !matches!(branch, EarthlyBranch::Zi | EarthlyBranch::Chou)
                    && stems[i] == year.stem,
                stem: stems[i],
                branch,
                major_stars: std::mem::take(&mut majors[i]),
                minor_stars: std::mem::take(&mut minors[i]),
                adjective_stars: std::mem::take(&mut adjectives[i]),
                changsheng12: changsheng[i],
                boshi12: boshi[i],
                jiangqian12: jiangqian[i],
                suiqian12: suiqian[i],
                decadal: decadal[i],
                ages: age_table[i],
            }
        });

        let chinese_date = pillars(
            birth.date,
            birth.time,
            PillarOptions {
                year: self.config.year_divide,
                month: self.config.horoscope_divide,
            },
        )?;

        Ok(Astrolabe {
            gender: birth.gender,
            solar_date: birth.date,
            lunar_date: birth.lunar,
            chinese_date,
            time: birth.time,
            sign: WesternSign::of(birth.date),
            zodiac: year.branch.zodiac(),
            soul_branch: sb.soul_branch,
            body_branch: slot_branch(sb.body_index),
            soul: soul_master(sb.soul_branch),
            body: body_master(year.branch),
            five_elements_class: class,
            astro_type: AstroType::Heaven,
            palaces,
            mutagens: ALL_STEMS.map(|stem| self.tables.mutagens(stem)),
        })
    }

    /// Re-anchor the soul palace on `anchor` (earth and human charts).
    ///
    /// Names, major stars, the 长生 ring, decadals, ages and the body flag
    /// are recomputed; everything else is kept.
    fn rearrange(
        &self,
        chart: &mut Astrolabe,
        birth: &Birth,
        anchor: StemBranch,
    ) -> Result<(), EngineError> {
        let year = birth.year;
        let sb = soul_and_body(
            birth.month_index,
            birth.place_time,
            year.stem,
            Some(anchor.branch),
        );
        let class = FiveElementsClass::of(anchor.stem, anchor.branch);
        debug!(
            "rearrange on {}: soul {}, body {}, {}",
            anchor,
            sb.soul_branch.name(),
            slot_branch(sb.body_index).name(),
            class.name()
        );
        let mut majors = self.major_stars(birth, class)?;
        let forward = runs_forward(birth.gender, year.branch);
        let changsheng = changsheng12(class, forward);
        let decadal = decadals(sb.soul_index, class, year.stem, forward);
        let age_table = ages(year.branch, birth.gender);
        let names = palace_names(sb.soul_index);

        chart.five_elements_class = class;
        for (i, palace) in chart.palaces.iter_mut().enumerate() {
            palace.name = names[i];
            palace.major_stars = std::mem::take(&mut majors[i]);
            palace.changsheng12 = changsheng[i];
            palace.decadal = decadal[i];
            palace.ages = age_table[i];
            palace.is_body_palace = i == sb.body_index;
        }
        chart.soul_branch = sb.soul_branch;
        Ok(())
    }

    /// Zodiac animal of the birth year.
    pub fn zodiac_by_solar(&self, date: SolarDate) -> Result<Zodiac, EngineError> {
        Ok(year_pillar(date, self.config.year_divide)?.branch.zodiac())
    }

    pub fn sign_by_solar(&self, date: SolarDate) -> WesternSign {
        WesternSign::of(date)
    }

    pub fn sign_by_lunar(&self, date: LunarDate) -> Result<WesternSign, EngineError> {
        Ok(WesternSign::of(resolve_date(BirthDate::Lunar(date))?))
    }

    /// Major stars of the soul palace, borrowed from the opposite palace
    /// when the soul palace has none.
    pub fn soul_stars_by_solar(
        &self,
        date: SolarDate,
        time: TimeIndex,
        fix_leap: bool,
    ) -> Result<Vec<StarName>, EngineError> {
        let chart = self.by_solar(date, time, Gender::Male, fix_leap)?;
        let soul = chart.soul_palace();
        let majors = |p: &Palace| -> Vec<StarName> {
            p.major_stars
                .iter()
                .filter(|s| s.name.is_major())
                .map(|s| s.name)
                .collect()
        };
        let stars = majors(soul);
        if !stars.is_empty() {
            return Ok(stars);
        }
        Ok(majors(&chart.palaces[(soul.index + 6) % 12]))
    }

    pub fn soul_stars_by_lunar(
        &self,
        date: LunarDate,
        time: TimeIndex,
        fix_leap: bool,
    ) -> Result<Vec<StarName>, EngineError> {
        let solar = resolve_date(BirthDate::Lunar(date))?;
        self.soul_stars_by_solar(solar, time, fix_leap)
    }
}

fn resolve_date(date: BirthDate) -> Result<SolarDate, EngineError> {
    match date {
        BirthDate::Solar(d) => Ok(d),
        BirthDate::Lunar(l) => Ok(lunar_to_solar(l.year, l.month, l.day, l.is_leap)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ZiweiEngine {
        ZiweiEngine::new(ChartConfig::default()).unwrap()
    }

    fn reference() -> Astrolabe {
        engine()
            .by_solar(
                SolarDate::new(2000, 8, 16).unwrap(),
                TimeIndex::new(2).unwrap(),
                Gender::Female,
                true,
            )
            .unwrap()
    }

    #[test]
    fn every_star_placed_once() {
        let chart = reference();
        let total: usize = chart.palaces.iter().map(|p| p.stars().count()).sum();
        assert_eq!(total, 14 + 14 + 38);
    }

    #[test]
    fn lunar_entry_matches_solar() {
        let lunar = LunarDate {
            year: 2000,
            month: 7,
            day: 17,
            is_leap: false,
        };
        let by_lunar = engine()
            .by_lunar(lunar, TimeIndex::new(2).unwrap(), Gender::Female, true)
            .unwrap();
        assert_eq!(by_lunar, reference());
    }

    #[test]
    fn transforms_run_in_order() {
        let e = engine()
            .with_transform(|mut a| {
                a.palaces[0].adjective_stars.clear();
                a
            })
            .with_transform(|mut a| {
                a.soul = StarName::Ziwei;
                a
            });
        let chart = e
            .by_solar(
                SolarDate::new(2000, 8, 16).unwrap(),
                TimeIndex::new(2).unwrap(),
                Gender::Female,
                true,
            )
            .unwrap();
        assert!(chart.palaces[0].adjective_stars.is_empty());
        assert_eq!(chart.soul, StarName::Ziwei);
    }

    #[test]
    fn earth_chart_anchors_on_body() {
        let options = ChartOptions::solar(
            SolarDate::new(2000, 8, 16).unwrap(),
            TimeIndex::new(2).unwrap(),
            Gender::Female,
        )
        .with_astro_type(AstroType::Earth);
        let chart = engine().with_options(&options).unwrap();
        // Heaven body palace is 丙戌, 屋上土.
        assert_eq!(chart.soul_branch, EarthlyBranch::Xu);
        assert_eq!(chart.palaces[8].name, PalaceName::Soul);
        assert_eq!(chart.five_elements_class, FiveElementsClass::Earth5);
        assert_eq!(chart.astro_type, AstroType::Earth);
        assert!(chart.palaces[(8 + 4) % 12].is_body_palace);
    }

    #[test]
    fn soul_stars() {
        let stars = engine()
            .soul_stars_by_solar(
                SolarDate::new(2000, 8, 16).unwrap(),
                TimeIndex::new(2).unwrap(),
                true,
            )
            .unwrap();
        assert_eq!(stars, vec![StarName::Ziwei]);
    }
}
