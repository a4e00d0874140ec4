//! Engine configuration.
//!
//! [`ChartConfig`] is a plain value bound to a [`crate::ZiweiEngine`] at
//! construction. It never changes afterwards, so charts built by one engine
//! always agree with each other.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use ziwei_base::{
    AgeDivide, Algorithm, Brightness, BrightnessRow, MutagenRow, StarName, default_brightness,
    default_mutagens,
};
use ziwei_calendar::{ALL_STEMS, HeavenlyStem, YearDivide};

use crate::error::EngineError;
use crate::i18n::{parse_brightness, parse_star, parse_stem};

/// Which day a late zi hour (23:00-24:00) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayDivide {
    /// The late zi hour starts the next day.
    #[default]
    Forward,
    /// The late zi hour is placed as the early zi hour of the same day.
    Current,
}

impl DayDivide {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Current => "current",
        }
    }
}

/// Chart-wide settings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartConfig {
    /// Year boundary for the birth year pillar.
    pub year_divide: YearDivide,
    /// Year boundary for horoscope periods and year-driven adjective stars.
    pub horoscope_divide: YearDivide,
    pub age_divide: AgeDivide,
    pub day_divide: DayDivide,
    pub algorithm: Algorithm,
    /// Replacement 禄/权/科/忌 stars per stem.
    pub mutagens: BTreeMap<HeavenlyStem, Vec<StarName>>,
    /// Replacement brightness rows per star, indexed by palace slot.
    pub brightness: BTreeMap<StarName, Vec<Option<Brightness>>>,
}

impl ChartConfig {
    pub fn with_year_divide(mut self, divide: YearDivide) -> Self {
        self.year_divide = divide;
        self
    }

    pub fn with_horoscope_divide(mut self, divide: YearDivide) -> Self {
        self.horoscope_divide = divide;
        self
    }

    pub fn with_age_divide(mut self, divide: AgeDivide) -> Self {
        self.age_divide = divide;
        self
    }

    pub fn with_day_divide(mut self, divide: DayDivide) -> Self {
        self.day_divide = divide;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_mutagens(mut self, stem: HeavenlyStem, stars: Vec<StarName>) -> Self {
        self.mutagens.insert(stem, stars);
        self
    }

    pub fn with_brightness(mut self, star: StarName, row: Vec<Option<Brightness>>) -> Self {
        self.brightness.insert(star, row);
        self
    }

    /// Reject override tables that cannot be applied.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (stem, stars) in &self.mutagens {
            if stars.len() != 4 {
                return Err(EngineError::ConfigurationConflict(format!(
                    "mutagens for {} need exactly 4 stars, got {}",
                    stem.name(),
                    stars.len()
                )));
            }
            for (i, star) in stars.iter().enumerate() {
                if stars[i + 1..].contains(star) {
                    return Err(EngineError::ConfigurationConflict(format!(
                        "mutagens for {} repeat {}",
                        stem.name(),
                        star.name()
                    )));
                }
            }
        }
        for (star, row) in &self.brightness {
            if row.len() != 12 {
                return Err(EngineError::ConfigurationConflict(format!(
                    "brightness for {} needs 12 entries, got {}",
                    star.name(),
                    row.len()
                )));
            }
        }
        Ok(())
    }

    /// Parse a TOML document.
    ///
    /// ```toml
    /// yearDivide = "normal"
    /// algorithm = "zhongzhou"
    ///
    /// [mutagens]
    /// "庚" = ["太阳", "武曲", "天同", "太阴"]
    ///
    /// [brightness]
    /// "贪狼" = ["旺", "旺", "旺", "利", "庙", "陷", "陷", "庙", "平", "平", "旺", "陷"]
    /// ```
    ///
    /// Names may be written in any supported locale or as keys; an empty
    /// brightness entry means "no rating".
    pub fn from_toml_str(text: &str) -> Result<Self, EngineError> {
        let file: ConfigFile = toml::from_str(text)?;
        let mut config = Self::default();
        if let Some(v) = file.year_divide {
            config.year_divide = parse_year_divide(&v)?;
        }
        if let Some(v) = file.horoscope_divide {
            config.horoscope_divide = parse_year_divide(&v)?;
        }
        if let Some(v) = file.age_divide {
            config.age_divide = match v.as_str() {
                "normal" => AgeDivide::Normal,
                "birthday" => AgeDivide::Birthday,
                _ => return Err(conflict("ageDivide", &v)),
            };
        }
        if let Some(v) = file.day_divide {
            config.day_divide = match v.as_str() {
                "forward" => DayDivide::Forward,
                "current" => DayDivide::Current,
                _ => return Err(conflict("dayDivide", &v)),
            };
        }
        if let Some(v) = file.algorithm {
            config.algorithm = match v.as_str() {
                "default" => Algorithm::Default,
                "zhongzhou" => Algorithm::Zhongzhou,
                _ => return Err(conflict("algorithm", &v)),
            };
        }
        for (stem, stars) in file.mutagens {
            let stem = parse_stem(&stem).ok_or_else(|| conflict("mutagens stem", &stem))?;
            let stars = stars
                .iter()
                .map(|s| parse_star(s).ok_or_else(|| conflict("mutagens star", s)))
                .collect::<Result<Vec<_>, _>>()?;
            config.mutagens.insert(stem, stars);
        }
        for (star, row) in file.brightness {
            let star = parse_star(&star).ok_or_else(|| conflict("brightness star", &star))?;
            let row = row
                .iter()
                .map(|b| {
                    if b.trim().is_empty() {
                        Ok(None)
                    } else {
                        parse_brightness(b)
                            .map(Some)
                            .ok_or_else(|| conflict("brightness", b))
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            config.brightness.insert(star, row);
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConfigFile {
    year_divide: Option<String>,
    horoscope_divide: Option<String>,
    age_divide: Option<String>,
    day_divide: Option<String>,
    algorithm: Option<String>,
    #[serde(default)]
    mutagens: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    brightness: BTreeMap<String, Vec<String>>,
}

fn conflict(field: &str, value: &str) -> EngineError {
    EngineError::ConfigurationConflict(format!("unknown {field} '{value}'"))
}

fn parse_year_divide(value: &str) -> Result<YearDivide, EngineError> {
    match value {
        "normal" => Ok(YearDivide::Normal),
        "exact" => Ok(YearDivide::Exact),
        _ => Err(conflict("year divide", value)),
    }
}

/// Mutagen and brightness tables with overrides applied.
#[derive(Debug, Clone, PartialEq)]
pub struct StarTables {
    mutagens: [MutagenRow; 10],
    brightness: HashMap<StarName, BrightnessRow>,
}

impl StarTables {
    /// Resolve a validated configuration.
    pub fn from_config(config: &ChartConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let mut mutagens = ALL_STEMS.map(default_mutagens);
        for (stem, stars) in &config.mutagens {
            let row: MutagenRow = stars.as_slice().try_into().map_err(|_| {
                EngineError::ConfigurationConflict(format!("mutagens for {}", stem.name()))
            })?;
            log::warn!(
                "mutagen override for {}: {:?} replaces {:?}",
                stem.name(),
                row.map(StarName::name),
                mutagens[stem.index() as usize].map(StarName::name)
            );
            mutagens[stem.index() as usize] = row;
        }
        let mut brightness = HashMap::new();
        for (star, row) in &config.brightness {
            let row: BrightnessRow = row.as_slice().try_into().map_err(|_| {
                EngineError::ConfigurationConflict(format!("brightness for {}", star.name()))
            })?;
            log::warn!("brightness override replaces the table for {}", star.name());
            brightness.insert(*star, row);
        }
        Ok(Self {
            mutagens,
            brightness,
        })
    }

    /// The four transformed stars of a stem, 禄 first.
    pub fn mutagens(&self, stem: HeavenlyStem) -> MutagenRow {
        self.mutagens[stem.index() as usize]
    }

    /// Brightness of a star in a palace slot.
    pub fn brightness(&self, star: StarName, slot: usize) -> Option<Brightness> {
        match self.brightness.get(&star) {
            Some(row) => row[slot % 12],
            None => default_brightness(star).and_then(|row| row[slot % 12]),
        }
    }
}

impl Default for StarTables {
    fn default() -> Self {
        Self {
            mutagens: ALL_STEMS.map(default_mutagens),
            brightness: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ChartConfig::default();
        assert_eq!(c.year_divide, YearDivide::Exact);
        assert_eq!(c.horoscope_divide, YearDivide::Exact);
        assert_eq!(c.age_divide, AgeDivide::Normal);
        assert_eq!(c.day_divide, DayDivide::Forward);
        assert_eq!(c.algorithm, Algorithm::Default);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder() {
        let c = ChartConfig::default()
            .with_year_divide(YearDivide::Normal)
            .with_algorithm(Algorithm::Zhongzhou)
            .with_day_divide(DayDivide::Current);
        assert_eq!(c.year_divide, YearDivide::Normal);
        assert_eq!(c.algorithm, Algorithm::Zhongzhou);
        assert_eq!(c.day_divide, DayDivide::Current);
    }

    #[test]
    fn toml_round() {
        let c = ChartConfig::from_toml_str(
            r#"
            yearDivide = "normal"
            ageDivide = "birthday"
            algorithm = "zhongzhou"

            [mutagens]
            "庚" = ["太阳", "武曲", "天同", "太阴"]

            [brightness]
            "贪狼" = ["旺", "旺", "旺", "利", "庙", "陷", "陷", "庙", "平", "平", "旺", ""]
            "#,
        )
        .unwrap();
        assert_eq!(c.year_divide, YearDivide::Normal);
        assert_eq!(c.age_divide, AgeDivide::Birthday);
        assert_eq!(c.algorithm, Algorithm::Zhongzhou);
        assert_eq!(
            c.mutagens[&HeavenlyStem::Geng],
            vec![
                StarName::Taiyang,
                StarName::Wuqu,
                StarName::Tiantong,
                StarName::Taiyin
            ]
        );
        let row = &c.brightness[&StarName::Tanlang];
        assert_eq!(row[4], Some(Brightness::Miao));
        assert_eq!(row[11], None);

        let tables = StarTables::from_config(&c).unwrap();
        assert_eq!(tables.mutagens(HeavenlyStem::Geng)[2], StarName::Tiantong);
        assert_eq!(tables.brightness(StarName::Tanlang, 4), Some(Brightness::Miao));
    }

    #[test]
    fn toml_accepts_keys() {
        let c = ChartConfig::from_toml_str(
            r#"
            [mutagens]
            geng = ["taiyangMaj", "wuquMaj", "taiyinMaj", "tiantongMaj"]
            "#,
        )
        .unwrap();
        assert_eq!(c.mutagens[&HeavenlyStem::Geng][3], StarName::Tiantong);
    }

    #[test]
    fn conflicts() {
        let bad_count = ChartConfig::default()
            .with_mutagens(HeavenlyStem::Jia, vec![StarName::Ziwei, StarName::Tianji]);
        assert!(matches!(
            bad_count.validate(),
            Err(EngineError::ConfigurationConflict(_))
        ));
        let repeated = ChartConfig::default().with_mutagens(
            HeavenlyStem::Jia,
            vec![
                StarName::Ziwei,
                StarName::Ziwei,
                StarName::Tianji,
                StarName::Wuqu,
            ],
        );
        assert!(repeated.validate().is_err());
        let short_row =
            ChartConfig::default().with_brightness(StarName::Ziwei, vec![None; 11]);
        assert!(StarTables::from_config(&short_row).is_err());

        for text in [
            "yearDivide = \"lunar\"",
            "unknownKey = 1",
            "[mutagens]\n\"甲\" = [\"紫微\", \"天机\", \"太阳\", \"nope\"]",
            "[brightness]\n\"nope\" = []",
            "[mutagens]\n\"X\" = []",
        ] {
            assert!(
                matches!(
                    ChartConfig::from_toml_str(text),
                    Err(EngineError::ConfigurationConflict(_))
                ),
                "{text}"
            );
        }
    }
}
