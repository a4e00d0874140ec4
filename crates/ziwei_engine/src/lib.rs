//! ZiWei Doushu chart and horoscope engine.
//!
//! [`ZiweiEngine`] binds an immutable [`ChartConfig`] and casts natal
//! charts ([`Astrolabe`]) and horoscope periods ([`Horoscope`]) from them.
//! Display strings live in [`i18n`] and [`view`]; computation never sees
//! them.
//!
//! ```no_run
//! use ziwei_engine::{ChartConfig, Gender, Locale, SolarDate, TimeIndex, ZiweiEngine};
//! use ziwei_engine::view::AstrolabeView;
//!
//! let engine = ZiweiEngine::new(ChartConfig::default())?;
//! let date = SolarDate::new(2000, 8, 16)?;
//! let chart = engine.by_solar(date, TimeIndex::new(2)?, Gender::Female, true)?;
//! let view = AstrolabeView::from_astrolabe(&chart, Locale::ZhCn);
//! println!("{}", view.five_elements_class);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analyzer;
pub mod astrolabe;
pub mod config;
pub mod engine;
pub mod error;
pub mod horoscope;
pub mod i18n;
pub mod view;

pub use analyzer::{PalaceRef, SurroundedPalaces};
pub use astrolabe::{AstroType, Astrolabe, Palace, Star};
pub use config::{ChartConfig, DayDivide, StarTables};
pub use engine::{BirthDate, ChartOptions, Transform, ZiweiEngine};
pub use error::EngineError;
pub use horoscope::{AgeItem, Horoscope, HoroscopeItem, PeriodName, YearlyDecStar};
pub use i18n::{ALL_LOCALES, Locale, Localize};
pub use view::{AstrolabeView, HoroscopeView};

pub use ziwei_base::{
    AgeDivide, Algorithm, Brightness, FiveElementsClass, Gender, HoroscopeStar,
    HoroscopeStarKind, Mutagen, PalaceName, Scope, StarKind, StarName,
};
pub use ziwei_calendar::{
    EarthlyBranch, HeavenlyStem, LunarDate, SolarDate, TimeIndex, YearDivide,
};
