//! ZiWei Doushu placement rules.
//!
//! Pure functions from calendar facts to palace slots. Slot 0 is the 寅
//! palace; every index is wrapped into `0..12`.
//!
//! This crate provides:
//! - The twelve palace names, soul/body location and palace stems
//! - Five-elements bureaus and the 紫微 search
//! - Major, minor and adjective star placement
//! - Brightness and the four mutagens
//! - The 长生, 博士, 将前 and 岁前 rings
//! - Decadal ranges, small-limit ages and period stars

pub mod adjective;
pub mod brightness;
pub mod decadal;
pub mod decorative;
pub mod five_elements;
pub mod horoscope_star;
pub mod location;
pub mod major;
pub mod minor;
pub mod mutagen;
pub mod palace;
pub mod star;
pub mod types;
pub mod util;

pub use adjective::{AdjectiveStarInput, place_adjective_stars};
pub use brightness::{ALL_BRIGHTNESS, Brightness, BrightnessRow, default_brightness};
pub use decadal::{AgeDivide, CHILDHOOD_PALACES, Decadal, age_start, ages, decadals, nominal_age};
pub use decorative::{
    ALL_BOSHI12, ALL_CHANGSHENG12, ALL_JIANGQIAN12, ALL_SUIQIAN12, Boshi12, Changsheng12,
    Jiangqian12, Suiqian12, boshi12, changsheng12, jiangqian12, runs_forward, suiqian12,
};
pub use five_elements::{ALL_FIVE_ELEMENTS_CLASSES, FiveElementsClass};
pub use horoscope_star::{HoroscopeStar, HoroscopeStarKind, place_horoscope_stars};
pub use location::{YearlyStarInput, tianfu_index, ziwei_day, ziwei_index};
pub use major::place_major_stars;
pub use minor::{MinorStarInput, place_minor_stars};
pub use mutagen::{ALL_MUTAGENS, Mutagen, MutagenRow, default_mutagens, mutagen_in};
pub use palace::{
    ALL_PALACE_NAMES, PalaceName, SoulBody, body_master, month_index, palace_names,
    palace_stems, slot_of_name, soul_and_body, soul_master,
};
pub use star::{ALL_STARS, MAJOR_STARS, StarKind, StarName, StarPlacement};
pub use types::{ALL_SCOPES, Algorithm, Gender, Scope};
pub use util::{branch_slot, fix_index, slot_branch};
