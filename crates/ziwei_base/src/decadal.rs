//! Decadal (大限) ranges and small-limit (小限) ages.

use ziwei_calendar::EarthlyBranch as Eb;
use ziwei_calendar::{EarthlyBranch, HeavenlyStem, LunarDate};

use crate::five_elements::FiveElementsClass;
use crate::palace::PalaceName;
use crate::types::Gender;
use crate::util::{branch_slot, fix_index, slot_branch};

/// Palaces governing the years before the first decadal.
pub const CHILDHOOD_PALACES: [PalaceName; 6] = [
    PalaceName::Soul,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Spouse,
    PalaceName::Spirit,
    PalaceName::Career,
];

/// One palace's ten-year period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decadal {
    /// Inclusive nominal-age range.
    pub range: (u32, u32),
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Decadal {
    pub const fn contains(&self, age: u32) -> bool {
        self.range.0 <= age && age <= self.range.1
    }
}

/// Decadals indexed by palace slot.
///
/// The first decadal starts at the soul palace at the bureau's age, then
/// runs forward or backward ten years per palace.
pub fn decadals(
    soul_index: usize,
    class: FiveElementsClass,
    year_stem: HeavenlyStem,
    forward: bool,
) -> [Decadal; 12] {
    let tiger = year_stem.tiger_start();
    let bureau = class.bureau();
    let mut out = [Decadal {
        range: (0, 0),
        stem: tiger,
        branch: Eb::Yin,
    }; 12];
    for i in 0..12u32 {
        let step = if forward { i as i64 } else { -(i as i64) };
        let idx = fix_index(soul_index as i64 + step);
        let start = bureau + 10 * i;
        out[idx] = Decadal {
            range: (start, start + 9),
            stem: tiger.offset(idx as i64),
            branch: slot_branch(idx),
        };
    }
    out
}

/// Slot holding age 1 of the small limit, by year-branch triad.
pub const fn age_start(year_branch: EarthlyBranch) -> usize {
    branch_slot(match year_branch {
        Eb::Yin | Eb::Wu | Eb::Xu => Eb::Chen,
        Eb::Shen | Eb::Zi | Eb::Chen => Eb::Xu,
        Eb::Si | Eb::You | Eb::Chou => Eb::Wei,
        Eb::Hai | Eb::Mao | Eb::Wei => Eb::Chou,
    })
}

/// Small-limit ages indexed by palace slot, ten per palace.
///
/// Males count forward from the start slot and females backward.
pub fn ages(year_branch: EarthlyBranch, gender: Gender) -> [[u32; 10]; 12] {
    let start = age_start(year_branch) as i64;
    let mut out = [[0u32; 10]; 12];
    for i in 0..12i64 {
        let idx = match gender {
            Gender::Male => fix_index(start + i),
            Gender::Female => fix_index(start - i),
        };
        for (j, age) in out[idx].iter_mut().enumerate() {
            *age = 12 * j as u32 + i as u32 + 1;
        }
    }
    out
}

/// When the nominal age ticks over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgeDivide {
    /// At the lunar new year.
    #[default]
    Normal,
    /// On the lunar birthday.
    Birthday,
}

impl AgeDivide {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Birthday => "birthday",
        }
    }
}

/// Nominal (虚岁) age at `target`, born on `birth`. May be zero or negative
/// for targets before the birth year.
pub fn nominal_age(birth: &LunarDate, target: &LunarDate, divide: AgeDivide) -> i32 {
    let mut age = target.year - birth.year;
    match divide {
        AgeDivide::Normal => age += 1,
        AgeDivide::Birthday => {
            let after_birthday = (target.month == birth.month && target.day > birth.day)
                || target.month > birth.month;
            if after_birthday {
                age += 1;
            }
        }
    }
    age
}
