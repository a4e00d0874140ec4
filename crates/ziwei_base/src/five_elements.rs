//! Five-elements class (五行局) from the soul palace's stem and branch.
//!
//! Stem number: 甲乙=1 丙丁=2 戊己=3 庚辛=4 壬癸=5. Branch number: 子丑午未=1,
//! 寅卯申酉=2, 辰巳戌亥=3. Their sum reduced into 1..=5 picks
//! wood, metal, water, fire, earth.

use ziwei_calendar::{EarthlyBranch, HeavenlyStem};

/// The five bureaus; the number is the divisor used to place 紫微.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiveElementsClass {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

pub const ALL_FIVE_ELEMENTS_CLASSES: [FiveElementsClass; 5] = [
    FiveElementsClass::Water2,
    FiveElementsClass::Wood3,
    FiveElementsClass::Metal4,
    FiveElementsClass::Earth5,
    FiveElementsClass::Fire6,
];

const SUM_TABLE: [FiveElementsClass; 5] = [
    FiveElementsClass::Wood3,
    FiveElementsClass::Metal4,
    FiveElementsClass::Water2,
    FiveElementsClass::Fire6,
    FiveElementsClass::Earth5,
];

impl FiveElementsClass {
    /// Classify a stem-branch pair. Total over all 120 combinations.
    pub const fn of(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        let stem_number = stem.index() / 2 + 1;
        let branch_number = (branch.index() % 6) / 2 + 1;
        let sum = (stem_number + branch_number - 1) % 5;
        SUM_TABLE[sum as usize]
    }

    /// Bureau number (2..=6).
    pub const fn bureau(self) -> u32 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Water2 => "water2nd",
            Self::Wood3 => "wood3rd",
            Self::Metal4 => "metal4th",
            Self::Earth5 => "earth5th",
            Self::Fire6 => "fire6th",
        }
    }
}
