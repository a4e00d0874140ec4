//! Palace names, the soul/body locator and the soul/body masters.
//!
//! 安命身宫诀: start at 寅 as the first month, count forward to the birth
//! month, then backward by the hour branch for the soul palace and forward
//! by the hour branch for the body palace. Palace stems follow the Five
//! Tigers rule from the year stem.

use ziwei_calendar::{EarthlyBranch, HeavenlyStem, TimeIndex};

use crate::star::StarName;
use crate::util::{branch_slot, fix_index, fix_index_by, slot_branch};

/// The 12 palaces, in naming order from the soul palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PalaceName {
    Soul,
    Parents,
    Spirit,
    Property,
    Career,
    Friends,
    Surface,
    Health,
    Wealth,
    Children,
    Spouse,
    Siblings,
}

/// Naming order: the slot `i` steps forward from the soul palace carries
/// `ALL_PALACE_NAMES[i]`.
pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Soul,
    PalaceName::Parents,
    PalaceName::Spirit,
    PalaceName::Property,
    PalaceName::Career,
    PalaceName::Friends,
    PalaceName::Surface,
    PalaceName::Health,
    PalaceName::Wealth,
    PalaceName::Children,
    PalaceName::Spouse,
    PalaceName::Siblings,
];

impl PalaceName {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Soul => "命宫",
            Self::Parents => "父母",
            Self::Spirit => "福德",
            Self::Property => "田宅",
            Self::Career => "官禄",
            Self::Friends => "仆役",
            Self::Surface => "迁移",
            Self::Health => "疾厄",
            Self::Wealth => "财帛",
            Self::Children => "子女",
            Self::Spouse => "夫妻",
            Self::Siblings => "兄弟",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Soul => "soulPalace",
            Self::Parents => "parentsPalace",
            Self::Spirit => "spiritPalace",
            Self::Property => "propertyPalace",
            Self::Career => "careerPalace",
            Self::Friends => "friendsPalace",
            Self::Surface => "surfacePalace",
            Self::Health => "healthPalace",
            Self::Wealth => "wealthPalace",
            Self::Children => "childrenPalace",
            Self::Spouse => "spousePalace",
            Self::Siblings => "siblingsPalace",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Names for all 12 slots when the anchor (命宫) sits at `anchor_slot`.
pub fn palace_names(anchor_slot: usize) -> [PalaceName; 12] {
    std::array::from_fn(|slot| ALL_PALACE_NAMES[fix_index(slot as i64 - anchor_slot as i64)])
}

/// Slot carrying `name` when the anchor sits at `anchor_slot`.
pub const fn slot_of_name(anchor_slot: usize, name: PalaceName) -> usize {
    fix_index(anchor_slot as i64 + name.index() as i64)
}

/// Month slot (0 = 寅 = first month) after the leap adjustment.
///
/// With `fix_leap`, days 16+ of a leap month count as the next month. The
/// late zi hour is excluded from that shift.
pub fn month_index(
    lunar_month: u32,
    is_leap: bool,
    lunar_day: u32,
    time: TimeIndex,
    fix_leap: bool,
) -> usize {
    let shift = is_leap && fix_leap && lunar_day > 15 && !time.is_late_zi();
    fix_index(lunar_month as i64 - 1 + i64::from(shift))
}

/// Soul and body palace location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoulBody {
    pub soul_index: usize,
    pub body_index: usize,
    pub soul_stem: HeavenlyStem,
    pub soul_branch: EarthlyBranch,
}

/// Body offsets from the soul palace when the chart is re-anchored.
const ANCHORED_BODY_OFFSET: [i64; 13] = [0, 2, 4, 6, 8, 10, 0, 2, 4, 6, 8, 10, 0];

/// Locate the soul and body palaces.
///
/// `anchor` pins the soul palace to a branch (earth/human charts); the body
/// palace then follows a fixed offset per time slot.
pub fn soul_and_body(
    month_index: usize,
    time: TimeIndex,
    year_stem: HeavenlyStem,
    anchor: Option<EarthlyBranch>,
) -> SoulBody {
    let hour = time.branch().index() as i64;
    let (soul_index, body_index) = match anchor {
        Some(branch) => {
            let soul = branch_slot(branch);
            let body = fix_index(ANCHORED_BODY_OFFSET[time.get() as usize] + soul as i64);
            (soul, body)
        }
        None => (
            fix_index(month_index as i64 - hour),
            fix_index(month_index as i64 + hour),
        ),
    };
    let start = year_stem.tiger_start();
    let soul_stem = HeavenlyStem::from_index(
        fix_index_by(start.index() as i64 + soul_index as i64, 10) as i64,
    );
    SoulBody {
        soul_index,
        body_index,
        soul_stem,
        soul_branch: slot_branch(soul_index),
    }
}

/// Stem of every palace slot for a year stem (Five Tigers from 寅).
pub fn palace_stems(year_stem: HeavenlyStem) -> [HeavenlyStem; 12] {
    let start = year_stem.tiger_start();
    std::array::from_fn(|slot| start.offset(slot as i64))
}

/// 命主, by the soul palace's branch.
pub const fn soul_master(soul_branch: EarthlyBranch) -> StarName {
    match soul_branch {
        EarthlyBranch::Zi => StarName::Tanlang,
        EarthlyBranch::Chou | EarthlyBranch::Hai => StarName::Jumen,
        EarthlyBranch::Yin | EarthlyBranch::Xu => StarName::Lucun,
        EarthlyBranch::Mao | EarthlyBranch::You => StarName::Wenqu,
        EarthlyBranch::Chen | EarthlyBranch::Shen => StarName::Lianzhen,
        EarthlyBranch::Si | EarthlyBranch::Wei => StarName::Wuqu,
        EarthlyBranch::Wu => StarName::Pojun,
    }
}

/// 身主, by the year branch.
pub const fn body_master(year_branch: EarthlyBranch) -> StarName {
    match year_branch {
        EarthlyBranch::Zi | EarthlyBranch::Wu => StarName::Huoxing,
        EarthlyBranch::Chou | EarthlyBranch::Wei => StarName::Tianxiang,
        EarthlyBranch::Yin | EarthlyBranch::Shen => StarName::Tianliang,
        EarthlyBranch::Mao | EarthlyBranch::You => StarName::Tiantong,
        EarthlyBranch::Chen | EarthlyBranch::Xu => StarName::Wenchang,
        EarthlyBranch::Si | EarthlyBranch::Hai => StarName::Tianji,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(i: u8) -> TimeIndex {
        TimeIndex::new(i).unwrap()
    }

    #[test]
    fn names_rotate_from_anchor() {
        let names = palace_names(4);
        assert_eq!(names[4], PalaceName::Soul);
        assert_eq!(names[5], PalaceName::Parents);
        assert_eq!(names[3], PalaceName::Siblings);
        assert_eq!(slot_of_name(4, PalaceName::Spirit), 6);
        assert_eq!(names[slot_of_name(4, PalaceName::Wealth)], PalaceName::Wealth);
    }

    #[test]
    fn leap_second_half_shifts_month() {
        assert_eq!(month_index(2, true, 16, t(3), true), 2);
        assert_eq!(month_index(2, true, 15, t(3), true), 1);
        assert_eq!(month_index(2, true, 16, t(3), false), 1);
        assert_eq!(month_index(2, true, 16, t(12), true), 1);
        assert_eq!(month_index(2, false, 20, t(3), true), 1);
    }

    #[test]
    fn reference_soul_body() {
        // 庚辰 year, lunar 7th month, 寅 hour.
        let sb = soul_and_body(6, t(2), HeavenlyStem::Geng, None);
        assert_eq!(sb.soul_index, 4);
        assert_eq!(sb.body_index, 8);
        assert_eq!(sb.soul_branch, EarthlyBranch::Wu);
        assert_eq!(sb.soul_stem, HeavenlyStem::Ren);
    }

    #[test]
    fn anchored_soul() {
        let sb = soul_and_body(6, t(3), HeavenlyStem::Geng, Some(EarthlyBranch::Xu));
        assert_eq!(sb.soul_index, 8);
        assert_eq!(sb.body_index, fix_index(8 + 6));
    }

    #[test]
    fn masters() {
        assert_eq!(soul_master(EarthlyBranch::Wu), StarName::Pojun);
        assert_eq!(body_master(EarthlyBranch::Chen), StarName::Wenchang);
    }
}
