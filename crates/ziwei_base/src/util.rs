//! Cyclic index helpers.
//!
//! Palace slots are counted from the 寅 branch: slot 0 = 寅, slot 11 = 丑.

use ziwei_calendar::EarthlyBranch;

/// Wrap an index into `0..12`.
pub const fn fix_index(i: i64) -> usize {
    i.rem_euclid(12) as usize
}

/// Wrap an index into `0..modulus`.
pub const fn fix_index_by(i: i64, modulus: i64) -> usize {
    i.rem_euclid(modulus) as usize
}

/// Palace slot holding a branch.
pub const fn branch_slot(branch: EarthlyBranch) -> usize {
    fix_index(branch.index() as i64 - EarthlyBranch::Yin.index() as i64)
}

/// Branch sitting at a palace slot.
pub const fn slot_branch(slot: usize) -> EarthlyBranch {
    EarthlyBranch::from_index(slot as i64 + EarthlyBranch::Yin.index() as i64)
}

/// Slot `n` steps from `slot`, wrapped.
pub const fn offset_slot(slot: usize, n: i64) -> usize {
    fix_index(slot as i64 + n)
}
