//! The 14 major stars.
//!
//! The 紫微 group walks backward from 紫微 and the 天府 group forward from
//! 天府; gaps in the sequences are empty steps.

use crate::location::tianfu_index;
use crate::star::{StarName, StarPlacement};
use crate::util::fix_index;

const ZIWEI_GROUP: [Option<StarName>; 9] = [
    Some(StarName::Ziwei),
    Some(StarName::Tianji),
    None,
    Some(StarName::Taiyang),
    Some(StarName::Wuqu),
    Some(StarName::Tiantong),
    None,
    None,
    Some(StarName::Lianzhen),
];

const TIANFU_GROUP: [Option<StarName>; 11] = [
    Some(StarName::Tianfu),
    Some(StarName::Taiyin),
    Some(StarName::Tanlang),
    Some(StarName::Jumen),
    Some(StarName::Tianxiang),
    Some(StarName::Tianliang),
    Some(StarName::Qisha),
    None,
    None,
    None,
    Some(StarName::Pojun),
];

/// Place all 14 major stars from the 紫微 slot.
pub fn place_major_stars(ziwei: usize) -> Vec<StarPlacement> {
    let tianfu = tianfu_index(ziwei);
    let backward = ZIWEI_GROUP.iter().enumerate().filter_map(|(i, star)| {
        star.map(|s| StarPlacement::new(s, fix_index(ziwei as i64 - i as i64)))
    });
    let forward = TIANFU_GROUP.iter().enumerate().filter_map(|(i, star)| {
        star.map(|s| StarPlacement::new(s, fix_index(tianfu as i64 + i as i64)))
    });
    backward.chain(forward).collect()
}
