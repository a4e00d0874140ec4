//! The 14 minor stars: six soft, six tough, 禄存 and 天马.

use ziwei_calendar::{EarthlyBranch, HeavenlyStem, TimeIndex};

use crate::location::{chang_qu, huo_ling, kong_jie, kui_yue, lu_yang_tuo_ma, zuo_you};
use crate::star::{StarName, StarPlacement};

/// Inputs for [`place_minor_stars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinorStarInput {
    /// Month slot after the leap adjustment (0 = first month).
    pub month_index: usize,
    pub time: TimeIndex,
    pub year_stem: HeavenlyStem,
    pub year_branch: EarthlyBranch,
}

/// Place the minor stars, pairs kept together.
pub fn place_minor_stars(input: MinorStarInput) -> Vec<StarPlacement> {
    let (zuo, you) = zuo_you(input.month_index as u32 + 1);
    let (chang, qu) = chang_qu(input.time);
    let (kui, yue) = kui_yue(input.year_stem);
    let (huo, ling) = huo_ling(input.year_branch, input.time);
    let (kong, jie) = kong_jie(input.time);
    let lytm = lu_yang_tuo_ma(input.year_stem, input.year_branch);

    vec![
        StarPlacement::new(StarName::Zuofu, zuo),
        StarPlacement::new(StarName::Youbi, you),
        StarPlacement::new(StarName::Wenchang, chang),
        StarPlacement::new(StarName::Wenqu, qu),
        StarPlacement::new(StarName::Tiankui, kui),
        StarPlacement::new(StarName::Tianyue, yue),
        StarPlacement::new(StarName::Lucun, lytm.lu),
        StarPlacement::new(StarName::Tianma, lytm.ma),
        StarPlacement::new(StarName::Dikong, kong),
        StarPlacement::new(StarName::Dijie, jie),
        StarPlacement::new(StarName::Huoxing, huo),
        StarPlacement::new(StarName::Lingxing, ling),
        StarPlacement::new(StarName::Qingyang, lytm.yang),
        StarPlacement::new(StarName::Tuoluo, lytm.tuo),
    ]
}
