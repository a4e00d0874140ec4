//! Adjective (杂耀) star placement.

use ziwei_calendar::{EarthlyBranch, TimeIndex};

use crate::location::{
    YearlyStarInput, daily_star_indices, luan_xi, monthly_star_indices, taifu_fenggao,
    yearly_star_indices,
};
use crate::star::{StarName, StarPlacement};
use crate::types::Algorithm;

/// Inputs for [`place_adjective_stars`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjectiveStarInput {
    pub month_index: usize,
    pub time: TimeIndex,
    pub lunar_day: u32,
    /// Year branch driving 红鸾 and 天喜.
    pub luan_xi_branch: EarthlyBranch,
    /// Year pillar, soul and body for the remaining year-driven stars.
    pub yearly: YearlyStarInput,
}

/// Place the adjective stars.
///
/// The default algorithm emits 截路 and 空亡; 中州 emits 截空, 劫杀 and
/// 大耗 in their place.
pub fn place_adjective_stars(input: AdjectiveStarInput) -> Vec<StarPlacement> {
    let (hongluan, tianxi) = luan_xi(input.luan_xi_branch);
    let (taifu, fenggao) = taifu_fenggao(input.time);
    let daily = daily_star_indices(input.month_index, input.time, input.lunar_day);
    let monthly = monthly_star_indices(input.month_index);
    let yearly = yearly_star_indices(input.yearly);

    let mut placed = vec![
        StarPlacement::new(StarName::Hongluan, hongluan),
        StarPlacement::new(StarName::Tianxi, tianxi),
        StarPlacement::new(StarName::Tianyao, monthly.tianyao),
        StarPlacement::new(StarName::Xianchi, yearly.xianchi),
        StarPlacement::new(StarName::Jieshen, monthly.jieshen),
        StarPlacement::new(StarName::Nianjie, yearly.nianjie),
        StarPlacement::new(StarName::Santai, daily.santai),
        StarPlacement::new(StarName::Bazuo, daily.bazuo),
        StarPlacement::new(StarName::Enguang, daily.enguang),
        StarPlacement::new(StarName::Tiangui, daily.tiangui),
        StarPlacement::new(StarName::Longchi, yearly.longchi),
        StarPlacement::new(StarName::Fengge, yearly.fengge),
        StarPlacement::new(StarName::Tiancai, yearly.tiancai),
        StarPlacement::new(StarName::Tianshou, yearly.tianshou),
        StarPlacement::new(StarName::Taifu, taifu),
        StarPlacement::new(StarName::Fenggao, fenggao),
        StarPlacement::new(StarName::Tianwu, monthly.tianwu),
        StarPlacement::new(StarName::Huagai, yearly.huagai),
        StarPlacement::new(StarName::Tianguan, yearly.tianguan),
        StarPlacement::new(StarName::TianfuAdj, yearly.tianfu),
        StarPlacement::new(StarName::Tianchu, yearly.tianchu),
        StarPlacement::new(StarName::TianyueAdj, monthly.tianyue),
        StarPlacement::new(StarName::Tiande, yearly.tiande),
        StarPlacement::new(StarName::Yuede, yearly.yuede),
        StarPlacement::new(StarName::Tiankong, yearly.tiankong),
        StarPlacement::new(StarName::Xunkong, yearly.xunkong),
    ];
    match input.yearly.algorithm {
        Algorithm::Zhongzhou => placed.extend([
            StarPlacement::new(StarName::Jiekong, yearly.jiekong),
            StarPlacement::new(StarName::Jiesha, yearly.jiesha),
            StarPlacement::new(StarName::Dahao, yearly.dahao),
        ]),
        Algorithm::Default => placed.extend([
            StarPlacement::new(StarName::Jielu, yearly.jielu),
            StarPlacement::new(StarName::Kongwang, yearly.kongwang),
        ]),
    }
    placed.extend([
        StarPlacement::new(StarName::Guchen, yearly.guchen),
        StarPlacement::new(StarName::Guasu, yearly.guasu),
        StarPlacement::new(StarName::Feilian, yearly.feilian),
        StarPlacement::new(StarName::Posui, yearly.posui),
        StarPlacement::new(StarName::Tianxing, monthly.tianxing),
        StarPlacement::new(StarName::Yinsha, monthly.yinsha),
        StarPlacement::new(StarName::Tianku, yearly.tianku),
        StarPlacement::new(StarName::Tianxu, yearly.tianxu),
        StarPlacement::new(StarName::Tianshi, yearly.tianshi),
        StarPlacement::new(StarName::Tianshang, yearly.tianshang),
    ]);
    placed
}
