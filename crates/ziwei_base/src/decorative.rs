//! The four twelve-step rings of spirits (长生, 博士, 将前, 岁前).
//!
//! Each ring starts at a fixed palace and runs forward or backward through
//! all twelve slots.

use ziwei_calendar::EarthlyBranch as Eb;
use ziwei_calendar::EarthlyBranch;

use crate::five_elements::FiveElementsClass;
use crate::types::Gender;
use crate::util::{branch_slot, fix_index};

macro_rules! ring_enum {
    ($(#[$meta:meta])* $name:ident, $all:ident, [$(($variant:ident, $cn:literal, $key:literal)),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        pub const $all: [$name; 12] = [$($name::$variant),+];

        impl $name {
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $cn),+
                }
            }

            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            /// Position in the ring, 0-based.
            pub const fn index(self) -> usize {
                self as usize
            }
        }
    };
}

ring_enum!(
    /// 长生十二神.
    Changsheng12,
    ALL_CHANGSHENG12,
    [
        (Changsheng, "长生", "changsheng"),
        (Muyu, "沐浴", "muyu"),
        (Guandai, "冠带", "guandai"),
        (Linguan, "临官", "linguan"),
        (Diwang, "帝旺", "diwang"),
        (Shuai, "衰", "shuai"),
        (Bing, "病", "bing"),
        (Si, "死", "si"),
        (Mu, "墓", "mu"),
        (Jue, "绝", "jue"),
        (Tai, "胎", "tai"),
        (Yang, "养", "yang"),
    ]
);

ring_enum!(
    /// 博士十二神.
    Boshi12,
    ALL_BOSHI12,
    [
        (Boshi, "博士", "boshi"),
        (Lishi, "力士", "lishi"),
        (Qinglong, "青龙", "qinglong"),
        (Xiaohao, "小耗", "xiaohao"),
        (Jiangjun, "将军", "jiangjun"),
        (Zhoushu, "奏书", "zhoushu"),
        (Feilian, "飞廉", "feilian"),
        (Xishen, "喜神", "xishen"),
        (Bingfu, "病符", "bingfu"),
        (Dahao, "大耗", "dahao"),
        (Fubing, "伏兵", "fubing"),
        (Guanfu, "官府", "guanfu"),
    ]
);

ring_enum!(
    /// 将前十二神.
    Jiangqian12,
    ALL_JIANGQIAN12,
    [
        (Jiangxing, "将星", "jiangxing"),
        (Panan, "攀鞍", "panan"),
        (Suiyi, "岁驿", "suiyi"),
        (Xishen, "息神", "xishen"),
        (Huagai, "华盖", "huagai"),
        (Jiesha, "劫煞", "jiesha"),
        (Zhaisha, "灾煞", "zhaisha"),
        (Tiansha, "天煞", "tiansha"),
        (Zhibei, "指背", "zhibei"),
        (Xianchi, "咸池", "xianchi"),
        (Yuesha, "月煞", "yuesha"),
        (Wangshen, "亡神", "wangshen"),
    ]
);

ring_enum!(
    /// 岁前十二神.
    Suiqian12,
    ALL_SUIQIAN12,
    [
        (Suijian, "岁建", "suijian"),
        (Huiqi, "晦气", "huiqi"),
        (Sangmen, "丧门", "sangmen"),
        (Guansuo, "贯索", "guansuo"),
        (Guanfu, "官符", "guanfu"),
        (Xiaohao, "小耗", "xiaohao"),
        (Dahao, "大耗", "dahao"),
        (Longde, "龙德", "longde"),
        (Baihu, "白虎", "baihu"),
        (Tiande, "天德", "tiande"),
        (Diaoke, "吊客", "diaoke"),
        (Bingfu, "病符", "bingfu"),
    ]
);

/// Rings run forward when the gender and the year branch share polarity.
pub fn runs_forward(gender: Gender, year_branch: EarthlyBranch) -> bool {
    gender.yin_yang() == year_branch.yin_yang()
}

fn ring<T: Copy>(all: &[T; 12], start: usize, forward: bool) -> [T; 12] {
    let mut out = *all;
    for (i, item) in all.iter().enumerate() {
        let step = if forward { i as i64 } else { -(i as i64) };
        out[fix_index(start as i64 + step)] = *item;
    }
    out
}

/// Slot where 长生 sits for a bureau.
pub const fn changsheng_start(class: FiveElementsClass) -> usize {
    branch_slot(match class {
        FiveElementsClass::Water2 | FiveElementsClass::Earth5 => Eb::Shen,
        FiveElementsClass::Wood3 => Eb::Hai,
        FiveElementsClass::Metal4 => Eb::Si,
        FiveElementsClass::Fire6 => Eb::Yin,
    })
}

/// 长生 ring indexed by palace slot.
pub fn changsheng12(class: FiveElementsClass, forward: bool) -> [Changsheng12; 12] {
    ring(&ALL_CHANGSHENG12, changsheng_start(class), forward)
}

/// 博士 ring, starting on 禄存.
pub fn boshi12(lucun: usize, forward: bool) -> [Boshi12; 12] {
    ring(&ALL_BOSHI12, lucun, forward)
}

/// 岁前 ring, 岁建 on the year branch, always forward.
pub fn suiqian12(year_branch: EarthlyBranch) -> [Suiqian12; 12] {
    ring(&ALL_SUIQIAN12, branch_slot(year_branch), true)
}

/// 将前 ring, 将星 on the triad's cardinal branch, always forward.
pub fn jiangqian12(year_branch: EarthlyBranch) -> [Jiangqian12; 12] {
    let start = branch_slot(match year_branch {
        Eb::Yin | Eb::Wu | Eb::Xu => Eb::Wu,
        Eb::Shen | Eb::Zi | Eb::Chen => Eb::Zi,
        Eb::Si | Eb::You | Eb::Chou => Eb::You,
        Eb::Hai | Eb::Mao | Eb::Wei => Eb::Mao,
    });
    ring(&ALL_JIANGQIAN12, start, true)
}
