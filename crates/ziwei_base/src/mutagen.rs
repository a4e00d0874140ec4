//! The four transformations (四化) and the default stem table.

use ziwei_calendar::HeavenlyStem;

use crate::star::StarName;

/// 禄, 权, 科, 忌.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutagen {
    Lu,
    Quan,
    Ke,
    Ji,
}

pub const ALL_MUTAGENS: [Mutagen; 4] = [Mutagen::Lu, Mutagen::Quan, Mutagen::Ke, Mutagen::Ji];

impl Mutagen {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "禄",
            Self::Quan => "权",
            Self::Ke => "科",
            Self::Ji => "忌",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Lu => "sihuaLu",
            Self::Quan => "sihuaQuan",
            Self::Ke => "sihuaKe",
            Self::Ji => "sihuaJi",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Stars transformed by a stem, in 禄/权/科/忌 order.
pub type MutagenRow = [StarName; 4];

/// Built-in transformations for a stem.
pub const fn default_mutagens(stem: HeavenlyStem) -> MutagenRow {
    use StarName::*;
    match stem {
        HeavenlyStem::Jia => [Lianzhen, Pojun, Wuqu, Taiyang],
        HeavenlyStem::Yi => [Tianji, Tianliang, Ziwei, Taiyin],
        HeavenlyStem::Bing => [Tiantong, Tianji, Wenchang, Lianzhen],
        HeavenlyStem::Ding => [Taiyin, Tiantong, Tianji, Jumen],
        HeavenlyStem::Wu => [Tanlang, Taiyin, Youbi, Tianji],
        HeavenlyStem::Ji => [Wuqu, Tanlang, Tianliang, Wenqu],
        HeavenlyStem::Geng => [Taiyang, Wuqu, Taiyin, Tiantong],
        HeavenlyStem::Xin => [Jumen, Taiyang, Wenqu, Wenchang],
        HeavenlyStem::Ren => [Tianliang, Ziwei, Zuofu, Wuqu],
        HeavenlyStem::Gui => [Pojun, Jumen, Taiyin, Tanlang],
    }
}

/// Transformation of `star` within a row, if any.
pub fn mutagen_in(row: &MutagenRow, star: StarName) -> Option<Mutagen> {
    row.iter()
        .position(|s| *s == star)
        .map(|i| ALL_MUTAGENS[i])
}
