//! Star names and categories.
//!
//! Every star the chart can place is a `StarName` variant; display strings
//! come from [`StarName::name`] (simplified Chinese) and the stable
//! [`StarName::key`]. Localized names live in the engine's presentation
//! layer.

/// Star category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarKind {
    /// 主星
    Major,
    /// 吉星 (六吉)
    Soft,
    /// 煞星 (六煞)
    Tough,
    Lucun,
    Tianma,
    /// 桃花星
    Flower,
    /// 解神
    Helper,
    /// 杂曜
    Adjective,
}

impl StarKind {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Soft => "soft",
            Self::Tough => "tough",
            Self::Lucun => "lucun",
            Self::Tianma => "tianma",
            Self::Flower => "flower",
            Self::Helper => "helper",
            Self::Adjective => "adjective",
        }
    }
}

/// Every natal star: 14 major, 14 minor and 41 adjective stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum StarName {
    Ziwei,
    Tianji,
    Taiyang,
    Wuqu,
    Tiantong,
    Lianzhen,
    Tianfu,
    Taiyin,
    Tanlang,
    Jumen,
    Tianxiang,
    Tianliang,
    Qisha,
    Pojun,
    Zuofu,
    Youbi,
    Wenchang,
    Wenqu,
    Tiankui,
    Tianyue,
    Lucun,
    Tianma,
    Dikong,
    Dijie,
    Huoxing,
    Lingxing,
    Qingyang,
    Tuoluo,
    Hongluan,
    Tianxi,
    Tianyao,
    Xianchi,
    Jieshen,
    Santai,
    Bazuo,
    Enguang,
    Tiangui,
    Longchi,
    Fengge,
    Tiancai,
    Tianshou,
    Taifu,
    Fenggao,
    Tianwu,
    Huagai,
    Tianguan,
    TianfuAdj,
    Tianchu,
    TianyueAdj,
    Tiande,
    Yuede,
    Tiankong,
    Xunkong,
    Jielu,
    Kongwang,
    Guchen,
    Guasu,
    Feilian,
    Posui,
    Tianxing,
    Yinsha,
    Tianku,
    Tianxu,
    Tianshi,
    Tianshang,
    Jiekong,
    Jiesha,
    Dahao,
    Nianjie,
}

/// All stars in declaration order.
pub const ALL_STARS: [StarName; 69] = [
    StarName::Ziwei,
    StarName::Tianji,
    StarName::Taiyang,
    StarName::Wuqu,
    StarName::Tiantong,
    StarName::Lianzhen,
    StarName::Tianfu,
    StarName::Taiyin,
    StarName::Tanlang,
    StarName::Jumen,
    StarName::Tianxiang,
    StarName::Tianliang,
    StarName::Qisha,
    StarName::Pojun,
    StarName::Zuofu,
    StarName::Youbi,
    StarName::Wenchang,
    StarName::Wenqu,
    StarName::Tiankui,
    StarName::Tianyue,
    StarName::Lucun,
    StarName::Tianma,
    StarName::Dikong,
    StarName::Dijie,
    StarName::Huoxing,
    StarName::Lingxing,
    StarName::Qingyang,
    StarName::Tuoluo,
    StarName::Hongluan,
    StarName::Tianxi,
    StarName::Tianyao,
    StarName::Xianchi,
    StarName::Jieshen,
    StarName::Santai,
    StarName::Bazuo,
    StarName::Enguang,
    StarName::Tiangui,
    StarName::Longchi,
    StarName::Fengge,
    StarName::Tiancai,
    StarName::Tianshou,
    StarName::Taifu,
    StarName::Fenggao,
    StarName::Tianwu,
    StarName::Huagai,
    StarName::Tianguan,
    StarName::TianfuAdj,
    StarName::Tianchu,
    StarName::TianyueAdj,
    StarName::Tiande,
    StarName::Yuede,
    StarName::Tiankong,
    StarName::Xunkong,
    StarName::Jielu,
    StarName::Kongwang,
    StarName::Guchen,
    StarName::Guasu,
    StarName::Feilian,
    StarName::Posui,
    StarName::Tianxing,
    StarName::Yinsha,
    StarName::Tianku,
    StarName::Tianxu,
    StarName::Tianshi,
    StarName::Tianshang,
    StarName::Jiekong,
    StarName::Jiesha,
    StarName::Dahao,
    StarName::Nianjie,
];

/// The 14 major stars.
pub const MAJOR_STARS: [StarName; 14] = [
    StarName::Ziwei,
    StarName::Tianji,
    StarName::Taiyang,
    StarName::Wuqu,
    StarName::Tiantong,
    StarName::Lianzhen,
    StarName::Tianfu,
    StarName::Taiyin,
    StarName::Tanlang,
    StarName::Jumen,
    StarName::Tianxiang,
    StarName::Tianliang,
    StarName::Qisha,
    StarName::Pojun,
];

/// (key, name, kind) per variant.
const STAR_INFO: [(&str, &str, StarKind); 69] = [
    ("ziweiMaj", "紫微", StarKind::Major),
    ("tianjiMaj", "天机", StarKind::Major),
    ("taiyangMaj", "太阳", StarKind::Major),
    ("wuquMaj", "武曲", StarKind::Major),
    ("tiantongMaj", "天同", StarKind::Major),
    ("lianzhenMaj", "廉贞", StarKind::Major),
    ("tianfuMaj", "天府", StarKind::Major),
    ("taiyinMaj", "太阴", StarKind::Major),
    ("tanlangMaj", "贪狼", StarKind::Major),
    ("jumenMaj", "巨门", StarKind::Major),
    ("tianxiangMaj", "天相", StarKind::Major),
    ("tianliangMaj", "天梁", StarKind::Major),
    ("qishaMaj", "七杀", StarKind::Major),
    ("pojunMaj", "破军", StarKind::Major),
    ("zuofuMin", "左辅", StarKind::Soft),
    ("youbiMin", "右弼", StarKind::Soft),
    ("wenchangMin", "文昌", StarKind::Soft),
    ("wenquMin", "文曲", StarKind::Soft),
    ("tiankuiMin", "天魁", StarKind::Soft),
    ("tianyueMin", "天钺", StarKind::Soft),
    ("lucunMin", "禄存", StarKind::Lucun),
    ("tianmaMin", "天马", StarKind::Tianma),
    ("dikongMin", "地空", StarKind::Tough),
    ("dijieMin", "地劫", StarKind::Tough),
    ("huoxingMin", "火星", StarKind::Tough),
    ("lingxingMin", "铃星", StarKind::Tough),
    ("qingyangMin", "擎羊", StarKind::Tough),
    ("tuoluoMin", "陀罗", StarKind::Tough),
    ("hongluan", "红鸾", StarKind::Flower),
    ("tianxi", "天喜", StarKind::Flower),
    ("tianyao", "天姚", StarKind::Flower),
    ("xianchi", "咸池", StarKind::Flower),
    ("jieshen", "解神", StarKind::Helper),
    ("santai", "三台", StarKind::Adjective),
    ("bazuo", "八座", StarKind::Adjective),
    ("enguang", "恩光", StarKind::Adjective),
    ("tiangui", "天贵", StarKind::Adjective),
    ("longchi", "龙池", StarKind::Adjective),
    ("fengge", "凤阁", StarKind::Adjective),
    ("tiancai", "天才", StarKind::Adjective),
    ("tianshou", "天寿", StarKind::Adjective),
    ("taifu", "台辅", StarKind::Adjective),
    ("fenggao", "封诰", StarKind::Adjective),
    ("tianwu", "天巫", StarKind::Adjective),
    ("huagai", "华盖", StarKind::Adjective),
    ("tianguan", "天官", StarKind::Adjective),
    ("tianfuAdj", "天福", StarKind::Adjective),
    ("tianchu", "天厨", StarKind::Adjective),
    ("tianyueAdj", "天月", StarKind::Adjective),
    ("tiande", "天德", StarKind::Adjective),
    ("yuede", "月德", StarKind::Adjective),
    ("tiankong", "天空", StarKind::Adjective),
    ("xunkong", "旬空", StarKind::Adjective),
    ("jielu", "截路", StarKind::Adjective),
    ("kongwang", "空亡", StarKind::Adjective),
    ("guchen", "孤辰", StarKind::Adjective),
    ("guasu", "寡宿", StarKind::Adjective),
    ("feilian", "蜚廉", StarKind::Adjective),
    ("posui", "破碎", StarKind::Adjective),
    ("tianxing", "天刑", StarKind::Adjective),
    ("yinsha", "阴煞", StarKind::Adjective),
    ("tianku", "天哭", StarKind::Adjective),
    ("tianxu", "天虚", StarKind::Adjective),
    ("tianshi", "天使", StarKind::Adjective),
    ("tianshang", "天伤", StarKind::Adjective),
    ("jiekong", "截空", StarKind::Adjective),
    ("jieshaAdj", "劫杀", StarKind::Adjective),
    ("dahaoAdj", "大耗", StarKind::Adjective),
    ("nianjie", "年解", StarKind::Helper),
];

impl StarName {
    /// Simplified Chinese name.
    pub const fn name(self) -> &'static str {
        STAR_INFO[self as usize].1
    }

    /// Stable key, unique across all stars.
    pub const fn key(self) -> &'static str {
        STAR_INFO[self as usize].0
    }

    pub const fn kind(self) -> StarKind {
        STAR_INFO[self as usize].2
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn is_major(self) -> bool {
        matches!(self.kind(), StarKind::Major)
    }

    /// Whether the year stem's transformation is attached at placement.
    pub const fn takes_mutagen(self) -> bool {
        self.is_major()
            || matches!(
                self,
                Self::Zuofu | Self::Youbi | Self::Wenchang | Self::Wenqu
            )
    }

    /// Major or minor (the stars that carry brightness).
    pub const fn is_principal(self) -> bool {
        (self as usize) < 28
    }
}

/// A star assigned to a palace slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarPlacement {
    pub star: StarName,
    pub slot: usize,
}

impl StarPlacement {
    pub const fn new(star: StarName, slot: usize) -> Self {
        Self { star, slot }
    }
}
