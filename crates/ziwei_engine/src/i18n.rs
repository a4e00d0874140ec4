//! Presentation-layer names.
//!
//! Computation works on enums only; this module turns them into display
//! strings for a [`Locale`] and parses display strings back. `en-US` uses
//! the pinyin keys.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use ziwei_base::{
    ALL_BRIGHTNESS, ALL_PALACE_NAMES, ALL_STARS, Boshi12, Brightness, Changsheng12,
    FiveElementsClass, Gender, HoroscopeStar, Jiangqian12, Mutagen, PalaceName, Scope, StarName,
    Suiqian12,
};
use ziwei_calendar::{
    ALL_BRANCHES, ALL_STEMS, EarthlyBranch, HeavenlyStem, TimeIndex, WesternSign, Zodiac,
};

use crate::error::EngineError;
use crate::horoscope::PeriodName;

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    ZhCn,
    ZhTw,
    EnUs,
}

pub const ALL_LOCALES: [Locale; 3] = [Locale::ZhCn, Locale::ZhTw, Locale::EnUs];

impl Locale {
    /// BCP 47 tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
            Self::EnUs => "en-US",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_LOCALES
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::InvalidInput(format!("unknown locale '{s}'")))
    }
}

/// Simplified to traditional characters for every glyph the names use.
const TRADITIONAL: &[(char, char)] = &[
    ('机', '機'),
    ('阳', '陽'),
    ('贞', '貞'),
    ('阴', '陰'),
    ('贪', '貪'),
    ('门', '門'),
    ('杀', '殺'),
    ('军', '軍'),
    ('辅', '輔'),
    ('钺', '鉞'),
    ('禄', '祿'),
    ('马', '馬'),
    ('铃', '鈴'),
    ('罗', '羅'),
    ('红', '紅'),
    ('鸾', '鸞'),
    ('贵', '貴'),
    ('龙', '龍'),
    ('凤', '鳳'),
    ('阁', '閣'),
    ('寿', '壽'),
    ('诰', '誥'),
    ('华', '華'),
    ('盖', '蓋'),
    ('厨', '廚'),
    ('虚', '虛'),
    ('伤', '傷'),
    ('宫', '宮'),
    ('财', '財'),
    ('迁', '遷'),
    ('仆', '僕'),
    ('来', '來'),
    ('庙', '廟'),
    ('权', '權'),
    ('长', '長'),
    ('带', '帶'),
    ('临', '臨'),
    ('绝', '絕'),
    ('养', '養'),
    ('将', '將'),
    ('书', '書'),
    ('飞', '飛'),
    ('岁', '歲'),
    ('驿', '驛'),
    ('灾', '災'),
    ('气', '氣'),
    ('丧', '喪'),
    ('贯', '貫'),
    ('运', '運'),
    ('时', '時'),
    ('闰', '閏'),
    ('腊', '臘'),
    ('鸡', '雞'),
    ('猪', '豬'),
    ('双', '雙'),
    ('鱼', '魚'),
    ('狮', '獅'),
    ('处', '處'),
    ('蝎', '蠍'),
];

fn traditional_char(c: char) -> char {
    TRADITIONAL
        .iter()
        .find(|(s, _)| *s == c)
        .map_or(c, |(_, t)| *t)
}

/// Convert a simplified-Chinese display string to traditional characters.
pub fn to_traditional(text: &str) -> String {
    text.chars().map(traditional_char).collect()
}

/// Display names for a chart value.
pub trait Localize {
    /// Simplified Chinese name.
    fn zh_name(&self) -> Cow<'static, str>;

    /// English (pinyin) name.
    fn en_name(&self) -> Cow<'static, str>;

    fn localize(&self, locale: Locale) -> String {
        match locale {
            Locale::ZhCn => self.zh_name().into_owned(),
            Locale::ZhTw => to_traditional(&self.zh_name()),
            Locale::EnUs => self.en_name().into_owned(),
        }
    }
}

macro_rules! localize_by_name_and_key {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Localize for $ty {
                fn zh_name(&self) -> Cow<'static, str> {
                    Cow::Borrowed(self.name())
                }

                fn en_name(&self) -> Cow<'static, str> {
                    Cow::Borrowed(self.key())
                }
            }
        )+
    };
}

localize_by_name_and_key!(
    HeavenlyStem,
    PalaceName,
    StarName,
    Brightness,
    Mutagen,
    FiveElementsClass,
    Gender,
    Changsheng12,
    Boshi12,
    Jiangqian12,
    Suiqian12,
    Scope,
    WesternSign,
    PeriodName,
);

impl Localize for EarthlyBranch {
    fn zh_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name())
    }

    fn en_name(&self) -> Cow<'static, str> {
        match self {
            Self::Wu => Cow::Borrowed("wu"),
            other => Cow::Borrowed(other.key()),
        }
    }
}

impl Localize for HoroscopeStar {
    fn zh_name(&self) -> Cow<'static, str> {
        Cow::Owned(self.name())
    }

    fn en_name(&self) -> Cow<'static, str> {
        Cow::Owned(self.key())
    }
}

const ZODIAC_EN: [&str; 12] = [
    "rat", "ox", "tiger", "rabbit", "dragon", "snake", "horse", "goat", "monkey", "rooster",
    "dog", "pig",
];

impl Localize for Zodiac {
    fn zh_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name())
    }

    fn en_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ZODIAC_EN[self.index() as usize])
    }
}

const TIME_EN: [&str; 13] = [
    "earlyRatHour",
    "oxHour",
    "tigerHour",
    "rabbitHour",
    "dragonHour",
    "snakeHour",
    "horseHour",
    "goatHour",
    "monkeyHour",
    "roosterHour",
    "dogHour",
    "pigHour",
    "lateRatHour",
];

impl Localize for TimeIndex {
    fn zh_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name())
    }

    fn en_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(TIME_EN[self.get() as usize])
    }
}

fn parse_from<T: Localize + Copy>(all: &[T], text: &str) -> Option<T> {
    let text = text.trim();
    all.iter()
        .copied()
        .find(|item| ALL_LOCALES.iter().any(|l| item.localize(*l) == text))
}

/// Star by any locale's name or its key.
pub fn parse_star(text: &str) -> Option<StarName> {
    parse_from(&ALL_STARS, text)
}

/// Stem by any locale's name or its key.
pub fn parse_stem(text: &str) -> Option<HeavenlyStem> {
    parse_from(&ALL_STEMS, text)
}

pub fn parse_branch(text: &str) -> Option<EarthlyBranch> {
    parse_from(&ALL_BRANCHES, text).or_else(|| {
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.key() == text.trim())
    })
}

pub fn parse_brightness(text: &str) -> Option<Brightness> {
    parse_from(&ALL_BRIGHTNESS, text)
}

/// Palace by any locale's name or key. Short forms without `宫` are
/// accepted for the soul palace (`命`).
pub fn parse_palace(text: &str) -> Option<PalaceName> {
    parse_from(&ALL_PALACE_NAMES, text).or_else(|| match text.trim() {
        "命" => Some(PalaceName::Soul),
        _ => None,
    })
}

pub fn parse_gender(text: &str) -> Option<Gender> {
    parse_from(&[Gender::Male, Gender::Female], text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locales_parse() {
        assert_eq!("zh-TW".parse::<Locale>().unwrap(), Locale::ZhTw);
        assert_eq!("en-us".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr-FR".parse::<Locale>().is_err());
    }

    #[test]
    fn star_names_per_locale() {
        assert_eq!(StarName::Tanlang.localize(Locale::ZhCn), "贪狼");
        assert_eq!(StarName::Tanlang.localize(Locale::ZhTw), "貪狼");
        assert_eq!(StarName::Tanlang.localize(Locale::EnUs), "tanlangMaj");
        assert_eq!(PalaceName::Wealth.localize(Locale::ZhTw), "財帛");
    }

    #[test]
    fn parse_accepts_every_locale() {
        assert_eq!(parse_star("天机"), Some(StarName::Tianji));
        assert_eq!(parse_star("天機"), Some(StarName::Tianji));
        assert_eq!(parse_star("tianjiMaj"), Some(StarName::Tianji));
        assert_eq!(parse_star("天福"), Some(StarName::TianfuAdj));
        assert_eq!(parse_star("nope"), None);
        assert_eq!(parse_stem("庚"), Some(HeavenlyStem::Geng));
        assert_eq!(parse_stem("geng"), Some(HeavenlyStem::Geng));
        assert_eq!(parse_brightness("廟"), Some(Brightness::Miao));
        assert_eq!(parse_branch("午"), Some(EarthlyBranch::Wu));
        assert_eq!(parse_branch("woo"), Some(EarthlyBranch::Wu));
        assert_eq!(parse_palace("命宫"), Some(PalaceName::Soul));
        assert_eq!(parse_palace("官祿"), Some(PalaceName::Career));
        assert_eq!(parse_gender("female"), Some(Gender::Female));
        assert_eq!(parse_gender("男"), Some(Gender::Male));
    }

    #[test]
    fn localized_names_are_unique() {
        for locale in ALL_LOCALES {
            let names: Vec<String> = ALL_STARS.iter().map(|s| s.localize(locale)).collect();
            for (i, n) in names.iter().enumerate() {
                assert!(!names[i + 1..].contains(n), "{locale}: {n}");
            }
        }
    }
}
