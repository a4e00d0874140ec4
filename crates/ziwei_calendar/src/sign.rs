//! Western sun signs by Gregorian date.

use crate::solar_date::SolarDate;

/// The 12 western signs, starting from Capricorn (early January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum WesternSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

pub const ALL_SIGNS: [WesternSign; 12] = [
    WesternSign::Capricorn,
    WesternSign::Aquarius,
    WesternSign::Pisces,
    WesternSign::Aries,
    WesternSign::Taurus,
    WesternSign::Gemini,
    WesternSign::Cancer,
    WesternSign::Leo,
    WesternSign::Virgo,
    WesternSign::Libra,
    WesternSign::Scorpio,
    WesternSign::Sagittarius,
];

/// First day of the following sign, per Gregorian month.
const SIGN_CUSP_DAYS: [u32; 12] = [20, 19, 21, 21, 21, 22, 23, 23, 23, 23, 22, 22];

impl WesternSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Capricorn => "摩羯座",
            Self::Aquarius => "水瓶座",
            Self::Pisces => "双鱼座",
            Self::Aries => "白羊座",
            Self::Taurus => "金牛座",
            Self::Gemini => "双子座",
            Self::Cancer => "巨蟹座",
            Self::Leo => "狮子座",
            Self::Virgo => "处女座",
            Self::Libra => "天秤座",
            Self::Scorpio => "天蝎座",
            Self::Sagittarius => "射手座",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sign of a Gregorian date.
    pub fn of(date: SolarDate) -> Self {
        let m = (date.month as usize).clamp(1, 12) - 1;
        let idx = if date.day < SIGN_CUSP_DAYS[m] { m } else { m + 1 };
        ALL_SIGNS[idx % 12]
    }
}
