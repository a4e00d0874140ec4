//! Period (流耀) stars placed by a period's stem and branch.

use ziwei_calendar::{EarthlyBranch, HeavenlyStem};

use crate::location::{chang_qu_by_stem, kui_yue, lu_yang_tuo_ma, luan_xi, nianjie};
use crate::star::StarKind;
use crate::types::Scope;

/// Which period star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoroscopeStarKind {
    Kui,
    Yue,
    Chang,
    Qu,
    Lu,
    Yang,
    Tuo,
    Ma,
    Luan,
    Xi,
    Nianjie,
}

impl HoroscopeStarKind {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Kui => "魁",
            Self::Yue => "钺",
            Self::Chang => "昌",
            Self::Qu => "曲",
            Self::Lu => "禄",
            Self::Yang => "羊",
            Self::Tuo => "陀",
            Self::Ma => "马",
            Self::Luan => "鸾",
            Self::Xi => "喜",
            Self::Nianjie => "解",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Kui => "kui",
            Self::Yue => "yue",
            Self::Chang => "chang",
            Self::Qu => "qu",
            Self::Lu => "lu",
            Self::Yang => "yang",
            Self::Tuo => "tuo",
            Self::Ma => "ma",
            Self::Luan => "luan",
            Self::Xi => "xi",
            Self::Nianjie => "nianjie",
        }
    }

    pub const fn star_kind(self) -> StarKind {
        match self {
            Self::Kui | Self::Yue | Self::Chang | Self::Qu => StarKind::Soft,
            Self::Lu => StarKind::Lucun,
            Self::Yang | Self::Tuo => StarKind::Tough,
            Self::Ma => StarKind::Tianma,
            Self::Luan | Self::Xi => StarKind::Flower,
            Self::Nianjie => StarKind::Helper,
        }
    }
}

/// A period star tagged with its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HoroscopeStar {
    pub scope: Scope,
    pub kind: HoroscopeStarKind,
}

impl HoroscopeStar {
    /// Display name, e.g. `运魁`, `流禄`, `年解`.
    pub fn name(self) -> String {
        if self.kind == HoroscopeStarKind::Nianjie {
            return "年解".to_string();
        }
        let prefix = match self.scope {
            Scope::Origin => "",
            Scope::Decadal => "运",
            Scope::Yearly => "流",
            Scope::Monthly => "月",
            Scope::Daily => "日",
            Scope::Hourly => "时",
        };
        format!("{prefix}{}", self.kind.suffix())
    }

    /// Locale-independent key, e.g. `decadalKui`.
    pub fn key(self) -> String {
        let kind = self.kind.key();
        let mut chars = kind.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        };
        format!("{}{capitalized}", self.scope.key())
    }

    pub const fn star_kind(self) -> StarKind {
        self.kind.star_kind()
    }
}

/// Place the period stars of a scope. The origin scope has none.
///
/// Every period gets 魁 钺 昌 曲 禄 羊 陀 马; the yearly period also gets
/// 鸾 喜 and 年解.
pub fn place_horoscope_stars(
    stem: HeavenlyStem,
    branch: EarthlyBranch,
    scope: Scope,
) -> Vec<(HoroscopeStar, usize)> {
    if scope == Scope::Origin {
        return Vec::new();
    }
    let star = |kind| HoroscopeStar { scope, kind };
    let (kui, yue) = kui_yue(stem);
    let (chang, qu) = chang_qu_by_stem(stem);
    let lytm = lu_yang_tuo_ma(stem, branch);
    let mut placed = vec![
        (star(HoroscopeStarKind::Kui), kui),
        (star(HoroscopeStarKind::Yue), yue),
        (star(HoroscopeStarKind::Chang), chang),
        (star(HoroscopeStarKind::Qu), qu),
        (star(HoroscopeStarKind::Lu), lytm.lu),
        (star(HoroscopeStarKind::Yang), lytm.yang),
        (star(HoroscopeStarKind::Tuo), lytm.tuo),
        (star(HoroscopeStarKind::Ma), lytm.ma),
    ];
    if scope == Scope::Yearly {
        let (luan, xi) = luan_xi(branch);
        placed.push((star(HoroscopeStarKind::Luan), luan));
        placed.push((star(HoroscopeStarKind::Xi), xi));
        placed.push((star(HoroscopeStarKind::Nianjie), nianjie(branch)));
    }
    placed
}
