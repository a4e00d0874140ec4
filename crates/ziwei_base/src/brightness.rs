//! Star brightness (亮度) and the default per-slot tables.
//!
//! Tables are indexed by palace slot (0 = 寅). Stars without a table, and
//! slots a star can never occupy, have no rating.

use crate::star::StarName;

/// The seven brightness levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Brightness {
    Miao,
    Wang,
    De,
    Li,
    Ping,
    Bu,
    Xian,
}

pub const ALL_BRIGHTNESS: [Brightness; 7] = [
    Brightness::Miao,
    Brightness::Wang,
    Brightness::De,
    Brightness::Li,
    Brightness::Ping,
    Brightness::Bu,
    Brightness::Xian,
];

impl Brightness {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Miao => "庙",
            Self::Wang => "旺",
            Self::De => "得",
            Self::Li => "利",
            Self::Ping => "平",
            Self::Bu => "不",
            Self::Xian => "陷",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Miao => "miao",
            Self::Wang => "wang",
            Self::De => "de",
            Self::Li => "li",
            Self::Ping => "ping",
            Self::Bu => "bu",
            Self::Xian => "xian",
        }
    }
}

/// One row: brightness per slot.
pub type BrightnessRow = [Option<Brightness>; 12];

const M: Option<Brightness> = Some(Brightness::Miao);
const W: Option<Brightness> = Some(Brightness::Wang);
const D: Option<Brightness> = Some(Brightness::De);
const L: Option<Brightness> = Some(Brightness::Li);
const P: Option<Brightness> = Some(Brightness::Ping);
const B: Option<Brightness> = Some(Brightness::Bu);
const X: Option<Brightness> = Some(Brightness::Xian);
const N: Option<Brightness> = None;

#[rustfmt::skip]
const ZIWEI: BrightnessRow =     [W, W, D, W, M, M, W, W, D, W, P, M];
#[rustfmt::skip]
const TIANJI: BrightnessRow =    [D, W, L, P, M, X, D, W, L, P, M, X];
#[rustfmt::skip]
const TAIYANG: BrightnessRow =   [W, M, W, W, W, D, D, X, B, X, X, B];
#[rustfmt::skip]
const WUQU: BrightnessRow =      [D, L, M, P, W, M, D, L, M, P, W, M];
#[rustfmt::skip]
const TIANTONG: BrightnessRow =  [L, P, P, M, X, B, W, P, P, M, W, B];
#[rustfmt::skip]
const LIANZHEN: BrightnessRow =  [M, P, L, X, P, L, M, P, L, X, P, L];
#[rustfmt::skip]
const TIANFU: BrightnessRow =    [M, D, M, D, W, M, D, W, M, W, M, M];
#[rustfmt::skip]
const TAIYIN: BrightnessRow =    [W, X, X, X, B, B, L, B, W, M, M, M];
#[rustfmt::skip]
const TANLANG: BrightnessRow =   [P, L, M, X, W, M, P, L, M, X, W, M];
#[rustfmt::skip]
const JUMEN: BrightnessRow =     [M, M, X, W, W, B, M, M, X, W, W, B];
#[rustfmt::skip]
const TIANXIANG: BrightnessRow = [M, X, D, D, M, D, M, X, D, D, M, M];
#[rustfmt::skip]
const TIANLIANG: BrightnessRow = [M, M, M, X, M, W, X, D, W, X, M, W];
#[rustfmt::skip]
const QISHA: BrightnessRow =     [M, W, M, P, W, M, M, M, M, P, W, M];
#[rustfmt::skip]
const POJUN: BrightnessRow =     [D, X, W, P, M, W, D, X, W, P, M, W];
#[rustfmt::skip]
const WENCHANG: BrightnessRow =  [X, L, D, M, X, L, D, M, X, L, D, M];
#[rustfmt::skip]
const WENQU: BrightnessRow =     [P, W, D, M, X, W, D, M, X, W, D, M];
#[rustfmt::skip]
const HUOLING: BrightnessRow =   [M, L, X, D, M, L, X, D, M, L, X, D];
#[rustfmt::skip]
const QINGYANG: BrightnessRow =  [N, X, M, N, X, M, N, X, M, N, X, M];
#[rustfmt::skip]
const TUOLUO: BrightnessRow =    [X, N, M, X, N, M, X, N, M, X, N, M];

/// Built-in brightness row for a star, if it has one.
pub const fn default_brightness(star: StarName) -> Option<&'static BrightnessRow> {
    match star {
        StarName::Ziwei => Some(&ZIWEI),
        StarName::Tianji => Some(&TIANJI),
        StarName::Taiyang => Some(&TAIYANG),
        StarName::Wuqu => Some(&WUQU),
        StarName::Tiantong => Some(&TIANTONG),
        StarName::Lianzhen => Some(&LIANZHEN),
        StarName::Tianfu => Some(&TIANFU),
        StarName::Taiyin => Some(&TAIYIN),
        StarName::Tanlang => Some(&TANLANG),
        StarName::Jumen => Some(&JUMEN),
        StarName::Tianxiang => Some(&TIANXIANG),
        StarName::Tianliang => Some(&TIANLIANG),
        StarName::Qisha => Some(&QISHA),
        StarName::Pojun => Some(&POJUN),
        StarName::Wenchang => Some(&WENCHANG),
        StarName::Wenqu => Some(&WENQU),
        StarName::Huoxing | StarName::Lingxing => Some(&HUOLING),
        StarName::Qingyang => Some(&QINGYANG),
        StarName::Tuoluo => Some(&TUOLUO),
        _ => None,
    }
}
