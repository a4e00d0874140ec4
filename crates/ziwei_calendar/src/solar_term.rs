//! The 24 solar terms (节气).
//!
//! Sun apparent longitude comes from the abbreviated VSOP87 Earth series
//! (Meeus, *Astronomical Algorithms*, ch. 25 and appendix III) with the
//! FK5 correction, the main nutation terms (ch. 22) and annual aberration.
//! Civil instants are converted to TT with the Espenak-Meeus ΔT
//! polynomials. Term instants agree with published tables to within
//! about 15 seconds over 1900-2100; they are located by bisection on the
//! longitude difference and reported as civil dates in China Standard
//! Time (UTC+8).

use crate::julian::{J2000_JD, civil_to_jdn, jd_to_jdn_at_offset};
use crate::solar_date::SolarDate;

/// China Standard Time offset in hours.
pub const CHINA_UTC_OFFSET_HOURS: f64 = 8.0;

const MAX_ITERATIONS: u32 = 60;
const CONVERGENCE_DAYS: f64 = 1e-6;
const TROPICAL_YEAR_DAYS: f64 = 365.2422;
const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// The 24 solar terms, in Gregorian calendar order (小寒 first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum SolarTerm {
    XiaoHan,
    DaHan,
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
    DongZhi,
}

/// All 24 terms in calendar order (index 0 = 小寒).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
    SolarTerm::DongZhi,
];

/// The 12 sectional terms (节) that open the sexagenary months, 小寒 first.
pub const JIE_TERMS: [SolarTerm; 12] = [
    SolarTerm::XiaoHan,
    SolarTerm::LiChun,
    SolarTerm::JingZhe,
    SolarTerm::QingMing,
    SolarTerm::LiXia,
    SolarTerm::MangZhong,
    SolarTerm::XiaoShu,
    SolarTerm::LiQiu,
    SolarTerm::BaiLu,
    SolarTerm::HanLu,
    SolarTerm::LiDong,
    SolarTerm::DaXue,
];

impl SolarTerm {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "惊蛰",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "谷雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小满",
            Self::MangZhong => "芒种",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "处暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
        }
    }

    /// 0-based position in calendar order (0 = 小寒).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Sun apparent longitude (degrees) that defines this term.
    pub const fn longitude_deg(self) -> f64 {
        ((285 + 15 * self as u32) % 360) as f64
    }

    /// True for the 12 sectional terms (节) that start a month.
    pub const fn is_jie(self) -> bool {
        (self as u8) % 2 == 0
    }
}

fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// ΔT = TT - UT in seconds for a decimal year (Espenak & Meeus 2006).
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - year)
    }
}

/// Heliocentric ecliptic longitude series of the Earth, VSOP87 abbreviated.
///
/// Each row: `[A, B, C]`, term = `A cos(B + C τ)` in 1e-8 rad, τ in Julian
/// millennia of TT from J2000.0.
#[rustfmt::skip]
static EARTH_L0: [[f64; 3]; 64] = [
    [175347046.0, 0.0, 0.0],
    [3341656.0, 4.6692568, 6283.07585],
    [34894.0, 4.6261, 12566.1517],
    [3497.0, 2.7441, 5753.3849],
    [3418.0, 2.8289, 3.5231],
    [3136.0, 3.6277, 77713.7715],
    [2676.0, 4.4181, 7860.4194],
    [2343.0, 6.1352, 3930.2097],
    [1324.0, 0.7425, 11506.7698],
    [1273.0, 2.0371, 529.691],
    [1199.0, 1.1096, 1577.3435],
    [990.0, 5.233, 5884.927],
    [902.0, 2.045, 26.298],
    [857.0, 3.508, 398.149],
    [780.0, 1.179, 5223.694],
    [753.0, 2.533, 5507.553],
    [505.0, 4.583, 18849.228],
    [492.0, 4.205, 775.523],
    [357.0, 2.92, 0.067],
    [317.0, 5.849, 11790.629],
    [284.0, 1.899, 796.298],
    [271.0, 0.315, 10977.079],
    [243.0, 0.345, 5486.778],
    [206.0, 4.806, 2544.314],
    [205.0, 1.869, 5573.143],
    [202.0, 2.458, 6069.777],
    [156.0, 0.833, 213.299],
    [132.0, 3.411, 2942.463],
    [126.0, 1.083, 20.775],
    [115.0, 0.645, 0.98],
    [103.0, 0.636, 4694.003],
    [102.0, 0.976, 15720.839],
    [102.0, 4.267, 7.114],
    [99.0, 6.21, 2146.17],
    [98.0, 0.68, 155.42],
    [86.0, 5.98, 161000.69],
    [85.0, 1.3, 6275.96],
    [85.0, 3.67, 71430.7],
    [80.0, 1.81, 17260.15],
    [79.0, 3.04, 12036.46],
    [75.0, 1.76, 5088.63],
    [74.0, 3.5, 3154.69],
    [74.0, 4.68, 801.82],
    [70.0, 0.83, 9437.76],
    [62.0, 3.98, 8827.39],
    [61.0, 1.82, 7084.9],
    [57.0, 2.78, 6286.6],
    [56.0, 4.39, 14143.5],
    [56.0, 3.47, 6279.55],
    [52.0, 0.19, 12139.55],
    [52.0, 1.33, 1748.02],
    [51.0, 0.28, 5856.48],
    [49.0, 0.49, 1194.45],
    [41.0, 5.37, 8429.24],
    [41.0, 2.4, 19651.05],
    [39.0, 6.17, 10447.39],
    [37.0, 6.04, 10213.29],
    [37.0, 2.57, 1059.38],
    [36.0, 1.71, 2352.87],
    [36.0, 1.78, 6812.77],
    [33.0, 0.59, 17789.85],
    [30.0, 0.44, 83996.85],
    [30.0, 2.74, 1349.87],
    [25.0, 3.16, 4690.48],
];

#[rustfmt::skip]
static EARTH_L1: [[f64; 3]; 34] = [
    [628331966747.0, 0.0, 0.0],
    [206059.0, 2.678235, 6283.07585],
    [4303.0, 2.6351, 12566.1517],
    [425.0, 1.59, 3.523],
    [119.0, 5.796, 26.298],
    [109.0, 2.966, 1577.344],
    [93.0, 2.59, 18849.23],
    [72.0, 1.14, 529.69],
    [68.0, 1.87, 398.15],
    [67.0, 4.41, 5507.55],
    [59.0, 2.89, 5223.69],
    [56.0, 2.17, 155.42],
    [45.0, 0.4, 796.3],
    [36.0, 0.47, 775.52],
    [29.0, 2.65, 7.11],
    [21.0, 5.34, 0.98],
    [19.0, 1.85, 5486.78],
    [19.0, 4.97, 213.3],
    [17.0, 2.99, 6275.96],
    [16.0, 0.03, 2544.31],
    [16.0, 1.43, 2146.17],
    [15.0, 1.21, 10977.08],
    [12.0, 2.83, 1748.02],
    [12.0, 3.26, 5088.63],
    [12.0, 5.27, 1194.45],
    [12.0, 2.08, 4694.0],
    [11.0, 0.77, 553.57],
    [10.0, 1.3, 6286.6],
    [10.0, 4.24, 1349.87],
    [9.0, 2.7, 242.73],
    [9.0, 5.64, 951.72],
    [8.0, 5.3, 2352.87],
    [6.0, 2.65, 9437.76],
    [6.0, 4.67, 4690.48],
];

#[rustfmt::skip]
static EARTH_L2: [[f64; 3]; 20] = [
    [52919.0, 0.0, 0.0],
    [8720.0, 1.0721, 6283.0758],
    [309.0, 0.867, 12566.152],
    [27.0, 0.05, 3.52],
    [16.0, 5.19, 26.3],
    [16.0, 3.68, 155.42],
    [10.0, 0.76, 18849.23],
    [9.0, 2.06, 77713.77],
    [7.0, 0.83, 775.52],
    [5.0, 4.66, 1577.34],
    [4.0, 1.03, 7.11],
    [4.0, 3.44, 5573.14],
    [3.0, 5.14, 796.3],
    [3.0, 6.05, 5507.55],
    [3.0, 1.19, 242.73],
    [3.0, 6.12, 529.69],
    [3.0, 0.31, 398.15],
    [3.0, 2.28, 553.57],
    [2.0, 4.38, 5223.69],
    [2.0, 3.75, 0.98],
];

#[rustfmt::skip]
static EARTH_L3: [[f64; 3]; 7] = [
    [289.0, 5.844, 6283.076],
    [35.0, 0.0, 0.0],
    [17.0, 5.49, 12566.15],
    [3.0, 5.2, 155.42],
    [1.0, 4.72, 3.52],
    [1.0, 5.3, 18849.23],
    [1.0, 5.97, 242.73],
];

#[rustfmt::skip]
static EARTH_L4: [[f64; 3]; 3] = [
    [114.0, 3.142, 0.0],
    [8.0, 4.13, 6283.08],
    [1.0, 3.84, 12566.15],
];

#[rustfmt::skip]
static EARTH_L5: [[f64; 3]; 1] = [
    [1.0, 3.14, 0.0],
];

static EARTH_L: [&[[f64; 3]]; 6] = [
    &EARTH_L0, &EARTH_L1, &EARTH_L2, &EARTH_L3, &EARTH_L4, &EARTH_L5,
];

/// Earth heliocentric longitude in radians (FK5 not applied).
fn earth_longitude(tau: f64) -> f64 {
    let mut sum = 0.0;
    let mut power = 1.0;
    for series in EARTH_L {
        let s: f64 = series.iter().map(|[a, b, c]| a * (b + c * tau).cos()).sum();
        sum += s * power;
        power *= tau;
    }
    sum * 1e-8
}

/// Nutation in longitude in arcseconds, main terms (accuracy ~0.5").
fn nutation_longitude_arcsec(t: f64) -> f64 {
    let omega = (125.044_52 - 1934.136_261 * t).to_radians();
    let sun = (280.4665 + 36_000.7698 * t).to_radians();
    let moon = (218.3165 + 481_267.8813 * t).to_radians();
    -17.20 * omega.sin() - 1.32 * (2.0 * sun).sin() - 0.23 * (2.0 * moon).sin()
        + 0.21 * (2.0 * omega).sin()
}

/// Sun-Earth distance in AU from the equation of centre.
fn sun_distance_au(t: f64) -> f64 {
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t;
    let c = (1.914_602 - 0.004_817 * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    1.000_001_018 * (1.0 - e * e) / (1.0 + e * (m + c.to_radians()).cos())
}

/// Sun apparent geocentric longitude in degrees for a Julian Date in UT.
pub fn sun_apparent_longitude(jd_ut: f64) -> f64 {
    let year = 2000.0 + (jd_ut - J2000_JD) / 365.25;
    let jde = jd_ut + delta_t_seconds(year) / SECONDS_PER_DAY;
    let tau = (jde - J2000_JD) / DAYS_PER_MILLENNIUM;
    let t = tau * 10.0;

    let geometric = earth_longitude(tau).to_degrees() + 180.0;
    let corrections =
        -0.090_33 + nutation_longitude_arcsec(t) - 20.4898 / sun_distance_au(t);
    normalize_360(geometric + corrections / 3600.0)
}

/// Signed longitude difference in (-180, 180].
fn longitude_offset(jd: f64, target_deg: f64) -> f64 {
    let d = normalize_360(sun_apparent_longitude(jd) - target_deg);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Julian Date (UT) of a solar term within a Gregorian year.
pub fn solar_term_jd(year: i32, term: SolarTerm) -> f64 {
    let target = term.longitude_deg();
    // Terms from 小寒 to 惊蛰 precede the March equinox of the same year.
    let arc = if target >= 285.0 {
        target - 360.0
    } else {
        target
    };
    let guess = civil_to_jdn(year, 3, 20) as f64 + arc * TROPICAL_YEAR_DAYS / 360.0;

    let mut t_a = guess - 8.0;
    let mut t_b = guess + 8.0;
    let mut f_a = longitude_offset(t_a, target);

    for _ in 0..MAX_ITERATIONS {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = longitude_offset(t_mid, target);
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
        if (t_b - t_a).abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    0.5 * (t_a + t_b)
}

/// Civil date (China Standard Time) on which a solar term begins.
pub fn solar_term_date(year: i32, term: SolarTerm) -> SolarDate {
    let jd = solar_term_jd(year, term);
    SolarDate::from_jdn(jd_to_jdn_at_offset(jd, CHINA_UTC_OFFSET_HOURS))
}

/// The most recent sectional term (节) on or before `date`, with its year.
///
/// Returns the index into [`JIE_TERMS`]. Dates before 小寒 resolve to 大雪
/// of the previous year.
pub fn current_jie(date: SolarDate) -> (i32, usize) {
    // The sectional term of Gregorian month m always falls in month m.
    let i = date.month as usize - 1;
    if solar_term_date(date.year, JIE_TERMS[i]) <= date {
        (date.year, i)
    } else if i == 0 {
        (date.year - 1, JIE_TERMS.len() - 1)
    } else {
        (date.year, i - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cst_minutes(jd: f64) -> f64 {
        let local = jd + 0.5 + CHINA_UTC_OFFSET_HOURS / 24.0;
        (local - local.floor()) * 1440.0
    }

    #[test]
    fn longitudes_step_by_fifteen() {
        assert_eq!(SolarTerm::XiaoHan.longitude_deg(), 285.0);
        assert_eq!(SolarTerm::LiChun.longitude_deg(), 315.0);
        assert_eq!(SolarTerm::ChunFen.longitude_deg(), 0.0);
        assert_eq!(SolarTerm::DongZhi.longitude_deg(), 270.0);
    }

    #[test]
    fn jie_terms_are_even() {
        for t in JIE_TERMS {
            assert!(t.is_jie(), "{} should be a sectional term", t.name());
        }
        assert!(!SolarTerm::ChunFen.is_jie());
    }

    #[test]
    fn sun_longitude_meeus_example() {
        // Meeus example 25.b: 1992-10-13 0h TD, λ = 199.90606°.
        let jd_tt = crate::julian::calendar_to_jd(1992, 10, 13.0);
        let jd_ut = jd_tt - delta_t_seconds(1992.78) / SECONDS_PER_DAY;
        let lon = sun_apparent_longitude(jd_ut);
        assert!((lon - 199.906_06).abs() < 1e-4, "longitude {lon}");
    }

    #[test]
    fn delta_t_is_continuous_at_joins() {
        for year in [1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let before = delta_t_seconds(year - 1e-6);
            let after = delta_t_seconds(year);
            assert!((before - after).abs() < 2.0, "{year}: {before} vs {after}");
        }
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 1e-9);
    }

    #[test]
    fn term_instants_match_published_times() {
        // 2023 立春 10:42 CST, 2024 立春 16:27 CST, 2000 春分 15:35 CST.
        let cases = [
            (2023, SolarTerm::LiChun, 10.0 * 60.0 + 42.3),
            (2024, SolarTerm::LiChun, 16.0 * 60.0 + 26.9),
            (2000, SolarTerm::ChunFen, 15.0 * 60.0 + 35.3),
        ];
        for (year, term, minutes) in cases {
            let got = cst_minutes(solar_term_jd(year, term));
            assert!((got - minutes).abs() < 1.0, "{year} {}: {got}", term.name());
        }
    }

    #[test]
    fn terms_just_after_midnight_keep_their_day() {
        // 2014 惊蛰 00:02 CST, 2016 小暑 00:03 CST, 2013 立春 00:13 CST.
        let cases = [
            (2014, SolarTerm::JingZhe, (3, 6)),
            (2016, SolarTerm::XiaoShu, (7, 7)),
            (2013, SolarTerm::LiChun, (2, 4)),
            (1980, SolarTerm::LiChun, (2, 5)),
        ];
        for (year, term, (month, day)) in cases {
            let date = solar_term_date(year, term);
            assert_eq!((date.month, date.day), (month, day), "{year} {}", term.name());
        }
    }

    #[test]
    fn term_jd_hits_target_longitude() {
        for term in ALL_SOLAR_TERMS {
            let jd = solar_term_jd(2024, term);
            let off = longitude_offset(jd, term.longitude_deg());
            assert!(off.abs() < 1e-4, "{}: offset {off}", term.name());
        }
    }

    #[test]
    fn terms_increase_through_year() {
        let jds: Vec<f64> = ALL_SOLAR_TERMS
            .iter()
            .map(|t| solar_term_jd(1990, *t))
            .collect();
        for w in jds.windows(2) {
            assert!(w[1] > w[0]);
            assert!((w[1] - w[0] - 15.2).abs() < 1.5);
        }
    }

    #[test]
    fn current_jie_early_january() {
        let d = SolarDate::new(2000, 1, 2).unwrap();
        assert_eq!(current_jie(d), (1999, 11));
    }

    #[test]
    fn current_jie_around_boundary() {
        let before = SolarDate::new(2014, 3, 5).unwrap();
        let on = SolarDate::new(2014, 3, 6).unwrap();
        assert_eq!(current_jie(before), (2014, 1));
        assert_eq!(current_jie(on), (2014, 2));
    }
}
