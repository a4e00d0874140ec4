//! Closed-form star positions.
//!
//! Every function returns palace slots (0 = 寅). The rhymes quoted in the
//! docs are the traditional placement mnemonics the tables encode.

use ziwei_calendar::EarthlyBranch as Eb;
use ziwei_calendar::{EarthlyBranch, HeavenlyStem, TimeIndex};

use crate::palace::PalaceName;
use crate::types::{Algorithm, Gender};
use crate::util::{branch_slot, fix_index};

/// Lunar day used for the 紫微 search.
///
/// The late zi hour belongs to the next day; a day past the month end wraps
/// into the next month.
pub fn ziwei_day(lunar_day: u32, month_days: u32, time: TimeIndex) -> u32 {
    let day = if time.is_late_zi() {
        lunar_day + 1
    } else {
        lunar_day
    };
    if day > month_days { day - month_days } else { day }
}

/// 起紫微星诀: find the smallest offset making `day + offset` divisible by
/// the bureau number, walk the quotient from 寅, then adjust by the offset
/// (forward when even, backward when odd).
pub fn ziwei_index(day: u32, bureau: u32) -> usize {
    let bureau = bureau.max(1);
    let mut offset = 0u32;
    while (day + offset) % bureau != 0 {
        offset += 1;
    }
    let quotient = ((day + offset) / bureau) % 12;
    let mut index = quotient as i64 - 1;
    if offset % 2 == 0 {
        index += offset as i64;
    } else {
        index -= offset as i64;
    }
    fix_index(index)
}

/// 天府 mirrors 紫微 across the 寅-申 axis.
pub const fn tianfu_index(ziwei: usize) -> usize {
    fix_index(12 - ziwei as i64)
}

/// 禄存 with 擎羊 ahead and 陀罗 behind, plus 天马.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuYangTuoMa {
    pub lu: usize,
    pub yang: usize,
    pub tuo: usize,
    pub ma: usize,
}

/// 甲禄到寅宫，乙禄居卯府，丙戊禄在巳，丁己禄在午，庚禄定居申，
/// 辛禄酉上补，壬禄亥中藏，癸禄居子户。禄前羊刃当，禄后陀罗府。
///
/// 天马 by year branch: 寅午戌 in 申, 申子辰 in 寅, 巳酉丑 in 亥, 亥卯未 in 巳.
pub const fn lu_yang_tuo_ma(stem: HeavenlyStem, branch: EarthlyBranch) -> LuYangTuoMa {
    let lu = branch_slot(match stem {
        HeavenlyStem::Jia => Eb::Yin,
        HeavenlyStem::Yi => Eb::Mao,
        HeavenlyStem::Bing | HeavenlyStem::Wu => Eb::Si,
        HeavenlyStem::Ding | HeavenlyStem::Ji => Eb::Wu,
        HeavenlyStem::Geng => Eb::Shen,
        HeavenlyStem::Xin => Eb::You,
        HeavenlyStem::Ren => Eb::Hai,
        HeavenlyStem::Gui => Eb::Zi,
    });
    let ma = branch_slot(match branch {
        Eb::Yin | Eb::Wu | Eb::Xu => Eb::Shen,
        Eb::Shen | Eb::Zi | Eb::Chen => Eb::Yin,
        Eb::Si | Eb::You | Eb::Chou => Eb::Hai,
        Eb::Hai | Eb::Mao | Eb::Wei => Eb::Si,
    });
    LuYangTuoMa {
        lu,
        yang: fix_index(lu as i64 + 1),
        tuo: fix_index(lu as i64 - 1),
        ma,
    }
}

/// 天魁, 天钺 by year stem: 甲戊庚 丑未, 乙己 子申, 辛 午寅, 壬癸 卯巳,
/// 丙丁 亥酉.
pub const fn kui_yue(stem: HeavenlyStem) -> (usize, usize) {
    let (kui, yue) = match stem {
        HeavenlyStem::Jia | HeavenlyStem::Wu | HeavenlyStem::Geng => (Eb::Chou, Eb::Wei),
        HeavenlyStem::Yi | HeavenlyStem::Ji => (Eb::Zi, Eb::Shen),
        HeavenlyStem::Xin => (Eb::Wu, Eb::Yin),
        HeavenlyStem::Bing | HeavenlyStem::Ding => (Eb::Hai, Eb::You),
        HeavenlyStem::Ren | HeavenlyStem::Gui => (Eb::Mao, Eb::Si),
    };
    (branch_slot(kui), branch_slot(yue))
}

/// 左辅 counts forward from 辰 and 右弼 backward from 戌 by the lunar
/// month (1-based).
pub const fn zuo_you(lunar_month: u32) -> (usize, usize) {
    let m = lunar_month as i64 - 1;
    (
        fix_index(branch_slot(Eb::Chen) as i64 + m),
        fix_index(branch_slot(Eb::Xu) as i64 - m),
    )
}

/// 文昌 counts backward from 戌 and 文曲 forward from 辰 by the hour.
pub const fn chang_qu(time: TimeIndex) -> (usize, usize) {
    let t = fix_index(time.value()) as i64;
    (
        fix_index(branch_slot(Eb::Xu) as i64 - t),
        fix_index(branch_slot(Eb::Chen) as i64 + t),
    )
}

/// 地空 counts backward and 地劫 forward from 亥 by the hour.
pub const fn kong_jie(time: TimeIndex) -> (usize, usize) {
    let t = fix_index(time.value()) as i64;
    let hai = branch_slot(Eb::Hai) as i64;
    (fix_index(hai - t), fix_index(hai + t))
}

/// 火星, 铃星: start from the year-branch group's 子-hour palaces and count
/// forward by the hour.
///
/// 申子辰人寅戌扬, 寅午戌人丑卯方, 巳酉丑人卯戌位, 亥卯未人酉戌房.
pub const fn huo_ling(year_branch: EarthlyBranch, time: TimeIndex) -> (usize, usize) {
    let t = fix_index(time.value()) as i64;
    let (huo, ling) = match year_branch {
        Eb::Yin | Eb::Wu | Eb::Xu => (Eb::Chou, Eb::Mao),
        Eb::Shen | Eb::Zi | Eb::Chen => (Eb::Yin, Eb::Xu),
        Eb::Si | Eb::You | Eb::Chou => (Eb::Mao, Eb::Xu),
        Eb::Hai | Eb::Wei | Eb::Mao => (Eb::You, Eb::Xu),
    };
    (
        fix_index(branch_slot(huo) as i64 + t),
        fix_index(branch_slot(ling) as i64 + t),
    )
}

/// 红鸾 counts backward from 卯 by the year branch; 天喜 is opposite.
pub const fn luan_xi(year_branch: EarthlyBranch) -> (usize, usize) {
    let hongluan = fix_index(branch_slot(Eb::Mao) as i64 - year_branch.index() as i64);
    (hongluan, fix_index(hongluan as i64 + 6))
}

/// 华盖, 咸池 by year-branch triad.
pub const fn huagai_xianchi(year_branch: EarthlyBranch) -> (usize, usize) {
    let (huagai, xianchi) = match year_branch {
        Eb::Yin | Eb::Wu | Eb::Xu => (Eb::Xu, Eb::Mao),
        Eb::Shen | Eb::Zi | Eb::Chen => (Eb::Chen, Eb::You),
        Eb::Si | Eb::You | Eb::Chou => (Eb::Chou, Eb::Wu),
        Eb::Hai | Eb::Wei | Eb::Mao => (Eb::Wei, Eb::Zi),
    };
    (branch_slot(huagai), branch_slot(xianchi))
}

/// 孤辰, 寡宿 by year-branch season.
pub const fn gu_gua(year_branch: EarthlyBranch) -> (usize, usize) {
    let (gu, gua) = match year_branch {
        Eb::Yin | Eb::Mao | Eb::Chen => (Eb::Si, Eb::Chou),
        Eb::Si | Eb::Wu | Eb::Wei => (Eb::Shen, Eb::Chen),
        Eb::Shen | Eb::You | Eb::Xu => (Eb::Hai, Eb::Wei),
        Eb::Hai | Eb::Zi | Eb::Chou => (Eb::Yin, Eb::Xu),
    };
    (branch_slot(gu), branch_slot(gua))
}

/// 劫杀 (中州): 申子辰 巳, 亥卯未 申, 寅午戌 亥, 巳酉丑 寅.
pub const fn jiesha_adj(year_branch: EarthlyBranch) -> usize {
    branch_slot(match year_branch {
        Eb::Shen | Eb::Zi | Eb::Chen => Eb::Si,
        Eb::Hai | Eb::Mao | Eb::Wei => Eb::Shen,
        Eb::Yin | Eb::Wu | Eb::Xu => Eb::Hai,
        Eb::Si | Eb::You | Eb::Chou => Eb::Yin,
    })
}

/// 大耗 (中州): one step off the opposite branch, forward for yang branches
/// and backward for yin ones.
pub const fn dahao_adj(year_branch: EarthlyBranch) -> usize {
    branch_slot(match year_branch {
        Eb::Zi => Eb::Wei,
        Eb::Chou => Eb::Wu,
        Eb::Yin => Eb::You,
        Eb::Mao => Eb::Shen,
        Eb::Chen => Eb::Hai,
        Eb::Si => Eb::Xu,
        Eb::Wu => Eb::Chou,
        Eb::Wei => Eb::Zi,
        Eb::Shen => Eb::Mao,
        Eb::You => Eb::Yin,
        Eb::Xu => Eb::Si,
        Eb::Hai => Eb::Chen,
    })
}

/// 年解 counts backward from 戌 by the year branch.
pub const fn nianjie(year_branch: EarthlyBranch) -> usize {
    fix_index(branch_slot(Eb::Xu) as i64 - year_branch.index() as i64)
}

/// 台辅 from 午 and 封诰 from 寅, forward by the hour.
pub const fn taifu_fenggao(time: TimeIndex) -> (usize, usize) {
    let t = fix_index(time.value()) as i64;
    (
        fix_index(branch_slot(Eb::Wu) as i64 + t),
        fix_index(branch_slot(Eb::Yin) as i64 + t),
    )
}

/// Stars counted by lunar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyStarIndices {
    pub santai: usize,
    pub bazuo: usize,
    pub enguang: usize,
    pub tiangui: usize,
}

/// 三台 from 左辅 forward and 八座 from 右弼 backward to the birth day;
/// 恩光 and 天贵 from 文昌 and 文曲 forward to the day, then back one.
pub fn daily_star_indices(month_index: usize, time: TimeIndex, lunar_day: u32) -> DailyStarIndices {
    let (zuo, you) = zuo_you(month_index as u32 + 1);
    let (chang, qu) = chang_qu(time);
    let day = if time.get() >= 12 {
        lunar_day as i64
    } else {
        lunar_day as i64 - 1
    };
    DailyStarIndices {
        santai: fix_index((zuo as i64 + day) % 12),
        bazuo: fix_index((you as i64 - day) % 12),
        enguang: fix_index((chang as i64 + day) % 12 - 1),
        tiangui: fix_index((qu as i64 + day) % 12 - 1),
    }
}

/// Stars counted by birth month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyStarIndices {
    pub jieshen: usize,
    pub tianyao: usize,
    pub tianxing: usize,
    pub yinsha: usize,
    pub tianyue: usize,
    pub tianwu: usize,
}

const JIESHEN: [Eb; 6] = [Eb::Shen, Eb::Xu, Eb::Zi, Eb::Yin, Eb::Chen, Eb::Wu];
const YINSHA: [Eb; 6] = [Eb::Yin, Eb::Zi, Eb::Xu, Eb::Shen, Eb::Wu, Eb::Chen];
const TIANYUE: [Eb; 12] = [
    Eb::Xu,
    Eb::Si,
    Eb::Chen,
    Eb::Yin,
    Eb::Wei,
    Eb::Mao,
    Eb::Hai,
    Eb::Wei,
    Eb::Yin,
    Eb::Wu,
    Eb::Xu,
    Eb::Yin,
];
const TIANWU: [Eb; 4] = [Eb::Si, Eb::Shen, Eb::Yin, Eb::Hai];

/// 月解, 天姚, 天刑, 阴煞, 天月 and 天巫 by month slot (0 = first month).
pub fn monthly_star_indices(month_index: usize) -> MonthlyStarIndices {
    let m = month_index % 12;
    MonthlyStarIndices {
        jieshen: branch_slot(JIESHEN[m / 2]),
        tianyao: fix_index(branch_slot(Eb::Chou) as i64 + m as i64),
        tianxing: fix_index(branch_slot(Eb::You) as i64 + m as i64),
        yinsha: branch_slot(YINSHA[m % 6]),
        tianyue: branch_slot(TIANYUE[m]),
        tianwu: branch_slot(TIANWU[m % 4]),
    }
}

/// Stars counted by birth year stem and branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyStarIndices {
    pub xianchi: usize,
    pub huagai: usize,
    pub guchen: usize,
    pub guasu: usize,
    pub tiancai: usize,
    pub tianshou: usize,
    pub tianchu: usize,
    pub posui: usize,
    pub feilian: usize,
    pub longchi: usize,
    pub fengge: usize,
    pub tianku: usize,
    pub tianxu: usize,
    pub tianguan: usize,
    pub tianfu: usize,
    pub tiande: usize,
    pub yuede: usize,
    pub tiankong: usize,
    pub jielu: usize,
    pub kongwang: usize,
    pub xunkong: usize,
    pub tianshang: usize,
    pub tianshi: usize,
    pub jiekong: usize,
    pub jiesha: usize,
    pub nianjie: usize,
    pub dahao: usize,
}

const TIANCHU: [Eb; 10] = [
    Eb::Si,
    Eb::Wu,
    Eb::Zi,
    Eb::Si,
    Eb::Wu,
    Eb::Shen,
    Eb::Yin,
    Eb::Wu,
    Eb::You,
    Eb::Hai,
];
const POSUI: [Eb; 3] = [Eb::Si, Eb::Chou, Eb::You];
const FEILIAN: [Eb; 12] = [
    Eb::Shen,
    Eb::You,
    Eb::Xu,
    Eb::Si,
    Eb::Wu,
    Eb::Wei,
    Eb::Yin,
    Eb::Mao,
    Eb::Chen,
    Eb::Hai,
    Eb::Zi,
    Eb::Chou,
];
const TIANGUAN: [Eb; 10] = [
    Eb::Wei,
    Eb::Chen,
    Eb::Si,
    Eb::Yin,
    Eb::Mao,
    Eb::You,
    Eb::Hai,
    Eb::You,
    Eb::Xu,
    Eb::Wu,
];
const TIANFU_ADJ: [Eb; 10] = [
    Eb::You,
    Eb::Shen,
    Eb::Zi,
    Eb::Hai,
    Eb::Mao,
    Eb::Yin,
    Eb::Wu,
    Eb::Si,
    Eb::Wu,
    Eb::Si,
];
const JIELU: [Eb; 5] = [Eb::Shen, Eb::Wu, Eb::Chen, Eb::Yin, Eb::Zi];
const KONGWANG: [Eb; 5] = [Eb::You, Eb::Wei, Eb::Si, Eb::Mao, Eb::Chou];

/// Inputs for [`yearly_star_indices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyStarInput {
    pub year_stem: HeavenlyStem,
    pub year_branch: EarthlyBranch,
    pub soul_index: usize,
    pub body_index: usize,
    pub gender: Gender,
    pub algorithm: Algorithm,
}

/// Year-driven adjective star positions.
///
/// Under [`Algorithm::Zhongzhou`], 天伤 and 天使 trade places when the
/// gender's polarity differs from the year branch's.
pub fn yearly_star_indices(input: YearlyStarInput) -> YearlyStarIndices {
    let stem = input.year_stem.index() as usize;
    let branch = input.year_branch.index() as i64;
    let (huagai, xianchi) = huagai_xianchi(input.year_branch);
    let (guchen, guasu) = gu_gua(input.year_branch);
    let jielu = branch_slot(JIELU[stem % 5]);
    let kongwang = branch_slot(KONGWANG[stem % 5]);

    let year_slot = branch_slot(input.year_branch) as i64;
    let mut xunkong = fix_index(
        year_slot + HeavenlyStem::Gui.index() as i64 - input.year_stem.index() as i64 + 1,
    );
    let parity = (branch % 2) as usize;
    if parity != xunkong % 2 {
        xunkong = fix_index(xunkong as i64 + 1);
    }
    let jiekong = if parity == 0 { jielu } else { kongwang };

    let mut tianshang = fix_index(
        PalaceName::Friends.index() as i64 + input.soul_index as i64,
    );
    let mut tianshi =
        fix_index(PalaceName::Health.index() as i64 + input.soul_index as i64);
    let same_polarity = parity == input.gender.index() as usize;
    if input.algorithm == Algorithm::Zhongzhou && !same_polarity {
        std::mem::swap(&mut tianshang, &mut tianshi);
    }

    YearlyStarIndices {
        xianchi,
        huagai,
        guchen,
        guasu,
        tiancai: fix_index(input.soul_index as i64 + branch),
        tianshou: fix_index(input.body_index as i64 + branch),
        tianchu: branch_slot(TIANCHU[stem]),
        posui: branch_slot(POSUI[(branch % 3) as usize]),
        feilian: branch_slot(FEILIAN[branch as usize]),
        longchi: fix_index(branch_slot(Eb::Chen) as i64 + branch),
        fengge: fix_index(branch_slot(Eb::Xu) as i64 - branch),
        tianku: fix_index(branch_slot(Eb::Wu) as i64 - branch),
        tianxu: fix_index(branch_slot(Eb::Wu) as i64 + branch),
        tianguan: branch_slot(TIANGUAN[stem]),
        tianfu: branch_slot(TIANFU_ADJ[stem]),
        tiande: fix_index(branch_slot(Eb::You) as i64 + branch),
        yuede: fix_index(branch_slot(Eb::Si) as i64 + branch),
        tiankong: fix_index(year_slot + 1),
        jielu,
        kongwang,
        xunkong,
        tianshang,
        tianshi,
        jiekong,
        jiesha: jiesha_adj(input.year_branch),
        nianjie: nianjie(input.year_branch),
        dahao: dahao_adj(input.year_branch),
    }
}

/// 流昌, 流曲 by a period stem.
pub const fn chang_qu_by_stem(stem: HeavenlyStem) -> (usize, usize) {
    let (chang, qu) = match stem {
        HeavenlyStem::Jia => (Eb::Si, Eb::You),
        HeavenlyStem::Yi => (Eb::Wu, Eb::Shen),
        HeavenlyStem::Bing | HeavenlyStem::Wu => (Eb::Shen, Eb::Wu),
        HeavenlyStem::Ding | HeavenlyStem::Ji => (Eb::You, Eb::Si),
        HeavenlyStem::Geng => (Eb::Hai, Eb::Mao),
        HeavenlyStem::Xin => (Eb::Zi, Eb::Yin),
        HeavenlyStem::Ren => (Eb::Yin, Eb::Zi),
        HeavenlyStem::Gui => (Eb::Mao, Eb::Hai),
    };
    (branch_slot(chang), branch_slot(qu))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(i: u8) -> TimeIndex {
        TimeIndex::new(i).unwrap()
    }

    #[test]
    fn ziwei_worked_examples() {
        // 27th day, wood-3: 27/3 = 9 from 寅 → 戌.
        assert_eq!(ziwei_index(27, 3), branch_slot(Eb::Xu));
        // 13th day, fire-6: +5 → 18/6 = 3 → 辰, back 5 → 亥.
        assert_eq!(ziwei_index(13, 6), branch_slot(Eb::Hai));
        // 6th day, earth-5: +4 → 10/5 = 2 → 卯, forward 4 → 未.
        assert_eq!(ziwei_index(6, 5), branch_slot(Eb::Wei));
    }

    #[test]
    fn ziwei_day_wraps_on_late_zi() {
        assert_eq!(ziwei_day(30, 30, t(12)), 1);
        assert_eq!(ziwei_day(29, 30, t(12)), 30);
        assert_eq!(ziwei_day(29, 30, t(11)), 29);
    }

    #[test]
    fn tianfu_mirror() {
        for z in 0..12 {
            let f = tianfu_index(z);
            assert!(f < 12);
            assert_eq!(fix_index(z as i64 + f as i64), 0);
        }
    }

    #[test]
    fn lucun_flanks() {
        let p = lu_yang_tuo_ma(HeavenlyStem::Geng, Eb::Chen);
        assert_eq!(p.lu, branch_slot(Eb::Shen));
        assert_eq!(p.yang, branch_slot(Eb::You));
        assert_eq!(p.tuo, branch_slot(Eb::Wei));
        assert_eq!(p.ma, branch_slot(Eb::Yin));
    }

    #[test]
    fn huoling_rhyme_example() {
        // 壬辰 year 卯 hour: 火 in 巳, 铃 in 丑.
        let (huo, ling) = huo_ling(Eb::Chen, t(3));
        assert_eq!(huo, branch_slot(Eb::Si));
        assert_eq!(ling, branch_slot(Eb::Chou));
    }

    #[test]
    fn zuo_you_first_month() {
        assert_eq!(zuo_you(1), (branch_slot(Eb::Chen), branch_slot(Eb::Xu)));
        assert_eq!(zuo_you(7), (branch_slot(Eb::Xu), branch_slot(Eb::Chen)));
    }

    #[test]
    fn late_zi_hour_stars_match_early_zi() {
        assert_eq!(chang_qu(t(12)), chang_qu(t(0)));
        assert_eq!(kong_jie(t(12)), kong_jie(t(0)));
    }

    #[test]
    fn zhongzhou_swaps_shang_shi() {
        let base = YearlyStarInput {
            year_stem: HeavenlyStem::Geng,
            year_branch: Eb::Chen,
            soul_index: 4,
            body_index: 8,
            gender: Gender::Female,
            algorithm: Algorithm::Default,
        };
        let plain = yearly_star_indices(base);
        let zz = yearly_star_indices(YearlyStarInput {
            algorithm: Algorithm::Zhongzhou,
            ..base
        });
        // Yang branch with a female chart: polarities differ.
        assert_eq!(plain.tianshang, zz.tianshi);
        assert_eq!(plain.tianshi, zz.tianshang);

        let male = yearly_star_indices(YearlyStarInput {
            gender: Gender::Male,
            algorithm: Algorithm::Zhongzhou,
            ..base
        });
        assert_eq!(male.tianshang, plain.tianshang);
    }

    #[test]
    fn all_indices_in_range() {
        for stem in ziwei_calendar::ALL_STEMS {
            for branch in ziwei_calendar::ALL_BRANCHES {
                let y = yearly_star_indices(YearlyStarInput {
                    year_stem: stem,
                    year_branch: branch,
                    soul_index: 11,
                    body_index: 0,
                    gender: Gender::Male,
                    algorithm: Algorithm::Zhongzhou,
                });
                assert!(y.xunkong < 12 && y.tiankong < 12 && y.dahao < 12);
                let (c, q) = chang_qu_by_stem(stem);
                assert!(c < 12 && q < 12);
            }
        }
        for m in 0..12 {
            let s = monthly_star_indices(m);
            assert!(s.tianyue < 12 && s.jieshen < 12);
        }
    }
}
