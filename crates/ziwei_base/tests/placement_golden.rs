//! Placement checks against a hand-cast reference chart and cyclic
//! properties of the rules.
//!
//! Reference: solar 2000-08-16, 寅 hour, female; lunar 七月十七, 庚辰 year.

use ziwei_base::{
    ALL_FIVE_ELEMENTS_CLASSES, AdjectiveStarInput, Algorithm, FiveElementsClass, Gender,
    MinorStarInput, PalaceName, StarName, YearlyStarInput, branch_slot, changsheng12, decadals,
    month_index, palace_names, place_adjective_stars, place_major_stars, place_minor_stars,
    runs_forward, soul_and_body, soul_master, body_master, tianfu_index, ziwei_day, ziwei_index,
};
use ziwei_calendar::{EarthlyBranch, HeavenlyStem, StemBranch, TimeIndex};

fn yin_hour() -> TimeIndex {
    TimeIndex::new(2).unwrap()
}

#[test]
fn reference_soul_and_body() {
    let mi = month_index(7, false, 17, yin_hour(), true);
    assert_eq!(mi, 6);
    let sb = soul_and_body(mi, yin_hour(), HeavenlyStem::Geng, None);
    assert_eq!(sb.soul_index, 4);
    assert_eq!(sb.body_index, 8);
    assert_eq!(sb.soul_stem, HeavenlyStem::Ren);
    assert_eq!(sb.soul_branch, EarthlyBranch::Wu);
    assert_eq!(soul_master(sb.soul_branch), StarName::Pojun);
    assert_eq!(body_master(EarthlyBranch::Chen), StarName::Wenchang);

    let names = palace_names(sb.soul_index);
    assert_eq!(names[4], PalaceName::Soul);
    assert_eq!(names[8], PalaceName::Career);
}

#[test]
fn reference_bureau_and_ziwei() {
    let class = FiveElementsClass::of(HeavenlyStem::Ren, EarthlyBranch::Wu);
    assert_eq!(class, FiveElementsClass::Wood3);
    let day = ziwei_day(17, 29, yin_hour());
    let ziwei = ziwei_index(day, class.bureau());
    assert_eq!(ziwei, 4);
    assert_eq!(tianfu_index(ziwei), 8);
}

#[test]
fn reference_star_counts() {
    let majors = place_major_stars(4);
    let minors = place_minor_stars(MinorStarInput {
        month_index: 6,
        time: yin_hour(),
        year_stem: HeavenlyStem::Geng,
        year_branch: EarthlyBranch::Chen,
    });
    let adjectives = place_adjective_stars(AdjectiveStarInput {
        month_index: 6,
        time: yin_hour(),
        lunar_day: 17,
        luan_xi_branch: EarthlyBranch::Chen,
        yearly: YearlyStarInput {
            year_stem: HeavenlyStem::Geng,
            year_branch: EarthlyBranch::Chen,
            soul_index: 4,
            body_index: 8,
            gender: Gender::Female,
            algorithm: Algorithm::Default,
        },
    });
    assert_eq!(majors.len(), 14);
    assert_eq!(minors.len(), 14);
    assert_eq!(adjectives.len(), 38);
}

#[test]
fn reference_rings_run_backward() {
    assert!(!runs_forward(Gender::Female, EarthlyBranch::Chen));
    let ring = changsheng12(FiveElementsClass::Wood3, false);
    assert_eq!(ring[branch_slot(EarthlyBranch::Hai)].name(), "长生");
    assert_eq!(ring[branch_slot(EarthlyBranch::Xu)].name(), "沐浴");
    let d = decadals(4, FiveElementsClass::Wood3, HeavenlyStem::Geng, false);
    assert_eq!(d[4].range, (3, 12));
}

#[test]
fn nayin_pairs_share_a_bureau() {
    for i in (0..60).step_by(2) {
        let a = StemBranch::from_cycle(i);
        let b = StemBranch::from_cycle(i + 1);
        assert_eq!(
            FiveElementsClass::of(a.stem, a.branch),
            FiveElementsClass::of(b.stem, b.branch),
            "{a} / {b}"
        );
    }
    assert_eq!(
        FiveElementsClass::of(HeavenlyStem::Jia, EarthlyBranch::Zi),
        FiveElementsClass::Metal4
    );
    assert_eq!(
        FiveElementsClass::of(HeavenlyStem::Bing, EarthlyBranch::Yin),
        FiveElementsClass::Fire6
    );
    assert_eq!(
        FiveElementsClass::of(HeavenlyStem::Geng, EarthlyBranch::Wu),
        FiveElementsClass::Earth5
    );
    assert_eq!(
        FiveElementsClass::of(HeavenlyStem::Bing, EarthlyBranch::Zi),
        FiveElementsClass::Water2
    );
}

#[test]
fn every_bureau_appears_twelve_times() {
    for class in ALL_FIVE_ELEMENTS_CLASSES {
        let count = (0..60)
            .map(StemBranch::from_cycle)
            .filter(|sb| FiveElementsClass::of(sb.stem, sb.branch) == class)
            .count();
        assert_eq!(count, 12, "{}", class.name());
    }
}

#[test]
fn ziwei_day_one_of_each_bureau() {
    // The first day always lands in 丑, 辰, 亥, 午 or 酉 by bureau.
    let expected = [
        (FiveElementsClass::Water2, EarthlyBranch::Chou),
        (FiveElementsClass::Wood3, EarthlyBranch::Chen),
        (FiveElementsClass::Metal4, EarthlyBranch::Hai),
        (FiveElementsClass::Earth5, EarthlyBranch::Wu),
        (FiveElementsClass::Fire6, EarthlyBranch::You),
    ];
    for (class, branch) in expected {
        assert_eq!(ziwei_index(1, class.bureau()), branch_slot(branch), "{}", class.name());
    }
}

#[test]
fn ziwei_and_tianfu_mirror() {
    for class in ALL_FIVE_ELEMENTS_CLASSES {
        for day in 1..=30 {
            let z = ziwei_index(day, class.bureau());
            assert!(z < 12);
            assert_eq!((z + tianfu_index(z)) % 12, 0);
        }
    }
}

#[test]
fn soul_body_symmetry() {
    for month in 0..12 {
        for t in 0..=12u8 {
            let time = TimeIndex::new(t).unwrap();
            let sb = soul_and_body(month, time, HeavenlyStem::Jia, None);
            assert_eq!((sb.soul_index + sb.body_index) % 12, (2 * month) % 12);
            if matches!(t, 0 | 6 | 12) {
                assert_eq!(sb.soul_index, sb.body_index);
            }
        }
    }
}

#[test]
fn anchored_soul() {
    let sb = soul_and_body(6, yin_hour(), HeavenlyStem::Geng, Some(EarthlyBranch::Zi));
    assert_eq!(sb.soul_branch, EarthlyBranch::Zi);
    assert_eq!(sb.body_index, (branch_slot(EarthlyBranch::Zi) + 4) % 12);
}
