//! Reference chart: solar 2000-08-16, 寅 hour, female.

use ziwei_engine::analyzer::PalaceRef;
use ziwei_engine::view::AstrolabeView;
use ziwei_engine::{
    AstroType, Astrolabe, ChartConfig, ChartOptions, EarthlyBranch, FiveElementsClass, Gender,
    HeavenlyStem, Locale, LunarDate, PalaceName, SolarDate, StarName, TimeIndex, ZiweiEngine,
};
use ziwei_engine::i18n::parse_star;

fn engine() -> ZiweiEngine {
    ZiweiEngine::new(ChartConfig::default()).unwrap()
}

fn reference() -> Astrolabe {
    engine()
        .by_solar(
            SolarDate::new(2000, 8, 16).unwrap(),
            TimeIndex::new(2).unwrap(),
            Gender::Female,
            true,
        )
        .unwrap()
}

#[test]
fn metadata() {
    let v = AstrolabeView::from_astrolabe(&reference(), Locale::ZhCn);
    assert_eq!(v.gender, "女");
    assert_eq!(v.lunar_date, "二〇〇〇年七月十七");
    assert_eq!(v.chinese_date, "庚辰 甲申 丙午 庚寅");
    assert_eq!(v.sign, "狮子座");
    assert_eq!(v.zodiac, "龙");
    assert_eq!(v.earthly_branch_of_soul_palace, "午");
    assert_eq!(v.earthly_branch_of_body_palace, "戌");
    assert_eq!(v.soul, "破军");
    assert_eq!(v.body, "文昌");
    assert_eq!(v.five_elements_class, "木三局");
}

#[test]
fn tiger_palace() {
    let chart = reference();
    let p = &chart.palaces[0];
    assert_eq!(p.name, PalaceName::Wealth);
    assert_eq!(p.stem, HeavenlyStem::Wu);
    assert_eq!(p.branch, EarthlyBranch::Yin);
    assert!(p.has(&[StarName::Wuqu, StarName::Tianxiang]));
    assert_eq!(p.decadal.range, (43, 52));
    assert_eq!(p.ages, [9, 21, 33, 45, 57, 69, 81, 93, 105, 117]);

    let v = AstrolabeView::from_astrolabe(&chart, Locale::ZhCn);
    assert_eq!(v.palaces[0].changsheng12, "绝");
    assert_eq!(v.palaces[0].boshi12, "飞廉");
    assert_eq!(v.palaces[0].jiangqian12, "岁驿");
    assert_eq!(v.palaces[0].suiqian12, "吊客");
}

#[test]
fn soul_and_body_palaces() {
    let chart = reference();
    let soul = chart.soul_palace();
    assert_eq!(soul.branch, EarthlyBranch::Wu);
    assert_eq!(soul.stem, HeavenlyStem::Ren);
    assert_eq!(soul.decadal.range, (3, 12));
    let body = chart.palace(PalaceRef::Body).unwrap();
    assert_eq!(body.branch, EarthlyBranch::Xu);
    assert_eq!(body.name, PalaceName::Career);
    let original = chart.palace(PalaceRef::Original).unwrap();
    assert_eq!(original.branch, EarthlyBranch::Chen);
}

#[test]
fn major_star_layout() {
    let chart = reference();
    let at = |star| chart.star_palace(star).unwrap().branch;
    assert_eq!(at(StarName::Ziwei), EarthlyBranch::Wu);
    assert_eq!(at(StarName::Tianji), EarthlyBranch::Si);
    assert_eq!(at(StarName::Taiyang), EarthlyBranch::Mao);
    assert_eq!(at(StarName::Wuqu), EarthlyBranch::Yin);
    assert_eq!(at(StarName::Tiantong), EarthlyBranch::Chou);
    assert_eq!(at(StarName::Lianzhen), EarthlyBranch::Xu);
    assert_eq!(at(StarName::Tianfu), EarthlyBranch::Xu);
    assert_eq!(at(StarName::Taiyin), EarthlyBranch::Hai);
    assert_eq!(at(StarName::Tanlang), EarthlyBranch::Zi);
    assert_eq!(at(StarName::Jumen), EarthlyBranch::Chou);
    assert_eq!(at(StarName::Tianxiang), EarthlyBranch::Yin);
    assert_eq!(at(StarName::Tianliang), EarthlyBranch::Mao);
    assert_eq!(at(StarName::Qisha), EarthlyBranch::Chen);
    assert_eq!(at(StarName::Pojun), EarthlyBranch::Shen);
}

#[test]
fn lunar_input_matches_solar() {
    let lunar = LunarDate {
        year: 2000,
        month: 7,
        day: 17,
        is_leap: false,
    };
    let chart = engine()
        .by_lunar(lunar, TimeIndex::new(2).unwrap(), Gender::Female, true)
        .unwrap();
    assert_eq!(chart, reference());
}

#[test]
fn human_chart_anchors_on_spirit_palace() {
    let options = ChartOptions::solar(
        SolarDate::new(2000, 8, 16).unwrap(),
        TimeIndex::new(2).unwrap(),
        Gender::Female,
    )
    .with_astro_type(AstroType::Human);
    let chart = engine().with_options(&options).unwrap();
    // Heaven 福德 sits in 申 (甲申, 泉中水).
    assert_eq!(chart.soul_branch, EarthlyBranch::Shen);
    assert_eq!(chart.five_elements_class, FiveElementsClass::Water2);
    assert_eq!(chart.soul_palace().branch, EarthlyBranch::Shen);
    assert_eq!(chart.soul_palace().decadal.range.0, 2);
    // Body branch keeps the heaven value.
    assert_eq!(chart.body_branch, EarthlyBranch::Xu);
    // Minor stars do not move.
    assert_eq!(
        chart.star_palace(StarName::Lucun).unwrap().branch,
        reference().star_palace(StarName::Lucun).unwrap().branch
    );
}

#[test]
fn star_placement_is_locale_independent() {
    let chart = reference();
    let zh = AstrolabeView::from_astrolabe(&chart, Locale::ZhCn);
    let tw = AstrolabeView::from_astrolabe(&chart, Locale::ZhTw);
    let en = AstrolabeView::from_astrolabe(&chart, Locale::EnUs);
    for ((a, b), c) in zh.palaces.iter().zip(&tw.palaces).zip(&en.palaces) {
        let stars = |p: &ziwei_engine::view::PalaceView| -> Vec<StarName> {
            p.major_stars
                .iter()
                .chain(&p.minor_stars)
                .chain(&p.adjective_stars)
                .map(|s| parse_star(&s.name).unwrap())
                .collect()
        };
        assert_eq!(stars(a), stars(b));
        assert_eq!(stars(a), stars(c));
    }
}

#[test]
fn json_is_deterministic() {
    let a = serde_json::to_string(&AstrolabeView::from_astrolabe(&reference(), Locale::ZhCn))
        .unwrap();
    let b = serde_json::to_string(&AstrolabeView::from_astrolabe(&reference(), Locale::ZhCn))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn out_of_range_dates_fail() {
    let err = engine()
        .by_solar(
            SolarDate::new(1850, 1, 1).unwrap(),
            TimeIndex::new(0).unwrap(),
            Gender::Male,
            true,
        )
        .unwrap_err();
    assert!(matches!(err, ziwei_engine::EngineError::DateOutOfRange(_)));
}

#[test]
fn leap_month_birth_splits_at_fifteenth() {
    // 2020 闰四月二十, 寅 hour.
    let birth = LunarDate {
        year: 2020,
        month: 4,
        day: 20,
        is_leap: true,
    };
    let t = TimeIndex::new(2).unwrap();
    let fixed = engine().by_lunar(birth, t, Gender::Male, true).unwrap();
    let plain = engine().by_lunar(birth, t, Gender::Male, false).unwrap();
    assert_eq!(fixed.solar_date, SolarDate::new(2020, 6, 11).unwrap());

    // Counted as 五月: soul 辰, body 申.
    assert_eq!(fixed.soul_branch, EarthlyBranch::Chen);
    assert_eq!(fixed.body_branch, EarthlyBranch::Shen);
    assert_eq!(fixed.soul_palace().stem, HeavenlyStem::Geng);
    assert_eq!(fixed.five_elements_class, FiveElementsClass::Metal4);

    // Counted as 四月: soul 卯, body 未.
    assert_eq!(plain.soul_branch, EarthlyBranch::Mao);
    assert_eq!(plain.body_branch, EarthlyBranch::Wei);
    assert_eq!(plain.soul_palace().stem, HeavenlyStem::Ji);
    assert_eq!(plain.five_elements_class, FiveElementsClass::Earth5);

    // 闰四月初十 stays in 四月 either way.
    let early = LunarDate { day: 10, ..birth };
    let a = engine().by_lunar(early, t, Gender::Male, true).unwrap();
    let b = engine().by_lunar(early, t, Gender::Male, false).unwrap();
    assert_eq!(a.soul_branch, EarthlyBranch::Mao);
    assert_eq!(a.palaces, b.palaces);
}
