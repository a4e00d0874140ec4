//! Serializable chart and horoscope records.
//!
//! Views are built from the typed model for one [`Locale`]; only the display
//! strings differ between locales. Field names follow the JSON shape
//! consumed by renderers and persistence layers.

use serde::{Deserialize, Serialize};
use ziwei_base::{MutagenRow, PalaceName, Scope, StarName};
use ziwei_calendar::{LunarDate, Pillars, StemBranch};

use crate::astrolabe::{Astrolabe, Palace, Star};
use crate::horoscope::{AgeItem, Horoscope, HoroscopeItem, PeriodName, YearlyDecStar};
use crate::i18n::{Locale, Localize, to_traditional};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarView {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutagen: Option<String>,
}

impl StarView {
    fn natal(star: &Star, locale: Locale) -> Self {
        Self {
            name: star.name.localize(locale),
            kind: star.kind().key().to_string(),
            scope: Scope::Origin.key().to_string(),
            brightness: star.brightness.map(|b| b.localize(locale)),
            mutagen: star.mutagen.map(|m| m.localize(locale)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadalView {
    pub range: [u32; 2],
    pub heavenly_stem: String,
    pub earthly_branch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalaceView {
    pub index: usize,
    pub name: String,
    pub is_body_palace: bool,
    pub is_soul_palace: bool,
    pub is_original_palace: bool,
    pub heavenly_stem: String,
    pub earthly_branch: String,
    pub major_stars: Vec<StarView>,
    pub minor_stars: Vec<StarView>,
    pub adjective_stars: Vec<StarView>,
    pub changsheng12: String,
    pub boshi12: String,
    pub jiangqian12: String,
    pub suiqian12: String,
    pub decadal: DecadalView,
    pub ages: Vec<u32>,
}

impl PalaceView {
    fn from_palace(palace: &Palace, locale: Locale) -> Self {
        let stars = |list: &[Star]| -> Vec<StarView> {
            list.iter().map(|s| StarView::natal(s, locale)).collect()
        };
        Self {
            index: palace.index,
            name: palace.name.localize(locale),
            is_body_palace: palace.is_body_palace,
            is_soul_palace: palace.name == PalaceName::Soul,
            is_original_palace: palace.is_original_palace,
            heavenly_stem: palace.stem.localize(locale),
            earthly_branch: palace.branch.localize(locale),
            major_stars: stars(&palace.major_stars),
            minor_stars: stars(&palace.minor_stars),
            adjective_stars: stars(&palace.adjective_stars),
            changsheng12: palace.changsheng12.localize(locale),
            boshi12: palace.boshi12.localize(locale),
            jiangqian12: palace.jiangqian12.localize(locale),
            suiqian12: palace.suiqian12.localize(locale),
            decadal: DecadalView {
                range: [palace.decadal.range.0, palace.decadal.range.1],
                heavenly_stem: palace.decadal.stem.localize(locale),
                earthly_branch: palace.decadal.branch.localize(locale),
            },
            ages: palace.ages.to_vec(),
        }
    }
}

/// A natal chart as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstrolabeView {
    pub gender: String,
    pub solar_date: String,
    pub lunar_date: String,
    pub chinese_date: String,
    pub time: String,
    pub time_range: String,
    pub sign: String,
    pub zodiac: String,
    pub earthly_branch_of_soul_palace: String,
    pub earthly_branch_of_body_palace: String,
    pub soul: String,
    pub body: String,
    pub five_elements_class: String,
    pub palaces: Vec<PalaceView>,
}

impl AstrolabeView {
    pub fn from_astrolabe(chart: &Astrolabe, locale: Locale) -> Self {
        Self {
            gender: chart.gender.localize(locale),
            solar_date: chart.solar_date.to_string(),
            lunar_date: lunar_text(&chart.lunar_date, locale),
            chinese_date: pillars_text(&chart.chinese_date, locale),
            time: chart.time.localize(locale),
            time_range: chart.time.range().to_string(),
            sign: chart.sign.localize(locale),
            zodiac: chart.zodiac.localize(locale),
            earthly_branch_of_soul_palace: chart.soul_branch.localize(locale),
            earthly_branch_of_body_palace: chart.body_branch.localize(locale),
            soul: chart.soul.localize(locale),
            body: chart.body.localize(locale),
            five_elements_class: chart.five_elements_class.localize(locale),
            palaces: chart
                .palaces
                .iter()
                .map(|p| PalaceView::from_palace(p, locale))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyDecStarView {
    pub jiangqian12: Vec<String>,
    pub suiqian12: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeItemView {
    pub index: usize,
    pub name: String,
    pub heavenly_stem: String,
    pub earthly_branch: String,
    pub palace_names: Vec<String>,
    pub mutagen: Vec<String>,
    /// Period stars per palace slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<Vec<Vec<StarView>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nominal_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly_dec_star: Option<YearlyDecStarView>,
}

fn mutagen_names(row: &MutagenRow, locale: Locale) -> Vec<String> {
    row.iter().map(|s: &StarName| s.localize(locale)).collect()
}

impl HoroscopeItemView {
    fn from_item(item: &HoroscopeItem, locale: Locale) -> Self {
        let mut stars = vec![Vec::new(); 12];
        for (star, slot) in &item.stars {
            stars[slot % 12].push(StarView {
                name: star.localize(locale),
                kind: star.star_kind().key().to_string(),
                scope: star.scope.key().to_string(),
                brightness: None,
                mutagen: None,
            });
        }
        Self {
            index: item.index,
            name: item.name.localize(locale),
            heavenly_stem: item.stem.localize(locale),
            earthly_branch: item.branch.localize(locale),
            palace_names: item.palace_names.iter().map(|n| n.localize(locale)).collect(),
            mutagen: mutagen_names(&item.mutagens, locale),
            stars: Some(stars),
            nominal_age: None,
            yearly_dec_star: None,
        }
    }

    fn from_age(item: &AgeItem, locale: Locale) -> Self {
        Self {
            index: item.index,
            name: PeriodName::Age.localize(locale),
            heavenly_stem: item.stem.localize(locale),
            earthly_branch: item.branch.localize(locale),
            palace_names: item.palace_names.iter().map(|n| n.localize(locale)).collect(),
            mutagen: mutagen_names(&item.mutagens, locale),
            stars: None,
            nominal_age: Some(item.nominal_age),
            yearly_dec_star: None,
        }
    }
}

impl YearlyDecStarView {
    fn from_rings(rings: &YearlyDecStar, locale: Locale) -> Self {
        Self {
            jiangqian12: rings.jiangqian12.iter().map(|r| r.localize(locale)).collect(),
            suiqian12: rings.suiqian12.iter().map(|r| r.localize(locale)).collect(),
        }
    }
}

/// Every period at a target date as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeView {
    pub solar_date: String,
    pub lunar_date: String,
    pub decadal: HoroscopeItemView,
    pub age: HoroscopeItemView,
    pub yearly: HoroscopeItemView,
    pub monthly: HoroscopeItemView,
    pub daily: HoroscopeItemView,
    pub hourly: HoroscopeItemView,
}

impl HoroscopeView {
    pub fn from_horoscope(horoscope: &Horoscope, locale: Locale) -> Self {
        let mut yearly = HoroscopeItemView::from_item(&horoscope.yearly, locale);
        yearly.yearly_dec_star = Some(YearlyDecStarView::from_rings(
            &horoscope.yearly_dec_star,
            locale,
        ));
        Self {
            solar_date: horoscope.solar_date.to_string(),
            lunar_date: lunar_text(&horoscope.lunar_date, locale),
            decadal: HoroscopeItemView::from_item(&horoscope.decadal, locale),
            age: HoroscopeItemView::from_age(&horoscope.age, locale),
            yearly,
            monthly: HoroscopeItemView::from_item(&horoscope.monthly, locale),
            daily: HoroscopeItemView::from_item(&horoscope.daily, locale),
            hourly: HoroscopeItemView::from_item(&horoscope.hourly, locale),
        }
    }
}

fn lunar_text(date: &LunarDate, locale: Locale) -> String {
    match locale {
        Locale::ZhCn => date.to_string(),
        Locale::ZhTw => to_traditional(&date.to_string()),
        Locale::EnUs => {
            let leap = if date.is_leap { "L" } else { "" };
            format!("{}-{leap}{}-{}", date.year, date.month, date.day)
        }
    }
}

fn pillar_text(p: StemBranch, locale: Locale) -> String {
    match locale {
        Locale::EnUs => format!("{}-{}", p.stem.localize(locale), p.branch.localize(locale)),
        _ => format!("{}{}", p.stem.localize(locale), p.branch.localize(locale)),
    }
}

fn pillars_text(p: &Pillars, locale: Locale) -> String {
    [p.yearly, p.monthly, p.daily, p.hourly]
        .map(|sb| pillar_text(sb, locale))
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::engine::ZiweiEngine;
    use ziwei_base::Gender;
    use ziwei_calendar::{SolarDate, TimeIndex};

    fn chart() -> Astrolabe {
        ZiweiEngine::new(ChartConfig::default())
            .unwrap()
            .by_solar(
                SolarDate::new(2000, 8, 16).unwrap(),
                TimeIndex::new(2).unwrap(),
                Gender::Female,
                true,
            )
            .unwrap()
    }

    #[test]
    fn top_level_fields() {
        let v = AstrolabeView::from_astrolabe(&chart(), Locale::ZhCn);
        assert_eq!(v.solar_date, "2000-8-16");
        assert_eq!(v.lunar_date, "二〇〇〇年七月十七");
        assert_eq!(v.chinese_date, "庚辰 甲申 丙午 庚寅");
        assert_eq!(v.time, "寅时");
        assert_eq!(v.time_range, "03:00~05:00");
        assert_eq!(v.sign, "狮子座");
        assert_eq!(v.zodiac, "龙");
        assert_eq!(v.earthly_branch_of_soul_palace, "午");
        assert_eq!(v.earthly_branch_of_body_palace, "戌");
        assert_eq!(v.soul, "破军");
        assert_eq!(v.body, "文昌");
        assert_eq!(v.five_elements_class, "木三局");
        assert_eq!(v.palaces.len(), 12);
        assert!(v.palaces[4].is_soul_palace);
    }

    #[test]
    fn json_keys_are_camel_case() {
        let json = serde_json::to_value(AstrolabeView::from_astrolabe(&chart(), Locale::EnUs))
            .unwrap();
        assert!(json.get("earthlyBranchOfSoulPalace").is_some());
        assert_eq!(json["earthlyBranchOfSoulPalace"], "wu");
        let soul = &json["palaces"][4];
        assert_eq!(soul["majorStars"][0]["name"], "ziweiMaj");
        assert_eq!(soul["majorStars"][0]["type"], "major");
        assert_eq!(soul["majorStars"][0]["scope"], "origin");
    }

    #[test]
    fn traditional_view() {
        let v = AstrolabeView::from_astrolabe(&chart(), Locale::ZhTw);
        assert_eq!(v.zodiac, "龍");
        assert_eq!(v.soul, "破軍");
    }

    #[test]
    fn round_trips_through_json() {
        let v = AstrolabeView::from_astrolabe(&chart(), Locale::ZhCn);
        let text = serde_json::to_string(&v).unwrap();
        let back: AstrolabeView = serde_json::from_str(&text).unwrap();
        assert_eq!(back, v);
    }
}
