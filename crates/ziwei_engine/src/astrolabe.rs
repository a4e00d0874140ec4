//! The assembled natal chart.

use ziwei_base::{
    Boshi12, Brightness, Changsheng12, Decadal, FiveElementsClass, Gender, Jiangqian12, Mutagen,
    MutagenRow, PalaceName, StarKind, StarName, Suiqian12,
};
use ziwei_calendar::{
    EarthlyBranch, HeavenlyStem, LunarDate, Pillars, SolarDate, TimeIndex, WesternSign, Zodiac,
};

/// Chart anchoring system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AstroType {
    /// 天盘: the plain chart.
    #[default]
    Heaven,
    /// 地盘: re-anchored on the body palace.
    Earth,
    /// 人盘: re-anchored on the spirit (福德) palace.
    Human,
}

impl AstroType {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Heaven => "heaven",
            Self::Earth => "earth",
            Self::Human => "human",
        }
    }
}

/// A natal star as placed in a palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub name: StarName,
    pub brightness: Option<Brightness>,
    pub mutagen: Option<Mutagen>,
}

impl Star {
    pub const fn kind(&self) -> StarKind {
        self.name.kind()
    }
}

/// One of the twelve palaces, indexed from 寅.
#[derive(Debug, Clone, PartialEq)]
pub struct Palace {
    pub index: usize,
    pub name: PalaceName,
    pub is_body_palace: bool,
    /// 来因宫: stem equals the year stem, 子 and 丑 excluded.
    pub is_original_palace: bool,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub major_stars: Vec<Star>,
    pub minor_stars: Vec<Star>,
    pub adjective_stars: Vec<Star>,
    pub changsheng12: Changsheng12,
    pub boshi12: Boshi12,
    pub jiangqian12: Jiangqian12,
    pub suiqian12: Suiqian12,
    pub decadal: Decadal,
    pub ages: [u32; 10],
}

impl Palace {
    /// Major, minor and adjective stars in placement order.
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.major_stars
            .iter()
            .chain(self.minor_stars.iter())
            .chain(self.adjective_stars.iter())
    }

    /// Major and minor stars, the ones that carry mutagens.
    pub fn principal_stars(&self) -> impl Iterator<Item = &Star> {
        self.major_stars.iter().chain(self.minor_stars.iter())
    }

    pub fn contains(&self, star: StarName) -> bool {
        self.stars().any(|s| s.name == star)
    }
}

/// A complete natal chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Astrolabe {
    pub gender: Gender,
    pub solar_date: SolarDate,
    pub lunar_date: LunarDate,
    /// Birth pillars with the original time slot.
    pub chinese_date: Pillars,
    pub time: TimeIndex,
    pub sign: WesternSign,
    pub zodiac: Zodiac,
    pub soul_branch: EarthlyBranch,
    pub body_branch: EarthlyBranch,
    /// 命主
    pub soul: StarName,
    /// 身主
    pub body: StarName,
    pub five_elements_class: FiveElementsClass,
    pub astro_type: AstroType,
    pub palaces: [Palace; 12],
    /// Mutagen table in force when the chart was built, by stem index.
    pub(crate) mutagens: [MutagenRow; 10],
}

impl Astrolabe {
    /// Mutagen stars of a stem under this chart's configuration.
    pub fn mutagens_of(&self, stem: HeavenlyStem) -> MutagenRow {
        self.mutagens[stem.index() as usize]
    }

    /// Palace index holding the given palace name.
    pub fn index_of(&self, name: PalaceName) -> Option<usize> {
        self.palaces.iter().position(|p| p.name == name)
    }

    pub fn soul_palace(&self) -> &Palace {
        self.palaces
            .iter()
            .find(|p| p.name == PalaceName::Soul)
            .unwrap_or(&self.palaces[0])
    }

    pub fn body_palace(&self) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.is_body_palace)
    }
}
