//! Chart queries.
//!
//! Star and mutagen predicates on single palaces, 三方四正 groups and
//! mutagen flights (飞化) between palaces.

use ziwei_base::{ALL_MUTAGENS, Brightness, Mutagen, PalaceName, StarKind, StarName};

use crate::astrolabe::{Astrolabe, Palace, Star};

/// Ways to pick a palace out of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PalaceRef {
    /// Slot counted from 寅.
    Index(usize),
    Name(PalaceName),
    /// 身宫
    Body,
    /// 来因宫
    Original,
}

impl From<usize> for PalaceRef {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<PalaceName> for PalaceRef {
    fn from(name: PalaceName) -> Self {
        Self::Name(name)
    }
}

impl Star {
    pub fn with_brightness(&self, brightness: &[Brightness]) -> bool {
        self.brightness.is_some_and(|b| brightness.contains(&b))
    }

    pub fn with_mutagen(&self, mutagens: &[Mutagen]) -> bool {
        self.mutagen.is_some_and(|m| mutagens.contains(&m))
    }
}

impl Palace {
    /// Holds every listed star.
    pub fn has(&self, stars: &[StarName]) -> bool {
        stars.iter().all(|s| self.contains(*s))
    }

    /// Holds none of the listed stars.
    pub fn not_have(&self, stars: &[StarName]) -> bool {
        !stars.iter().any(|s| self.contains(*s))
    }

    pub fn has_one_of(&self, stars: &[StarName]) -> bool {
        stars.iter().any(|s| self.contains(*s))
    }

    /// A major or minor star here carries `mutagen`.
    pub fn has_mutagen(&self, mutagen: Mutagen) -> bool {
        self.principal_stars().any(|s| s.mutagen == Some(mutagen))
    }

    pub fn not_have_mutagen(&self, mutagen: Mutagen) -> bool {
        !self.has_mutagen(mutagen)
    }

    /// No major star, and none of `exclude` either.
    pub fn is_empty(&self, exclude: &[StarName]) -> bool {
        if self.major_stars.iter().any(|s| s.kind() == StarKind::Major) {
            return false;
        }
        exclude.is_empty() || !self.has_one_of(exclude)
    }
}

/// 三方四正: a palace with its opposite, wealth and career positions.
#[derive(Debug, Clone, Copy)]
pub struct SurroundedPalaces<'a> {
    pub target: &'a Palace,
    pub opposite: &'a Palace,
    pub wealth: &'a Palace,
    pub career: &'a Palace,
}

impl<'a> SurroundedPalaces<'a> {
    pub fn palaces(&self) -> [&'a Palace; 4] {
        [self.target, self.opposite, self.wealth, self.career]
    }

    fn any_contains(&self, star: StarName) -> bool {
        self.palaces().iter().any(|p| p.contains(star))
    }

    /// Every listed star appears somewhere in the group.
    pub fn have(&self, stars: &[StarName]) -> bool {
        stars.iter().all(|s| self.any_contains(*s))
    }

    pub fn not_have(&self, stars: &[StarName]) -> bool {
        !stars.iter().any(|s| self.any_contains(*s))
    }

    pub fn have_one_of(&self, stars: &[StarName]) -> bool {
        stars.iter().any(|s| self.any_contains(*s))
    }

    pub fn have_mutagen(&self, mutagen: Mutagen) -> bool {
        self.palaces().iter().any(|p| p.has_mutagen(mutagen))
    }

    pub fn not_have_mutagen(&self, mutagen: Mutagen) -> bool {
        !self.have_mutagen(mutagen)
    }
}

impl Astrolabe {
    pub fn palace(&self, which: impl Into<PalaceRef>) -> Option<&Palace> {
        match which.into() {
            PalaceRef::Index(i) => self.palaces.get(i),
            PalaceRef::Name(name) => self.palaces.iter().find(|p| p.name == name),
            PalaceRef::Body => self.palaces.iter().find(|p| p.is_body_palace),
            PalaceRef::Original => self.palaces.iter().find(|p| p.is_original_palace),
        }
    }

    /// Palace holding `star`.
    pub fn star_palace(&self, star: StarName) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.contains(star))
    }

    pub fn star(&self, star: StarName) -> Option<&Star> {
        self.palaces
            .iter()
            .flat_map(|p| p.stars())
            .find(|s| s.name == star)
    }

    pub fn surrounded_palaces(&self, which: impl Into<PalaceRef>) -> Option<SurroundedPalaces<'_>> {
        let i = self.palace(which)?.index;
        Some(SurroundedPalaces {
            target: &self.palaces[i],
            opposite: &self.palaces[(i + 6) % 12],
            wealth: &self.palaces[(i + 8) % 12],
            career: &self.palaces[(i + 4) % 12],
        })
    }

    /// Stars the palace stem turns into each of `mutagens`.
    fn mutagen_stars(&self, palace: &Palace, mutagens: &[Mutagen]) -> Vec<StarName> {
        let row = self.mutagens_of(palace.stem);
        mutagens.iter().map(|m| row[m.index()]).collect()
    }

    /// The stem of `from` sends every one of `mutagens` into `to`.
    /// False for an empty list.
    pub fn flies_to(
        &self,
        from: impl Into<PalaceRef>,
        to: impl Into<PalaceRef>,
        mutagens: &[Mutagen],
    ) -> bool {
        let (Some(from), Some(to)) = (self.palace(from), self.palace(to)) else {
            return false;
        };
        let stars = self.mutagen_stars(from, mutagens);
        !stars.is_empty() && to.has(&stars)
    }

    /// At least one of `mutagens` lands in `to`. True for an empty list.
    pub fn flies_one_of_to(
        &self,
        from: impl Into<PalaceRef>,
        to: impl Into<PalaceRef>,
        mutagens: &[Mutagen],
    ) -> bool {
        let (Some(from), Some(to)) = (self.palace(from), self.palace(to)) else {
            return false;
        };
        let stars = self.mutagen_stars(from, mutagens);
        stars.is_empty() || to.has_one_of(&stars)
    }

    /// None of `mutagens` lands in `to`. True for an empty list.
    pub fn not_fly_to(
        &self,
        from: impl Into<PalaceRef>,
        to: impl Into<PalaceRef>,
        mutagens: &[Mutagen],
    ) -> bool {
        let (Some(from), Some(to)) = (self.palace(from), self.palace(to)) else {
            return false;
        };
        let stars = self.mutagen_stars(from, mutagens);
        stars.is_empty() || to.not_have(&stars)
    }

    /// The palace's own stem transforms stars inside it (自化), all of
    /// `mutagens`.
    pub fn self_mutaged(&self, which: impl Into<PalaceRef>, mutagens: &[Mutagen]) -> bool {
        match self.palace(which) {
            Some(p) => p.has(&self.mutagen_stars(p, mutagens)),
            None => false,
        }
    }

    /// Any of `mutagens` is self-transformed; an empty list means all four.
    pub fn self_mutaged_one_of(&self, which: impl Into<PalaceRef>, mutagens: &[Mutagen]) -> bool {
        let mutagens = if mutagens.is_empty() {
            &ALL_MUTAGENS[..]
        } else {
            mutagens
        };
        match self.palace(which) {
            Some(p) => p.has_one_of(&self.mutagen_stars(p, mutagens)),
            None => false,
        }
    }

    /// None of `mutagens` is self-transformed; an empty list means all four.
    pub fn not_self_mutaged(&self, which: impl Into<PalaceRef>, mutagens: &[Mutagen]) -> bool {
        let mutagens = if mutagens.is_empty() {
            &ALL_MUTAGENS[..]
        } else {
            mutagens
        };
        match self.palace(which) {
            Some(p) => p.not_have(&self.mutagen_stars(p, mutagens)),
            None => false,
        }
    }

    /// Palaces receiving the 禄 权 科 忌 of this palace's stem.
    pub fn mutaged_places(&self, which: impl Into<PalaceRef>) -> [Option<&Palace>; 4] {
        let Some(p) = self.palace(which) else {
            return [None; 4];
        };
        self.mutagens_of(p.stem).map(|star| self.star_palace(star))
    }
}
