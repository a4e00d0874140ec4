//! Small shared enums: gender, algorithm variant and period scope.

use ziwei_calendar::YinYang;

/// Binary gender as used by the direction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Male is yang, female is yin.
    pub const fn yin_yang(self) -> YinYang {
        match self {
            Self::Male => YinYang::Yang,
            Self::Female => YinYang::Yin,
        }
    }

    /// 0 for male, 1 for female.
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Placement school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Default,
    /// 中州派: 截空/劫杀/大耗 instead of 截路/空亡, and a gender-dependent
    /// 天伤/天使 swap.
    Zhongzhou,
}

impl Algorithm {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Zhongzhou => "zhongzhou",
        }
    }
}

/// Which chart layer a star or palace-name table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    Origin,
    Decadal,
    Yearly,
    Monthly,
    Daily,
    Hourly,
}

pub const ALL_SCOPES: [Scope; 6] = [
    Scope::Origin,
    Scope::Decadal,
    Scope::Yearly,
    Scope::Monthly,
    Scope::Daily,
    Scope::Hourly,
];

impl Scope {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Decadal => "decadal",
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }

    /// Period name, e.g. `大限`, `流年`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Origin => "本命",
            Self::Decadal => "大限",
            Self::Yearly => "流年",
            Self::Monthly => "流月",
            Self::Daily => "流日",
            Self::Hourly => "流时",
        }
    }
}
