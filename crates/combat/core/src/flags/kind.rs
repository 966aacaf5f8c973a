//! Semantic kinds of object flags.

use bitflags::bitflags;

/// The semantic kind of an object flag. Every flag has exactly one.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FlagKind {
    Stat,
    Resist,
    Slay,
    Brand,
    Hurt,
    Curse,
    Sustain,
    Misc,
    Info,
}

impl FlagKind {
    /// Human-readable description of the kind.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Stat => "Statistic modifier",
            Self::Resist => "Resistance or immunity",
            Self::Slay => "Slay",
            Self::Brand => "Elemental brand",
            Self::Hurt => "Damage against a creature type",
            Self::Curse => "Curse",
            Self::Sustain => "Sustain",
            Self::Misc => "Miscellaneous ability",
            Self::Info => "Identification hint",
        }
    }

    /// Kinds whose flags feed the multiplier vector of a weapon.
    pub const fn is_modifier(self) -> bool {
        matches!(self, Self::Slay | Self::Brand | Self::Hurt)
    }
}

bitflags! {
    /// A selection of [`FlagKind`]s, used when carving masks out of the
    /// object flag space.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct FlagKinds: u16 {
        const STAT    = 1 << 0;
        const RESIST  = 1 << 1;
        const SLAY    = 1 << 2;
        const BRAND   = 1 << 3;
        const HURT    = 1 << 4;
        const CURSE   = 1 << 5;
        const SUSTAIN = 1 << 6;
        const MISC    = 1 << 7;
        const INFO    = 1 << 8;

        /// Every kind that contributes to a weapon's multiplier vector.
        const MODIFIERS = Self::SLAY.bits() | Self::BRAND.bits() | Self::HURT.bits();
    }
}

impl From<FlagKind> for FlagKinds {
    fn from(kind: FlagKind) -> Self {
        match kind {
            FlagKind::Stat => Self::STAT,
            FlagKind::Resist => Self::RESIST,
            FlagKind::Slay => Self::SLAY,
            FlagKind::Brand => Self::BRAND,
            FlagKind::Hurt => Self::HURT,
            FlagKind::Curse => Self::CURSE,
            FlagKind::Sustain => Self::SUSTAIN,
            FlagKind::Misc => Self::MISC,
            FlagKind::Info => Self::INFO,
        }
    }
}

impl FromIterator<FlagKind> for FlagKinds {
    fn from_iter<I: IntoIterator<Item = FlagKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |kinds, kind| kinds | Self::from(kind))
    }
}
