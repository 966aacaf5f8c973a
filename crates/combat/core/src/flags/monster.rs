//! Creature (monster race) flags relevant to combat modifiers.

use super::Flag;

/// A property of a creature race.
///
/// Only the race flags that interact with slays, brands and lore are listed;
/// the rest of the race description lives with the monster subsystem.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum MonsterFlag {
    Unique,
    Male,
    Female,
    Invisible,
    ColdBlood,
    EmptyMind,
    Smart,
    NeverMove,

    // Race types targeted by slays
    Animal,
    Evil,
    Undead,
    Demon,
    Orc,
    Troll,
    Giant,
    Dragon,

    // Immunities that void brands
    ImAcid,
    ImElec,
    ImFire,
    ImCold,
    ImPois,

    // Explicit vulnerabilities
    HurtAcid,
    HurtElec,
    HurtFire,
    HurtCold,
    HurtLight,
    HurtRock,
}

impl Flag for MonsterFlag {
    const MAX: usize = <Self as strum::EnumCount>::COUNT;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }
}
