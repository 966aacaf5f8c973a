//! Object property flags.

use super::Flag;
use crate::error::CombatError;

/// A property an object (weapon, ammunition, armour, jewellery) can carry.
///
/// The discriminant is the flag's position in the flag space and in
/// [`crate::registry::OBJECT_FLAG_TABLE`]; entries are grouped by kind.
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
pub enum ObjectFlag {
    // Stat modifiers (graduated)
    Str,
    Int,
    Wis,
    Dex,
    Con,
    Stealth,
    Searching,
    Infra,
    Tunnel,
    Speed,
    Blows,
    Shots,
    Might,

    // Sustains
    SustStr,
    SustInt,
    SustWis,
    SustDex,
    SustCon,

    // Immunities and resistances
    ImAcid,
    ImElec,
    ImFire,
    ImCold,
    ResAcid,
    ResElec,
    ResFire,
    ResCold,
    ResPois,
    ResFear,
    ResLight,
    ResDark,
    ResBlind,
    ResConf,
    ResSound,
    ResShard,
    ResNexus,
    ResNether,
    ResChaos,
    ResDisen,

    // Miscellaneous abilities
    SlowDigest,
    Feather,
    Light,
    Regen,
    Telepathy,
    SeeInvis,
    FreeAct,
    HoldLife,
    Impact,
    Blessed,

    // Slays
    SlayAnimal,
    SlayEvil,
    SlayUndead,
    SlayDemon,
    SlayOrc,
    SlayTroll,
    SlayGiant,
    SlayDragon,
    KillDragon,
    KillDemon,
    KillUndead,

    // Brands
    BrandFizz,
    BrandBuzz,
    BrandWarm,
    BrandCool,
    BrandIcky,
    BrandAcid,
    BrandElec,
    BrandFire,
    BrandCold,
    BrandPois,

    // Binary hurts
    HurtUndead,
    HurtDemon,

    // Curses
    Teleport,
    DrainExp,
    ImpairHp,
    ImpairMana,
    Afraid,
    NoTeleport,
    Aggravate,
    LightCurse,
    HeavyCurse,
    PermaCurse,

    // Identification hints
    InstaArt,
    EasyKnow,
    HideType,
    ShowMods,
}

impl ObjectFlag {
    /// Converts a raw index, failing on anything outside the flag space.
    pub fn try_from_index(index: usize) -> Result<Self, CombatError> {
        <Self as Flag>::from_index(index).ok_or(CombatError::InvalidFlag {
            index,
            max: <Self as Flag>::MAX,
        })
    }
}

impl Flag for ObjectFlag {
    const MAX: usize = <Self as strum::EnumCount>::COUNT;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn indices_are_dense() {
        for (position, flag) in ObjectFlag::iter().enumerate() {
            assert_eq!(flag.index(), position);
            assert_eq!(ObjectFlag::from_index(position), Some(flag));
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let max = <ObjectFlag as Flag>::MAX;
        assert_eq!(
            ObjectFlag::try_from_index(max),
            Err(CombatError::InvalidFlag { index: max, max })
        );
        assert_eq!(ObjectFlag::try_from_index(0), Ok(ObjectFlag::Str));
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!("slay_dragon".parse::<ObjectFlag>(), Ok(ObjectFlag::SlayDragon));
        assert_eq!("BRAND_FIZZ".parse::<ObjectFlag>(), Ok(ObjectFlag::BrandFizz));
        assert_eq!(ObjectFlag::KillUndead.to_string(), "kill_undead");
    }
}
