use core::ops::Index;

use super::{MODIFIER_COUNT, MODIFIER_TABLE, ModifierDef, ModifierId};
use crate::config::CombatConfig;
use crate::profile::WeaponProfile;
use crate::registry::uses_pval;

/// Per-definition multipliers of one weapon (x100 fixed point, 0 = unset).
///
/// Slot `i` belongs to `MODIFIER_TABLE[i]`. Vectors are small and `Copy`;
/// callers own them and pass them by reference.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultiplierVector {
    slots: [u16; MODIFIER_COUNT],
}

impl MultiplierVector {
    /// All slots unset.
    pub const fn new() -> Self {
        Self {
            slots: [0; MODIFIER_COUNT],
        }
    }

    /// Vector of a single weapon.
    pub fn from_weapon(weapon: &WeaponProfile) -> Self {
        let mut mults = Self::new();
        mults.absorb(weapon);
        mults
    }

    #[inline]
    pub fn get(&self, id: ModifierId) -> u16 {
        self.slots[id.index()]
    }

    /// Raises `id` to `value` if that is larger. Returns true on change.
    pub fn raise(&mut self, id: ModifierId, value: u16) -> bool {
        let slot = &mut self.slots[id.index()];
        if value > *slot {
            *slot = value;
            true
        } else {
            false
        }
    }

    /// Folds the modifiers carried by `weapon` into this vector.
    ///
    /// Used once per object taking part in an attack (a launcher and its
    /// ammunition both contribute). Pval-graduated flags with a positive
    /// pval contribute `100 * (1 + pval)`; anything else contributes the
    /// definition's base multiplier. Returns true if any slot grew.
    pub fn absorb(&mut self, weapon: &WeaponProfile) -> bool {
        let mut changed = false;
        for def in MODIFIER_TABLE.iter() {
            if !weapon.flags.test(def.object_flag) {
                continue;
            }
            changed |= self.raise(def.id, contribution(def, weapon));
        }
        changed
    }

    /// Returns true when no slot is set.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|&slot| slot == 0)
    }

    /// Raw slot values in table order.
    pub fn as_slice(&self) -> &[u16] {
        &self.slots
    }

    /// Set slots with their definitions, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static ModifierDef, u16)> + '_ {
        MODIFIER_TABLE
            .iter()
            .zip(self.slots.iter().copied())
            .filter(|&(_, value)| value > 0)
    }

    /// djb2 fold over the slots: `h = h * 33 + slot`, starting at 5381.
    pub fn hash_code(&self) -> u64 {
        self.slots.iter().fold(CombatConfig::HASH_SEED, |h, &slot| {
            h.wrapping_mul(33).wrapping_add(u64::from(slot))
        })
    }
}

fn contribution(def: &ModifierDef, weapon: &WeaponProfile) -> u16 {
    weapon
        .pval_of(def.object_flag)
        .filter(|&pval| pval > 0 && uses_pval(def.object_flag))
        .map(|pval| CombatConfig::BASELINE_MULTIPLIER.saturating_mul(pval as u16 + 1))
        .unwrap_or(def.multiplier)
}

impl Default for MultiplierVector {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<ModifierId> for MultiplierVector {
    type Output = u16;

    fn index(&self, id: ModifierId) -> &u16 {
        &self.slots[id.index()]
    }
}

impl FromIterator<(ModifierId, u16)> for MultiplierVector {
    fn from_iter<I: IntoIterator<Item = (ModifierId, u16)>>(iter: I) -> Self {
        let mut mults = Self::new();
        for (id, value) in iter {
            mults.raise(id, value);
        }
        mults
    }
}

impl core::fmt::Debug for MultiplierVector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(def, value)| (def.id, value)))
            .finish()
    }
}
