//! Flag masks carved out of the object flag space by kind.
//!
//! Masks are cheap to rebuild (one pass over the registry table), so callers
//! build them on demand instead of caching them.

use crate::flags::{FlagKind, FlagKinds, FlagSet, ObjectFlag};
use crate::registry::OBJECT_FLAG_TABLE;

/// Builds a mask of every object flag whose kind matches any of `selectors`.
///
/// An empty selector list yields an empty mask.
pub fn build_mask(selectors: &[FlagKind]) -> FlagSet<ObjectFlag> {
    build_kind_mask(selectors.iter().copied().collect())
}

/// Builds a mask of every object flag whose kind is in `kinds`.
pub fn build_kind_mask(kinds: FlagKinds) -> FlagSet<ObjectFlag> {
    OBJECT_FLAG_TABLE
        .iter()
        .filter(|info| kinds.contains(info.kind.into()))
        .map(|info| info.flag)
        .collect()
}

/// Every slay, brand and hurt flag. The x1 impact, tunnel and light
/// definitions sit outside this mask.
pub fn modifier_mask() -> FlagSet<ObjectFlag> {
    build_kind_mask(FlagKinds::MODIFIERS)
}

/// Every flag graduated by a pval.
pub fn build_pval_mask() -> FlagSet<ObjectFlag> {
    OBJECT_FLAG_TABLE
        .iter()
        .filter(|info| info.uses_pval)
        .map(|info| info.flag)
        .collect()
}

/// Returns true if `flags` contains any curse.
pub fn is_cursed(flags: &FlagSet<ObjectFlag>) -> bool {
    flags.is_inter(&build_mask(&[FlagKind::Curse]))
}
