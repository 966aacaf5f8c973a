//! Data-driven combat content and loaders.
//!
//! This crate reads the combat data files and assembles them into a
//! [`Catalogue`]:
//! - Equipment templates (data-driven via RON)
//! - Reference creatures for slay power scoring (data-driven via RON)
//! - Combat configuration (data-driven via TOML)
//!
//! The catalogue owns the combination cache built from the templates, so
//! callers never touch global state.

pub mod catalogue;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalogue::{Catalogue, Creature, Equipment};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, CreatureLoader, CreatureTemplate, EquipmentLoader,
    EquipmentTemplate, PvalSpec,
};
