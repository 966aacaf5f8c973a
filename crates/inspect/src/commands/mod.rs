//! Command implementations for combat-inspect
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod cache;
mod damage;
mod flags;
mod resolve;

pub use cache::Cache;
pub use damage::Damage;
pub use flags::Flags;
pub use resolve::Resolve;
