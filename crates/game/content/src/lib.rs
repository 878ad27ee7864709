//! Combat content: a curated skill catalog and data loaders.
//!
//! This crate houses static content for `skirmish-core`:
//! - Skill definitions (weapons, passives, specials, ally support)
//! - Combat configuration (data-driven via TOML)
//! - Unit rosters (data-driven via RON)
//!
//! Content is consumed through the engine's skill oracle and never appears in
//! unit state beyond skill names.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::standard_catalog;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, RosterLoader, UnitSpec};
