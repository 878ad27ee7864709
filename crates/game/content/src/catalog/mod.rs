//! Curated skill catalog.
//!
//! A representative slice of the skill pool: plain and brave weapons, a gem
//! sword, a tome, staves, effective weapons, turn-order passives, specials and
//! ally support. [`standard_catalog`] bundles them into a [`SkillTable`] the
//! engine can use directly as its oracle.

mod passives;
mod specials;
mod support;
mod weapons;

use skirmish_core::SkillTable;

/// Builds the standard skill table.
pub fn standard_catalog() -> SkillTable {
    weapons::definitions()
        .into_iter()
        .chain(passives::definitions())
        .chain(specials::definitions())
        .chain(support::definitions())
        .collect()
}
