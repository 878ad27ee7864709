//! Persistent (map-visible) modifiers.

use crate::cursor::CursorKind;
use crate::state::{FactKind, StatMods, Stats, Unit};

/// Net persistent modifiers of a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapMods {
    /// Buff contribution: per-stat maximum across sources, negated under Panic.
    pub buffs: StatMods,
    /// Debuff contribution: per-stat minimum across sources.
    pub debuffs: StatMods,
    /// `buffs + debuffs`.
    pub changes: StatMods,
}

/// Folds a unit's map buff and debuff facts.
///
/// Buffs from several sources do not stack: each stat keeps its strongest
/// buff and its deepest debuff. Neutralised buffs contribute nothing.
pub fn collect_map_mods(unit: &Unit) -> MapMods {
    let neutralized = unit.facts.has(FactKind::NeutralizeMapBuffs)
        || unit.cursors.is_denied(CursorKind::MapBuff);

    let buffs = if neutralized {
        StatMods::ZERO
    } else {
        unit.facts
            .stat_mods(FactKind::MapBuff)
            .fold(StatMods::ZERO, |acc, mods| acc.zip_with(*mods, i32::max))
    };
    let buffs = if unit.facts.has(FactKind::Panic) { -buffs } else { buffs };

    let debuffs = unit
        .facts
        .stat_mods(FactKind::MapDebuff)
        .fold(StatMods::ZERO, |acc, mods| acc.zip_with(*mods, i32::min));

    MapMods {
        buffs,
        debuffs,
        changes: buffs + debuffs,
    }
}

/// Stats as seen on the map: weapon-inclusive stats plus persistent changes.
pub fn map_stats(unit: &Unit) -> Stats {
    unit.stats().with_mods(&collect_map_mods(unit).changes)
}
