//! Transient (combat-only) modifiers.

use crate::cursor::CursorKind;
use crate::state::{FactKind, StatMods, Stats, Unit};

use super::map::map_stats;

/// Sums a unit's combat buff and debuff facts.
///
/// Unlike map modifiers these stack additively. A denied CombatBuff cursor
/// drops the buffs; debuffs still apply.
pub fn collect_combat_mods(unit: &Unit) -> StatMods {
    let sum = |kind| {
        unit.facts
            .stat_mods(kind)
            .fold(StatMods::ZERO, |acc, mods| acc + *mods)
    };

    let buffs = if unit.cursors.is_denied(CursorKind::CombatBuff) {
        StatMods::ZERO
    } else {
        sum(FactKind::CombatBuff)
    };
    buffs + sum(FactKind::CombatDebuff)
}

/// Stats in effect during combat.
pub fn combat_stats(unit: &Unit) -> Stats {
    map_stats(unit).with_mods(&collect_combat_mods(unit))
}
