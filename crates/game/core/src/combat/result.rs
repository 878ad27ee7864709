//! Combat outcome types.

use crate::state::{Fact, Role, StatMods, Unit, UnitId};

use super::affinity::Advantage;

/// Special charge of one side after a strike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialReport {
    /// Cooldown after the strike, `None` without an equipped special.
    pub cooldown: Option<u8>,
    pub triggered: bool,
}

/// Result of one strike.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub striker: UnitId,
    pub target: UnitId,
    /// Role of the striker.
    pub role: Role,
    /// Striker's running strike count.
    pub order: u8,
    pub damage: i32,
    /// Target HP after the strike.
    pub remaining_hp: i32,
    pub advantage: Advantage,
    pub effective: bool,
    pub striker_special: SpecialReport,
    pub target_special: SpecialReport,
}

/// Per-side summary of an encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideOutcome {
    pub id: UnitId,
    pub start_hp: i32,
    pub remaining_hp: i32,
    /// Strikes made.
    pub turns: u8,
    /// Total damage dealt.
    pub damage: i32,
    /// Whether any strike was effective.
    pub effective: bool,
    pub triggered_special: bool,
    /// Net combat-only stat changes in effect during the strikes.
    pub stat_changes: StatMods,
    /// Damage added by specials on top of the base formula.
    pub extra_damage: i32,
    /// Special cooldown at the end of combat.
    pub special_cooldown: Option<u8>,
}

impl SideOutcome {
    pub(crate) fn start(unit: &Unit, stat_changes: StatMods) -> Self {
        Self {
            id: unit.id,
            start_hp: unit.hp,
            remaining_hp: unit.hp,
            turns: 0,
            damage: 0,
            effective: false,
            triggered_special: false,
            stat_changes,
            extra_damage: 0,
            special_cooldown: unit.special.map(|special| special.cooldown()),
        }
    }

    pub fn survived(&self) -> bool {
        self.remaining_hp > 0
    }
}

/// Complete, uncommitted result of one encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatOutcome {
    pub attacker: SideOutcome,
    pub defender: SideOutcome,
    pub turns: Vec<TurnOutcome>,
}

impl CombatOutcome {
    pub fn side(&self, role: Role) -> &SideOutcome {
        match role {
            Role::Attacker => &self.attacker,
            Role::Defender => &self.defender,
        }
    }

    pub(crate) fn side_mut(&mut self, role: Role) -> &mut SideOutcome {
        match role {
            Role::Attacker => &mut self.attacker,
            Role::Defender => &mut self.defender,
        }
    }

    /// Strikes made by one side, in order.
    pub fn strikes_by(&self, role: Role) -> impl Iterator<Item = &TurnOutcome> {
        self.turns.iter().filter(move |turn| turn.role == role)
    }

    /// Writes remaining HP and special cooldowns back onto the live units.
    ///
    /// Facts and cursors of the combat copies are not carried over.
    pub fn commit(&self, attacker: &mut Unit, defender: &mut Unit) {
        debug_assert_eq!(attacker.id, self.attacker.id);
        debug_assert_eq!(defender.id, self.defender.id);
        for (unit, side) in [(attacker, &self.attacker), (defender, &self.defender)] {
            unit.hp = side.remaining_hp.clamp(0, unit.max_hp());
            if let (Some(special), Some(cooldown)) = (unit.special.as_mut(), side.special_cooldown) {
                *special = special.with_cooldown(cooldown);
            }
        }
    }
}

/// Effect queued by after-combat hooks for the caller to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DelayedKind {
    Heal(i32),
    Damage(i32),
    MapBuff(StatMods),
    MapDebuff(StatMods),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DelayedEffect {
    pub target: UnitId,
    pub kind: DelayedKind,
}

impl DelayedEffect {
    pub fn heal(target: UnitId, amount: i32) -> Self {
        Self {
            target,
            kind: DelayedKind::Heal(amount),
        }
    }

    pub fn damage(target: UnitId, amount: i32) -> Self {
        Self {
            target,
            kind: DelayedKind::Damage(amount),
        }
    }

    pub fn map_buff(target: UnitId, mods: StatMods) -> Self {
        Self {
            target,
            kind: DelayedKind::MapBuff(mods),
        }
    }

    pub fn map_debuff(target: UnitId, mods: StatMods) -> Self {
        Self {
            target,
            kind: DelayedKind::MapDebuff(mods),
        }
    }

    /// Applies the effect to its target. Returns `false` and leaves the unit
    /// untouched when `unit` is not the target.
    ///
    /// HP stays within `[0, max_hp]`; map modifiers are attached as facts.
    pub fn apply(&self, unit: &mut Unit) -> bool {
        if unit.id != self.target {
            return false;
        }
        match self.kind {
            DelayedKind::Heal(amount) => {
                unit.hp = (unit.hp + amount.max(0)).clamp(0, unit.max_hp());
            }
            DelayedKind::Damage(amount) => {
                unit.hp = (unit.hp - amount.max(0)).clamp(0, unit.max_hp());
            }
            DelayedKind::MapBuff(mods) => unit.facts.attach(Fact::MapBuff(mods)),
            DelayedKind::MapDebuff(mods) => unit.facts.attach(Fact::MapDebuff(mods)),
        }
        true
    }
}
