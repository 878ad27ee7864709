//! Facts attached to a unit.
//!
//! Facts are typed markers (some with a payload) that skills, the map layer
//! and the engine attach to a unit. Boolean markers are stored once; payload
//! markers such as buffs may stack as separate entries, and the stat
//! aggregator decides how they combine.
//!
//! Removal is explicit: the combat engine never clears facts on live units,
//! that is the job of the phase/turn cleanup that owns them.

use super::stats::StatMods;

/// A marker attached to a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumDiscriminants)]
#[strum_discriminants(name(FactKind))]
#[strum_discriminants(derive(Hash, strum::Display, strum::AsRefStr))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    strum_discriminants(derive(serde::Serialize, serde::Deserialize))
)]
pub enum Fact {
    // ========================================================================
    // Encounter bookkeeping
    // ========================================================================
    /// Unit is one of the two combatants of the current encounter.
    Battling,

    /// Unit declared the current attack.
    InitiateCombat,

    // ========================================================================
    // Turn-order grants
    // ========================================================================
    /// Unit may counterattack regardless of range.
    Counterattack,

    /// Unit strikes twice per attack.
    BraveWeapon,

    /// Unit's strikes are doubled in both startup and follow-up bursts.
    Desperation,

    /// Unit makes a follow-up attack regardless of speed.
    GuaranteedFollowup,

    /// Unit cannot make a follow-up attack.
    PreventFollowup,

    /// Unit's foe cannot counterattack.
    PreventCounterattack,

    /// Unit strikes first when defending.
    Vantage,

    // ========================================================================
    // Statuses
    // ========================================================================
    /// Map buffs are converted into penalties.
    Panic,

    /// Special charge is slowed.
    Guard,

    /// Triangle advantage and disadvantage are amplified for both combatants.
    Trilemma,

    /// Drops the unit's map buffs entirely.
    NeutralizeMapBuffs,

    // ========================================================================
    // Affinity
    // ========================================================================
    /// Foe's weapon triangle relationship is cancelled against this unit.
    NeutralizeAffinity,

    /// Unit always has triangle advantage.
    GuaranteedAffinity,

    /// Triangle advantage and disadvantage are swapped.
    ReverseAffinity,

    // ========================================================================
    // Stat modifiers
    // ========================================================================
    /// Persistent (map-visible) buff. Sources combine as per-stat maximum.
    MapBuff(StatMods),

    /// Persistent (map-visible) penalty. Sources combine as per-stat minimum.
    MapDebuff(StatMods),

    /// Combat-only buff. Sources stack additively.
    CombatBuff(StatMods),

    /// Combat-only penalty. Sources stack additively.
    CombatDebuff(StatMods),

    /// Reduces damage received by the given percentage. Sources compose
    /// multiplicatively.
    DamageReduction(u8),
}

impl Fact {
    /// Returns the kind of this fact.
    #[inline]
    pub fn kind(&self) -> FactKind {
        FactKind::from(self)
    }
}

/// The set of facts attached to one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facts {
    entries: Vec<Fact>,
}

impl Facts {
    /// Creates an empty fact set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Checks whether a fact of the given kind is attached.
    pub fn has(&self, kind: FactKind) -> bool {
        self.entries.iter().any(|fact| fact.kind() == kind)
    }

    /// Attaches a fact.
    ///
    /// Payload-less markers are stored at most once; payload markers stack.
    pub fn attach(&mut self, fact: Fact) {
        if fact.is_marker() && self.entries.contains(&fact) {
            return;
        }
        self.entries.push(fact);
    }

    /// Removes every fact of the given kind, returning how many were removed.
    pub fn remove(&mut self, kind: FactKind) -> usize {
        let before = self.entries.len();
        self.entries.retain(|fact| fact.kind() != kind);
        before - self.entries.len()
    }

    /// Iterates over all attached facts in attachment order.
    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.entries.iter()
    }

    /// Iterates over the stat payloads of facts of the given kind.
    pub fn stat_mods(&self, kind: FactKind) -> impl Iterator<Item = &StatMods> + '_ {
        self.entries.iter().filter_map(move |fact| match fact {
            Fact::MapBuff(mods)
            | Fact::MapDebuff(mods)
            | Fact::CombatBuff(mods)
            | Fact::CombatDebuff(mods)
                if fact.kind() == kind =>
            {
                Some(mods)
            }
            _ => None,
        })
    }

    /// Iterates over damage-reduction percentages.
    pub fn damage_reductions(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().filter_map(|fact| match fact {
            Fact::DamageReduction(percent) => Some(*percent),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Fact {
    fn is_marker(&self) -> bool {
        !matches!(
            self,
            Fact::MapBuff(_)
                | Fact::MapDebuff(_)
                | Fact::CombatBuff(_)
                | Fact::CombatDebuff(_)
                | Fact::DamageReduction(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_stored_once() {
        let mut facts = Facts::empty();
        facts.attach(Fact::Vantage);
        facts.attach(Fact::Vantage);
        assert_eq!(facts.len(), 1);
        assert!(facts.has(FactKind::Vantage));
    }

    #[test]
    fn payload_facts_stack() {
        let mut facts = Facts::empty();
        facts.attach(Fact::CombatBuff(StatMods::new(4, 0, 0, 0)));
        facts.attach(Fact::CombatBuff(StatMods::new(4, 0, 0, 0)));
        facts.attach(Fact::MapBuff(StatMods::new(0, 6, 0, 0)));

        assert_eq!(facts.stat_mods(FactKind::CombatBuff).count(), 2);
        assert_eq!(facts.stat_mods(FactKind::MapBuff).count(), 1);
        assert_eq!(facts.stat_mods(FactKind::MapDebuff).count(), 0);
    }

    #[test]
    fn remove_drops_every_entry_of_a_kind() {
        let mut facts = Facts::empty();
        facts.attach(Fact::DamageReduction(30));
        facts.attach(Fact::DamageReduction(50));
        facts.attach(Fact::Panic);

        assert_eq!(facts.remove(FactKind::DamageReduction), 2);
        assert_eq!(facts.damage_reductions().count(), 0);
        assert!(facts.has(FactKind::Panic));
    }
}
