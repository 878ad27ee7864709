//! Special (ultimate) cooldown state.
//!
//! A special charges on every strike its wielder takes part in, striking or
//! struck. Once the cooldown reaches zero it fires on the next strike that
//! matches its trigger and whose predicate holds, then recharges from the base
//! cooldown.

use crate::cursor::CursorKind;
use crate::skill::SpecialTrigger;
use crate::state::{Fact, FactKind, Stats, Unit};
use crate::stats::combat_stats;

use super::damage::{DamageInput, calculate_damage};

/// Charge state of an equipped special.
///
/// Invariant: `cooldown <= base_cooldown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecialState {
    base_cooldown: u8,
    cooldown: u8,
}

impl SpecialState {
    /// A freshly equipped special starts uncharged.
    pub const fn new(base_cooldown: u8) -> Self {
        Self {
            base_cooldown,
            cooldown: base_cooldown,
        }
    }

    /// Sets the current cooldown, clamped to the base cooldown.
    pub fn with_cooldown(mut self, cooldown: u8) -> Self {
        self.cooldown = cooldown.min(self.base_cooldown);
        self
    }

    #[inline]
    pub fn base_cooldown(&self) -> u8 {
        self.base_cooldown
    }

    #[inline]
    pub fn cooldown(&self) -> u8 {
        self.cooldown
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.cooldown == 0
    }

    /// One strike's transition.
    ///
    /// A triggered special recharges from its base cooldown; otherwise the
    /// cooldown drops by `rate`, stopping at zero.
    pub fn advance(&mut self, triggered: bool, rate: u8) {
        self.cooldown = if triggered {
            self.base_cooldown
        } else {
            self.cooldown.saturating_sub(rate)
        };
    }
}

/// Cooldown drop per strike.
///
/// `1 + max(FastCooldown, 0)`, minus one when the SlowCooldown cursor
/// exceeds 1 or the unit is under Guard. Never negative.
pub fn charge_rate(unit: &Unit) -> u8 {
    let fast = unit.cursors.value(CursorKind::FastCooldown).max(0);
    let slowed = unit.cursors.value(CursorKind::SlowCooldown) > 1 || unit.facts.has(FactKind::Guard);
    let rate = 1 + fast - i32::from(slowed);
    rate.clamp(0, i32::from(u8::MAX)) as u8
}

/// State handed to a special's predicate and effect.
///
/// For an offensive special `input` is the wielder's strike and `damage` the
/// damage it will deal. For a defensive special `input` is the foe's strike
/// and `damage` what the wielder just took; changes to either are ignored.
pub struct SpecialContext<'a> {
    pub wielder: &'a Unit,
    pub foe: &'a Unit,
    pub trigger: SpecialTrigger,
    pub input: DamageInput,
    pub damage: i32,
    /// HP restored to the wielder after the strike.
    pub heal: i32,
    attachments: Vec<Fact>,
}

/// What a fired special asks the engine to apply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecialEffectResult {
    pub damage: i32,
    pub heal: i32,
    pub attachments: Vec<Fact>,
}

impl<'a> SpecialContext<'a> {
    pub fn striking(wielder: &'a Unit, foe: &'a Unit, input: DamageInput) -> Self {
        let damage = calculate_damage(&input);
        Self {
            wielder,
            foe,
            trigger: SpecialTrigger::OnStrike,
            input,
            damage,
            heal: 0,
            attachments: Vec::new(),
        }
    }

    pub fn struck(wielder: &'a Unit, foe: &'a Unit, input: DamageInput, damage_taken: i32) -> Self {
        Self {
            wielder,
            foe,
            trigger: SpecialTrigger::OnStruck,
            input,
            damage: damage_taken,
            heal: 0,
            attachments: Vec::new(),
        }
    }

    pub fn wielder_stats(&self) -> Stats {
        combat_stats(self.wielder)
    }

    pub fn foe_stats(&self) -> Stats {
        combat_stats(self.foe)
    }

    /// Edits the strike input and recomputes damage from it.
    pub fn rework(&mut self, edit: impl FnOnce(&mut DamageInput)) {
        edit(&mut self.input);
        self.damage = calculate_damage(&self.input);
    }

    /// Heals the wielder by a percentage of the current damage figure.
    pub fn heal_percent_of_damage(&mut self, percent: i32) {
        self.heal += self.damage.max(0) * percent / 100;
    }

    /// Attaches a fact to the wielder's combat copy once the strike resolves.
    pub fn attach(&mut self, fact: Fact) {
        self.attachments.push(fact);
    }

    pub(crate) fn finish(self) -> SpecialEffectResult {
        SpecialEffectResult {
            damage: self.damage.max(0),
            heal: self.heal.max(0),
            attachments: self.attachments,
        }
    }
}
