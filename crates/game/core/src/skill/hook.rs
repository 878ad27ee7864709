//! Encounter phases and the context each skill callback receives.

use std::fmt;
use std::sync::Arc;

use crate::combat::{CombatOutcome, DelayedEffect, SideOutcome};
use crate::engine::Support;
use crate::state::{BattleState, Role, Stats, Unit};
use crate::stats::combat_stats;

/// Lifecycle phases of one encounter, in dispatch order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumCount,
    strum::EnumIter,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    ModifyCursors,
    BeforeCombat,
    BeforeAllyCombat,
    Initiate,
    Defense,
    RoundAttack,
    RoundDefense,
    AfterCombat,
}

pub type CombatHookFn = dyn Fn(&mut HookContext<'_>) + Send + Sync;
pub type AllyHookFn = dyn Fn(&mut AllyHookContext<'_>) + Send + Sync;
pub type AfterCombatHookFn = dyn Fn(&mut AfterCombatContext<'_>) + Send + Sync;

/// A registered skill callback.
#[derive(Clone)]
pub enum Hook {
    /// Runs on a combatant's own skill set.
    Combat(Arc<CombatHookFn>),
    /// Runs on an ally's skill set to support a combatant.
    Ally(Arc<AllyHookFn>),
    /// Runs after resolution to queue delayed effects.
    AfterCombat(Arc<AfterCombatHookFn>),
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hook::Combat(_) => f.write_str("Hook::Combat"),
            Hook::Ally(_) => f.write_str("Hook::Ally"),
            Hook::AfterCombat(_) => f.write_str("Hook::AfterCombat"),
        }
    }
}

/// Context of a combatant's own hooks.
///
/// Both combatants are scratch copies owned by the session, so hooks may
/// raise or lower cursors and attach facts on either of them. Allies are the
/// live roster units and stay read-only.
pub struct HookContext<'a> {
    pub wielder: &'a mut Unit,
    pub foe: &'a mut Unit,
    pub role: Role,
    pub allies: &'a [Support<'a>],
    pub battle: &'a BattleState,
}

impl HookContext<'_> {
    pub fn is_initiating(&self) -> bool {
        self.role == Role::Attacker
    }

    pub fn wielder_stats(&self) -> Stats {
        combat_stats(self.wielder)
    }

    pub fn foe_stats(&self) -> Stats {
        combat_stats(self.foe)
    }

    /// Allies of the wielder within the given distance.
    pub fn allies_within(&self, distance: u8) -> impl Iterator<Item = &Unit> {
        self.allies
            .iter()
            .filter(move |support| support.distance <= distance)
            .map(|support| support.unit)
    }
}

/// Context of a skill owned by an ally of a combatant.
pub struct AllyHookContext<'a> {
    /// The ally whose skill runs. Never mutated.
    pub wielder: &'a Unit,
    /// The combatant being supported.
    pub ally: &'a mut Unit,
    /// The supported combatant's foe.
    pub foe: &'a Unit,
    /// Role of the supported combatant.
    pub ally_role: Role,
    /// Tiles between the wielder and the supported combatant.
    pub distance: u8,
    pub battle: &'a BattleState,
}

/// Context of after-combat hooks.
pub struct AfterCombatContext<'a> {
    /// Live unit owning the skill.
    pub wielder: &'a Unit,
    /// Foe of the combatant side the wielder belongs to.
    pub foe: &'a Unit,
    /// The combatant the wielder supports when the wielder is an ally.
    pub supporting: Option<&'a Unit>,
    /// Role of the combatant side the wielder belongs to.
    pub role: Role,
    pub outcome: &'a CombatOutcome,
    pub battle: &'a BattleState,
    queue: &'a mut Vec<DelayedEffect>,
}

impl<'a> AfterCombatContext<'a> {
    pub(crate) fn new(
        wielder: &'a Unit,
        foe: &'a Unit,
        supporting: Option<&'a Unit>,
        role: Role,
        outcome: &'a CombatOutcome,
        battle: &'a BattleState,
        queue: &'a mut Vec<DelayedEffect>,
    ) -> Self {
        Self {
            wielder,
            foe,
            supporting,
            role,
            outcome,
            battle,
            queue,
        }
    }

    /// Outcome of the wielder's side.
    pub fn side(&self) -> &SideOutcome {
        self.outcome.side(self.role)
    }

    /// Outcome of the opposing side.
    pub fn foe_side(&self) -> &SideOutcome {
        self.outcome.side(self.role.opponent())
    }

    /// Whether the wielder's combatant took part in at least one strike.
    pub fn attacked(&self) -> bool {
        self.side().turns > 0
    }

    pub fn queue(&mut self, effect: DelayedEffect) {
        self.queue.push(effect);
    }
}
