//! Encounter resolution.
//!
//! The [`CombatEngine`] resolves one [`Engagement`] at a time. Resolution
//! works on combat-scoped copies of both combatants, so the live units are
//! never touched: the caller inspects the [`CombatOutcome`] and decides
//! whether to [`commit`](CombatOutcome::commit) it. The same entry point
//! therefore serves both real fights and forecasts.

mod errors;
mod pipeline;
mod session;

pub use errors::EngineError;
pub use session::{CombatSession, Engagement, Support};

use tracing::{debug, debug_span, trace};

use crate::combat::{CombatOutcome, DelayedEffect};
use crate::config::CombatConfig;
use crate::skill::{AfterCombatContext, DispatchTable, SkillOracle};
use crate::state::Role;

/// Resolves encounters against a skill oracle.
#[derive(Clone, Copy)]
pub struct CombatEngine<'a> {
    skills: &'a dyn SkillOracle,
    config: &'a CombatConfig,
}

impl<'a> CombatEngine<'a> {
    pub fn new(skills: &'a dyn SkillOracle, config: &'a CombatConfig) -> Self {
        Self { skills, config }
    }

    pub fn config(&self) -> &CombatConfig {
        self.config
    }

    /// Resolves one encounter without mutating the engaged units.
    ///
    /// Fails only when an equipped skill is missing from the oracle, before
    /// any phase runs.
    pub fn resolve(&self, engagement: &Engagement<'_>) -> Result<CombatOutcome, EngineError> {
        let span = debug_span!(
            "combat",
            attacker = %engagement.attacker.id,
            defender = %engagement.defender.id
        );
        let _guard = span.enter();

        let table = DispatchTable::build(self.skills, engagement)?;
        let mut session = CombatSession::new(engagement);
        let outcome = pipeline::run(&mut session, &table, self.config);

        debug!(
            strikes = outcome.turns.len(),
            attacker_hp = outcome.attacker.remaining_hp,
            defender_hp = outcome.defender.remaining_hp,
            "combat resolved"
        );
        Ok(outcome)
    }

    /// Runs the after-combat hooks of both combatants, then of their allies,
    /// and returns the effects they queued in order.
    ///
    /// Hooks observe the engaged units as they are when called; run this
    /// before committing to let them see pre-combat HP.
    pub fn after_combat(
        &self,
        engagement: &Engagement<'_>,
        outcome: &CombatOutcome,
    ) -> Result<Vec<DelayedEffect>, EngineError> {
        let span = debug_span!(
            "after_combat",
            attacker = %engagement.attacker.id,
            defender = %engagement.defender.id
        );
        let _guard = span.enter();

        let table = DispatchTable::build(self.skills, engagement)?;
        let battle = &engagement.battle;
        let mut queue = Vec::new();

        for role in [Role::Attacker, Role::Defender] {
            let wielder = engagement.unit(role);
            let foe = engagement.unit(role.opponent());
            for hook in table.combatant(role).after_combat() {
                let mut context =
                    AfterCombatContext::new(wielder, foe, None, role, outcome, battle, &mut queue);
                hook(&mut context);
            }
        }

        for role in [Role::Attacker, Role::Defender] {
            let combatant = engagement.unit(role);
            let foe = engagement.unit(role.opponent());
            for (support, hooks) in engagement.allies(role).iter().zip(table.allies(role)) {
                for hook in hooks.after_combat() {
                    let mut context = AfterCombatContext::new(
                        support.unit,
                        foe,
                        Some(combatant),
                        role,
                        outcome,
                        battle,
                        &mut queue,
                    );
                    hook(&mut context);
                }
            }
        }

        trace!(effects = queue.len(), "after-combat effects queued");
        Ok(queue)
    }
}
