//! Per-encounter dispatch table.
//!
//! Built once per encounter from the equipped skills of both combatants and
//! their allies: `(unit, phase) -> ordered hooks`. Skills are visited in slot
//! order, hooks of one skill in registration order, which fixes the
//! invocation order of every phase.

use std::sync::Arc;

use strum::{EnumCount, IntoEnumIterator};

use crate::engine::Engagement;
use crate::state::{Role, TargetSet, Unit};

use super::definition::SpecialSpec;
use super::hook::{AfterCombatHookFn, AllyHookFn, CombatHookFn, Hook, Phase};
use super::oracle::{OracleError, SkillOracle};

/// Hooks and skill metadata collected from one unit's skill set.
#[derive(Clone, Debug, Default)]
pub struct UnitHooks {
    phases: [Vec<Hook>; Phase::COUNT],
    /// Equipped special, if any.
    pub special: Option<SpecialSpec>,
    /// Union of the weapon's effectiveness lists.
    pub effective_against: TargetSet,
    /// Union of every skill's protection lists.
    pub protects_against: TargetSet,
}

impl UnitHooks {
    /// Collects the hooks of every equipped skill.
    pub fn collect(oracle: &(impl SkillOracle + ?Sized), unit: &Unit) -> Result<Self, OracleError> {
        let mut hooks = Self::default();
        for (_, id) in unit.skills.iter() {
            let definition = oracle.require(id)?;
            for phase in Phase::iter() {
                hooks.phases[phase as usize].extend(definition.hooks(phase).cloned());
            }
            if let Some(weapon) = definition.weapon_spec() {
                hooks.effective_against |= weapon.effective_against;
            }
            if let Some(special) = definition.special_spec() {
                hooks.special = Some(special.clone());
            }
            hooks.protects_against |= definition.protects_against;
        }
        Ok(hooks)
    }

    /// Callbacks run on the unit's own skills during `phase`.
    pub fn combat(&self, phase: Phase) -> impl Iterator<Item = &Arc<CombatHookFn>> {
        self.phases[phase as usize].iter().filter_map(|hook| match hook {
            Hook::Combat(hook) => Some(hook),
            _ => None,
        })
    }

    /// Callbacks run when the unit supports an allied combatant.
    pub fn ally(&self) -> impl Iterator<Item = &Arc<AllyHookFn>> {
        self.phases[Phase::BeforeAllyCombat as usize]
            .iter()
            .filter_map(|hook| match hook {
                Hook::Ally(hook) => Some(hook),
                _ => None,
            })
    }

    pub fn after_combat(&self) -> impl Iterator<Item = &Arc<AfterCombatHookFn>> {
        self.phases[Phase::AfterCombat as usize]
            .iter()
            .filter_map(|hook| match hook {
                Hook::AfterCombat(hook) => Some(hook),
                _ => None,
            })
    }

    /// Number of hooks registered for a phase.
    pub fn count(&self, phase: Phase) -> usize {
        self.phases[phase as usize].len()
    }
}

/// Dispatch table of one encounter.
#[derive(Clone, Debug)]
pub struct DispatchTable {
    combatants: [UnitHooks; 2],
    allies: [Vec<UnitHooks>; 2],
}

impl DispatchTable {
    /// Resolves every skill of both combatants and their allies.
    ///
    /// Fails before any hook runs if a skill is missing from the table.
    pub fn build(
        oracle: &(impl SkillOracle + ?Sized),
        engagement: &Engagement<'_>,
    ) -> Result<Self, OracleError> {
        let allies_of = |role: Role| -> Result<Vec<UnitHooks>, OracleError> {
            engagement
                .allies(role)
                .iter()
                .map(|support| UnitHooks::collect(oracle, support.unit))
                .collect()
        };

        Ok(Self {
            combatants: [
                UnitHooks::collect(oracle, engagement.attacker)?,
                UnitHooks::collect(oracle, engagement.defender)?,
            ],
            allies: [allies_of(Role::Attacker)?, allies_of(Role::Defender)?],
        })
    }

    pub fn combatant(&self, role: Role) -> &UnitHooks {
        &self.combatants[role.index()]
    }

    /// Hooks of each ally of the combatant in `role`, in engagement order.
    pub fn allies(&self, role: Role) -> &[UnitHooks] {
        &self.allies[role.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::{SkillDefinition, SkillTable, WeaponSpec};
    use crate::state::{SkillSlot, Stats, UnitBuilder, UnitId, WeaponColor, WeaponType};

    fn table() -> SkillTable {
        SkillTable::from_definitions([
            SkillDefinition::weapon(
                "Killing Edge",
                WeaponSpec::new(WeaponType::Sword, WeaponColor::Red, 9)
                    .effective_against(TargetSet::ARMORED),
            )
            .on_before_combat(|_| {})
            .on_after_combat(|_| {}),
            SkillDefinition::passive("Fury", SkillSlot::A)
                .on_before_combat(|_| {})
                .protects_against(TargetSet::FLIER),
            SkillDefinition::passive("Spur Atk", SkillSlot::C).on_before_ally_combat(|_| {}),
        ])
    }

    #[test]
    fn collects_hooks_by_phase_in_slot_order() {
        let oracle = table();
        let unit = UnitBuilder::new(UnitId(1), "unit")
            .stats(Stats::new(40, 30, 30, 20, 20))
            .skill("Fury")
            .skill("Killing Edge")
            .skill("Spur Atk")
            .build(&oracle)
            .unwrap();

        let hooks = UnitHooks::collect(&oracle, &unit).unwrap();
        assert_eq!(hooks.combat(Phase::BeforeCombat).count(), 2);
        assert_eq!(hooks.ally().count(), 1);
        assert_eq!(hooks.after_combat().count(), 1);
        assert_eq!(hooks.count(Phase::ModifyCursors), 0);
        assert_eq!(hooks.effective_against, TargetSet::ARMORED);
        assert_eq!(hooks.protects_against, TargetSet::FLIER);
        assert!(hooks.special.is_none());
    }

    #[test]
    fn missing_skill_fails_the_build() {
        let oracle = table();
        let unit = UnitBuilder::new(UnitId(1), "unit")
            .skill("Fury")
            .build(&oracle)
            .unwrap();

        let err = UnitHooks::collect(&SkillTable::new(), &unit).unwrap_err();
        assert_eq!(err, OracleError::SkillNotFound("Fury".into()));
    }
}
