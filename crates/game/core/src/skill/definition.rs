//! Skill definition records.
//!
//! A definition carries the metadata the engine needs (slot, weapon data,
//! special cooldown, user filters, effectiveness and protection lists) plus
//! the phase callbacks it contributes to an encounter.

use std::fmt;
use std::sync::Arc;

use crate::combat::SpecialContext;
use crate::state::{SkillId, SkillSlot, TargetSet, WeaponColor, WeaponProfile, WeaponType};

use super::hook::{AfterCombatContext, AllyHookContext, Hook, HookContext, Phase};

/// Weapon data of a weapon skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeaponSpec {
    pub kind: WeaponType,
    pub color: WeaponColor,
    pub might: i32,
    /// Foes matching this set take effective damage.
    pub effective_against: TargetSet,
}

impl WeaponSpec {
    pub const fn new(kind: WeaponType, color: WeaponColor, might: i32) -> Self {
        Self {
            kind,
            color,
            might,
            effective_against: TargetSet::empty(),
        }
    }

    pub const fn effective_against(mut self, targets: TargetSet) -> Self {
        self.effective_against = targets;
        self
    }

    pub const fn profile(&self) -> WeaponProfile {
        WeaponProfile::new(self.kind, self.color, self.might)
    }
}

/// When a special is checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SpecialTrigger {
    /// Checked when the wielder strikes; may rework the outgoing damage.
    OnStrike,
    /// Checked after the wielder is struck; only heals and facts apply.
    OnStruck,
}

pub type SpecialPredicate = dyn Fn(&SpecialContext<'_>) -> bool + Send + Sync;
pub type SpecialEffect = dyn Fn(&mut SpecialContext<'_>) + Send + Sync;

/// Cooldown and behavior of a special skill.
#[derive(Clone)]
pub struct SpecialSpec {
    pub cooldown: u8,
    pub trigger: SpecialTrigger,
    predicate: Option<Arc<SpecialPredicate>>,
    effect: Arc<SpecialEffect>,
}

impl SpecialSpec {
    pub fn offensive(
        cooldown: u8,
        effect: impl Fn(&mut SpecialContext<'_>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            cooldown,
            trigger: SpecialTrigger::OnStrike,
            predicate: None,
            effect: Arc::new(effect),
        }
    }

    pub fn defensive(
        cooldown: u8,
        effect: impl Fn(&mut SpecialContext<'_>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            trigger: SpecialTrigger::OnStruck,
            ..Self::offensive(cooldown, effect)
        }
    }

    /// Adds an activation predicate. Without one the special fires whenever
    /// it is charged.
    pub fn when(
        mut self,
        predicate: impl Fn(&SpecialContext<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    pub fn should_trigger(&self, context: &SpecialContext<'_>) -> bool {
        self.predicate
            .as_ref()
            .is_none_or(|predicate| predicate(context))
    }

    pub fn apply(&self, context: &mut SpecialContext<'_>) {
        (self.effect)(context)
    }
}

impl fmt::Debug for SpecialSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecialSpec")
            .field("cooldown", &self.cooldown)
            .field("trigger", &self.trigger)
            .field("conditional", &self.predicate.is_some())
            .finish_non_exhaustive()
    }
}

/// What a skill is, beyond its hooks.
#[derive(Clone, Debug)]
pub enum SkillKind {
    Weapon(WeaponSpec),
    Special(SpecialSpec),
    Passive,
    Assist,
}

/// One entry of the skill table.
#[derive(Clone)]
pub struct SkillDefinition {
    pub id: SkillId,
    pub slot: SkillSlot,
    pub kind: SkillKind,
    /// Units allowed to learn the skill.
    pub allowed_users: TargetSet,
    /// Effectiveness categories the wielder is immune to.
    pub protects_against: TargetSet,
    hooks: Vec<(Phase, Hook)>,
}

impl SkillDefinition {
    fn new(id: impl Into<SkillId>, slot: SkillSlot, kind: SkillKind) -> Self {
        Self {
            id: id.into(),
            slot,
            kind,
            allowed_users: TargetSet::all(),
            protects_against: TargetSet::empty(),
            hooks: Vec::new(),
        }
    }

    pub fn weapon(id: impl Into<SkillId>, spec: WeaponSpec) -> Self {
        Self::new(id, SkillSlot::Weapon, SkillKind::Weapon(spec))
    }

    pub fn special(id: impl Into<SkillId>, spec: SpecialSpec) -> Self {
        Self::new(id, SkillSlot::Special, SkillKind::Special(spec))
    }

    pub fn passive(id: impl Into<SkillId>, slot: SkillSlot) -> Self {
        Self::new(id, slot, SkillKind::Passive)
    }

    pub fn assist(id: impl Into<SkillId>) -> Self {
        Self::new(id, SkillSlot::Assist, SkillKind::Assist)
    }

    pub fn allowed_users(mut self, users: TargetSet) -> Self {
        self.allowed_users = users;
        self
    }

    pub fn protects_against(mut self, targets: TargetSet) -> Self {
        self.protects_against = targets;
        self
    }

    // ========================================================================
    // Hook registration
    // ========================================================================

    fn on(
        mut self,
        phase: Phase,
        hook: impl Fn(&mut HookContext<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.hooks.push((phase, Hook::Combat(Arc::new(hook))));
        self
    }

    pub fn on_modify_cursors(
        self,
        hook: impl Fn(&mut HookContext<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.on(Phase::ModifyCursors, hook)
    }

    pub fn on_before_combat(
        self,
        hook: impl Fn(&mut HookContext<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.on(Phase::BeforeCombat, hook)
    }

    pub fn on_initiate(self, hook: impl Fn(&mut HookContext<'_>) + Send + Sync + 'static) -> Self {
        self.on(Phase::Initiate, hook)
    }

    pub fn on_defense(self, hook: impl Fn(&mut HookContext<'_>) + Send + Sync + 'static) -> Self {
        self.on(Phase::Defense, hook)
    }

    pub fn on_round_attack(
        self,
        hook: impl Fn(&mut HookContext<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.on(Phase::RoundAttack, hook)
    }

    pub fn on_round_defense(
        self,
        hook: impl Fn(&mut HookContext<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.on(Phase::RoundDefense, hook)
    }

    /// Runs on an ally of a combatant, never on the combatants themselves.
    pub fn on_before_ally_combat(
        mut self,
        hook: impl Fn(&mut AllyHookContext<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.hooks
            .push((Phase::BeforeAllyCombat, Hook::Ally(Arc::new(hook))));
        self
    }

    pub fn on_after_combat(
        mut self,
        hook: impl Fn(&mut AfterCombatContext<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.hooks
            .push((Phase::AfterCombat, Hook::AfterCombat(Arc::new(hook))));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Hooks registered for a phase, in registration order.
    pub fn hooks(&self, phase: Phase) -> impl Iterator<Item = &Hook> {
        self.hooks
            .iter()
            .filter(move |(hook_phase, _)| *hook_phase == phase)
            .map(|(_, hook)| hook)
    }

    pub fn weapon_spec(&self) -> Option<&WeaponSpec> {
        match &self.kind {
            SkillKind::Weapon(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn special_spec(&self) -> Option<&SpecialSpec> {
        match &self.kind {
            SkillKind::Special(spec) => Some(spec),
            _ => None,
        }
    }
}

impl fmt::Debug for SkillDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phases: Vec<Phase> = self.hooks.iter().map(|(phase, _)| *phase).collect();
        f.debug_struct("SkillDefinition")
            .field("id", &self.id)
            .field("slot", &self.slot)
            .field("kind", &self.kind)
            .field("allowed_users", &self.allowed_users)
            .field("protects_against", &self.protects_against)
            .field("phases", &phases)
            .finish()
    }
}
