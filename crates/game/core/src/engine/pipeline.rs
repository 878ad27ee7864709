//! Phase-ordered resolution of one encounter.
//!
//! ```text
//! ModifyCursors (attacker, defender) → effectiveness
//!   → BeforeCombat (attacker, defender)
//!   → BeforeAllyCombat (attacker's allies, defender's allies)
//!   → Initiate (attacker) / Defense (defender)
//!   → RoundAttack (attacker) / RoundDefense (defender)
//!   → generate_turns → strike loop
//! ```

use tracing::{debug, trace};

use crate::combat::{
    CombatOutcome, DamageInput, SideOutcome, SpecialContext, SpecialReport, Turn, TurnOutcome,
    apply_damage, calculate_damage, charge_rate, generate_turns, is_effective,
};
use crate::config::CombatConfig;
use crate::cursor::CursorKind;
use crate::skill::{AllyHookContext, DispatchTable, HookContext, Phase, SpecialTrigger};
use crate::state::{Role, Unit};
use crate::stats::collect_combat_mods;

use super::session::CombatSession;

pub(super) fn run(
    session: &mut CombatSession<'_>,
    table: &DispatchTable,
    config: &CombatConfig,
) -> CombatOutcome {
    run_phase(session, table, Phase::ModifyCursors, Role::Attacker);
    run_phase(session, table, Phase::ModifyCursors, Role::Defender);
    raise_effectiveness(session, table);

    run_phase(session, table, Phase::BeforeCombat, Role::Attacker);
    run_phase(session, table, Phase::BeforeCombat, Role::Defender);
    run_ally_phase(session, table);

    run_phase(session, table, Phase::Initiate, Role::Attacker);
    run_phase(session, table, Phase::Defense, Role::Defender);
    run_phase(session, table, Phase::RoundAttack, Role::Attacker);
    run_phase(session, table, Phase::RoundDefense, Role::Defender);

    let turns = generate_turns(
        session.unit(Role::Attacker),
        session.unit(Role::Defender),
        config,
    );
    let planned = turns.len();
    trace!(strikes = planned, "turns generated");

    let mut outcome = CombatOutcome {
        attacker: start_side(session.unit(Role::Attacker)),
        defender: start_side(session.unit(Role::Defender)),
        turns: Vec::with_capacity(planned),
    };
    for turn in turns {
        strike(session, table, turn, &mut outcome);
        if session.is_decided() {
            trace!(skipped = planned - outcome.turns.len(), "combat decided");
            break;
        }
    }
    outcome
}

fn start_side(unit: &Unit) -> SideOutcome {
    SideOutcome::start(unit, collect_combat_mods(unit))
}

/// Runs the combatant's own hooks for one phase.
fn run_phase(session: &mut CombatSession<'_>, table: &DispatchTable, phase: Phase, role: Role) {
    let hooks = table.combatant(role);
    if hooks.count(phase) == 0 {
        return;
    }
    trace!(%phase, %role, hooks = hooks.count(phase), "running phase");

    let allies = session.allies(role);
    let battle = session.battle();
    let (wielder, foe) = session.pair_mut(role);
    let mut context = HookContext {
        wielder,
        foe,
        role,
        allies,
        battle,
    };
    for hook in hooks.combat(phase) {
        hook(&mut context);
    }
}

/// Raises the Effectiveness cursor of a combatant whose weapon is effective
/// against its foe.
fn raise_effectiveness(session: &mut CombatSession<'_>, table: &DispatchTable) {
    for role in [Role::Attacker, Role::Defender] {
        let effective_against = table.combatant(role).effective_against;
        if effective_against.is_empty() {
            continue;
        }
        let protection = table.combatant(role.opponent()).protects_against;
        let (striker, foe) = session.pair_mut(role);
        if is_effective(effective_against, foe, protection) {
            trace!(%role, "weapon is effective");
            striker.cursors.raise(CursorKind::Effectiveness, 1);
        }
    }
}

/// Runs the BeforeAllyCombat hooks of every ally on the combatant it supports.
fn run_ally_phase(session: &mut CombatSession<'_>, table: &DispatchTable) {
    for role in [Role::Attacker, Role::Defender] {
        let allies = session.allies(role);
        let battle = session.battle();
        let (ally, foe) = session.pair_mut(role);
        for (support, hooks) in allies.iter().zip(table.allies(role)) {
            let mut context = AllyHookContext {
                wielder: support.unit,
                ally: &mut *ally,
                foe: &*foe,
                ally_role: role,
                distance: support.distance,
                battle,
            };
            for hook in hooks.ally() {
                hook(&mut context);
            }
        }
    }
}

/// Resolves one strike: damage, specials, cooldowns, bookkeeping.
fn strike(
    session: &mut CombatSession<'_>,
    table: &DispatchTable,
    turn: Turn,
    outcome: &mut CombatOutcome,
) {
    let role = turn.striker;
    let striker_special = table.combatant(role).special.as_ref();
    let target_special = table.combatant(role.opponent()).special.as_ref();
    let (striker, target) = session.pair_mut(role);

    let input = DamageInput::between(striker, target);
    let base_damage = calculate_damage(&input);
    let (advantage, effective) = (input.advantage, input.effective);

    let mut damage = base_damage;
    let mut striker_triggered = false;
    if let (Some(spec), Some(state)) = (striker_special, striker.special) {
        if spec.trigger == SpecialTrigger::OnStrike && state.is_ready() {
            let mut context = SpecialContext::striking(striker, target, input.clone());
            if spec.should_trigger(&context) {
                spec.apply(&mut context);
                let result = context.finish();
                debug!(
                    unit = %striker.id,
                    base_damage,
                    damage = result.damage,
                    heal = result.heal,
                    "special triggered"
                );
                damage = result.damage;
                striker.hp = (striker.hp + result.heal).min(striker.max_hp());
                for fact in result.attachments {
                    striker.facts.attach(fact);
                }
                striker_triggered = true;
            }
        }
    }

    target.hp = apply_damage(target.hp, damage);

    let mut target_triggered = false;
    if let (Some(spec), Some(state)) = (target_special, target.special) {
        if spec.trigger == SpecialTrigger::OnStruck && state.is_ready() && target.is_alive() {
            let mut context = SpecialContext::struck(target, striker, input, damage);
            if spec.should_trigger(&context) {
                spec.apply(&mut context);
                let result = context.finish();
                debug!(unit = %target.id, heal = result.heal, "defensive special triggered");
                target.hp = (target.hp + result.heal).min(target.max_hp());
                for fact in result.attachments {
                    target.facts.attach(fact);
                }
                target_triggered = true;
            }
        }
    }

    let striker_report = advance_special(striker, striker_triggered);
    let target_report = advance_special(target, target_triggered);

    let record = TurnOutcome {
        striker: striker.id,
        target: target.id,
        role,
        order: turn.order,
        damage,
        remaining_hp: target.hp,
        advantage,
        effective,
        striker_special: striker_report,
        target_special: target_report,
    };
    debug!(
        striker = %record.striker,
        target = %record.target,
        order = record.order,
        damage,
        remaining_hp = record.remaining_hp,
        %advantage,
        effective,
        "strike"
    );
    let (striker_hp, target_hp) = (striker.hp, target.hp);

    let side = outcome.side_mut(role);
    side.turns += 1;
    side.damage += damage;
    side.effective |= effective;
    side.triggered_special |= striker_triggered;
    side.extra_damage += (damage - base_damage).max(0);
    side.remaining_hp = striker_hp;
    side.special_cooldown = striker_report.cooldown;

    let foe_side = outcome.side_mut(role.opponent());
    foe_side.remaining_hp = target_hp;
    foe_side.triggered_special |= target_triggered;
    foe_side.special_cooldown = target_report.cooldown;

    outcome.turns.push(record);
}

/// Applies one strike's cooldown transition to a combatant's special.
fn advance_special(unit: &mut Unit, triggered: bool) -> SpecialReport {
    let rate = charge_rate(unit);
    match unit.special.as_mut() {
        Some(special) => {
            special.advance(triggered, rate);
            SpecialReport {
                cooldown: Some(special.cooldown()),
                triggered,
            }
        }
        None => SpecialReport::default(),
    }
}
