//! Passive skills of the A, B and S slots.

use skirmish_core::{
    CursorKind, DelayedEffect, Fact, SkillDefinition, SkillSlot, StatMods, TargetSet, Unit,
};

/// Whether the unit's current HP is at least `percent` of its maximum.
fn hp_at_least(unit: &Unit, percent: i32) -> bool {
    unit.hp * 100 >= unit.max_hp() * percent
}

pub(super) fn definitions() -> Vec<SkillDefinition> {
    vec![
        SkillDefinition::passive("Fury 3", SkillSlot::A)
            .on_before_combat(|ctx| {
                ctx.wielder
                    .facts
                    .attach(Fact::CombatBuff(StatMods::uniform(3)));
            })
            .on_after_combat(|ctx| {
                if ctx.attacked() {
                    ctx.queue(DelayedEffect::damage(ctx.wielder.id, 6));
                }
            }),
        SkillDefinition::passive("Death Blow 3", SkillSlot::A).on_initiate(|ctx| {
            ctx.wielder
                .facts
                .attach(Fact::CombatBuff(StatMods::new(6, 0, 0, 0)));
        }),
        SkillDefinition::passive("Close Counter", SkillSlot::A)
            .on_defense(|ctx| ctx.wielder.cursors.raise(CursorKind::Counterattack, 1)),
        SkillDefinition::passive("Distant Counter", SkillSlot::A)
            .on_defense(|ctx| ctx.wielder.cursors.raise(CursorKind::Counterattack, 1)),
        SkillDefinition::passive("Triangle Adept 3", SkillSlot::A)
            .on_modify_cursors(|ctx| ctx.wielder.cursors.raise(CursorKind::GemWeapon, 20)),
        SkillDefinition::passive("Vantage 3", SkillSlot::B).on_defense(|ctx| {
            if !hp_at_least(ctx.wielder, 76) {
                ctx.wielder.cursors.raise(CursorKind::Vantage, 1);
            }
        }),
        SkillDefinition::passive("Desperation 3", SkillSlot::B).on_initiate(|ctx| {
            if !hp_at_least(ctx.wielder, 76) {
                ctx.wielder.cursors.raise(CursorKind::Desperation, 1);
            }
        }),
        SkillDefinition::passive("Quick Riposte 3", SkillSlot::B).on_defense(|ctx| {
            if hp_at_least(ctx.wielder, 70) {
                ctx.wielder.cursors.raise(CursorKind::FollowUp, 1);
            }
        }),
        SkillDefinition::passive("Wary Fighter 3", SkillSlot::B).on_before_combat(|ctx| {
            if hp_at_least(ctx.wielder, 50) {
                ctx.wielder.cursors.lower(CursorKind::FollowUp, 1);
                ctx.foe.cursors.lower(CursorKind::FollowUp, 1);
            }
        }),
        // Gives up the follow-up to deny a physical foe's counter.
        SkillDefinition::passive("Windsweep 3", SkillSlot::B).on_initiate(|ctx| {
            ctx.wielder.cursors.lower(CursorKind::FollowUp, 1);
            let physical = ctx
                .foe
                .weapon_type()
                .is_some_and(|weapon| !weapon.is_magic());
            if physical && ctx.wielder_stats().spd >= ctx.foe_stats().spd + 1 {
                ctx.foe.cursors.lower(CursorKind::Counterattack, 1);
            }
        }),
        SkillDefinition::passive("Guard 3", SkillSlot::B).on_before_combat(|ctx| {
            if hp_at_least(ctx.wielder, 80) {
                ctx.foe.facts.attach(Fact::Guard);
            }
        }),
        SkillDefinition::passive("Seal Atk 3", SkillSlot::B).on_after_combat(|ctx| {
            if ctx.attacked() {
                ctx.queue(DelayedEffect::map_debuff(
                    ctx.foe.id,
                    StatMods::new(-7, 0, 0, 0),
                ));
            }
        }),
        SkillDefinition::passive("Iote's Shield", SkillSlot::S)
            .protects_against(TargetSet::FLIER),
    ]
}
