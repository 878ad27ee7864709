//! Skills that act on allies: C-slot spurs and drives, and assists.

use skirmish_core::{Fact, MovementType, SkillDefinition, SkillSlot, StatMods};

fn buff(mods: StatMods) -> Fact {
    Fact::CombatBuff(mods)
}

pub(super) fn definitions() -> Vec<SkillDefinition> {
    vec![
        SkillDefinition::passive("Spur Atk 3", SkillSlot::C).on_before_ally_combat(|ctx| {
            if ctx.distance <= 1 {
                ctx.ally.facts.attach(buff(StatMods::new(4, 0, 0, 0)));
            }
        }),
        SkillDefinition::passive("Spur Def 3", SkillSlot::C).on_before_ally_combat(|ctx| {
            if ctx.distance <= 1 {
                ctx.ally.facts.attach(buff(StatMods::new(0, 0, 4, 0)));
            }
        }),
        SkillDefinition::passive("Drive Atk 2", SkillSlot::C).on_before_ally_combat(|ctx| {
            if ctx.distance <= 2 {
                ctx.ally.facts.attach(buff(StatMods::new(3, 0, 0, 0)));
            }
        }),
        SkillDefinition::passive("Goad Armor", SkillSlot::C).on_before_ally_combat(|ctx| {
            if ctx.distance <= 2 && ctx.ally.movement == MovementType::Armored {
                ctx.ally.facts.attach(buff(StatMods::new(4, 4, 0, 0)));
            }
        }),
        // Map-phase assist; contributes nothing to combat.
        SkillDefinition::assist("Rally Attack"),
    ]
}
