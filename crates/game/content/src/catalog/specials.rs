//! Special skills.

use skirmish_core::{Fact, SkillDefinition, SpecialSpec};

pub(super) fn definitions() -> Vec<SkillDefinition> {
    vec![
        SkillDefinition::special(
            "Moonbow",
            SpecialSpec::offensive(2, |ctx| {
                ctx.rework(|input| input.defense -= input.defense * 30 / 100)
            }),
        ),
        SkillDefinition::special(
            "Glimmer",
            SpecialSpec::offensive(2, |ctx| ctx.damage += ctx.damage / 2),
        ),
        SkillDefinition::special(
            "Bonfire",
            SpecialSpec::offensive(3, |ctx| {
                let bonus = ctx.wielder_stats().def / 2;
                ctx.rework(|input| input.flat += bonus);
            }),
        ),
        SkillDefinition::special(
            "Sol",
            SpecialSpec::offensive(3, |ctx| ctx.heal_percent_of_damage(50)),
        ),
        // Adds 30% of the HP the wielder has lost; idle while unhurt.
        SkillDefinition::special(
            "Reprisal",
            SpecialSpec::offensive(2, |ctx| {
                let missing = ctx.wielder.max_hp() - ctx.wielder.hp;
                ctx.rework(|input| input.flat += missing * 30 / 100);
            })
            .when(|ctx| ctx.wielder.hp < ctx.wielder.max_hp()),
        ),
        SkillDefinition::special(
            "Aegis",
            SpecialSpec::defensive(3, |ctx| {
                ctx.heal = 10;
                ctx.attach(Fact::DamageReduction(30));
            }),
        ),
    ]
}
