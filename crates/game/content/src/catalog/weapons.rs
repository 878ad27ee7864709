//! Weapon skills.

use skirmish_core::{
    CursorKind, SkillDefinition, TargetSet, WeaponColor, WeaponSpec, WeaponType,
};

pub(super) fn definitions() -> Vec<SkillDefinition> {
    vec![
        SkillDefinition::weapon(
            "Silver Sword",
            WeaponSpec::new(WeaponType::Sword, WeaponColor::Red, 15),
        ),
        SkillDefinition::weapon(
            "Silver Lance",
            WeaponSpec::new(WeaponType::Lance, WeaponColor::Blue, 15),
        ),
        SkillDefinition::weapon(
            "Silver Axe",
            WeaponSpec::new(WeaponType::Axe, WeaponColor::Green, 15),
        ),
        // Strikes twice, but only when initiating.
        SkillDefinition::weapon(
            "Brave Sword",
            WeaponSpec::new(WeaponType::Sword, WeaponColor::Red, 8),
        )
        .on_before_combat(|ctx| {
            if ctx.is_initiating() {
                ctx.wielder.cursors.raise(CursorKind::BraveWeapon, 1);
            }
        }),
        SkillDefinition::weapon(
            "Ruby Sword",
            WeaponSpec::new(WeaponType::Sword, WeaponColor::Red, 8),
        )
        .on_modify_cursors(|ctx| ctx.wielder.cursors.raise(CursorKind::GemWeapon, 20)),
        SkillDefinition::weapon(
            "Bolganone",
            WeaponSpec::new(WeaponType::Tome, WeaponColor::Red, 9),
        ),
        SkillDefinition::weapon(
            "Silver Bow",
            WeaponSpec::new(WeaponType::Bow, WeaponColor::Colorless, 13)
                .effective_against(TargetSet::FLIER),
        ),
        SkillDefinition::weapon(
            "Armorslayer",
            WeaponSpec::new(WeaponType::Sword, WeaponColor::Red, 8)
                .effective_against(TargetSet::ARMORED),
        ),
        // Staff strikes deal full damage.
        SkillDefinition::weapon(
            "Gravity",
            WeaponSpec::new(WeaponType::Staff, WeaponColor::Colorless, 6),
        )
        .on_modify_cursors(|ctx| {
            ctx.wielder
                .cursors
                .raise(CursorKind::StaffDamageLikeOtherWeapons, 1)
        }),
        SkillDefinition::weapon(
            "Assault",
            WeaponSpec::new(WeaponType::Staff, WeaponColor::Colorless, 10),
        ),
    ]
}
