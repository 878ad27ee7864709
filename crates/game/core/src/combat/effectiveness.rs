//! Weapon effectiveness.

use crate::state::{TargetSet, Unit};

/// Whether a weapon effective against `effective_against` deals effective
/// damage to `foe`.
///
/// Categories listed in the foe's `protection` are ignored; the strike stays
/// effective only if some unprotected category still matches.
pub fn is_effective(effective_against: TargetSet, foe: &Unit, protection: TargetSet) -> bool {
    let foe_categories = foe.movement.target()
        | foe
            .weapon_type()
            .map_or(TargetSet::empty(), |weapon| weapon.target());
    !(effective_against & foe_categories)
        .difference(protection)
        .is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::SkillTable;
    use crate::state::{MovementType, Stats, UnitBuilder, UnitId, WeaponColor, WeaponProfile, WeaponType};

    fn flier_lancer() -> Unit {
        let mut unit = UnitBuilder::new(UnitId(2), "Pegasus")
            .movement(MovementType::Flier)
            .stats(Stats::new(35, 28, 33, 18, 30))
            .build(&SkillTable::new())
            .unwrap();
        unit.weapon = Some(WeaponProfile::new(WeaponType::Lance, WeaponColor::Blue, 10));
        unit
    }

    #[test]
    fn bows_are_effective_against_fliers() {
        let foe = flier_lancer();
        assert!(is_effective(TargetSet::FLIER, &foe, TargetSet::empty()));
        assert!(!is_effective(TargetSet::ARMORED, &foe, TargetSet::empty()));
    }

    #[test]
    fn weapon_categories_also_match() {
        let foe = flier_lancer();
        assert!(is_effective(TargetSet::LANCE, &foe, TargetSet::empty()));
    }

    #[test]
    fn protection_cancels_only_its_categories() {
        let foe = flier_lancer();
        assert!(!is_effective(TargetSet::FLIER, &foe, TargetSet::FLIER));
        assert!(is_effective(
            TargetSet::FLIER | TargetSet::LANCE,
            &foe,
            TargetSet::FLIER
        ));
    }
}
