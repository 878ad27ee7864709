//! Damage calculation and application.

use crate::config::CombatConfig;
use crate::cursor::CursorKind;
use crate::state::{Stats, Unit, WeaponType};
use crate::stats::combat_stats;

use super::affinity::{Advantage, resolve_triangle};

/// Everything the damage formula reads for one strike.
///
/// Built by [`DamageInput::between`] from the combatants' current state;
/// specials may rework it before damage is recomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageInput {
    /// Striker's combat Atk.
    pub attack: i32,
    /// Target's stat selected by [`targeted_defense`].
    pub defense: i32,
    pub effective: bool,
    pub advantage: Advantage,
    /// Triangle amplification in percent.
    pub amplifier: i32,
    /// Flat damage added after the main formula (may be negative).
    pub flat: i32,
    /// Percentage reductions on the target, composed multiplicatively.
    pub reductions: Vec<u8>,
    /// Staff strikes are halved.
    pub staff_penalty: bool,
}

impl DamageInput {
    /// A plain strike with no modifiers.
    pub fn new(attack: i32, defense: i32) -> Self {
        Self {
            attack,
            defense,
            effective: false,
            advantage: Advantage::Neutral,
            amplifier: 0,
            flat: 0,
            reductions: Vec::new(),
            staff_penalty: false,
        }
    }

    /// Reads the strike of `striker` on `target` from their current state.
    pub fn between(striker: &Unit, target: &Unit) -> Self {
        let striker_stats = combat_stats(striker);
        let target_stats = combat_stats(target);
        let triangle = resolve_triangle(striker, target);
        let weapon = striker.weapon_type();

        let flat = striker.cursors.value(CursorKind::DamageIncrease).max(0)
            - target.cursors.value(CursorKind::DamageReduction).max(0);

        Self {
            attack: striker_stats.atk,
            defense: targeted_defense(
                weapon,
                striker.cursors.is_granted(CursorKind::LowerOfDefAndRes),
                &target_stats,
            ),
            effective: striker.cursors.is_granted(CursorKind::Effectiveness),
            advantage: triangle.advantage,
            amplifier: triangle.amplifier,
            flat,
            reductions: target.facts.damage_reductions().collect(),
            staff_penalty: weapon == Some(WeaponType::Staff)
                && !striker
                    .cursors
                    .is_granted(CursorKind::StaffDamageLikeOtherWeapons),
        }
    }
}

/// Selects the defensive stat a strike targets.
///
/// Lower of Def and Res when granted, Res against magic-using weapons, Def
/// otherwise.
pub fn targeted_defense(weapon: Option<WeaponType>, lower_of_def_and_res: bool, target: &Stats) -> i32 {
    if lower_of_def_and_res {
        target.def.min(target.res)
    } else if weapon.is_some_and(WeaponType::is_magic) {
        target.res
    } else {
        target.def
    }
}

/// Attack after the effectiveness multiplier (floored).
#[inline]
pub fn effective_attack(attack: i32, effective: bool) -> i32 {
    if effective {
        (attack * CombatConfig::EFFECTIVE_ATTACK_PERCENT).div_euclid(100)
    } else {
        attack
    }
}

/// Calculate damage of one strike.
///
/// # Formula
///
/// ```text
/// attack   = floor(atk * 1.5) if effective
/// amp      = min(|amplifier|, MAX_AMPLIFIER_PERCENT)
/// triangle = floor(attack * ±20% * floor((amp + 20) / 20))
/// raw      = attack - defense + triangle
/// damage   = max(max(raw, 0) + flat, 0)
/// damage   = ceil(damage * Π(100 - p) / 100ⁿ)
/// damage   = floor(damage / 2)          if staff penalty
/// ```
///
/// Never negative.
pub fn calculate_damage(input: &DamageInput) -> i32 {
    let attack = effective_attack(input.attack, input.effective);
    let amplifier = input
        .amplifier
        .saturating_abs()
        .min(CombatConfig::MAX_AMPLIFIER_PERCENT);
    let amplification =
        (amplifier + CombatConfig::TRIANGLE_PERCENT) / CombatConfig::TRIANGLE_PERCENT;
    let triangle = (attack * input.advantage.percent() * amplification).div_euclid(100);

    let raw = attack - input.defense + triangle;
    let damage = (raw.max(0) + input.flat).max(0);
    let damage = mitigate(damage, &input.reductions);

    if input.staff_penalty {
        damage / 2
    } else {
        damage
    }
}

/// Largest denominator carried before the kept fraction is coarsened.
const MITIGATION_PRECISION: u128 = 10u128.pow(24);

/// Applies percentage reductions as one product, rounding up once.
fn mitigate(damage: i32, reductions: &[u8]) -> i32 {
    if damage <= 0 {
        return 0;
    }
    let mut kept = damage as u128;
    let mut scale: u128 = 1;
    for (index, percent) in reductions.iter().enumerate() {
        let keep = u128::from(100 - (*percent).min(100));
        if keep == 0 {
            return 0;
        }
        kept *= keep;
        scale *= 100;
        let divisor = gcd(kept, scale);
        kept /= divisor;
        scale /= divisor;

        // At or below one point only a full reduction can still matter.
        if kept <= scale {
            let wiped = reductions[index + 1..].iter().any(|p| *p >= 100);
            return if wiped { 0 } else { 1 };
        }
        // Coarsen upward so the result can only round toward more damage.
        if scale > MITIGATION_PRECISION {
            kept = kept.div_ceil(100);
            scale /= 100;
        }
    }
    // kept / scale never exceeds the starting damage
    kept.div_ceil(scale) as i32
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Apply damage to current HP.
///
/// Returns the new HP value, clamped to 0.
pub fn apply_damage(current_hp: i32, damage: i32) -> i32 {
    (current_hp - damage.max(0)).max(0)
}
