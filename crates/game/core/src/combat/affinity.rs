//! Weapon-triangle resolution.
//!
//! Two entry points with different precedence chains:
//!
//! - [`resolve_affinity`] answers "how does this unit stand against that one"
//!   for previews and skill conditions.
//! - [`resolve_triangle`] is used per strike by the damage formula. It checks
//!   the defender's reversal before the attacker's and also reports the
//!   triangle amplifier.

use crate::config::CombatConfig;
use crate::cursor::CursorKind;
use crate::state::{FactKind, Unit, WeaponColor};

/// Triangle standing of one unit against another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Advantage {
    Advantage,
    Neutral,
    Disadvantage,
}

impl Advantage {
    /// +1, 0 or -1.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Advantage::Advantage => 1,
            Advantage::Neutral => 0,
            Advantage::Disadvantage => -1,
        }
    }

    /// Triangle swing in percent of attack.
    #[inline]
    pub const fn percent(self) -> i32 {
        self.sign() * CombatConfig::TRIANGLE_PERCENT
    }

    /// Swaps advantage and disadvantage.
    pub const fn reversed(self) -> Self {
        match self {
            Advantage::Advantage => Advantage::Disadvantage,
            Advantage::Neutral => Advantage::Neutral,
            Advantage::Disadvantage => Advantage::Advantage,
        }
    }
}

/// Base color relationship: red beats green, green beats blue, blue beats red.
pub fn color_relationship(unit: WeaponColor, opponent: WeaponColor) -> Advantage {
    use WeaponColor::*;
    match (unit, opponent) {
        (Red, Green) | (Green, Blue) | (Blue, Red) => Advantage::Advantage,
        (Green, Red) | (Blue, Green) | (Red, Blue) => Advantage::Disadvantage,
        _ => Advantage::Neutral,
    }
}

/// Single-direction standing of `unit` against `opponent`.
///
/// The opponent's neutralisation wins over the unit's guaranteed advantage,
/// and a reversal held by the unit swaps the result.
pub fn resolve_affinity(unit: &Unit, opponent: &Unit) -> Advantage {
    if opponent.grants(FactKind::NeutralizeAffinity, CursorKind::CancelledAffinity) {
        return Advantage::Neutral;
    }
    if unit.grants(FactKind::GuaranteedAffinity, CursorKind::ArtificialAffinity) {
        return Advantage::Advantage;
    }

    let base = color_relationship(unit.color(), opponent.color());
    if unit.grants(FactKind::ReverseAffinity, CursorKind::ReverseAffinity) {
        base.reversed()
    } else {
        base
    }
}

/// Triangle terms of one strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangleOutcome {
    pub advantage: Advantage,
    /// Amplification in percent (0 when none applies).
    pub amplifier: i32,
}

/// Two-sided standing of a striker against its target.
pub fn resolve_triangle(attacker: &Unit, defender: &Unit) -> TriangleOutcome {
    let advantage = if defender.grants(FactKind::ReverseAffinity, CursorKind::ReverseAffinity) {
        color_relationship(defender.color(), attacker.color())
    } else if attacker.grants(FactKind::ReverseAffinity, CursorKind::ReverseAffinity) {
        Advantage::Neutral
    } else if attacker.grants(FactKind::GuaranteedAffinity, CursorKind::ArtificialAffinity) {
        Advantage::Advantage
    } else {
        color_relationship(attacker.color(), defender.color())
    };

    let gem = attacker.cursors.value(CursorKind::GemWeapon).max(0);
    let trilemma = if attacker.facts.has(FactKind::Trilemma) || defender.facts.has(FactKind::Trilemma)
    {
        CombatConfig::AMPLIFIER_PERCENT
    } else {
        0
    };

    TriangleOutcome {
        advantage,
        amplifier: gem.max(trilemma),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Fact, Stats, UnitBuilder, WeaponProfile, WeaponType};
    use crate::skill::SkillTable;

    fn unit(color: WeaponColor) -> Unit {
        let mut unit = UnitBuilder::new(crate::state::UnitId(1), "unit")
            .stats(Stats::new(40, 30, 30, 20, 20))
            .build(&SkillTable::new())
            .unwrap();
        unit.weapon = Some(WeaponProfile::new(WeaponType::Tome, color, 5));
        unit
    }

    #[test]
    fn triangle_is_cyclic() {
        use WeaponColor::*;
        assert_eq!(color_relationship(Red, Green), Advantage::Advantage);
        assert_eq!(color_relationship(Green, Red), Advantage::Disadvantage);
        assert_eq!(color_relationship(Green, Blue), Advantage::Advantage);
        assert_eq!(color_relationship(Blue, Red), Advantage::Advantage);
        assert_eq!(color_relationship(Red, Red), Advantage::Neutral);
        assert_eq!(color_relationship(Colorless, Blue), Advantage::Neutral);
    }

    #[test]
    fn red_against_green_is_plus_twenty() {
        let red = unit(WeaponColor::Red);
        let green = unit(WeaponColor::Green);
        assert_eq!(resolve_affinity(&red, &green).percent(), 20);
        assert_eq!(resolve_affinity(&green, &red).percent(), -20);
    }

    #[test]
    fn opponent_neutralisation_forces_neutral() {
        let red = unit(WeaponColor::Red);
        let mut green = unit(WeaponColor::Green);
        green.facts.attach(Fact::NeutralizeAffinity);
        assert_eq!(resolve_affinity(&red, &green), Advantage::Neutral);

        let mut guaranteed = red.clone();
        guaranteed.facts.attach(Fact::GuaranteedAffinity);
        assert_eq!(resolve_affinity(&guaranteed, &green), Advantage::Neutral);
    }

    #[test]
    fn guaranteed_affinity_beats_colors() {
        let mut green = unit(WeaponColor::Green);
        let red = unit(WeaponColor::Red);
        green.facts.attach(Fact::GuaranteedAffinity);
        assert_eq!(resolve_affinity(&green, &red), Advantage::Advantage);
    }

    #[test]
    fn only_own_reversal_swaps() {
        let red = unit(WeaponColor::Red);
        let mut green = unit(WeaponColor::Green);
        green.cursors.raise(CursorKind::ReverseAffinity, 1);
        assert_eq!(resolve_affinity(&green, &red), Advantage::Advantage);
        assert_eq!(resolve_affinity(&red, &green), Advantage::Advantage);
    }

    #[test]
    fn two_sided_checks_defender_reversal_first() {
        let mut red = unit(WeaponColor::Red);
        let mut green = unit(WeaponColor::Green);
        green.cursors.raise(CursorKind::ReverseAffinity, 1);
        red.cursors.raise(CursorKind::ArtificialAffinity, 1);
        assert_eq!(
            resolve_triangle(&red, &green).advantage,
            Advantage::Disadvantage
        );

        // Attacker-only reversal cancels the triangle.
        assert_eq!(resolve_triangle(&green, &red).advantage, Advantage::Neutral);
    }

    #[test]
    fn amplifier_comes_from_gem_or_trilemma() {
        let mut red = unit(WeaponColor::Red);
        let mut green = unit(WeaponColor::Green);
        assert_eq!(resolve_triangle(&red, &green).amplifier, 0);

        red.cursors.raise(CursorKind::GemWeapon, 20);
        assert_eq!(resolve_triangle(&red, &green).amplifier, 20);
        assert_eq!(resolve_triangle(&green, &red).amplifier, 0);

        green.facts.attach(Fact::Trilemma);
        assert_eq!(resolve_triangle(&green, &red).amplifier, 20);
    }
}
