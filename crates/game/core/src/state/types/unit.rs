//! Combat unit state.
//!
//! A [`Unit`] is the persistent combatant owned by the roster. The combat
//! engine never mutates a live unit; it works on [`Unit::combat_copy`] and
//! hands back an outcome the caller may commit.

use crate::combat::SpecialState;
use crate::cursor::{CursorKind, CursorRegistry};
use crate::skill::{SkillKind, SkillOracle};
use crate::state::error::EquipError;

use super::common::{Role, TeamId, UnitId};
use super::facts::{Fact, FactKind, Facts};
use super::skills::{SkillId, SkillSet};
use super::stats::Stats;
use super::weapon::{MovementType, TargetSet, WeaponColor, WeaponProfile, WeaponType};

/// A persistent combatant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub team: TeamId,
    pub movement: MovementType,
    /// Weapon categories this unit may wield.
    pub allowed_weapons: TargetSet,
    /// Stats without weapon might. `hp` is the maximum HP.
    pub base_stats: Stats,
    /// Current HP, in `[0, max_hp]`.
    pub hp: i32,
    pub weapon: Option<WeaponProfile>,
    pub skills: SkillSet,
    pub facts: Facts,
    pub cursors: CursorRegistry,
    pub special: Option<SpecialState>,
}

impl Unit {
    /// Stats including weapon might, with `hp` set to current HP.
    pub fn stats(&self) -> Stats {
        let might = self.weapon.map_or(0, |weapon| weapon.might);
        Stats {
            hp: self.hp,
            atk: self.base_stats.atk + might,
            ..self.base_stats
        }
    }

    #[inline]
    pub fn max_hp(&self) -> i32 {
        self.base_stats.hp
    }

    /// Weapon color; units without a weapon are colorless.
    pub fn color(&self) -> WeaponColor {
        self.weapon.map_or(WeaponColor::Colorless, |weapon| weapon.color)
    }

    pub fn weapon_type(&self) -> Option<WeaponType> {
        self.weapon.map(|weapon| weapon.kind)
    }

    /// Attack range in tiles, 0 when unarmed.
    pub fn range(&self) -> u8 {
        self.weapon.map_or(0, |weapon| weapon.range)
    }

    /// Whether a rule is granted either by an attached fact or by its cursor.
    pub fn grants(&self, fact: FactKind, cursor: CursorKind) -> bool {
        self.facts.has(fact) || self.cursors.is_granted(cursor)
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Creates the scratch copy a combat session works on.
    ///
    /// Cursors start from zero and the encounter markers are attached; every
    /// other field, facts included, carries over from the live unit.
    pub fn combat_copy(&self, role: Role) -> Self {
        let mut copy = self.clone();
        copy.cursors.reset_all();
        copy.facts.attach(Fact::Battling);
        if role == Role::Attacker {
            copy.facts.attach(Fact::InitiateCombat);
        }
        copy
    }

    /// Equips a skill from the skill table, validating the loadout.
    ///
    /// The unit is left untouched when validation fails.
    pub fn equip(
        &mut self,
        oracle: &(impl SkillOracle + ?Sized),
        skill: &SkillId,
    ) -> Result<(), EquipError> {
        let definition = oracle
            .skill(skill)
            .ok_or_else(|| EquipError::UnknownSkill {
                unit: self.id,
                skill: skill.clone(),
            })?;

        if let Some(current) = self.skills.get(definition.slot) {
            return Err(EquipError::SlotOccupied {
                unit: self.id,
                slot: definition.slot,
                current: current.clone(),
                skill: skill.clone(),
            });
        }

        let mut weapon_type = self.weapon_type();
        if let SkillKind::Weapon(spec) = &definition.kind {
            if !spec.kind.accepts_color(spec.color) {
                return Err(EquipError::IncompatibleColor {
                    skill: skill.clone(),
                    weapon_type: spec.kind,
                    color: spec.color,
                });
            }
            if !self.allowed_weapons.contains(spec.kind.target()) {
                return Err(EquipError::WeaponTypeNotAllowed {
                    unit: self.id,
                    skill: skill.clone(),
                    weapon_type: spec.kind,
                });
            }
            weapon_type = Some(spec.kind);
        }

        if !definition.allowed_users.admits(self.movement, weapon_type) {
            return Err(EquipError::UserNotAllowed {
                unit: self.id,
                skill: skill.clone(),
            });
        }

        match &definition.kind {
            SkillKind::Weapon(spec) => self.weapon = Some(spec.profile()),
            SkillKind::Special(spec) => self.special = Some(SpecialState::new(spec.cooldown)),
            SkillKind::Passive | SkillKind::Assist => {}
        }
        self.skills.set(definition.slot, skill.clone());
        Ok(())
    }
}

/// Builder for [`Unit`].
///
/// Weapon skills are equipped before every other skill so that user filters
/// see the final weapon type.
#[derive(Clone, Debug)]
pub struct UnitBuilder {
    id: UnitId,
    name: String,
    team: TeamId,
    movement: MovementType,
    allowed_weapons: TargetSet,
    stats: Stats,
    skills: Vec<SkillId>,
    facts: Vec<Fact>,
}

impl UnitBuilder {
    pub fn new(id: UnitId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            team: TeamId::default(),
            movement: MovementType::Infantry,
            allowed_weapons: TargetSet::WEAPONS,
            stats: Stats::default(),
            skills: Vec::new(),
            facts: Vec::new(),
        }
    }

    pub fn team(mut self, team: TeamId) -> Self {
        self.team = team;
        self
    }

    pub fn movement(mut self, movement: MovementType) -> Self {
        self.movement = movement;
        self
    }

    /// Restricts the weapon categories the unit may wield.
    pub fn weapons(mut self, allowed: TargetSet) -> Self {
        self.allowed_weapons = allowed & TargetSet::WEAPONS;
        self
    }

    /// Sets base stats; `stats.hp` becomes both max and current HP.
    pub fn stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    pub fn skill(mut self, skill: impl Into<SkillId>) -> Self {
        self.skills.push(skill.into());
        self
    }

    pub fn fact(mut self, fact: Fact) -> Self {
        self.facts.push(fact);
        self
    }

    pub fn build(self, oracle: &(impl SkillOracle + ?Sized)) -> Result<Unit, EquipError> {
        let mut unit = Unit {
            id: self.id,
            name: self.name,
            team: self.team,
            movement: self.movement,
            allowed_weapons: self.allowed_weapons,
            base_stats: self.stats,
            hp: self.stats.hp,
            weapon: None,
            skills: SkillSet::empty(),
            facts: Facts::empty(),
            cursors: CursorRegistry::new(),
            special: None,
        };

        let (weapons, others): (Vec<_>, Vec<_>) = self.skills.iter().partition(|skill| {
            oracle
                .skill(skill)
                .is_some_and(|definition| matches!(definition.kind, SkillKind::Weapon(_)))
        });
        for skill in weapons.into_iter().chain(others) {
            unit.equip(oracle, skill)?;
        }

        for fact in self.facts {
            unit.facts.attach(fact);
        }
        Ok(unit)
    }
}
