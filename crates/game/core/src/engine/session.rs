//! Encounter inputs and the combat-scoped working copy.

use crate::state::{BattleState, Role, Unit};

/// An ally standing near a combatant.
#[derive(Clone, Copy, Debug)]
pub struct Support<'a> {
    pub unit: &'a Unit,
    /// Tiles between the ally and the combatant it supports.
    pub distance: u8,
}

/// Everything needed to resolve one attack declaration.
///
/// Holds the live units; the engine never writes through these references.
#[derive(Clone, Debug)]
pub struct Engagement<'a> {
    pub attacker: &'a Unit,
    pub defender: &'a Unit,
    attacker_allies: Vec<Support<'a>>,
    defender_allies: Vec<Support<'a>>,
    pub battle: BattleState,
}

impl<'a> Engagement<'a> {
    pub fn new(attacker: &'a Unit, defender: &'a Unit) -> Self {
        Self {
            attacker,
            defender,
            attacker_allies: Vec::new(),
            defender_allies: Vec::new(),
            battle: BattleState::new(attacker.team),
        }
    }

    pub fn with_battle(mut self, battle: BattleState) -> Self {
        self.battle = battle;
        self
    }

    /// Adds an ally of the combatant in `role`.
    pub fn with_ally(mut self, role: Role, unit: &'a Unit, distance: u8) -> Self {
        let support = Support { unit, distance };
        match role {
            Role::Attacker => self.attacker_allies.push(support),
            Role::Defender => self.defender_allies.push(support),
        }
        self
    }

    pub fn unit(&self, role: Role) -> &'a Unit {
        match role {
            Role::Attacker => self.attacker,
            Role::Defender => self.defender,
        }
    }

    pub fn allies(&self, role: Role) -> &[Support<'a>] {
        match role {
            Role::Attacker => &self.attacker_allies,
            Role::Defender => &self.defender_allies,
        }
    }
}

/// Scratch state of one encounter.
///
/// The combatants are combat-scoped copies that hooks may freely mutate;
/// allies stay shared references to the live roster units.
#[derive(Debug)]
pub struct CombatSession<'a> {
    attacker: Unit,
    defender: Unit,
    allies: [&'a [Support<'a>]; 2],
    battle: &'a BattleState,
}

impl<'a> CombatSession<'a> {
    pub fn new(engagement: &'a Engagement<'a>) -> Self {
        Self {
            attacker: engagement.attacker.combat_copy(Role::Attacker),
            defender: engagement.defender.combat_copy(Role::Defender),
            allies: [
                engagement.allies(Role::Attacker),
                engagement.allies(Role::Defender),
            ],
            battle: &engagement.battle,
        }
    }

    pub fn unit(&self, role: Role) -> &Unit {
        match role {
            Role::Attacker => &self.attacker,
            Role::Defender => &self.defender,
        }
    }

    /// The unit in `role` and its foe, both mutable.
    pub fn pair_mut(&mut self, role: Role) -> (&mut Unit, &mut Unit) {
        match role {
            Role::Attacker => (&mut self.attacker, &mut self.defender),
            Role::Defender => (&mut self.defender, &mut self.attacker),
        }
    }

    pub fn allies(&self, role: Role) -> &'a [Support<'a>] {
        self.allies[role.index()]
    }

    pub fn battle(&self) -> &'a BattleState {
        self.battle
    }

    /// Whether either combatant has fallen.
    pub fn is_decided(&self) -> bool {
        !self.attacker.is_alive() || !self.defender.is_alive()
    }

    /// Consumes the session, returning the attacker and defender copies.
    pub fn into_units(self) -> (Unit, Unit) {
        (self.attacker, self.defender)
    }
}
