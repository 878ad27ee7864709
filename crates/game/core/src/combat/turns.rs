//! Strike order of one encounter.
//!
//! The sequence is generated once from the combatants' state after all
//! pre-combat phases ran; the resolution loop stops consuming it as soon as
//! either side falls.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::cursor::CursorKind;
use crate::state::{FactKind, Role, Unit};
use crate::stats::combat_stats;

/// One directed strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    pub striker: Role,
    /// 1-based running count of this striker's strikes.
    pub order: u8,
}

pub type TurnQueue = ArrayVec<Turn, { CombatConfig::MAX_TURNS }>;

/// Whether the defender strikes back at all.
///
/// Matching ranges allow a counter unless it is prevented; differing ranges
/// need an explicit counterattack grant that is not prevented. An unarmed
/// defender never counters.
pub fn defender_can_fight_back(attacker: &Unit, defender: &Unit) -> bool {
    if defender.weapon.is_none() {
        return false;
    }
    let prevented = attacker.facts.has(FactKind::PreventCounterattack)
        || defender.cursors.is_denied(CursorKind::Counterattack);
    if prevented {
        return false;
    }
    attacker.range() == defender.range()
        || defender.grants(FactKind::Counterattack, CursorKind::Counterattack)
}

/// Consecutive strikes per burst: doubled by Desperation, doubled again by a
/// brave weapon.
fn burst(unit: &Unit) -> u8 {
    let mut strikes = 1;
    if unit.grants(FactKind::Desperation, CursorKind::Desperation) {
        strikes *= 2;
    }
    if unit.grants(FactKind::BraveWeapon, CursorKind::BraveWeapon) {
        strikes *= 2;
    }
    strikes
}

fn makes_follow_up(unit: &Unit, foe: &Unit, config: &CombatConfig) -> bool {
    let denied =
        unit.facts.has(FactKind::PreventFollowup) || unit.cursors.is_denied(CursorKind::FollowUp);
    let natural =
        combat_stats(unit).spd >= combat_stats(foe).spd + config.follow_up_threshold && !denied;
    let granted = unit.grants(FactKind::GuaranteedFollowup, CursorKind::FollowUp)
        && !unit.grants(FactKind::Desperation, CursorKind::Desperation);
    natural || granted
}

struct Sequencer {
    queue: TurnQueue,
    orders: [u8; 2],
}

impl Sequencer {
    fn push_burst(&mut self, striker: Role, strikes: u8) {
        for _ in 0..strikes {
            let order = &mut self.orders[striker.index()];
            *order += 1;
            // Bursts are at most four strikes and there are at most five
            // bursts, so the queue capacity is never exceeded.
            self.queue.push(Turn {
                striker,
                order: *order,
            });
        }
    }
}

/// Generates the ordered strikes of one encounter.
pub fn generate_turns(attacker: &Unit, defender: &Unit, config: &CombatConfig) -> TurnQueue {
    let fights_back = defender_can_fight_back(attacker, defender);
    let mut sequencer = Sequencer {
        queue: TurnQueue::new(),
        orders: [0; 2],
    };

    if fights_back && defender.grants(FactKind::Vantage, CursorKind::Vantage) {
        sequencer.push_burst(Role::Defender, 1);
    }

    sequencer.push_burst(Role::Attacker, burst(attacker));
    if fights_back {
        sequencer.push_burst(Role::Defender, burst(defender));
    }

    if makes_follow_up(attacker, defender, config) {
        sequencer.push_burst(Role::Attacker, burst(attacker));
    }
    if fights_back && makes_follow_up(defender, attacker, config) {
        sequencer.push_burst(Role::Defender, burst(defender));
    }

    sequencer.queue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::SkillTable;
    use crate::state::{Fact, Stats, UnitBuilder, UnitId, WeaponColor, WeaponProfile, WeaponType};
    use Role::{Attacker as A, Defender as D};

    fn unit(id: u32, spd: i32, weapon: WeaponType) -> Unit {
        let mut unit = UnitBuilder::new(UnitId(id), "unit")
            .stats(Stats::new(40, 30, spd, 20, 20))
            .build(&SkillTable::new())
            .unwrap();
        let color = weapon.fixed_color().unwrap_or(WeaponColor::Red);
        unit.weapon = Some(WeaponProfile::new(weapon, color, 8));
        unit
    }

    fn strikers(turns: &TurnQueue) -> Vec<Role> {
        turns.iter().map(|turn| turn.striker).collect()
    }

    #[test]
    fn mirror_match_is_one_exchange() {
        let attacker = unit(1, 30, WeaponType::Sword);
        let defender = unit(2, 30, WeaponType::Sword);
        let turns = generate_turns(&attacker, &defender, &CombatConfig::default());
        assert_eq!(strikers(&turns), vec![A, D]);
    }

    #[test]
    fn speed_margin_grants_follow_up() {
        let attacker = unit(1, 35, WeaponType::Sword);
        let defender = unit(2, 30, WeaponType::Sword);
        let turns = generate_turns(&attacker, &defender, &CombatConfig::default());
        assert_eq!(strikers(&turns), vec![A, D, A]);

        let slower = unit(1, 34, WeaponType::Sword);
        let turns = generate_turns(&slower, &defender, &CombatConfig::default());
        assert_eq!(strikers(&turns), vec![A, D]);
    }

    #[test]
    fn brave_doubles_startup() {
        let mut attacker = unit(1, 30, WeaponType::Sword);
        attacker.facts.attach(Fact::BraveWeapon);
        let defender = unit(2, 30, WeaponType::Sword);
        let turns = generate_turns(&attacker, &defender, &CombatConfig::default());
        assert_eq!(strikers(&turns), vec![A, A, D]);
    }

    #[test]
    fn brave_compounds_with_natural_follow_up() {
        let mut attacker = unit(1, 40, WeaponType::Sword);
        attacker.cursors.raise(CursorKind::BraveWeapon, 1);
        let defender = unit(2, 30, WeaponType::Sword);

        let turns = generate_turns(&attacker, &defender, &CombatConfig::default());
        assert_eq!(strikers(&turns), vec![A, A, D, A, A]);

        attacker.facts.attach(Fact::PreventCounterattack);
        let turns = generate_turns(&attacker, &defender, &CombatConfig::default());
        assert_eq!(strikers(&turns), vec![A, A, A, A]);
    }

    #[test]
    fn orders_count_per_striker() {
        let mut attacker = unit(1, 40, WeaponType::Sword);
        attacker.facts.attach(Fact::BraveWeapon);
        let defender = unit(2, 30, WeaponType::Sword);
        let turns = generate_turns(&attacker, &defender, &CombatConfig::default());
        let orders: Vec<u8> = turns.iter().map(|turn| turn.order).collect();
        assert_eq!(orders, vec![1, 2, 1, 3, 4]);
    }

    #[test]
    fn range_mismatch_needs_counter_grant() {
        let attacker = unit(1, 30, WeaponType::Bow);
        let mut defender = unit(2, 30, WeaponType::Sword);
        assert!(!defender_can_fight_back(&attacker, &defender));
        assert_eq!(
            strikers(&generate_turns(&attacker, &defender, &CombatConfig::default())),
            vec![A]
        );

        defender.cursors.raise(CursorKind::Counterattack, 1);
        assert!(defender_can_fight_back(&attacker, &defender));

        defender.cursors.lower(CursorKind::Counterattack, 1);
        assert!(!defender_can_fight_back(&attacker, &defender));
    }

    #[test]
    fn vantage_strikes_first() {
        let attacker = unit(1, 30, WeaponType::Sword);
        let mut defender = unit(2, 30, WeaponType::Sword);
        defender.facts.attach(Fact::Vantage);
        let turns = generate_turns(&attacker, &defender, &CombatConfig::default());
        assert_eq!(strikers(&turns), vec![D, A, D]);
    }

    #[test]
    fn vantage_needs_ability_to_counter() {
        let attacker = unit(1, 30, WeaponType::Bow);
        let mut defender = unit(2, 30, WeaponType::Sword);
        defender.facts.attach(Fact::Vantage);
        let turns = generate_turns(&attacker, &defender, &CombatConfig::default());
        assert_eq!(strikers(&turns), vec![A]);
    }

    #[test]
    fn desperation_doubles_startup_but_blocks_granted_follow_up() {
        let mut attacker = unit(1, 30, WeaponType::Sword);
        attacker.facts.attach(Fact::Desperation);
        attacker.cursors.raise(CursorKind::FollowUp, 1);
        let defender = unit(2, 30, WeaponType::Sword);
        let turns = generate_turns(&attacker, &defender, &CombatConfig::default());
        assert_eq!(strikers(&turns), vec![A, A, D]);

        // The natural follow-up is unaffected by Desperation.
        let mut fast = unit(1, 40, WeaponType::Sword);
        fast.facts.attach(Fact::Desperation);
        let turns = generate_turns(&fast, &defender, &CombatConfig::default());
        assert_eq!(strikers(&turns), vec![A, A, D, A, A]);
    }

    #[test]
    fn follow_up_denial_overrides_speed() {
        let mut attacker = unit(1, 40, WeaponType::Sword);
        attacker.cursors.lower(CursorKind::FollowUp, 1);
        let defender = unit(2, 30, WeaponType::Sword);
        let turns = generate_turns(&attacker, &defender, &CombatConfig::default());
        assert_eq!(strikers(&turns), vec![A, D]);
    }

    #[test]
    fn unarmed_defender_never_counters() {
        let attacker = unit(1, 30, WeaponType::Sword);
        let mut defender = unit(2, 30, WeaponType::Sword);
        defender.weapon = None;
        defender.facts.attach(Fact::Counterattack);
        assert!(!defender_can_fight_back(&attacker, &defender));
    }

    #[test]
    fn longest_sequence_fills_the_queue() {
        // A zero threshold lets equally fast units both follow up.
        let config = CombatConfig::with_follow_up_threshold(0);
        let mut attacker = unit(1, 30, WeaponType::Sword);
        attacker.facts.attach(Fact::BraveWeapon);
        attacker.facts.attach(Fact::Desperation);
        let mut defender = attacker.clone();
        defender.id = UnitId(2);
        defender.facts.attach(Fact::Vantage);

        let turns = generate_turns(&attacker, &defender, &config);
        assert_eq!(turns.len(), CombatConfig::MAX_TURNS);
        assert_eq!(turns[0].striker, D);
    }
}
