use skirmish_content::standard_catalog;
use skirmish_core::{
    CombatConfig, CombatEngine, CombatOutcome, DelayedEffect, Engagement, MovementType, Role,
    SkillTable, SpecialState, StatMods, Stats, TeamId, Unit, UnitBuilder, UnitId, map_stats,
};

const BASE: Stats = Stats::new(40, 30, 30, 25, 20);

struct Arena {
    catalog: SkillTable,
    config: CombatConfig,
}

impl Arena {
    fn new() -> Self {
        Self {
            catalog: standard_catalog(),
            config: CombatConfig::default(),
        }
    }

    fn engine(&self) -> CombatEngine<'_> {
        CombatEngine::new(&self.catalog, &self.config)
    }

    fn unit(&self, id: u32, stats: Stats, skills: &[&str]) -> Unit {
        self.unit_moving(id, MovementType::Infantry, stats, skills)
    }

    fn unit_moving(&self, id: u32, movement: MovementType, stats: Stats, skills: &[&str]) -> Unit {
        skills
            .iter()
            .fold(
                UnitBuilder::new(UnitId(id), format!("unit-{id}"))
                    .team(TeamId((id % 2) as u8))
                    .movement(movement)
                    .stats(stats),
                |builder, skill| builder.skill(*skill),
            )
            .build(&self.catalog)
            .unwrap()
    }

    fn fight(&self, attacker: &Unit, defender: &Unit) -> CombatOutcome {
        self.engine()
            .resolve(&Engagement::new(attacker, defender))
            .unwrap()
    }
}

fn roles(outcome: &CombatOutcome) -> Vec<Role> {
    outcome.turns.iter().map(|turn| turn.role).collect()
}

fn damages(outcome: &CombatOutcome) -> Vec<i32> {
    outcome.turns.iter().map(|turn| turn.damage).collect()
}

fn charged(mut unit: Unit) -> Unit {
    unit.special = unit.special.map(|special| special.with_cooldown(0));
    unit
}

use Role::{Attacker as A, Defender as D};

// ============================================================================
// Specials
// ============================================================================

#[test]
fn sol_keeps_the_wielder_alive() {
    let arena = Arena::new();
    let mut attacker = charged(arena.unit(1, BASE, &["Silver Sword", "Sol"]));
    attacker.hp = 20;
    let defender = arena.unit(2, BASE, &["Silver Sword"]);

    let outcome = arena.fight(&attacker, &defender);

    assert_eq!(damages(&outcome), vec![20, 20]);
    assert!(outcome.turns[0].striker_special.triggered);
    assert_eq!(outcome.attacker.remaining_hp, 10);
    assert!(outcome.attacker.survived());
    assert_eq!(outcome.attacker.special_cooldown, Some(2));
}

#[test]
fn glimmer_and_bonfire_report_extra_damage() {
    let arena = Arena::new();
    let defender = arena.unit(2, BASE, &["Silver Sword"]);

    let glimmer = charged(arena.unit(1, BASE, &["Silver Sword", "Glimmer"]));
    let outcome = arena.fight(&glimmer, &defender);
    assert_eq!(outcome.turns[0].damage, 30);
    assert_eq!(outcome.attacker.extra_damage, 10);

    let bonfire = charged(arena.unit(3, BASE, &["Silver Sword", "Bonfire"]));
    let outcome = arena.fight(&bonfire, &defender);
    assert_eq!(outcome.turns[0].damage, 32);
    assert_eq!(outcome.attacker.extra_damage, 12);
}

#[test]
fn reprisal_waits_until_the_wielder_is_hurt() {
    let arena = Arena::new();
    let attacker = charged(arena.unit(
        1,
        Stats::new(40, 30, 35, 25, 20),
        &["Silver Sword", "Reprisal"],
    ));
    let defender = arena.unit(2, BASE, &["Silver Sword"]);

    let outcome = arena.fight(&attacker, &defender);

    assert_eq!(roles(&outcome), vec![A, D, A]);
    assert_eq!(damages(&outcome), vec![20, 20, 26]);
    assert!(!outcome.turns[0].striker_special.triggered);
    assert!(outcome.turns[2].striker_special.triggered);
    assert_eq!(outcome.defender.remaining_hp, 0);
}

#[test]
fn aegis_heals_and_softens_later_strikes() {
    let arena = Arena::new();
    let attacker = arena.unit(1, Stats::new(40, 30, 35, 25, 20), &["Silver Sword"]);
    let defender = charged(arena.unit(2, BASE, &["Silver Sword", "Aegis"]));

    let outcome = arena.fight(&attacker, &defender);

    assert!(outcome.turns[0].target_special.triggered);
    assert_eq!(outcome.turns[0].remaining_hp, 30);
    assert_eq!(damages(&outcome), vec![20, 20, 14]);
    assert_eq!(outcome.defender.remaining_hp, 16);
    assert_eq!(outcome.defender.special_cooldown, Some(1));
}

#[test]
fn guard_stalls_the_foe_special() {
    let arena = Arena::new();
    let attacker = arena.unit(
        1,
        Stats::new(40, 30, 35, 25, 20),
        &["Silver Sword", "Moonbow"],
    );
    let guarded = arena.unit(2, BASE, &["Silver Sword", "Guard 3"]);
    let plain = arena.unit(4, BASE, &["Silver Sword"]);

    let outcome = arena.fight(&attacker, &guarded);
    assert!(!outcome.attacker.triggered_special);
    assert_eq!(outcome.attacker.special_cooldown, Some(2));

    let outcome = arena.fight(&attacker, &plain);
    assert!(outcome.attacker.triggered_special);
}

// ============================================================================
// Turn order
// ============================================================================

#[test]
fn windsweep_trades_follow_up_for_safety() {
    let arena = Arena::new();
    let attacker = arena.unit(
        1,
        Stats::new(40, 30, 36, 25, 20),
        &["Silver Sword", "Windsweep 3"],
    );
    let defender = arena.unit(2, BASE, &["Silver Sword"]);

    assert_eq!(roles(&arena.fight(&attacker, &defender)), vec![A]);

    let mage = arena.unit(4, BASE, &["Bolganone", "Distant Counter"]);
    assert_eq!(roles(&arena.fight(&attacker, &mage)), vec![A, D]);
}

#[test]
fn wary_fighter_denies_every_follow_up() {
    let arena = Arena::new();
    let attacker = arena.unit(1, Stats::new(40, 30, 40, 25, 20), &["Silver Sword"]);
    let defender = arena.unit(2, BASE, &["Silver Sword", "Wary Fighter 3"]);

    assert_eq!(roles(&arena.fight(&attacker, &defender)), vec![A, D]);
}

#[test]
fn quick_riposte_grants_a_defending_follow_up() {
    let arena = Arena::new();
    let attacker = arena.unit(1, BASE, &["Silver Sword"]);
    let defender = arena.unit(2, BASE, &["Silver Sword", "Quick Riposte 3"]);

    assert_eq!(roles(&arena.fight(&attacker, &defender)), vec![A, D, D]);
}

#[test]
fn vantage_strikes_first_when_wounded() {
    let arena = Arena::new();
    let attacker = arena.unit(1, BASE, &["Silver Sword"]);
    let mut defender = arena.unit(2, BASE, &["Silver Sword", "Vantage 3"]);
    defender.hp = 20;

    let outcome = arena.fight(&attacker, &defender);
    assert_eq!(roles(&outcome), vec![D, A]);
    assert_eq!(outcome.attacker.remaining_hp, 20);
    assert_eq!(outcome.defender.remaining_hp, 0);
}

#[test]
fn desperation_chains_attacker_strikes() {
    let arena = Arena::new();
    let mut attacker = arena.unit(
        1,
        Stats::new(40, 30, 35, 25, 20),
        &["Silver Sword", "Desperation 3"],
    );
    attacker.hp = 20;
    let defender = arena.unit(2, Stats::new(80, 10, 30, 25, 20), &["Silver Sword"]);

    let outcome = arena.fight(&attacker, &defender);
    assert_eq!(roles(&outcome), vec![A, A, D, A, A]);
    assert_eq!(outcome.attacker.remaining_hp, 20);
    assert_eq!(outcome.defender.remaining_hp, 0);
}

#[test]
fn close_counter_answers_ranged_attacks() {
    let arena = Arena::new();
    let archer = arena.unit(1, BASE, &["Silver Bow"]);
    let plain = arena.unit(2, BASE, &["Silver Sword"]);
    let countering = arena.unit(4, BASE, &["Silver Sword", "Close Counter"]);

    assert_eq!(roles(&arena.fight(&archer, &plain)), vec![A]);
    assert_eq!(roles(&arena.fight(&archer, &countering)), vec![A, D]);
}

// ============================================================================
// Damage
// ============================================================================

#[test]
fn gem_weapon_amplifies_the_triangle() {
    let arena = Arena::new();
    let attacker = arena.unit(1, BASE, &["Ruby Sword"]);
    let defender = arena.unit(2, BASE, &["Silver Axe"]);

    let outcome = arena.fight(&attacker, &defender);
    assert_eq!(damages(&outcome), vec![28, 11]);
}

#[test]
fn effective_weapons_and_protection() {
    let arena = Arena::new();
    let archer = arena.unit(1, BASE, &["Silver Bow"]);
    let flier = arena.unit_moving(2, MovementType::Flier, BASE, &["Silver Lance"]);
    let shielded = arena.unit_moving(
        4,
        MovementType::Flier,
        BASE,
        &["Silver Lance", "Iote's Shield"],
    );
    assert_eq!(arena.fight(&archer, &flier).turns[0].damage, 39);
    assert_eq!(arena.fight(&archer, &shielded).turns[0].damage, 18);

    let slayer = arena.unit(3, BASE, &["Armorslayer"]);
    let knight = arena.unit_moving(6, MovementType::Armored, BASE, &["Silver Sword"]);
    let outcome = arena.fight(&slayer, &knight);
    assert!(outcome.turns[0].effective);
    assert_eq!(outcome.turns[0].damage, 32);
}

#[test]
fn staves_halve_damage_unless_exempt() {
    let arena = Arena::new();
    let defender = arena.unit(2, BASE, &["Silver Sword"]);

    let gravity = arena.unit(1, BASE, &["Gravity"]);
    assert_eq!(damages(&arena.fight(&gravity, &defender)), vec![16]);

    let assault = arena.unit(3, BASE, &["Assault"]);
    assert_eq!(damages(&arena.fight(&assault, &defender)), vec![10]);
}

#[test]
fn death_blow_only_when_initiating() {
    let arena = Arena::new();
    let striker = arena.unit(1, BASE, &["Silver Sword", "Death Blow 3"]);
    let other = arena.unit(2, BASE, &["Silver Sword"]);

    assert_eq!(damages(&arena.fight(&striker, &other)), vec![26, 20]);
    assert_eq!(damages(&arena.fight(&other, &striker)), vec![20, 20]);
}

// ============================================================================
// Allies and after combat
// ============================================================================

#[test]
fn drives_reach_further_than_spurs() {
    let arena = Arena::new();
    let attacker = arena.unit(1, BASE, &["Silver Sword"]);
    let defender = arena.unit(2, BASE, &["Silver Sword"]);
    let spur = arena.unit(3, BASE, &["Spur Atk 3"]);
    let drive = arena.unit(5, BASE, &["Drive Atk 2"]);
    let engine = arena.engine();

    let engagement = Engagement::new(&attacker, &defender)
        .with_ally(Role::Attacker, &spur, 2)
        .with_ally(Role::Attacker, &drive, 2);
    let outcome = engine.resolve(&engagement).unwrap();
    assert_eq!(outcome.turns[0].damage, 23);
    assert_eq!(outcome.attacker.stat_changes, StatMods::new(3, 0, 0, 0));

    let engagement = Engagement::new(&attacker, &defender)
        .with_ally(Role::Attacker, &spur, 1)
        .with_ally(Role::Attacker, &drive, 2);
    let outcome = engine.resolve(&engagement).unwrap();
    assert_eq!(outcome.turns[0].damage, 27);
}

#[test]
fn goad_armor_only_lifts_armored_allies() {
    let arena = Arena::new();
    let knight = arena.unit_moving(1, MovementType::Armored, BASE, &["Silver Sword"]);
    let footman = arena.unit(3, BASE, &["Silver Sword"]);
    let defender = arena.unit(2, BASE, &["Silver Sword"]);
    let goad = arena.unit_moving(5, MovementType::Armored, BASE, &["Goad Armor"]);
    let engine = arena.engine();

    let outcome = engine
        .resolve(&Engagement::new(&knight, &defender).with_ally(Role::Attacker, &goad, 2))
        .unwrap();
    assert_eq!(outcome.attacker.stat_changes, StatMods::new(4, 4, 0, 0));

    let outcome = engine
        .resolve(&Engagement::new(&footman, &defender).with_ally(Role::Attacker, &goad, 2))
        .unwrap();
    assert_eq!(outcome.attacker.stat_changes, StatMods::ZERO);
}

#[test]
fn fury_and_seal_queue_effects_after_combat() {
    let arena = Arena::new();
    let mut attacker = arena.unit(1, BASE, &["Silver Sword", "Fury 3", "Seal Atk 3"]);
    let mut defender = arena.unit(2, BASE, &["Silver Sword"]);
    let engine = arena.engine();

    let engagement = Engagement::new(&attacker, &defender);
    let outcome = engine.resolve(&engagement).unwrap();
    assert_eq!(outcome.attacker.stat_changes, StatMods::uniform(3));
    assert_eq!(damages(&outcome), vec![23, 17]);

    let effects = engine.after_combat(&engagement, &outcome).unwrap();
    assert_eq!(
        effects,
        vec![
            DelayedEffect::damage(UnitId(1), 6),
            DelayedEffect::map_debuff(UnitId(2), StatMods::new(-7, 0, 0, 0)),
        ]
    );

    outcome.commit(&mut attacker, &mut defender);
    for effect in &effects {
        effect.apply(&mut attacker);
        effect.apply(&mut defender);
    }
    assert_eq!(attacker.hp, 40 - 17 - 6);
    assert_eq!(defender.hp, 40 - 23);
    assert_eq!(map_stats(&defender).atk, 45 - 7);
}

#[test]
fn special_state_round_trips_through_commit() {
    let arena = Arena::new();
    let mut attacker = arena.unit(
        1,
        Stats::new(40, 30, 35, 25, 20),
        &["Silver Sword", "Moonbow"],
    );
    let mut defender = arena.unit(2, Stats::new(60, 30, 30, 25, 20), &["Silver Sword"]);
    assert_eq!(attacker.special, Some(SpecialState::new(2)));

    let outcome = arena.fight(&attacker, &defender);
    outcome.commit(&mut attacker, &mut defender);
    assert_eq!(attacker.special.map(|special| special.cooldown()), Some(2));
    assert_eq!(defender.hp, 60 - 20 - 27);
}
