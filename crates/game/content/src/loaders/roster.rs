//! Unit roster loader.
//!
//! Loads unit specs from RON and builds them against a skill oracle, so an
//! unknown skill or an illegal loadout fails at load time.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::{
    Fact, MovementType, SkillOracle, Stats, TeamId, Unit, UnitBuilder, UnitId,
};

use crate::loaders::{LoadResult, read_file};

/// One unit as written in a roster file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub team: u8,
    #[serde(default = "default_movement")]
    pub movement: MovementType,
    pub stats: Stats,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Facts attached before the first encounter (statuses, map buffs).
    #[serde(default)]
    pub facts: Vec<Fact>,
}

fn default_movement() -> MovementType {
    MovementType::Infantry
}

impl UnitSpec {
    pub fn build(&self, oracle: &(impl SkillOracle + ?Sized)) -> LoadResult<Unit> {
        let builder = UnitBuilder::new(UnitId(self.id), self.name.clone())
            .team(TeamId(self.team))
            .movement(self.movement)
            .stats(self.stats);
        let builder = self
            .skills
            .iter()
            .fold(builder, |builder, skill| builder.skill(skill.as_str()));
        let builder = self
            .facts
            .iter()
            .fold(builder, |builder, fact| builder.fact(*fact));

        builder
            .build(oracle)
            .map_err(|e| anyhow::anyhow!("Failed to build unit '{}': {}", self.name, e))
    }
}

/// Loader for unit rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load and build every unit of a roster file.
    ///
    /// RON format: `Vec<UnitSpec>`
    pub fn load(path: &Path, oracle: &(impl SkillOracle + ?Sized)) -> LoadResult<Vec<Unit>> {
        let content = read_file(path)?;
        Self::parse(&content, oracle)
    }

    pub fn parse(content: &str, oracle: &(impl SkillOracle + ?Sized)) -> LoadResult<Vec<Unit>> {
        let specs: Vec<UnitSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;
        specs.iter().map(|spec| spec.build(oracle)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_catalog;
    use skirmish_core::{FactKind, StatMods};

    const ROSTER: &str = r#"[
        (
            id: 1,
            name: "Swordmaster",
            stats: (hp: 40, atk: 32, spd: 36, def: 20, res: 22),
            skills: ["Silver Sword", "Moonbow", "Desperation 3"],
        ),
        (
            id: 2,
            name: "General",
            team: 1,
            movement: Armored,
            stats: (hp: 50, atk: 34, spd: 18, def: 38, res: 16),
            skills: ["Silver Lance", "Aegis", "Close Counter"],
            facts: [MapBuff((atk: 0, spd: 0, def: 4, res: 0))],
        ),
    ]"#;

    #[test]
    fn builds_units_from_ron() {
        let units = RosterLoader::parse(ROSTER, &standard_catalog()).unwrap();

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].stats().atk, 47);
        assert_eq!(units[0].movement, MovementType::Infantry);
        assert_eq!(units[1].team, TeamId(1));
        assert_eq!(units[1].special.map(|special| special.base_cooldown()), Some(3));
        assert!(units[1].facts.has(FactKind::MapBuff));
        assert_eq!(
            units[1].facts.stat_mods(FactKind::MapBuff).next(),
            Some(&StatMods::new(0, 0, 4, 0))
        );
    }

    #[test]
    fn unknown_skill_fails_the_load() {
        let roster = r#"[(id: 1, name: "Nobody", stats: (hp: 1, atk: 1, spd: 1, def: 1, res: 1), skills: ["Excalibur"])]"#;
        let err = RosterLoader::parse(roster, &standard_catalog()).unwrap_err();
        assert!(err.to_string().contains("Failed to build unit 'Nobody'"));
    }
}
