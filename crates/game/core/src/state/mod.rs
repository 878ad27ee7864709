//! Unit and battle state.
//!
//! This module owns the data structures that describe combatants (stats,
//! weapons, equipped skills, attached facts) and the battle-wide turn
//! bookkeeping. The combat engine reads this state and works on combat-scoped
//! copies; only the caller commits results back.
pub mod error;
pub mod types;

pub use error::EquipError;
pub use types::{
    BattleState, CombatStat, Fact, FactKind, Facts, MovementType, Role, SkillId, SkillSet,
    SkillSlot, StatMods, Stats, TargetSet, TeamId, Unit, UnitBuilder, UnitId, WeaponColor,
    WeaponProfile, WeaponType,
};
