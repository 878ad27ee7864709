//! Deterministic combat resolution for a turn-based tactics game.
//!
//! `skirmish-core` resolves one encounter between an attacker and a defender:
//! it aggregates stats, arbitrates skill claims through saturating cursors,
//! sequences strikes and charges specials, and reports the outcome without
//! touching the live units. Skill content is supplied by the caller through
//! [`skill::SkillOracle`]; all resolution flows through
//! [`engine::CombatEngine`].
pub mod combat;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod skill;
pub mod state;
pub mod stats;

pub use combat::{
    Advantage, CombatOutcome, DamageInput, DelayedEffect, DelayedKind, SideOutcome, SpecialContext,
    SpecialReport, SpecialState, Turn, TurnOutcome, calculate_damage, generate_turns,
};
pub use config::CombatConfig;
pub use cursor::{Cursor, CursorKind, CursorRegistry};
pub use engine::{CombatEngine, CombatSession, EngineError, Engagement, Support};
pub use error::{CombatError, ErrorSeverity};
pub use skill::{
    AfterCombatContext, AllyHookContext, DispatchTable, HookContext, OracleError, Phase,
    SkillDefinition, SkillKind, SkillOracle, SkillTable, SpecialSpec, SpecialTrigger, WeaponSpec,
};
pub use state::{
    BattleState, CombatStat, EquipError, Fact, FactKind, Facts, MovementType, Role, SkillId,
    SkillSet, SkillSlot, StatMods, Stats, TargetSet, TeamId, Unit, UnitBuilder, UnitId,
    WeaponColor, WeaponProfile, WeaponType,
};
pub use stats::{collect_combat_mods, collect_map_mods, combat_stats, map_stats};
