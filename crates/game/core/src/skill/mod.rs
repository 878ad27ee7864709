//! Skill definitions and hook dispatch.
//!
//! Skill content lives outside this crate: callers supply a [`SkillOracle`]
//! mapping names to [`SkillDefinition`]s. Each definition registers callbacks
//! for the encounter phases it cares about; the engine collects them into a
//! [`DispatchTable`] once per encounter and invokes them in a fixed order.
pub mod definition;
pub mod dispatch;
pub mod hook;
pub mod oracle;

pub use definition::{
    SkillDefinition, SkillKind, SpecialEffect, SpecialPredicate, SpecialSpec, SpecialTrigger,
    WeaponSpec,
};
pub use dispatch::{DispatchTable, UnitHooks};
pub use hook::{
    AfterCombatContext, AfterCombatHookFn, AllyHookContext, AllyHookFn, CombatHookFn, Hook,
    HookContext, Phase,
};
pub use oracle::{OracleError, SkillOracle, SkillTable};
