//! Combat resolution primitives.
//!
//! Pure functions and small state types the engine composes for each
//! encounter. Nothing here logs or allocates beyond its return value.
//!
//! # Core Functions
//!
//! - `resolve_affinity` / `resolve_triangle`: weapon-triangle standing
//! - `calculate_damage`: damage of one strike
//! - `is_effective`: weapon effectiveness against a foe
//! - `generate_turns`: strike order of one encounter
//! - `charge_rate`: special cooldown drop per strike

pub mod affinity;
pub mod damage;
pub mod effectiveness;
pub mod result;
pub mod special;
pub mod turns;

pub use affinity::{
    Advantage, TriangleOutcome, color_relationship, resolve_affinity, resolve_triangle,
};
pub use damage::{DamageInput, apply_damage, calculate_damage, effective_attack, targeted_defense};
pub use effectiveness::is_effective;
pub use result::{
    CombatOutcome, DelayedEffect, DelayedKind, SideOutcome, SpecialReport, TurnOutcome,
};
pub use special::{SpecialContext, SpecialEffectResult, SpecialState, charge_rate};
pub use turns::{Turn, TurnQueue, defender_can_fight_back, generate_turns};
