//! Stat aggregation.
//!
//! ```text
//! [ Unit stats (base + weapon might) ]
//!      ↓  map buffs (max per stat) + map debuffs (min per stat)
//! [ Map stats ]
//!      ↓  combat buffs/debuffs (additive)
//! [ Combat stats ]
//! ```
//!
//! All functions are pure and total. HP is never modified by buffs.

pub mod combat;
pub mod map;

pub use combat::{collect_combat_mods, combat_stats};
pub use map::{MapMods, collect_map_mods, map_stats};
