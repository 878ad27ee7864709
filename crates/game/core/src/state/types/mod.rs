pub mod common;
pub mod facts;
pub mod skills;
pub mod stats;
pub mod turn;
pub mod unit;
pub mod weapon;

// Re-export identifiers
pub use common::{Role, TeamId, UnitId};

// Re-export fact types
pub use facts::{Fact, FactKind, Facts};

// Re-export skill slots
pub use skills::{SkillId, SkillSet, SkillSlot};

// Re-export stat blocks
pub use stats::{CombatStat, StatMods, Stats};

// Re-export turn state
pub use turn::BattleState;

// Re-export unit types
pub use unit::{Unit, UnitBuilder};

// Re-export weapon classification
pub use weapon::{MovementType, TargetSet, WeaponColor, WeaponProfile, WeaponType};
