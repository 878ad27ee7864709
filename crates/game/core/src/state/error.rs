//! Unit construction errors.
//!
//! Loadouts are validated when a unit is built or re-equipped, so combat
//! resolution never sees an illegal weapon or skill.

use crate::error::{CombatError, ErrorSeverity};
use crate::state::{SkillId, SkillSlot, UnitId, WeaponColor, WeaponType};

/// Errors that occur while equipping skills on a unit.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipError {
    /// The skill is not present in the skill table.
    #[error("unit {unit}: skill '{skill}' is not defined")]
    UnknownSkill { unit: UnitId, skill: SkillId },

    /// Another skill already occupies the slot.
    #[error("unit {unit}: slot {slot} already holds '{current}', cannot equip '{skill}'")]
    SlotOccupied {
        unit: UnitId,
        slot: SkillSlot,
        current: SkillId,
        skill: SkillId,
    },

    /// The unit cannot wield this weapon category.
    #[error("unit {unit}: cannot wield '{skill}' ({weapon_type})")]
    WeaponTypeNotAllowed {
        unit: UnitId,
        skill: SkillId,
        weapon_type: WeaponType,
    },

    /// The weapon definition pairs a category with a color it cannot carry.
    #[error("weapon '{skill}': a {weapon_type} cannot be {color}")]
    IncompatibleColor {
        skill: SkillId,
        weapon_type: WeaponType,
        color: WeaponColor,
    },

    /// The skill is restricted to other weapon or movement types.
    #[error("unit {unit}: '{skill}' cannot be learned by this unit")]
    UserNotAllowed { unit: UnitId, skill: SkillId },
}

impl CombatError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        use EquipError::*;
        match self {
            // Referencing a skill the table does not know means content is missing
            UnknownSkill { .. } => ErrorSeverity::Fatal,

            SlotOccupied { .. }
            | WeaponTypeNotAllowed { .. }
            | IncompatibleColor { .. }
            | UserNotAllowed { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use EquipError::*;
        match self {
            UnknownSkill { .. } => "EQUIP_UNKNOWN_SKILL",
            SlotOccupied { .. } => "EQUIP_SLOT_OCCUPIED",
            WeaponTypeNotAllowed { .. } => "EQUIP_WEAPON_TYPE_NOT_ALLOWED",
            IncompatibleColor { .. } => "EQUIP_INCOMPATIBLE_COLOR",
            UserNotAllowed { .. } => "EQUIP_USER_NOT_ALLOWED",
        }
    }
}
