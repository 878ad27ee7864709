//! Skill table access.

use std::collections::BTreeMap;

use crate::error::{CombatError, ErrorSeverity};
use crate::state::SkillId;

use super::definition::SkillDefinition;

/// Oracle providing skill definitions by name.
///
/// The engine assumes the table is valid: definitions are trusted and their
/// callbacks are invoked without guarding.
pub trait SkillOracle: Send + Sync {
    fn skill(&self, id: &SkillId) -> Option<&SkillDefinition>;

    /// Looks a skill up, failing when the table does not define it.
    fn require(&self, id: &SkillId) -> Result<&SkillDefinition, OracleError> {
        self.skill(id)
            .ok_or_else(|| OracleError::SkillNotFound(id.clone()))
    }
}

/// Errors that occur when accessing skill data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Skill definition was not found by name.
    #[error("skill '{0}' not found")]
    SkillNotFound(SkillId),
}

impl CombatError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            OracleError::SkillNotFound(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::SkillNotFound(_) => "ORACLE_SKILL_NOT_FOUND",
        }
    }
}

/// In-memory skill table.
#[derive(Clone, Debug, Default)]
pub struct SkillTable {
    skills: BTreeMap<SkillId, SkillDefinition>,
}

impl SkillTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = SkillDefinition>) -> Self {
        let mut table = Self::new();
        for definition in definitions {
            table.insert(definition);
        }
        table
    }

    /// Adds a definition, returning the one it replaced.
    pub fn insert(&mut self, definition: SkillDefinition) -> Option<SkillDefinition> {
        self.skills.insert(definition.id.clone(), definition)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.values()
    }
}

impl SkillOracle for SkillTable {
    fn skill(&self, id: &SkillId) -> Option<&SkillDefinition> {
        self.skills.get(id)
    }
}

impl FromIterator<SkillDefinition> for SkillTable {
    fn from_iter<I: IntoIterator<Item = SkillDefinition>>(iter: I) -> Self {
        Self::from_definitions(iter)
    }
}
