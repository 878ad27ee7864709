//! Error types for combat resolution.

use crate::error::{CombatError, ErrorSeverity};
use crate::skill::OracleError;

/// Errors surfaced while resolving an encounter.
///
/// Resolution itself is total; the only failure happens while building the
/// dispatch table, before any phase runs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    #[error("failed to build dispatch table: {0}")]
    Dispatch(#[from] OracleError),
}

impl CombatError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::Dispatch(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::Dispatch(error) => error.error_code(),
        }
    }
}
