//! Common error infrastructure for skirmish-core.
//!
//! Domain-specific errors (`EquipError`, `OracleError`, `EngineError`) live
//! next to the code that raises them. This module provides the shared
//! severity classification and the trait every error implements.
//!
//! Combat resolution itself never fails: invalid loadouts are rejected when a
//! unit is built, and numeric formulas clamp instead of erroring.

/// Severity level of an error, used for categorization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: weapon type not allowed for the unit, skill in the wrong slot
    Validation,

    /// Fatal error - required data is missing, cannot continue.
    ///
    /// Examples: a unit references a skill the oracle does not know
    Fatal,
}

/// Common trait for all skirmish-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
