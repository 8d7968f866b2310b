//! Error types for the cipher subsystem.

use thiserror::Error;

/// Error returned when a language name is not present in the engine's registry.
///
/// Carries the offending name so callers can report what was requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language: '{name}'")]
pub struct UnknownLanguageError {
    /// The language name that failed to resolve.
    pub name: String,
}
