//! # Error Types
//!
//! Defines error types shared across object managers.

use thiserror::Error;

/// Errors raised while validating `ReconstructionSettings`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// A threshold is outside its usable range.
    #[error("Setting {field} out of range: {reason}")]
    OutOfRange {
        /// Offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
