//! # Domain Errors
//!
//! Error kinds reported by every object-management operation. Each variant
//! is an explicit result value; nothing in this crate unwinds for control flow.

use shared_types::SettingsError;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type ObjectResult<T> = Result<T, ObjectError>;

/// Copyable discriminant of an [`ObjectError`], convenient for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Query against an unset current list.
    NotInitialized,
    /// List, layer bucket or object absent.
    NotFound,
    /// Duplicate identifier or name.
    AlreadyPresent,
    /// Malformed descriptor, inverted range or bad count.
    InvalidParameter,
    /// Internal invariant violation.
    Failure,
}

/// Object management error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjectError {
    /// The current list has not been set.
    #[error("Current list not initialized")]
    NotInitialized,

    /// A list, layer bucket or object is missing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An identifier or name is already registered.
    #[error("Already present: {0}")]
    AlreadyPresent(String),

    /// A caller passed malformed input.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An internal invariant was breached.
    #[error("Failure: {0}")]
    Failure(String),
}

impl ObjectError {
    /// The discriminant of this error.
    pub fn kind(&self) -> StatusKind {
        match self {
            Self::NotInitialized => StatusKind::NotInitialized,
            Self::NotFound(_) => StatusKind::NotFound,
            Self::AlreadyPresent(_) => StatusKind::AlreadyPresent,
            Self::InvalidParameter(_) => StatusKind::InvalidParameter,
            Self::Failure(_) => StatusKind::Failure,
        }
    }

    /// Whether this is a `NotFound` error.
    pub fn is_not_found(&self) -> bool {
        self.kind() == StatusKind::NotFound
    }

    /// Whether an algorithm may recover locally. `Failure` aborts the event.
    pub fn is_recoverable(&self) -> bool {
        self.kind() != StatusKind::Failure
    }
}

impl From<SettingsError> for ObjectError {
    fn from(err: SettingsError) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}
