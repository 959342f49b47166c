//! # Shared Types Crate
//!
//! Identifiers, ingestion descriptors and reconstruction settings shared by
//! every object manager in the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identifiers and descriptors used on both sides
//!   of the ingestion boundary are defined here.
//! - **Handles, not pointers**: every cross-structure reference is a `Uid`.
//! - **Explicit settings**: `ReconstructionSettings` is passed by reference;
//!   nothing reads thresholds from global state.

pub mod entities;
pub mod errors;
pub mod settings;

pub use entities::*;
pub use errors::*;
pub use settings::*;
