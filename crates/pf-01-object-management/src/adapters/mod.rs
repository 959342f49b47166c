//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound `ObjectSource` port.

mod memory_source;

pub use memory_source::{EventRecord, InMemoryObjectSource};
