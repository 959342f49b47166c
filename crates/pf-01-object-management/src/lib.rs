//! # PF-01 Object Management
//!
//! Per-event ownership of calorimeter hits and tracks, and the named lists
//! through which pattern-recognition algorithms see them.
//!
//! **Subsystem ID:** 01
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Arena ownership: a registry per object kind owns every object; all
//!   other structures hold `Uid` handles
//! - Named lists, with a reserved immutable `"Input"` list and a current
//!   list pointer
//! - Algorithm scopes: temporary lists that vanish when the algorithm
//!   finishes, and restoration of the list that was current on entry
//! - Two-phase track relationships, declared by id and resolved once all
//!   tracks exist
//! - Layer-ordered hit containers
//!
//! ## Module Structure
//!
//! ```text
//! pf-01-object-management/
//! ├── domain/          # Registry, named lists, scopes, relationships, layers
//! ├── managers/        # ObjectManager<T>, CaloHitManager, TrackManager
//! ├── ports/           # ListManagementApi, EventDriverApi, ObjectSource
//! ├── adapters/        # InMemoryObjectSource
//! └── service.rs       # EventObjectService
//! ```
//!
//! ## Lifetime Model
//!
//! | Structure | Lives until |
//! |-----------|-------------|
//! | Objects | `reset_for_next_event()` |
//! | Saved and input lists | `reset_for_next_event()` |
//! | Temporary lists | `reset_algorithm_info()` of their algorithm |
//! | Relationship edges | `reset_for_next_event()` |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod managers;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{EventRecord, InMemoryObjectSource};
pub use domain::{
    temporary_list_name, AlgorithmContext, AlgorithmScopeStack, AssociationSummary, CaloHit,
    ManagedObject, NamedListRegistry, ObjectError, ObjectList, ObjectRegistry, ObjectResult,
    OrderedCaloHitList, OrderedLayerList, Relatable, RelationshipGraph, StatusKind, Track,
    INPUT_LIST_NAME,
};
pub use managers::{CaloHitManager, ObjectManager, TrackManager};
pub use ports::{EventDriverApi, ListManagementApi, ObjectSource};
pub use service::{EventObjectService, IngestionSummary};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
