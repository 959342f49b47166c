//! # Domain Module
//!
//! Core object-management building blocks: the registry arena, named lists,
//! algorithm scopes, relationships and the layer-ordered container.

pub mod algorithm_scope;
pub mod entities;
pub mod errors;
pub mod named_lists;
pub mod ordered_layers;
pub mod registry;
pub mod relationships;

pub use algorithm_scope::*;
pub use entities::*;
pub use errors::*;
pub use named_lists::*;
pub use ordered_layers::*;
pub use registry::*;
pub use relationships::*;
