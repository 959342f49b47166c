//! # Ports Layer (Hexagonal Architecture)
//!
//! - `inbound`: what algorithms and the driver can ask of the managers
//! - `outbound`: what the managers need from the ingestion layer

pub mod inbound;
pub mod outbound;

pub use inbound::{EventDriverApi, ListManagementApi};
pub use outbound::ObjectSource;
