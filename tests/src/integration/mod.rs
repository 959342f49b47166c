//! # Integration Scenarios
//!
//! Each module drives `EventObjectService` the way a reconstruction driver
//! and its algorithms would.

mod event_lifecycle;
mod layer_ordering;
mod logging;
mod relationships;
