//! # Outbound Ports
//!
//! Traits for external dependencies (the ingestion layer supplying one event).

use shared_types::{CaloHitParameters, RelationshipDescriptor, TrackParameters};

use crate::domain::ObjectResult;

/// Source of the object descriptors of one event - outbound port.
///
/// Invoked once per event, before any algorithm runs.
pub trait ObjectSource {
    /// Calorimeter hit descriptors.
    fn calo_hits(&self) -> ObjectResult<Vec<CaloHitParameters>>;

    /// Track descriptors.
    fn tracks(&self) -> ObjectResult<Vec<TrackParameters>>;

    /// Track relationships, possibly naming tracks that were never supplied.
    fn track_relationships(&self) -> ObjectResult<Vec<RelationshipDescriptor>>;
}
