//! In-memory `ObjectSource`, filled by a builder or from a JSON event record.

use serde::{Deserialize, Serialize};
use shared_types::{CaloHitParameters, RelationshipDescriptor, TrackParameters};

use crate::domain::{ObjectError, ObjectResult};
use crate::ports::outbound::ObjectSource;

/// Serialized form of one event's descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    /// Calorimeter hit descriptors.
    pub calo_hits: Vec<CaloHitParameters>,
    /// Track descriptors.
    pub tracks: Vec<TrackParameters>,
    /// Track relationship declarations.
    pub track_relationships: Vec<RelationshipDescriptor>,
}

/// In-memory implementation of `ObjectSource` for testing and replay
#[derive(Debug, Clone, Default)]
pub struct InMemoryObjectSource {
    record: EventRecord,
}

impl InMemoryObjectSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `EventRecord` from JSON.
    pub fn from_json(json: &str) -> ObjectResult<Self> {
        let record: EventRecord = serde_json::from_str(json)
            .map_err(|e| ObjectError::InvalidParameter(format!("event record: {e}")))?;
        Ok(Self { record })
    }

    /// Appends a hit descriptor.
    pub fn with_calo_hit(mut self, hit: CaloHitParameters) -> Self {
        self.record.calo_hits.push(hit);
        self
    }

    /// Appends a track descriptor.
    pub fn with_track(mut self, track: TrackParameters) -> Self {
        self.record.tracks.push(track);
        self
    }

    /// Appends a relationship declaration.
    pub fn with_relationship(mut self, relationship: RelationshipDescriptor) -> Self {
        self.record.track_relationships.push(relationship);
        self
    }

    /// The record this source replays.
    pub fn record(&self) -> &EventRecord {
        &self.record
    }
}

impl From<EventRecord> for InMemoryObjectSource {
    fn from(record: EventRecord) -> Self {
        Self { record }
    }
}

impl ObjectSource for InMemoryObjectSource {
    fn calo_hits(&self) -> ObjectResult<Vec<CaloHitParameters>> {
        Ok(self.record.calo_hits.clone())
    }

    fn tracks(&self) -> ObjectResult<Vec<TrackParameters>> {
        Ok(self.record.tracks.clone())
    }

    fn track_relationships(&self) -> ObjectResult<Vec<RelationshipDescriptor>> {
        Ok(self.record.track_relationships.clone())
    }
}
