//! # Event Object Service
//!
//! Application service owning both object managers for one event.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Pulls descriptors through the outbound port (`ObjectSource`)
//! - Implements the driver-facing inbound port (`EventDriverApi`) across
//!   both managers
//! - Hands the managers to algorithms, which use `ListManagementApi`

use std::sync::Arc;

use pf_telemetry::algorithm_span;
use shared_types::{AlgorithmId, ReconstructionSettings};
use tracing::{info, warn};

use crate::domain::{AssociationSummary, ObjectError, ObjectResult, INPUT_LIST_NAME};
use crate::managers::{CaloHitManager, TrackManager};
use crate::ports::inbound::EventDriverApi;
use crate::ports::outbound::ObjectSource;

/// Counts reported by one `ingest()` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestionSummary {
    /// Calorimeter hits created.
    pub calo_hits: usize,
    /// Tracks created.
    pub tracks: usize,
    /// Relationship edges recorded.
    pub relationships: usize,
    /// Outcome of relationship resolution.
    pub associations: AssociationSummary,
}

/// Event object service.
///
/// Single-threaded: one event is processed at a time, and every algorithm
/// runs to completion before the next starts.
#[derive(Debug)]
pub struct EventObjectService {
    settings: Arc<ReconstructionSettings>,
    calo_hits: CaloHitManager,
    tracks: TrackManager,
}

impl EventObjectService {
    /// Create a new service.
    ///
    /// # Errors
    /// `InvalidParameter` if the settings fail validation.
    pub fn new(settings: ReconstructionSettings) -> ObjectResult<Self> {
        settings.validate()?;
        let settings = Arc::new(settings);

        Ok(Self {
            calo_hits: CaloHitManager::new(Arc::clone(&settings)),
            tracks: TrackManager::new(Arc::clone(&settings)),
            settings,
        })
    }

    /// Settings shared by both managers.
    pub fn settings(&self) -> &ReconstructionSettings {
        &self.settings
    }

    /// Calorimeter hit manager.
    pub fn calo_hits(&self) -> &CaloHitManager {
        &self.calo_hits
    }

    /// Mutable calorimeter hit manager.
    pub fn calo_hits_mut(&mut self) -> &mut CaloHitManager {
        &mut self.calo_hits
    }

    /// Track manager.
    pub fn tracks(&self) -> &TrackManager {
        &self.tracks
    }

    /// Mutable track manager.
    pub fn tracks_mut(&mut self) -> &mut TrackManager {
        &mut self.tracks
    }

    /// Creates every object of the event, then builds the input lists and
    /// resolves track relationships.
    ///
    /// A failed ingestion leaves partial state; call `reset_for_next_event()`
    /// before retrying.
    ///
    /// # Errors
    /// - `AlreadyPresent` if the event was already ingested or a uid repeats
    /// - `InvalidParameter` if a descriptor fails validation
    /// - whatever the source reports
    pub fn ingest<S: ObjectSource + ?Sized>(&mut self, source: &S) -> ObjectResult<IngestionSummary> {
        if self.calo_hits.lists().contains_list(INPUT_LIST_NAME)
            || self.tracks.lists().contains_list(INPUT_LIST_NAME)
        {
            return Err(ObjectError::AlreadyPresent(
                "event already ingested".to_string(),
            ));
        }

        let mut summary = IngestionSummary::default();

        for parameters in source.calo_hits()? {
            self.calo_hits.create_object(&parameters)?;
            summary.calo_hits += 1;
        }

        for parameters in source.tracks()? {
            self.tracks.create_object(&parameters)?;
            summary.tracks += 1;
        }

        for descriptor in source.track_relationships()? {
            self.tracks.record_relationship(descriptor);
            summary.relationships += 1;
        }

        self.calo_hits.create_input_list()?;
        self.tracks.create_input_list()?;
        summary.associations = self.tracks.associate_tracks();

        info!(
            calo_hits = summary.calo_hits,
            tracks = summary.tracks,
            relationships = summary.relationships,
            applied = summary.associations.applied,
            skipped = summary.associations.skipped,
            "Event ingested"
        );
        Ok(summary)
    }

    /// Runs `body` inside `algorithm`'s scope.
    ///
    /// The scope is opened before `body` runs and always closed afterwards,
    /// dropping the algorithm's temporary lists. An error from `body` takes
    /// precedence over an error from closing the scope.
    pub fn run_algorithm<R, F>(&mut self, algorithm: &AlgorithmId, body: F) -> ObjectResult<R>
    where
        F: FnOnce(&mut Self) -> ObjectResult<R>,
    {
        let _span = algorithm_span!(algorithm).entered();
        self.register_algorithm(algorithm);
        let outcome = body(self);
        let cleanup = self.reset_algorithm_info(algorithm, true);

        match (outcome, cleanup) {
            (Err(err), Err(cleanup_err)) => {
                warn!(%algorithm, error = %cleanup_err, "Scope cleanup failed after algorithm error");
                Err(err)
            }
            (Err(err), Ok(())) => Err(err),
            (Ok(_), Err(cleanup_err)) => Err(cleanup_err),
            (Ok(value), Ok(())) => Ok(value),
        }
    }
}

impl EventDriverApi for EventObjectService {
    fn register_algorithm(&mut self, algorithm: &AlgorithmId) {
        self.calo_hits.register_algorithm(algorithm);
        self.tracks.register_algorithm(algorithm);
    }

    /// Resets `algorithm` in every manager where it is registered.
    ///
    /// Both managers are always visited; the first error is returned.
    fn reset_algorithm_info(&mut self, algorithm: &AlgorithmId, is_finished: bool) -> ObjectResult<()> {
        let in_hits = self.calo_hits.scopes().is_registered(algorithm);
        let in_tracks = self.tracks.scopes().is_registered(algorithm);

        if !in_hits && !in_tracks {
            return Err(ObjectError::NotFound(format!("algorithm {algorithm}")));
        }

        let hits_result = if in_hits {
            self.calo_hits.reset_algorithm_info(algorithm, is_finished)
        } else {
            Ok(())
        };
        let tracks_result = if in_tracks {
            self.tracks.reset_algorithm_info(algorithm, is_finished)
        } else {
            Ok(())
        };

        hits_result.and(tracks_result)
    }

    fn reset_for_next_event(&mut self) -> ObjectResult<()> {
        let hits_result = self.calo_hits.reset_for_next_event();
        let tracks_result = self.tracks.reset_for_next_event();
        hits_result.and(tracks_result)
    }
}
