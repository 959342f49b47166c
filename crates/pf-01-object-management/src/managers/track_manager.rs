//! # Track Manager
//!
//! `ObjectManager<Track>` plus the two-phase relationship graph and
//! Monte-Carlo target matching.
//!
//! Relationships may be declared before either endpoint exists; they are
//! only applied to the tracks by `associate_tracks()`.
//!
//! Only read access is reached through `Deref`. Every mutating call goes
//! through this type, so an event reset always clears the relationship
//! graph along with the tracks.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use shared_types::{
    AlgorithmId, ReconstructionSettings, RelationshipDescriptor, TrackParameters, Uid,
};
use tracing::{debug, info};

use super::object_manager::ObjectManager;
use crate::domain::{AssociationSummary, ObjectList, ObjectResult, RelationshipGraph, Track};
use crate::ports::inbound::{EventDriverApi, ListManagementApi};

/// Manager for tracks.
#[derive(Debug)]
pub struct TrackManager {
    inner: ObjectManager<Track>,
    relationships: RelationshipGraph,
}

impl TrackManager {
    /// Creates an empty manager.
    pub fn new(settings: Arc<ReconstructionSettings>) -> Self {
        Self {
            inner: ObjectManager::new(settings),
            relationships: RelationshipGraph::new(),
        }
    }

    /// Validates a descriptor and creates the track.
    pub fn create_object(&mut self, parameters: &TrackParameters) -> ObjectResult<Uid> {
        self.inner.create_object(parameters)
    }

    /// Builds the reserved input list from every track created so far.
    pub fn create_input_list(&mut self) -> ObjectResult<()> {
        self.inner.create_input_list()
    }

    /// Records a parent/daughter edge for later resolution.
    pub fn set_parent_daughter_relationship(&mut self, parent: Uid, daughter: Uid) {
        self.relationships.set_parent_daughter(parent, daughter);
    }

    /// Records a sibling edge for later resolution.
    pub fn set_sibling_relationship(&mut self, first: Uid, second: Uid) {
        self.relationships.set_sibling(first, second);
    }

    /// Records an edge from an ingestion descriptor.
    pub fn record_relationship(&mut self, descriptor: RelationshipDescriptor) {
        self.relationships.record(descriptor);
    }

    /// Recorded, not yet cleared, edges.
    pub fn relationships(&self) -> &RelationshipGraph {
        &self.relationships
    }

    /// Applies every recorded edge whose endpoints both exist.
    pub fn associate_tracks(&mut self) -> AssociationSummary {
        self.relationships.associate_all(self.inner.registry_mut())
    }

    /// Sets the Monte-Carlo target of each listed track.
    ///
    /// Returns the number of tracks updated; uids with no track are skipped.
    pub fn match_tracks_to_mc_pfo_targets(&mut self, targets: &HashMap<Uid, Uid>) -> usize {
        let registry = self.inner.registry_mut();
        let mut matched = 0;

        for (track_uid, target) in targets {
            match registry.get_mut(*track_uid) {
                Some(track) => {
                    track.set_mc_pfo_target(*target);
                    matched += 1;
                }
                None => debug!(track = %track_uid, "No track for Monte-Carlo target"),
            }
        }

        matched
    }
}

impl Deref for TrackManager {
    type Target = ObjectManager<Track>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl ListManagementApi for TrackManager {
    fn current_list_name(&self) -> ObjectResult<&str> {
        self.inner.current_list_name()
    }

    fn current_list(&self) -> ObjectResult<(&ObjectList, &str)> {
        self.inner.current_list()
    }

    fn algorithm_input_list_name(&self, algorithm: &AlgorithmId) -> ObjectResult<&str> {
        self.inner.algorithm_input_list_name(algorithm)
    }

    fn algorithm_input_list(&self, algorithm: &AlgorithmId) -> ObjectResult<(&ObjectList, &str)> {
        self.inner.algorithm_input_list(algorithm)
    }

    fn list(&self, name: &str) -> ObjectResult<&ObjectList> {
        self.inner.list(name)
    }

    fn save_list(&mut self, objects: &[Uid], new_name: &str) -> ObjectResult<()> {
        self.inner.save_list(objects, new_name)
    }

    fn add_objects_to_list(&mut self, name: &str, objects: &[Uid]) -> ObjectResult<usize> {
        self.inner.add_objects_to_list(name, objects)
    }

    fn remove_objects_from_list(&mut self, name: &str, objects: &[Uid]) -> ObjectResult<usize> {
        self.inner.remove_objects_from_list(name, objects)
    }

    fn create_temporary_list_and_set_current(
        &mut self,
        algorithm: &AlgorithmId,
        objects: &[Uid],
    ) -> ObjectResult<String> {
        self.inner
            .create_temporary_list_and_set_current(algorithm, objects)
    }

    fn reset_current_list_to_algorithm_input(&mut self, algorithm: &AlgorithmId) -> ObjectResult<()> {
        self.inner.reset_current_list_to_algorithm_input(algorithm)
    }

    fn replace_current_and_algorithm_input_lists(
        &mut self,
        algorithm: &AlgorithmId,
        name: &str,
    ) -> ObjectResult<()> {
        self.inner
            .replace_current_and_algorithm_input_lists(algorithm, name)
    }
}

impl EventDriverApi for TrackManager {
    fn register_algorithm(&mut self, algorithm: &AlgorithmId) {
        self.inner.register_algorithm(algorithm);
    }

    fn reset_algorithm_info(&mut self, algorithm: &AlgorithmId, is_finished: bool) -> ObjectResult<()> {
        self.inner.reset_algorithm_info(algorithm, is_finished)
    }

    fn reset_for_next_event(&mut self) -> ObjectResult<()> {
        let edges = self.relationships.edge_count();
        self.relationships.clear();
        self.inner.reset_for_next_event()?;

        info!(edges, "Cleared track relationships");
        Ok(())
    }
}
