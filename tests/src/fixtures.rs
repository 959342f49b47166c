//! # Test Fixtures
//!
//! Descriptor builders shared by the integration scenarios and benchmarks.

use pf_01_object_management::InMemoryObjectSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::{
    CaloHitParameters, CartesianVector, PseudoLayer, RelationshipDescriptor, TrackParameters, Uid,
};

/// Barrel inner radius used to place synthetic hits, units mm.
const INNER_RADIUS: f32 = 1800.0;

/// Layer thickness used to place synthetic hits, units mm.
const LAYER_THICKNESS: f32 = 5.0;

/// A valid hit in `layer`.
pub fn hit(uid: u64, layer: PseudoLayer) -> CaloHitParameters {
    CaloHitParameters {
        uid: Uid(uid),
        position: CartesianVector::new(0.0, INNER_RADIUS + layer as f32 * LAYER_THICKNESS, 0.0),
        energy: 0.1,
        pseudo_layer: layer,
        cell_length_scale: 10.0,
    }
}

/// A valid track.
pub fn track(uid: u64) -> TrackParameters {
    TrackParameters {
        uid: Uid(uid),
        momentum_at_dca: CartesianVector::new(0.5, 3.0, 1.0),
        charge: 1,
        position_at_calorimeter: CartesianVector::new(0.0, INNER_RADIUS, 50.0),
        reaches_calorimeter: true,
    }
}

/// Shape of a synthetic event.
#[derive(Debug, Clone, Copy)]
pub struct EventShape {
    /// Number of hits.
    pub calo_hits: u64,
    /// Number of tracks; their uids start at `TRACK_UID_OFFSET`.
    pub tracks: u64,
    /// Highest layer assigned to a hit.
    pub max_layer: PseudoLayer,
}

/// First uid handed to synthetic tracks.
pub const TRACK_UID_OFFSET: u64 = 1_000_000;

/// Builds a reproducible random event.
///
/// Every track after the first is declared the daughter of a random earlier
/// track, and one relationship points at a track that is never supplied.
pub fn random_event(seed: u64, shape: EventShape) -> InMemoryObjectSource {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut source = InMemoryObjectSource::new();

    for uid in 1..=shape.calo_hits {
        let layer = rng.gen_range(0..=shape.max_layer);
        let mut parameters = hit(uid, layer);
        parameters.energy = rng.gen_range(0.01..5.0);
        source = source.with_calo_hit(parameters);
    }

    for index in 0..shape.tracks {
        let uid = TRACK_UID_OFFSET + index;
        source = source.with_track(track(uid));

        if index > 0 {
            let parent = TRACK_UID_OFFSET + rng.gen_range(0..index);
            source = source.with_relationship(RelationshipDescriptor::parent_daughter(
                Uid(parent),
                Uid(uid),
            ));
        }
    }

    if shape.tracks > 0 {
        source = source.with_relationship(RelationshipDescriptor::sibling(
            Uid(TRACK_UID_OFFSET),
            Uid(TRACK_UID_OFFSET + shape.tracks),
        ));
    }

    source
}
