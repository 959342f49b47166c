//! # Core Identifiers and Ingestion Descriptors
//!
//! Defines the identifiers shared by every object manager and the parameter
//! blocks the ingestion layer hands over when an event is loaded.
//!
//! ## Clusters
//!
//! - **Identity**: `Uid`, `PseudoLayer`, `AlgorithmId`
//! - **Ingestion**: `CaloHitParameters`, `TrackParameters`, `RelationshipDescriptor`
//! - **Geometry primitives**: `CartesianVector`

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Externally assigned identifier, stable for an object's lifetime within an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Uid(pub u64);

impl Uid {
    /// Raw identifier value.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Uid {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uid:{}", self.0)
    }
}

/// Discrete coarse depth index used to bucket hits.
pub type PseudoLayer = u32;

/// Identity of one algorithm instance in the pipeline.
///
/// Temporary list names are derived from this value, so two distinct
/// algorithm instances must never share an id within an event.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlgorithmId(String);

impl AlgorithmId {
    /// Create an algorithm id from its instance name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The instance name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AlgorithmId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// =============================================================================
// CLUSTER B: GEOMETRY PRIMITIVES
// =============================================================================

/// A point or direction in detector coordinates, units mm (or GeV for momenta).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianVector {
    /// x component.
    pub x: f32,
    /// y component.
    pub y: f32,
    /// z component.
    pub z: f32,
}

impl CartesianVector {
    /// Build a vector from its components.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Squared magnitude.
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude.
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }
}

// =============================================================================
// CLUSTER C: INGESTION DESCRIPTORS
// =============================================================================

/// Parameters supplied by the ingestion layer for one calorimeter hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloHitParameters {
    /// External identifier.
    pub uid: Uid,
    /// Hit position, units mm.
    pub position: CartesianVector,
    /// Deposited energy, units GeV.
    pub energy: f32,
    /// Pseudo layer assigned by the geometry layer.
    pub pseudo_layer: PseudoLayer,
    /// Typical cell dimension, units mm.
    pub cell_length_scale: f32,
}

/// Parameters supplied by the ingestion layer for one track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackParameters {
    /// External identifier.
    pub uid: Uid,
    /// Momentum at the distance of closest approach, units GeV.
    pub momentum_at_dca: CartesianVector,
    /// Charge in units of e.
    pub charge: i32,
    /// Track state position at the calorimeter front face, units mm.
    pub position_at_calorimeter: CartesianVector,
    /// Whether the track reaches the calorimeter.
    pub reaches_calorimeter: bool,
}

/// Kind of a declared relationship between two tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// `from` is the parent, `to` the daughter.
    ParentDaughter,
    /// Symmetric sibling link.
    Sibling,
}

/// An id-based relationship declared by the ingestion layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipDescriptor {
    /// Relationship kind.
    pub kind: RelationshipKind,
    /// Source identifier.
    pub from: Uid,
    /// Target identifier.
    pub to: Uid,
}

impl RelationshipDescriptor {
    /// Declare `parent -> daughter`.
    pub fn parent_daughter(parent: Uid, daughter: Uid) -> Self {
        Self {
            kind: RelationshipKind::ParentDaughter,
            from: parent,
            to: daughter,
        }
    }

    /// Declare `first <-> second`.
    pub fn sibling(first: Uid, second: Uid) -> Self {
        Self {
            kind: RelationshipKind::Sibling,
            from: first,
            to: second,
        }
    }
}
