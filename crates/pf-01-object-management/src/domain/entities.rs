//! # Domain Entities
//!
//! Reconstruction objects owned by the object registries, plus the traits
//! the generic manager and the relationship graph rely on.

use indexmap::IndexSet;
use shared_types::{
    CaloHitParameters, CartesianVector, PseudoLayer, ReconstructionSettings, TrackParameters, Uid,
};

use super::errors::{ObjectError, ObjectResult};

/// Insertion-ordered set of object handles. Every named list is one of these.
pub type ObjectList = IndexSet<Uid>;

/// An object kind that can be owned by an `ObjectRegistry`.
pub trait ManagedObject: Sized {
    /// Descriptor supplied by the ingestion layer.
    type Parameters;

    /// Short kind name used in logs and error messages.
    const KIND: &'static str;

    /// Validate a descriptor and build the object.
    fn from_parameters(
        parameters: &Self::Parameters,
        settings: &ReconstructionSettings,
    ) -> ObjectResult<Self>;

    /// External identifier.
    fn uid(&self) -> Uid;
}

/// Objects that can carry resolved relationship links.
pub trait Relatable {
    /// Record `uid` as a parent of this object.
    fn add_parent(&mut self, uid: Uid);

    /// Record `uid` as a daughter of this object.
    fn add_daughter(&mut self, uid: Uid);

    /// Record `uid` as a sibling of this object.
    fn add_sibling(&mut self, uid: Uid);
}

/// Calorimeter hit.
#[derive(Debug, Clone, PartialEq)]
pub struct CaloHit {
    uid: Uid,
    position: CartesianVector,
    energy: f32,
    pseudo_layer: PseudoLayer,
    cell_length_scale: f32,
}

impl CaloHit {
    /// Hit position, units mm.
    pub fn position(&self) -> CartesianVector {
        self.position
    }

    /// Deposited energy, units GeV.
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Assigned pseudo layer.
    pub fn pseudo_layer(&self) -> PseudoLayer {
        self.pseudo_layer
    }

    /// Typical cell dimension, units mm.
    pub fn cell_length_scale(&self) -> f32 {
        self.cell_length_scale
    }
}

impl ManagedObject for CaloHit {
    type Parameters = CaloHitParameters;

    const KIND: &'static str = "calo hit";

    fn from_parameters(
        parameters: &CaloHitParameters,
        settings: &ReconstructionSettings,
    ) -> ObjectResult<Self> {
        if !parameters.position.is_finite() {
            return Err(ObjectError::InvalidParameter(format!(
                "calo hit {} has non-finite position",
                parameters.uid
            )));
        }

        if !parameters.energy.is_finite() || parameters.energy < settings.min_hit_energy {
            return Err(ObjectError::InvalidParameter(format!(
                "calo hit {} energy {} below minimum {}",
                parameters.uid, parameters.energy, settings.min_hit_energy
            )));
        }

        if parameters.pseudo_layer > settings.max_pseudo_layer {
            return Err(ObjectError::InvalidParameter(format!(
                "calo hit {} pseudo layer {} exceeds maximum {}",
                parameters.uid, parameters.pseudo_layer, settings.max_pseudo_layer
            )));
        }

        if !(parameters.cell_length_scale.is_finite() && parameters.cell_length_scale > 0.0) {
            return Err(ObjectError::InvalidParameter(format!(
                "calo hit {} cell length scale must be positive",
                parameters.uid
            )));
        }

        Ok(Self {
            uid: parameters.uid,
            position: parameters.position,
            energy: parameters.energy,
            pseudo_layer: parameters.pseudo_layer,
            cell_length_scale: parameters.cell_length_scale,
        })
    }

    fn uid(&self) -> Uid {
        self.uid
    }
}

/// Reconstructed charged-particle track.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    uid: Uid,
    momentum_at_dca: CartesianVector,
    charge: i32,
    position_at_calorimeter: CartesianVector,
    reaches_calorimeter: bool,
    parent_tracks: IndexSet<Uid>,
    daughter_tracks: IndexSet<Uid>,
    sibling_tracks: IndexSet<Uid>,
    mc_pfo_target: Option<Uid>,
}

impl Track {
    /// Momentum at the distance of closest approach.
    pub fn momentum_at_dca(&self) -> CartesianVector {
        self.momentum_at_dca
    }

    /// Charge in units of e.
    pub fn charge(&self) -> i32 {
        self.charge
    }

    /// Track state position at the calorimeter front face.
    pub fn position_at_calorimeter(&self) -> CartesianVector {
        self.position_at_calorimeter
    }

    /// Whether the track reaches the calorimeter.
    pub fn reaches_calorimeter(&self) -> bool {
        self.reaches_calorimeter
    }

    /// Resolved parent tracks.
    pub fn parent_tracks(&self) -> &IndexSet<Uid> {
        &self.parent_tracks
    }

    /// Resolved daughter tracks.
    pub fn daughter_tracks(&self) -> &IndexSet<Uid> {
        &self.daughter_tracks
    }

    /// Resolved sibling tracks.
    pub fn sibling_tracks(&self) -> &IndexSet<Uid> {
        &self.sibling_tracks
    }

    /// Uid of the mc particle this track is matched to, if any.
    pub fn mc_pfo_target(&self) -> Option<Uid> {
        self.mc_pfo_target
    }

    pub(crate) fn set_mc_pfo_target(&mut self, target: Uid) {
        self.mc_pfo_target = Some(target);
    }
}

impl ManagedObject for Track {
    type Parameters = TrackParameters;

    const KIND: &'static str = "track";

    fn from_parameters(
        parameters: &TrackParameters,
        _settings: &ReconstructionSettings,
    ) -> ObjectResult<Self> {
        if !parameters.momentum_at_dca.is_finite()
            || parameters.momentum_at_dca.magnitude_squared() <= 0.0
        {
            return Err(ObjectError::InvalidParameter(format!(
                "track {} has invalid momentum",
                parameters.uid
            )));
        }

        if !parameters.position_at_calorimeter.is_finite() {
            return Err(ObjectError::InvalidParameter(format!(
                "track {} has non-finite calorimeter position",
                parameters.uid
            )));
        }

        Ok(Self {
            uid: parameters.uid,
            momentum_at_dca: parameters.momentum_at_dca,
            charge: parameters.charge,
            position_at_calorimeter: parameters.position_at_calorimeter,
            reaches_calorimeter: parameters.reaches_calorimeter,
            parent_tracks: IndexSet::new(),
            daughter_tracks: IndexSet::new(),
            sibling_tracks: IndexSet::new(),
            mc_pfo_target: None,
        })
    }

    fn uid(&self) -> Uid {
        self.uid
    }
}

impl Relatable for Track {
    fn add_parent(&mut self, uid: Uid) {
        self.parent_tracks.insert(uid);
    }

    fn add_daughter(&mut self, uid: Uid) {
        self.daughter_tracks.insert(uid);
    }

    fn add_sibling(&mut self, uid: Uid) {
        self.sibling_tracks.insert(uid);
    }
}
