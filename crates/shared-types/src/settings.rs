//! # Reconstruction Settings
//!
//! One explicit settings value, constructed once per run and passed by
//! reference to every component that needs a threshold. There is no global
//! instance.

use serde::{Deserialize, Serialize};

use crate::entities::PseudoLayer;
use crate::errors::SettingsError;

/// Policy applied when a list is saved under a non-reserved name that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListCollisionPolicy {
    /// Fail with `AlreadyPresent` and leave the existing list untouched.
    #[default]
    Reject,
    /// Append the new objects into the existing list.
    MergeInPlace,
}

/// Settings shared by the object managers and the algorithms consuming their lists.
///
/// The managers read `list_collision_policy`, `max_objects_per_kind`,
/// `max_pseudo_layer` and `min_hit_energy`; the remaining thresholds are
/// validated once and handed on to downstream algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconstructionSettings {
    /// Behaviour of `save_list` on a name collision.
    pub list_collision_policy: ListCollisionPolicy,
    /// Upper bound on objects of one kind created per event.
    pub max_objects_per_kind: usize,
    /// Highest pseudo layer a hit may be assigned.
    pub max_pseudo_layer: PseudoLayer,
    /// Minimum deposited energy for an ingested hit, units GeV.
    pub min_hit_energy: f32,
    /// Hadronic energy resolution X, such that sigmaE = X * sqrt(E).
    pub hadronic_energy_resolution: f32,
    /// Max separation for associations between hits to be considered, units mm.
    pub calo_hit_max_separation: f32,
    /// Radius used to select the pfo target from a mc decay chain, units mm.
    pub mc_pfo_selection_radius: f32,
    /// Number of adjacent layers to use in isolation calculation.
    pub isolation_n_layers: u32,
}

impl Default for ReconstructionSettings {
    fn default() -> Self {
        Self {
            list_collision_policy: ListCollisionPolicy::Reject,
            max_objects_per_kind: 1_000_000,
            max_pseudo_layer: 150,
            min_hit_energy: 0.0,
            hadronic_energy_resolution: 0.6,
            calo_hit_max_separation: 100.0,
            mc_pfo_selection_radius: 500.0,
            isolation_n_layers: 2,
        }
    }
}

impl ReconstructionSettings {
    /// Create settings for testing.
    pub fn for_testing() -> Self {
        Self {
            max_objects_per_kind: 1_000,
            max_pseudo_layer: 64,
            ..Self::default()
        }
    }

    /// Same settings with a different collision policy.
    pub fn with_collision_policy(mut self, policy: ListCollisionPolicy) -> Self {
        self.list_collision_policy = policy;
        self
    }

    /// Check every threshold is usable.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_objects_per_kind == 0 {
            return Err(SettingsError::OutOfRange {
                field: "max_objects_per_kind",
                reason: "must be positive".to_string(),
            });
        }

        let non_negative = [
            ("min_hit_energy", self.min_hit_energy),
            ("hadronic_energy_resolution", self.hadronic_energy_resolution),
            ("calo_hit_max_separation", self.calo_hit_max_separation),
            ("mc_pfo_selection_radius", self.mc_pfo_selection_radius),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::OutOfRange {
                    field,
                    reason: format!("expected finite non-negative value, got {value}"),
                });
            }
        }

        Ok(())
    }
}
