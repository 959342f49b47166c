//! # Managers
//!
//! One manager per object kind, each built on the generic `ObjectManager`.

pub mod calo_hit_manager;
pub mod object_manager;
pub mod track_manager;

pub use calo_hit_manager::CaloHitManager;
pub use object_manager::ObjectManager;
pub use track_manager::TrackManager;
