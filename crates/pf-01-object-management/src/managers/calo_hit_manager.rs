//! # Calo Hit Manager
//!
//! `ObjectManager<CaloHit>` plus layer ordering of named hit lists.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use shared_types::ReconstructionSettings;
use tracing::trace;

use super::object_manager::ObjectManager;
use crate::domain::{CaloHit, ObjectResult, OrderedCaloHitList};
use crate::ports::inbound::ListManagementApi;

/// Manager for calorimeter hits.
#[derive(Debug)]
pub struct CaloHitManager {
    inner: ObjectManager<CaloHit>,
}

impl CaloHitManager {
    /// Creates an empty manager.
    pub fn new(settings: Arc<ReconstructionSettings>) -> Self {
        Self {
            inner: ObjectManager::new(settings),
        }
    }

    /// Buckets the hits of list `name` by pseudo layer.
    pub fn ordered_hits(&self, name: &str) -> ObjectResult<OrderedCaloHitList> {
        let list = self.inner.list(name)?;
        let mut ordered = OrderedCaloHitList::new();

        for uid in list {
            let hit = self.inner.object(*uid)?;
            ordered.add_object_to_layer(*uid, hit.pseudo_layer())?;
        }

        trace!(list = name, hits = ordered.len(), layers = ordered.n_layers(), "Ordered hits");
        Ok(ordered)
    }

    /// Buckets the hits of the current list by pseudo layer.
    pub fn current_ordered_hits(&self) -> ObjectResult<OrderedCaloHitList> {
        let name = self.inner.current_list_name()?;
        self.ordered_hits(name)
    }
}

impl Deref for CaloHitManager {
    type Target = ObjectManager<CaloHit>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for CaloHitManager {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
