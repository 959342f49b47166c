//! # Ordered Layer List
//!
//! Buckets objects by pseudo layer and supports set algebra and ordered
//! extraction.
//!
//! ## Data Structures
//!
//! - `layers`: `BTreeMap<PseudoLayer, IndexSet<T>>`, ascending layers, each
//!   bucket in insertion order
//! - `layer_of`: reverse index from object to the layer holding it
//!
//! ## Invariants Enforced
//!
//! - Buckets are never empty (removed in `remove_object_from_layer()`)
//! - An object sits in at most one bucket (checked in `add_object_to_layer()`)

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use indexmap::IndexSet;
use shared_types::{PseudoLayer, Uid};

use super::errors::{ObjectError, ObjectResult};

/// Layer container for calorimeter hit handles.
pub type OrderedCaloHitList = OrderedLayerList<Uid>;

/// Objects bucketed by ascending pseudo layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedLayerList<T: Eq + Hash> {
    layers: BTreeMap<PseudoLayer, IndexSet<T>>,
    layer_of: HashMap<T, PseudoLayer>,
}

impl<T: Clone + Eq + Hash> OrderedLayerList<T> {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            layers: BTreeMap::new(),
            layer_of: HashMap::new(),
        }
    }

    /// Builds a container from `(object, layer)` pairs, failing on the first duplicate.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (T, PseudoLayer)>) -> ObjectResult<Self> {
        let mut list = Self::new();
        for (object, layer) in pairs {
            list.add_object_to_layer(object, layer)?;
        }
        Ok(list)
    }

    /// Inserts `object` into the bucket for `layer`, creating the bucket if needed.
    ///
    /// # Errors
    /// - `AlreadyPresent` if the object is already held, in this or any other layer
    pub fn add_object_to_layer(&mut self, object: T, layer: PseudoLayer) -> ObjectResult<()> {
        if let Some(&existing) = self.layer_of.get(&object) {
            return Err(ObjectError::AlreadyPresent(format!(
                "object already held in pseudo layer {existing}"
            )));
        }

        if !self.layers.entry(layer).or_default().insert(object.clone()) {
            return Err(ObjectError::Failure(format!(
                "pseudo layer {layer} bucket out of sync with layer index"
            )));
        }

        self.layer_of.insert(object, layer);
        Ok(())
    }

    /// Removes `object` from the bucket for `layer`, dropping the bucket once empty.
    ///
    /// # Errors
    /// - `NotFound` if the bucket does not exist or does not hold the object
    pub fn remove_object_from_layer(&mut self, object: &T, layer: PseudoLayer) -> ObjectResult<()> {
        let bucket = self
            .layers
            .get_mut(&layer)
            .ok_or_else(|| ObjectError::NotFound(format!("pseudo layer {layer}")))?;

        if !bucket.shift_remove(object) {
            return Err(ObjectError::NotFound(format!(
                "object in pseudo layer {layer}"
            )));
        }

        if bucket.is_empty() {
            self.layers.remove(&layer);
        }

        self.layer_of.remove(object);
        Ok(())
    }

    /// The bucket for `layer`.
    pub fn objects_in_layer(&self, layer: PseudoLayer) -> ObjectResult<&IndexSet<T>> {
        self.layers
            .get(&layer)
            .ok_or_else(|| ObjectError::NotFound(format!("pseudo layer {layer}")))
    }

    /// Adds every `(layer, object)` pair of `other`; the first failure propagates.
    pub fn merge(&mut self, other: &Self) -> ObjectResult<()> {
        for (layer, object) in other.pairs() {
            self.add_object_to_layer(object.clone(), layer)?;
        }
        Ok(())
    }

    /// Removes every `(layer, object)` pair of `other`, ignoring pairs not held here.
    pub fn subtract(&mut self, other: &Self) -> ObjectResult<()> {
        for (layer, object) in other.pairs() {
            match self.remove_object_from_layer(object, layer) {
                Ok(()) => {}
                Err(err) if err.is_not_found() => {}
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Every object, by ascending layer then bucket insertion order.
    pub fn flatten_ordered(&self) -> Vec<T> {
        self.pairs().map(|(_, object)| object.clone()).collect()
    }

    /// Replaces this container's contents with a copy of `other`.
    pub fn assign_from(&mut self, other: &Self) -> ObjectResult<()> {
        self.reset()?;
        self.merge(other)
    }

    /// Drops every bucket and every element held.
    pub fn reset(&mut self) -> ObjectResult<()> {
        self.layers.clear();
        self.layer_of.clear();

        if !self.layers.is_empty() || !self.layer_of.is_empty() {
            return Err(ObjectError::Failure(
                "layer list not empty after reset".to_string(),
            ));
        }
        Ok(())
    }

    /// `(layer, bucket)` pairs with `start <= layer <= end`.
    ///
    /// # Errors
    /// - `InvalidParameter` if `start > end`
    pub fn layers_in_range(
        &self,
        start: PseudoLayer,
        end: PseudoLayer,
    ) -> ObjectResult<impl Iterator<Item = (PseudoLayer, &IndexSet<T>)> + '_> {
        if start > end {
            return Err(ObjectError::InvalidParameter(format!(
                "inverted layer range {start}..={end}"
            )));
        }
        Ok(self.layers.range(start..=end).map(|(layer, bucket)| (*layer, bucket)))
    }

    /// `(layer, bucket)` pairs in ascending layer order.
    pub fn iter(&self) -> impl Iterator<Item = (PseudoLayer, &IndexSet<T>)> + '_ {
        self.layers.iter().map(|(layer, bucket)| (*layer, bucket))
    }

    fn pairs(&self) -> impl Iterator<Item = (PseudoLayer, &T)> + '_ {
        self.layers
            .iter()
            .flat_map(|(layer, bucket)| bucket.iter().map(move |object| (*layer, object)))
    }

    /// Layer currently holding `object`.
    pub fn layer_of(&self, object: &T) -> Option<PseudoLayer> {
        self.layer_of.get(object).copied()
    }

    /// Checks if `object` is held in any layer.
    pub fn contains(&self, object: &T) -> bool {
        self.layer_of.contains_key(object)
    }

    /// Lowest occupied layer.
    pub fn inner_layer(&self) -> Option<PseudoLayer> {
        self.layers.keys().next().copied()
    }

    /// Highest occupied layer.
    pub fn outer_layer(&self) -> Option<PseudoLayer> {
        self.layers.keys().next_back().copied()
    }

    /// Returns the number of occupied layers.
    pub fn n_layers(&self) -> usize {
        self.layers.len()
    }

    /// Returns the number of objects held.
    pub fn len(&self) -> usize {
        self.layer_of.len()
    }

    /// Returns true if no object is held.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl<T: Clone + Eq + Hash> Default for OrderedLayerList<T> {
    fn default() -> Self {
        Self::new()
    }
}
