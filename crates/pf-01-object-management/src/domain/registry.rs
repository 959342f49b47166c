//! # Object Registry
//!
//! Arena owning every object of one kind for the current event.
//!
//! ## Invariants Enforced
//!
//! - No duplicate `Uid` (checked in `create()`)
//! - Objects are only destroyed en masse (`destroy_all()`); every other
//!   structure holds `Uid` handles that stay valid until then

use indexmap::IndexMap;
use shared_types::{ReconstructionSettings, Uid};
use tracing::debug;

use super::entities::ManagedObject;
use super::errors::{ObjectError, ObjectResult};

/// Sole owner of every `T` created during the event, in creation order.
#[derive(Debug)]
pub struct ObjectRegistry<T> {
    objects: IndexMap<Uid, T>,
}

impl<T: ManagedObject> ObjectRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            objects: IndexMap::new(),
        }
    }

    /// Creates an empty registry sized for `capacity` objects.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: IndexMap::with_capacity(capacity),
        }
    }

    /// Validates a descriptor and takes ownership of the resulting object.
    ///
    /// # Errors
    /// - `AlreadyPresent` if the uid is already registered
    /// - `InvalidParameter` if the descriptor fails validation or the
    ///   per-kind object limit is reached
    pub fn create(
        &mut self,
        parameters: &T::Parameters,
        settings: &ReconstructionSettings,
    ) -> ObjectResult<Uid> {
        let object = T::from_parameters(parameters, settings)?;
        let uid = object.uid();

        if self.objects.contains_key(&uid) {
            return Err(ObjectError::AlreadyPresent(format!("{} {}", T::KIND, uid)));
        }

        if self.objects.len() >= settings.max_objects_per_kind {
            return Err(ObjectError::InvalidParameter(format!(
                "{} limit of {} reached",
                T::KIND,
                settings.max_objects_per_kind
            )));
        }

        self.objects.insert(uid, object);
        Ok(uid)
    }

    /// Releases every owned object.
    pub fn destroy_all(&mut self) -> ObjectResult<()> {
        let count = self.objects.len();
        self.objects.clear();

        if !self.objects.is_empty() {
            return Err(ObjectError::Failure(format!(
                "{} registry not empty after teardown",
                T::KIND
            )));
        }

        debug!(kind = T::KIND, count, "Destroyed all objects");
        Ok(())
    }

    /// Gets an object by uid.
    pub fn get(&self, uid: Uid) -> Option<&T> {
        self.objects.get(&uid)
    }

    /// Gets an object by uid, failing with `NotFound`.
    pub fn require(&self, uid: Uid) -> ObjectResult<&T> {
        self.objects
            .get(&uid)
            .ok_or_else(|| ObjectError::NotFound(format!("{} {}", T::KIND, uid)))
    }

    pub(crate) fn get_mut(&mut self, uid: Uid) -> Option<&mut T> {
        self.objects.get_mut(&uid)
    }

    /// Checks if an object exists.
    pub fn contains(&self, uid: Uid) -> bool {
        self.objects.contains_key(&uid)
    }

    /// Fails with `NotFound` on the first uid that is not registered.
    pub fn ensure_all_exist<'a>(&self, uids: impl IntoIterator<Item = &'a Uid>) -> ObjectResult<()> {
        match uids.into_iter().find(|uid| !self.contains(**uid)) {
            Some(missing) => Err(ObjectError::NotFound(format!("{} {}", T::KIND, missing))),
            None => Ok(()),
        }
    }

    /// Returns the number of owned objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the registry owns nothing.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Uids in creation order.
    pub fn uids(&self) -> impl Iterator<Item = Uid> + '_ {
        self.objects.keys().copied()
    }

    /// Objects in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.objects.values()
    }
}

impl<T: ManagedObject> Default for ObjectRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
