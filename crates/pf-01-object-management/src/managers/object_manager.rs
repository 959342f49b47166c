//! # Generic Object Manager
//!
//! Composes the registry arena, the named list registry and the algorithm
//! scope stack for one object kind. Kind-specific managers wrap this type
//! and add only their own operations.
//!
//! Every list-writing call checks that each referenced uid is owned by the
//! registry, so a list can never hold a dangling handle.

use std::sync::Arc;

use pf_telemetry::log_list_event;
use shared_types::{AlgorithmId, ReconstructionSettings, Uid};
use tracing::info;

use crate::domain::{
    AlgorithmScopeStack, ManagedObject, NamedListRegistry, ObjectList, ObjectRegistry,
    ObjectResult, INPUT_LIST_NAME,
};
use crate::ports::inbound::{EventDriverApi, ListManagementApi};

/// Owner of every object of kind `T` and of the lists referring to them.
#[derive(Debug)]
pub struct ObjectManager<T> {
    settings: Arc<ReconstructionSettings>,
    registry: ObjectRegistry<T>,
    lists: NamedListRegistry,
    scopes: AlgorithmScopeStack,
}

impl<T: ManagedObject> ObjectManager<T> {
    /// Creates an empty manager.
    pub fn new(settings: Arc<ReconstructionSettings>) -> Self {
        Self {
            settings,
            registry: ObjectRegistry::new(),
            lists: NamedListRegistry::new(),
            scopes: AlgorithmScopeStack::new(),
        }
    }

    /// Settings this manager validates against.
    pub fn settings(&self) -> &ReconstructionSettings {
        &self.settings
    }

    /// Validates a descriptor and creates the object.
    pub fn create_object(&mut self, parameters: &T::Parameters) -> ObjectResult<Uid> {
        self.registry.create(parameters, &self.settings)
    }

    /// Builds the reserved input list from every object created so far.
    pub fn create_input_list(&mut self) -> ObjectResult<()> {
        let uids: Vec<Uid> = self.registry.uids().collect();
        let count = uids.len();
        self.lists.create_input_list(uids)?;

        log_list_event!(debug, T::KIND, "Created input list", INPUT_LIST_NAME, count);
        Ok(())
    }

    /// Read access to the owned objects.
    pub fn registry(&self) -> &ObjectRegistry<T> {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut ObjectRegistry<T> {
        &mut self.registry
    }

    /// Read access to the named lists.
    pub fn lists(&self) -> &NamedListRegistry {
        &self.lists
    }

    /// Read access to the algorithm scopes.
    pub fn scopes(&self) -> &AlgorithmScopeStack {
        &self.scopes
    }

    /// An owned object by uid.
    pub fn object(&self, uid: Uid) -> ObjectResult<&T> {
        self.registry.require(uid)
    }

    /// The objects of a named list, in list order.
    pub fn objects_in_list(&self, name: &str) -> ObjectResult<Vec<&T>> {
        self.lists
            .get_list(name)?
            .iter()
            .map(|uid| self.registry.require(*uid))
            .collect()
    }
}

impl<T: ManagedObject> ListManagementApi for ObjectManager<T> {
    fn current_list_name(&self) -> ObjectResult<&str> {
        self.lists.current_list_name()
    }

    fn current_list(&self) -> ObjectResult<(&ObjectList, &str)> {
        self.lists.current_list()
    }

    fn algorithm_input_list_name(&self, algorithm: &AlgorithmId) -> ObjectResult<&str> {
        self.scopes.algorithm_input_list_name(algorithm, &self.lists)
    }

    fn algorithm_input_list(&self, algorithm: &AlgorithmId) -> ObjectResult<(&ObjectList, &str)> {
        self.scopes.algorithm_input_list(algorithm, &self.lists)
    }

    fn list(&self, name: &str) -> ObjectResult<&ObjectList> {
        self.lists.get_list(name)
    }

    fn save_list(&mut self, objects: &[Uid], new_name: &str) -> ObjectResult<()> {
        self.registry.ensure_all_exist(objects)?;
        let policy = self.settings.list_collision_policy;
        self.lists
            .save_list(objects.iter().copied(), new_name, policy)?;

        log_list_event!(debug, T::KIND, "Saved list", new_name, count = objects.len(), ?policy);
        Ok(())
    }

    fn add_objects_to_list(&mut self, name: &str, objects: &[Uid]) -> ObjectResult<usize> {
        self.registry.ensure_all_exist(objects)?;
        self.lists.add_objects_to_list(name, objects.iter().copied())
    }

    fn remove_objects_from_list(&mut self, name: &str, objects: &[Uid]) -> ObjectResult<usize> {
        self.lists.remove_objects_from_list(name, objects.iter().copied())
    }

    fn create_temporary_list_and_set_current(
        &mut self,
        algorithm: &AlgorithmId,
        objects: &[Uid],
    ) -> ObjectResult<String> {
        self.registry.ensure_all_exist(objects)?;
        self.scopes
            .create_temporary_list_and_set_current(algorithm, objects.iter().copied(), &mut self.lists)
    }

    fn reset_current_list_to_algorithm_input(&mut self, algorithm: &AlgorithmId) -> ObjectResult<()> {
        self.scopes
            .reset_current_list_to_algorithm_input(algorithm, &mut self.lists)
    }

    fn replace_current_and_algorithm_input_lists(
        &mut self,
        algorithm: &AlgorithmId,
        name: &str,
    ) -> ObjectResult<()> {
        self.scopes
            .replace_current_and_algorithm_input_lists(algorithm, name, &mut self.lists)
    }
}

impl<T: ManagedObject> EventDriverApi for ObjectManager<T> {
    fn register_algorithm(&mut self, algorithm: &AlgorithmId) {
        self.scopes.register(algorithm, &self.lists);
    }

    fn reset_algorithm_info(&mut self, algorithm: &AlgorithmId, is_finished: bool) -> ObjectResult<()> {
        self.scopes
            .reset_algorithm_info(algorithm, is_finished, &mut self.lists)
    }

    fn reset_for_next_event(&mut self) -> ObjectResult<()> {
        let objects = self.registry.len();
        let lists = self.lists.len();

        // Lists and scopes go first so no handle outlives its object.
        self.scopes.clear();
        self.lists.clear();
        self.registry.destroy_all()?;

        info!(kind = T::KIND, objects, lists, "Reset for next event");
        Ok(())
    }
}
