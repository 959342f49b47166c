//! # Inbound Ports
//!
//! API traits defining what the object managers offer to pipeline
//! algorithms and to the driver sequencing them.

use shared_types::{AlgorithmId, Uid};

use crate::domain::{ObjectList, ObjectResult};

/// List access for one object kind - inbound port used by algorithms.
pub trait ListManagementApi {
    /// Name of the current list.
    fn current_list_name(&self) -> ObjectResult<&str>;

    /// The current list and its name.
    fn current_list(&self) -> ObjectResult<(&ObjectList, &str)>;

    /// Name of the list that was current when `algorithm` started.
    fn algorithm_input_list_name(&self, algorithm: &AlgorithmId) -> ObjectResult<&str>;

    /// The list that was current when `algorithm` started, and its name.
    fn algorithm_input_list(&self, algorithm: &AlgorithmId) -> ObjectResult<(&ObjectList, &str)>;

    /// A list by name.
    fn list(&self, name: &str) -> ObjectResult<&ObjectList>;

    /// Save `objects` under a new name, subject to the collision policy.
    fn save_list(&mut self, objects: &[Uid], new_name: &str) -> ObjectResult<()>;

    /// Append objects to an existing list.
    fn add_objects_to_list(&mut self, name: &str, objects: &[Uid]) -> ObjectResult<usize>;

    /// Remove objects from an existing list; absent objects are ignored.
    fn remove_objects_from_list(&mut self, name: &str, objects: &[Uid]) -> ObjectResult<usize>;

    /// Store `objects` as a temporary list owned by `algorithm` and make it current.
    fn create_temporary_list_and_set_current(
        &mut self,
        algorithm: &AlgorithmId,
        objects: &[Uid],
    ) -> ObjectResult<String>;

    /// Point the current list back at `algorithm`'s input list.
    fn reset_current_list_to_algorithm_input(&mut self, algorithm: &AlgorithmId) -> ObjectResult<()>;

    /// Make an existing list both the current list and `algorithm`'s input list.
    fn replace_current_and_algorithm_input_lists(
        &mut self,
        algorithm: &AlgorithmId,
        name: &str,
    ) -> ObjectResult<()>;
}

/// Algorithm boundary and event boundary hooks - inbound port used by the driver.
pub trait EventDriverApi {
    /// Open `algorithm`'s scope (no-op if already open).
    fn register_algorithm(&mut self, algorithm: &AlgorithmId);

    /// Drop `algorithm`'s temporary lists and restore its input list.
    fn reset_algorithm_info(&mut self, algorithm: &AlgorithmId, is_finished: bool) -> ObjectResult<()>;

    /// Destroy every object, list, scope and relationship of the event.
    fn reset_for_next_event(&mut self) -> ObjectResult<()>;
}
