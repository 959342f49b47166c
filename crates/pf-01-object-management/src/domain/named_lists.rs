//! # Named List Registry
//!
//! Maps list names to ordered collections of object handles and tracks the
//! name of the current list.
//!
//! ## Invariants Enforced
//!
//! - Every name maps to at most one list
//! - The reserved input list can be created once per event and is never
//!   mutated afterwards
//! - The current pointer, when set, names an existing list (`delete_list()`
//!   clears it when its target goes away)
//! - A name is either saved or temporary, never both: saved lists live until
//!   `clear()`, temporary lists until their algorithm's scope is cleaned up

use std::collections::{BTreeMap, BTreeSet};

use shared_types::{ListCollisionPolicy, Uid};
use tracing::debug;

use super::entities::ObjectList;
use super::errors::{ObjectError, ObjectResult};

/// Name of the list built from ingested objects.
pub const INPUT_LIST_NAME: &str = "Input";

/// Named lists of object handles for one object kind.
#[derive(Debug, Default)]
pub struct NamedListRegistry {
    lists: BTreeMap<String, ObjectList>,
    saved: BTreeSet<String>,
    temporary: BTreeSet<String>,
    current: Option<String>,
}

impl NamedListRegistry {
    /// Creates an empty registry with no current list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the current list.
    pub fn current_list_name(&self) -> ObjectResult<&str> {
        self.current.as_deref().ok_or(ObjectError::NotInitialized)
    }

    /// The current list and its name.
    pub fn current_list(&self) -> ObjectResult<(&ObjectList, &str)> {
        let name = self.current_list_name()?;
        Ok((self.get_list(name)?, name))
    }

    /// A list by name.
    pub fn get_list(&self, name: &str) -> ObjectResult<&ObjectList> {
        self.lists
            .get(name)
            .ok_or_else(|| ObjectError::NotFound(format!("list {name}")))
    }

    /// Checks if a list exists.
    pub fn contains_list(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    /// Whether `name` was persisted through `save_list`.
    pub fn is_saved(&self, name: &str) -> bool {
        self.saved.contains(name)
    }

    /// Whether `name` is a live temporary list owned by an algorithm scope.
    pub fn is_temporary(&self, name: &str) -> bool {
        self.temporary.contains(name)
    }

    /// All list names, sorted.
    pub fn list_names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    /// Returns the number of lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns true if no list exists.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Builds the reserved input list and makes it current.
    ///
    /// # Errors
    /// - `AlreadyPresent` if the input list already exists
    pub fn create_input_list(&mut self, objects: impl IntoIterator<Item = Uid>) -> ObjectResult<()> {
        if self.lists.contains_key(INPUT_LIST_NAME) {
            return Err(ObjectError::AlreadyPresent(format!("list {INPUT_LIST_NAME}")));
        }

        let list: ObjectList = objects.into_iter().collect();
        self.lists.insert(INPUT_LIST_NAME.to_string(), list);
        self.current = Some(INPUT_LIST_NAME.to_string());
        Ok(())
    }

    /// Saves `objects` as a new list named `new_name`.
    ///
    /// # Errors
    /// - `InvalidParameter` for an empty name
    /// - `AlreadyPresent` for the reserved name, for a live temporary list,
    ///   or for any other existing name under `ListCollisionPolicy::Reject`;
    ///   the existing list is untouched
    pub fn save_list(
        &mut self,
        objects: impl IntoIterator<Item = Uid>,
        new_name: &str,
        policy: ListCollisionPolicy,
    ) -> ObjectResult<()> {
        if new_name.is_empty() {
            return Err(ObjectError::InvalidParameter("empty list name".to_string()));
        }

        if new_name == INPUT_LIST_NAME || self.temporary.contains(new_name) {
            return Err(ObjectError::AlreadyPresent(format!("list {new_name}")));
        }

        match (self.lists.get_mut(new_name), policy) {
            (Some(_), ListCollisionPolicy::Reject) => {
                return Err(ObjectError::AlreadyPresent(format!("list {new_name}")));
            }
            (Some(existing), ListCollisionPolicy::MergeInPlace) => {
                existing.extend(objects);
                debug!(list = new_name, count = existing.len(), "Merged into saved list");
            }
            (None, _) => {
                let list: ObjectList = objects.into_iter().collect();
                self.lists.insert(new_name.to_string(), list);
            }
        }

        self.saved.insert(new_name.to_string());
        Ok(())
    }

    /// Appends objects to an existing list, skipping those already in it.
    ///
    /// Returns the number of objects actually added.
    pub fn add_objects_to_list(
        &mut self,
        name: &str,
        objects: impl IntoIterator<Item = Uid>,
    ) -> ObjectResult<usize> {
        let list = self.mutable_list(name)?;
        let before = list.len();
        list.extend(objects);
        Ok(list.len() - before)
    }

    /// Removes objects from an existing list. Objects not in the list are ignored.
    ///
    /// Returns the number of objects actually removed.
    pub fn remove_objects_from_list(
        &mut self,
        name: &str,
        objects: impl IntoIterator<Item = Uid>,
    ) -> ObjectResult<usize> {
        let list = self.mutable_list(name)?;
        let removed = objects
            .into_iter()
            .filter(|uid| list.shift_remove(uid))
            .count();
        Ok(removed)
    }

    fn mutable_list(&mut self, name: &str) -> ObjectResult<&mut ObjectList> {
        if name == INPUT_LIST_NAME {
            return Err(ObjectError::InvalidParameter(format!(
                "list {INPUT_LIST_NAME} cannot be modified"
            )));
        }

        self.lists
            .get_mut(name)
            .ok_or_else(|| ObjectError::NotFound(format!("list {name}")))
    }

    pub(crate) fn insert_temporary_list(&mut self, name: String, list: ObjectList) -> ObjectResult<()> {
        if self.lists.contains_key(&name) {
            return Err(ObjectError::AlreadyPresent(format!("list {name}")));
        }
        self.temporary.insert(name.clone());
        self.lists.insert(name, list);
        Ok(())
    }

    /// Deletes a temporary list. The input list and saved lists are refused.
    pub(crate) fn delete_list(&mut self, name: &str) -> ObjectResult<()> {
        if name == INPUT_LIST_NAME || self.saved.contains(name) {
            return Err(ObjectError::InvalidParameter(format!(
                "list {name} cannot be deleted"
            )));
        }

        self.lists
            .remove(name)
            .ok_or_else(|| ObjectError::NotFound(format!("list {name}")))?;
        self.temporary.remove(name);

        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
        Ok(())
    }

    pub(crate) fn set_current(&mut self, name: &str) -> ObjectResult<()> {
        if !self.lists.contains_key(name) {
            return Err(ObjectError::NotFound(format!("list {name}")));
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    pub(crate) fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub(crate) fn unset_current(&mut self) {
        self.current = None;
    }

    /// Drops every list and unsets the current pointer.
    pub fn clear(&mut self) {
        self.lists.clear();
        self.saved.clear();
        self.temporary.clear();
        self.current = None;
    }
}
