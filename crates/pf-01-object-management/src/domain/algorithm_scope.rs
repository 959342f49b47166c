//! # Algorithm Scope Stack
//!
//! Per-algorithm restore points for the current list, and ownership of the
//! temporary lists each algorithm creates.
//!
//! ## Lifecycle
//!
//! ```text
//! Unregistered ──register()──▶ Registered ──create_temporary_list…()──▶ Active
//!      ▲                           ▲                                      │
//!      │                           └──reset_algorithm_info(_, false)──────┤
//!      └──────────────────────────────reset_algorithm_info(_, true)───────┘
//! ```
//!
//! Nested algorithms each hold their own restore point, so an inner
//! algorithm resetting never disturbs its caller's view.

use std::collections::{BTreeSet, HashMap};

use shared_types::{AlgorithmId, Uid};
use tracing::{debug, warn};

use super::entities::ObjectList;
use super::errors::{ObjectError, ObjectResult};
use super::named_lists::NamedListRegistry;

/// Bookkeeping recorded for one algorithm instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmContext {
    /// Current list name when the algorithm was registered.
    pub parent_list_name: Option<String>,
    /// Temporary lists created by the algorithm and not yet cleaned up.
    pub temporary_list_names: BTreeSet<String>,
    /// Number of temporary lists the algorithm has ever created.
    pub lists_created: u32,
}

impl AlgorithmContext {
    fn new(parent_list_name: Option<String>) -> Self {
        Self {
            parent_list_name,
            temporary_list_names: BTreeSet::new(),
            lists_created: 0,
        }
    }
}

/// Name of the `counter`-th temporary list created by `algorithm`.
pub fn temporary_list_name(algorithm: &AlgorithmId, counter: u32) -> String {
    format!("{algorithm}_tmp_{counter}")
}

/// Scope frames keyed by algorithm identity.
#[derive(Debug, Default)]
pub struct AlgorithmScopeStack {
    contexts: HashMap<AlgorithmId, AlgorithmContext>,
}

impl AlgorithmScopeStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots the current list as `algorithm`'s restore point.
    ///
    /// Re-registering an already registered algorithm is a no-op.
    pub fn register(&mut self, algorithm: &AlgorithmId, lists: &NamedListRegistry) {
        if self.contexts.contains_key(algorithm) {
            return;
        }

        let parent = lists.current().map(str::to_string);
        debug!(%algorithm, parent = ?parent, "Registered algorithm");
        self.contexts.insert(algorithm.clone(), AlgorithmContext::new(parent));
    }

    /// Checks if an algorithm has a live context.
    pub fn is_registered(&self, algorithm: &AlgorithmId) -> bool {
        self.contexts.contains_key(algorithm)
    }

    /// The context of a registered algorithm.
    pub fn context(&self, algorithm: &AlgorithmId) -> Option<&AlgorithmContext> {
        self.contexts.get(algorithm)
    }

    /// Returns the number of live contexts.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Returns true if no algorithm is registered.
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Name of the list that was current when `algorithm` started.
    ///
    /// Unregistered algorithms see the current list.
    pub fn algorithm_input_list_name<'a>(
        &'a self,
        algorithm: &AlgorithmId,
        lists: &'a NamedListRegistry,
    ) -> ObjectResult<&'a str> {
        match self.contexts.get(algorithm) {
            Some(context) => context
                .parent_list_name
                .as_deref()
                .ok_or(ObjectError::NotInitialized),
            None => lists.current_list_name(),
        }
    }

    /// The list that was current when `algorithm` started, and its name.
    pub fn algorithm_input_list<'a>(
        &'a self,
        algorithm: &AlgorithmId,
        lists: &'a NamedListRegistry,
    ) -> ObjectResult<(&'a ObjectList, &'a str)> {
        let name = self.algorithm_input_list_name(algorithm, lists)?;
        Ok((lists.get_list(name)?, name))
    }

    /// Stores `objects` as a new temporary list owned by `algorithm` and makes it current.
    ///
    /// # Errors
    /// - `InvalidParameter` if `objects` is empty
    /// - `AlreadyPresent` if the generated name collides with an existing list
    pub fn create_temporary_list_and_set_current(
        &mut self,
        algorithm: &AlgorithmId,
        objects: impl IntoIterator<Item = Uid>,
        lists: &mut NamedListRegistry,
    ) -> ObjectResult<String> {
        let list: ObjectList = objects.into_iter().collect();

        if list.is_empty() {
            return Err(ObjectError::InvalidParameter(format!(
                "algorithm {algorithm} requested an empty temporary list"
            )));
        }

        self.register(algorithm, lists);
        let context = self
            .contexts
            .get_mut(algorithm)
            .ok_or_else(|| ObjectError::Failure(format!("algorithm {algorithm} not registered")))?;

        let name = temporary_list_name(algorithm, context.lists_created);
        context.lists_created += 1;

        lists.insert_temporary_list(name.clone(), list)?;
        lists.set_current(&name)?;
        context.temporary_list_names.insert(name.clone());

        debug!(%algorithm, list = %name, "Created temporary list");
        Ok(name)
    }

    /// Points the current list back at `algorithm`'s input list.
    ///
    /// Temporary lists are kept. Unregistered algorithms leave the current list unchanged.
    pub fn reset_current_list_to_algorithm_input(
        &self,
        algorithm: &AlgorithmId,
        lists: &mut NamedListRegistry,
    ) -> ObjectResult<()> {
        let Some(context) = self.contexts.get(algorithm) else {
            return Ok(());
        };

        match context.parent_list_name.as_deref() {
            Some(parent) => lists.set_current(parent),
            None => {
                lists.unset_current();
                Ok(())
            }
        }
    }

    /// Makes an existing list both the current list and `algorithm`'s input list.
    pub fn replace_current_and_algorithm_input_lists(
        &mut self,
        algorithm: &AlgorithmId,
        name: &str,
        lists: &mut NamedListRegistry,
    ) -> ObjectResult<()> {
        lists.set_current(name)?;
        self.register(algorithm, lists);

        if let Some(context) = self.contexts.get_mut(algorithm) {
            context.parent_list_name = Some(name.to_string());
        }

        debug!(%algorithm, list = name, "Replaced current and algorithm input lists");
        Ok(())
    }

    /// Deletes `algorithm`'s temporary lists and restores its input list as current.
    ///
    /// With `is_finished` the context is removed; otherwise it survives with
    /// an empty temporary set and its counter preserved.
    ///
    /// # Errors
    /// - `NotFound` if the algorithm is not registered
    /// - `Failure` if the input list no longer exists (cleanup still completes)
    pub fn reset_algorithm_info(
        &mut self,
        algorithm: &AlgorithmId,
        is_finished: bool,
        lists: &mut NamedListRegistry,
    ) -> ObjectResult<()> {
        let context = self
            .contexts
            .get_mut(algorithm)
            .ok_or_else(|| ObjectError::NotFound(format!("algorithm {algorithm}")))?;

        for name in std::mem::take(&mut context.temporary_list_names) {
            if let Err(err) = lists.delete_list(&name) {
                warn!(%algorithm, list = %name, error = %err, "Temporary list already gone");
            }
        }

        let restored = match context.parent_list_name.clone() {
            Some(parent) => lists.set_current(&parent).map_err(|_| {
                lists.unset_current();
                ObjectError::Failure(format!(
                    "input list {parent} of algorithm {algorithm} no longer exists"
                ))
            }),
            None => {
                lists.unset_current();
                Ok(())
            }
        };

        if is_finished {
            self.contexts.remove(algorithm);
        }

        debug!(%algorithm, is_finished, "Reset algorithm info");
        restored
    }

    /// Drops every context without touching any list.
    pub fn clear(&mut self) {
        self.contexts.clear();
    }
}
