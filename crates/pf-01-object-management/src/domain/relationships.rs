//! # Relationship Graph
//!
//! Two-phase, id-based association between objects of one kind.
//!
//! 1. Edges are recorded by `Uid` while objects are still being ingested;
//!    nothing checks whether either endpoint exists.
//! 2. `associate_all()` resolves every edge against the registry once
//!    ingestion is complete. Edges with a missing endpoint are skipped.

use std::collections::BTreeMap;

use shared_types::{RelationshipDescriptor, RelationshipKind, Uid};
use tracing::debug;

use super::entities::{ManagedObject, Relatable};
use super::registry::ObjectRegistry;

/// Outcome of one resolution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssociationSummary {
    /// Edges applied to live objects.
    pub applied: usize,
    /// Edges skipped because an endpoint was missing.
    pub skipped: usize,
}

/// Id-keyed multimaps of declared edges.
#[derive(Debug, Default)]
pub struct RelationshipGraph {
    parent_daughter: BTreeMap<Uid, Vec<Uid>>,
    sibling: BTreeMap<Uid, Vec<Uid>>,
}

impl RelationshipGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `parent -> daughter`.
    pub fn set_parent_daughter(&mut self, parent: Uid, daughter: Uid) {
        self.parent_daughter.entry(parent).or_default().push(daughter);
    }

    /// Records `first <-> second`.
    pub fn set_sibling(&mut self, first: Uid, second: Uid) {
        self.sibling.entry(first).or_default().push(second);
    }

    /// Records an edge from an ingestion descriptor.
    pub fn record(&mut self, descriptor: RelationshipDescriptor) {
        match descriptor.kind {
            RelationshipKind::ParentDaughter => {
                self.set_parent_daughter(descriptor.from, descriptor.to)
            }
            RelationshipKind::Sibling => self.set_sibling(descriptor.from, descriptor.to),
        }
    }

    /// Returns the number of recorded edges.
    pub fn edge_count(&self) -> usize {
        self.parent_daughter.values().map(Vec::len).sum::<usize>()
            + self.sibling.values().map(Vec::len).sum::<usize>()
    }

    /// Returns true if no edge is recorded.
    pub fn is_empty(&self) -> bool {
        self.parent_daughter.is_empty() && self.sibling.is_empty()
    }

    /// Applies every recorded edge whose endpoints both exist in `registry`.
    pub fn associate_all<T>(&self, registry: &mut ObjectRegistry<T>) -> AssociationSummary
    where
        T: ManagedObject + Relatable,
    {
        let mut summary = AssociationSummary::default();

        for (&parent, daughters) in &self.parent_daughter {
            for &daughter in daughters {
                if Self::apply(registry, parent, daughter, RelationshipKind::ParentDaughter) {
                    summary.applied += 1;
                } else {
                    summary.skipped += 1;
                }
            }
        }

        for (&first, others) in &self.sibling {
            for &second in others {
                if Self::apply(registry, first, second, RelationshipKind::Sibling) {
                    summary.applied += 1;
                } else {
                    summary.skipped += 1;
                }
            }
        }

        debug!(
            kind = T::KIND,
            applied = summary.applied,
            skipped = summary.skipped,
            "Resolved relationships"
        );
        summary
    }

    fn apply<T>(registry: &mut ObjectRegistry<T>, from: Uid, to: Uid, kind: RelationshipKind) -> bool
    where
        T: ManagedObject + Relatable,
    {
        if from == to || !registry.contains(from) || !registry.contains(to) {
            debug!(%from, %to, ?kind, "Skipping unresolvable relationship");
            return false;
        }

        match kind {
            RelationshipKind::ParentDaughter => {
                if let Some(parent) = registry.get_mut(from) {
                    parent.add_daughter(to);
                }
                if let Some(daughter) = registry.get_mut(to) {
                    daughter.add_parent(from);
                }
            }
            RelationshipKind::Sibling => {
                if let Some(first) = registry.get_mut(from) {
                    first.add_sibling(to);
                }
                if let Some(second) = registry.get_mut(to) {
                    second.add_sibling(from);
                }
            }
        }
        true
    }

    /// Drops every recorded edge.
    pub fn clear(&mut self) {
        self.parent_daughter.clear();
        self.sibling.clear();
    }
}
