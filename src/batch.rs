//! Pending-change batch and the dispatch loop.
//!
//! A [`Batch`] exclusively owns the operations queued against one session.
//! Operations are applied in the order they were added — later operations
//! may depend on the effects of earlier ones (e.g. a resolve referencing a
//! node just cloned) — so dispatch is single-threaded per batch and
//! fail-fast: the first error stops the loop and is returned unchanged.
//! Rolling back or discarding the rest of the batch is the surrounding
//! session's job; the core has no partial-commit primitive.

use tracing::debug;

use crate::error::RepositoryError;
use crate::model::ItemId;
use crate::ops::{Operation, OperationVisitor};

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

/// An ordered collection of pending operations, submitted together.
#[derive(Debug, Default)]
pub struct Batch {
    ops: Vec<Box<dyn Operation>>,
}

impl Batch {
    /// An empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Queue an operation. Order is significant and preserved.
    pub fn push(&mut self, op: impl Operation + 'static) {
        self.ops.push(Box::new(op));
    }

    /// Number of queued operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The queued operations, in insertion order.
    pub fn operations(&self) -> impl Iterator<Item = &dyn Operation> {
        self.ops.iter().map(|op| op.as_ref())
    }

    /// The union of every queued operation's affected identifiers, in
    /// first-occurrence order, duplicate-free.
    ///
    /// After a successful commit this is the set of cache entries the
    /// transient layer must invalidate.
    #[must_use]
    pub fn affected_item_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = Vec::new();
        for op in &self.ops {
            for id in op.affected_item_ids() {
                if !ids.contains(id) {
                    ids.push(id.clone());
                }
            }
        }
        ids
    }

    /// True if the two batches declare a common affected identifier — a
    /// write-write conflict between concurrently queued batches.
    ///
    /// Overlap *within* one batch is not a conflict: operations in the
    /// same batch apply in order and may deliberately touch the same item.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        let mine = self.affected_item_ids();
        other
            .affected_item_ids()
            .iter()
            .any(|id| mine.contains(id))
    }

    /// Dispatch every queued operation to `visitor`, in insertion order.
    ///
    /// # Errors
    /// The first failure any visitor method raises, unchanged; subsequent
    /// operations are not dispatched.
    pub fn apply(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError> {
        for (index, op) in self.ops.iter().enumerate() {
            debug!(index, total = self.ops.len(), op = ?op, "dispatching operation");
            op.accept(&mut *visitor)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeId;
    use crate::ops::{Checkin, Checkout, ResolveMergeConflict};
    use crate::testutil::RecordingVisitor;

    fn node(s: &str) -> NodeId {
        NodeId::new(s).unwrap()
    }

    fn sample_batch() -> Batch {
        let mut batch = Batch::new();
        batch.push(Checkout::create(node("n1")));
        batch.push(ResolveMergeConflict::create(node("n1"), node("v1"), false));
        batch.push(Checkin::create(node("n1")));
        batch
    }

    #[test]
    fn empty_batch_applies_cleanly() {
        let batch = Batch::new();
        assert!(batch.is_empty());
        let mut visitor = RecordingVisitor::default();
        batch.apply(&mut visitor).unwrap();
        assert!(visitor.calls.is_empty());
    }

    #[test]
    fn apply_preserves_insertion_order() {
        let batch = sample_batch();
        assert_eq!(batch.len(), 3);
        let mut visitor = RecordingVisitor::default();
        batch.apply(&mut visitor).unwrap();
        assert_eq!(
            visitor.calls,
            ["checkout", "resolve_merge_conflict", "checkin"]
        );
    }

    #[test]
    fn affected_union_deduplicates_across_ops() {
        let batch = sample_batch();
        // n1 appears in all three ops, v1 once.
        assert_eq!(
            batch.affected_item_ids(),
            vec![ItemId::from(node("n1")), ItemId::from(node("v1"))]
        );
    }

    #[test]
    fn overlap_within_a_batch_is_not_a_conflict() {
        // sample_batch touches n1 three times; that's legal by design.
        let batch = sample_batch();
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn disjoint_batches_do_not_conflict() {
        let a = sample_batch();
        let mut b = Batch::new();
        b.push(Checkout::create(node("n9")));
        assert!(!a.conflicts_with(&b));
        assert!(!b.conflicts_with(&a));
    }

    #[test]
    fn overlapping_batches_conflict_symmetrically() {
        let a = sample_batch();
        let mut b = Batch::new();
        b.push(Checkout::create(node("v1")));
        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
    }

    #[test]
    fn apply_fails_fast_on_first_error() {
        struct FailOnResolve {
            inner: RecordingVisitor,
        }
        impl OperationVisitor for FailOnResolve {
            fn visit_add_node(
                &mut self,
                op: &crate::ops::AddNode,
            ) -> Result<(), RepositoryError> {
                self.inner.visit_add_node(op)
            }
            fn visit_add_property(
                &mut self,
                op: &crate::ops::AddProperty,
            ) -> Result<(), RepositoryError> {
                self.inner.visit_add_property(op)
            }
            fn visit_set_property_value(
                &mut self,
                op: &crate::ops::SetPropertyValue,
            ) -> Result<(), RepositoryError> {
                self.inner.visit_set_property_value(op)
            }
            fn visit_remove_item(
                &mut self,
                op: &crate::ops::RemoveItem,
            ) -> Result<(), RepositoryError> {
                self.inner.visit_remove_item(op)
            }
            fn visit_move_tree(
                &mut self,
                op: &crate::ops::MoveTree,
            ) -> Result<(), RepositoryError> {
                self.inner.visit_move_tree(op)
            }
            fn visit_copy_tree(
                &mut self,
                op: &crate::ops::CopyTree,
            ) -> Result<(), RepositoryError> {
                self.inner.visit_copy_tree(op)
            }
            fn visit_clone_tree(
                &mut self,
                op: &crate::ops::CloneTree,
            ) -> Result<(), RepositoryError> {
                self.inner.visit_clone_tree(op)
            }
            fn visit_resolve_merge_conflict(
                &mut self,
                _op: &ResolveMergeConflict,
            ) -> Result<(), RepositoryError> {
                Err(RepositoryError::Version {
                    detail: "no merge conflict pending".to_owned(),
                })
            }
            fn visit_checkout(&mut self, op: &Checkout) -> Result<(), RepositoryError> {
                self.inner.visit_checkout(op)
            }
            fn visit_checkin(&mut self, op: &Checkin) -> Result<(), RepositoryError> {
                self.inner.visit_checkin(op)
            }
        }

        let batch = sample_batch();
        let mut visitor = FailOnResolve {
            inner: RecordingVisitor::default(),
        };
        let err = batch.apply(&mut visitor).unwrap_err();
        assert!(matches!(err, RepositoryError::Version { .. }));
        // The checkout before the failure ran; the checkin after did not.
        assert_eq!(visitor.inner.calls, ["checkout"]);
    }
}
