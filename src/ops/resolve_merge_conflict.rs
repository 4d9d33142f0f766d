//! Resolve or finalize a merge conflict on a node.

use crate::error::RepositoryError;
use crate::model::{ItemId, NodeId};
use crate::ops::{AffectedItems, Operation, OperationVisitor};

/// Resolve the merge conflict on `node_id` against the version
/// `version_id`.
///
/// `resolve_done` distinguishes the two resolution semantics: `false`
/// marks the conflict resolved (the version stays a merge candidate),
/// `true` marks it done and finalized.
#[derive(Debug)]
pub struct ResolveMergeConflict {
    node_id: NodeId,
    version_id: NodeId,
    resolve_done: bool,
    affected: AffectedItems,
}

impl ResolveMergeConflict {
    /// Create a resolve operation. Pure value construction — no
    /// collaborator is consulted and no I/O happens; versioning and
    /// node-type legality are checked at dispatch time.
    ///
    /// Both identifiers are registered as affected, in `[node, version]`
    /// order, for conflict detection in the surrounding batch.
    #[must_use]
    pub fn create(node_id: NodeId, version_id: NodeId, resolve_done: bool) -> Self {
        let mut affected = AffectedItems::new();
        affected.add(node_id.clone());
        affected.add(version_id.clone());
        Self {
            node_id,
            version_id,
            resolve_done,
            affected,
        }
    }

    /// The conflicted node.
    #[must_use]
    pub const fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    /// The version the conflict is resolved against.
    #[must_use]
    pub const fn version_id(&self) -> &NodeId {
        &self.version_id
    }

    /// True for "mark done/finalized", false for "mark resolved".
    #[must_use]
    pub const fn resolve_done(&self) -> bool {
        self.resolve_done
    }
}

impl Operation for ResolveMergeConflict {
    fn affected_item_ids(&self) -> &[ItemId] {
        self.affected.as_slice()
    }

    fn accept(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError> {
        visitor.visit_resolve_merge_conflict(self)
    }
}
