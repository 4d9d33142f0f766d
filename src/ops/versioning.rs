//! Versioning operations: checkout and checkin.
//!
//! Both are pure value constructions — whether the node is versionable,
//! and whether its current checked-in/checked-out state admits the change,
//! is only decidable at dispatch time against live repository state.

use crate::error::RepositoryError;
use crate::model::{ItemId, NodeId};
use crate::ops::{AffectedItems, Operation, OperationVisitor};

// ---------------------------------------------------------------------------
// Checkout
// ---------------------------------------------------------------------------

/// Check the versionable node `node_id` out, making it writable.
#[derive(Debug)]
pub struct Checkout {
    node_id: NodeId,
    affected: AffectedItems,
}

impl Checkout {
    /// Create a checkout operation.
    #[must_use]
    pub fn create(node_id: NodeId) -> Self {
        let mut affected = AffectedItems::new();
        affected.add(node_id.clone());
        Self { node_id, affected }
    }

    /// The node being checked out.
    #[must_use]
    pub const fn node_id(&self) -> &NodeId {
        &self.node_id
    }
}

impl Operation for Checkout {
    fn affected_item_ids(&self) -> &[ItemId] {
        self.affected.as_slice()
    }

    fn accept(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError> {
        visitor.visit_checkout(self)
    }
}

// ---------------------------------------------------------------------------
// Checkin
// ---------------------------------------------------------------------------

/// Check the versionable node `node_id` in, creating a new version.
#[derive(Debug)]
pub struct Checkin {
    node_id: NodeId,
    affected: AffectedItems,
}

impl Checkin {
    /// Create a checkin operation.
    #[must_use]
    pub fn create(node_id: NodeId) -> Self {
        let mut affected = AffectedItems::new();
        affected.add(node_id.clone());
        Self { node_id, affected }
    }

    /// The node being checked in.
    #[must_use]
    pub const fn node_id(&self) -> &NodeId {
        &self.node_id
    }
}

impl Operation for Checkin {
    fn affected_item_ids(&self) -> &[ItemId] {
        self.affected.as_slice()
    }

    fn accept(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError> {
        visitor.visit_checkin(self)
    }
}
