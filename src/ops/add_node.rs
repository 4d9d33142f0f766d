//! Add a child node below an existing parent.

use crate::error::RepositoryError;
use crate::model::{ItemId, Name, NodeId};
use crate::ops::{AffectedItems, Operation, OperationVisitor};
use crate::validator::{CheckOptions, ItemStateValidator};

/// Add a node named `name` below `parent_id`, optionally with an explicit
/// primary node type (otherwise the parent's definition picks one).
#[derive(Debug)]
pub struct AddNode {
    parent_id: NodeId,
    name: Name,
    primary_type: Option<Name>,
    affected: AffectedItems,
}

impl AddNode {
    /// Create an add-node operation.
    ///
    /// # Errors
    /// Validation failure kinds from `validator` (constraint-violation,
    /// item-exists, no-such-node-type, access-denied, version, lock),
    /// surfaced unchanged.
    pub fn create(
        parent_id: NodeId,
        name: Name,
        primary_type: Option<Name>,
        validator: &dyn ItemStateValidator,
    ) -> Result<Self, RepositoryError> {
        validator.check_add_node(&parent_id, &name, CheckOptions::ALL)?;
        let mut affected = AffectedItems::new();
        affected.add(parent_id.clone());
        Ok(Self {
            parent_id,
            name,
            primary_type,
            affected,
        })
    }

    /// The parent the node is added below.
    #[must_use]
    pub const fn parent_id(&self) -> &NodeId {
        &self.parent_id
    }

    /// The new node's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// The explicit primary node type, if one was requested.
    #[must_use]
    pub const fn primary_type(&self) -> Option<&Name> {
        self.primary_type.as_ref()
    }
}

impl Operation for AddNode {
    fn affected_item_ids(&self) -> &[ItemId] {
        self.affected.as_slice()
    }

    fn accept(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError> {
        visitor.visit_add_node(self)
    }
}
