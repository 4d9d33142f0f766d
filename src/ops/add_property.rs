//! Add a property to an existing node.

use crate::error::RepositoryError;
use crate::model::{ItemId, Name, NodeId};
use crate::ops::{AffectedItems, Operation, OperationVisitor};

/// Add a property named `name` with `value` on the node `parent_id`.
///
/// Whether a property of that name already exists is a dispatch-time
/// question (the transient layer may legally see it as a set instead);
/// construction is pure.
#[derive(Debug)]
pub struct AddProperty {
    parent_id: NodeId,
    name: Name,
    value: String,
    affected: AffectedItems,
}

impl AddProperty {
    /// Create an add-property operation. Pure value construction.
    #[must_use]
    pub fn create(parent_id: NodeId, name: Name, value: String) -> Self {
        let mut affected = AffectedItems::new();
        affected.add(parent_id.clone());
        Self {
            parent_id,
            name,
            value,
            affected,
        }
    }

    /// The node gaining the property.
    #[must_use]
    pub const fn parent_id(&self) -> &NodeId {
        &self.parent_id
    }

    /// The property's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// The property's value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Operation for AddProperty {
    fn affected_item_ids(&self) -> &[ItemId] {
        self.affected.as_slice()
    }

    fn accept(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError> {
        visitor.visit_add_property(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingVisitor;

    #[test]
    fn affects_exactly_the_parent() {
        let parent = NodeId::new("p1").unwrap();
        let op = AddProperty::create(parent.clone(), Name::new("title").unwrap(), "x".to_owned());
        assert_eq!(op.affected_item_ids(), &[ItemId::from(parent)]);
        assert_eq!(op.value(), "x");
    }

    #[test]
    fn accept_dispatches_to_add_property_method() {
        let op = AddProperty::create(
            NodeId::new("p1").unwrap(),
            Name::new("title").unwrap(),
            "x".to_owned(),
        );
        let mut visitor = RecordingVisitor::default();
        op.accept(&mut visitor).unwrap();
        assert_eq!(visitor.calls, ["add_property"]);
    }
}
