//! Remove a node or property.

use crate::error::RepositoryError;
use crate::model::ItemId;
use crate::ops::{AffectedItems, Operation, OperationVisitor};
use crate::validator::{CheckOptions, ItemStateValidator};

/// Remove the item `item_id` (for a node: the whole subtree below it).
#[derive(Debug)]
pub struct RemoveItem {
    item_id: ItemId,
    affected: AffectedItems,
}

impl RemoveItem {
    /// Create a remove operation.
    ///
    /// # Errors
    /// Validation failure kinds from `validator` (constraint-violation,
    /// access-denied, version, lock), surfaced unchanged.
    pub fn create(
        item_id: ItemId,
        validator: &dyn ItemStateValidator,
    ) -> Result<Self, RepositoryError> {
        validator.check_remove_item(&item_id, CheckOptions::ALL)?;
        let mut affected = AffectedItems::new();
        affected.add(item_id.clone());
        Ok(Self { item_id, affected })
    }

    /// The item being removed.
    #[must_use]
    pub const fn item_id(&self) -> &ItemId {
        &self.item_id
    }
}

impl Operation for RemoveItem {
    fn affected_item_ids(&self) -> &[ItemId] {
        self.affected.as_slice()
    }

    fn accept(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError> {
        visitor.visit_remove_item(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeId;
    use crate::testutil::{ApproveAll, RecordingVisitor};

    fn item(s: &str) -> ItemId {
        ItemId::from(NodeId::new(s).unwrap())
    }

    #[test]
    fn affects_exactly_the_item() {
        let op = RemoveItem::create(item("n1"), &ApproveAll).unwrap();
        assert_eq!(op.affected_item_ids(), &[item("n1")]);
        assert_eq!(op.item_id(), &item("n1"));
    }

    #[test]
    fn validator_rejection_surfaces_unchanged() {
        let validator = crate::testutil::RejectRemoves {
            error: RepositoryError::Version {
                detail: "node is checked in".to_owned(),
            },
        };
        let err = RemoveItem::create(item("n1"), &validator).unwrap_err();
        assert!(matches!(err, RepositoryError::Version { .. }));
    }

    #[test]
    fn accept_dispatches_to_remove_method() {
        let op = RemoveItem::create(item("n1"), &ApproveAll).unwrap();
        let mut visitor = RecordingVisitor::default();
        op.accept(&mut visitor).unwrap();
        assert_eq!(visitor.calls, ["remove_item"]);
    }
}
