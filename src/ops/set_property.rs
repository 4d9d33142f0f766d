//! Change the value of an existing property.

use crate::error::RepositoryError;
use crate::model::{ItemId, PropertyId};
use crate::ops::{AffectedItems, Operation, OperationVisitor};

/// Set the property `property_id` to `value`.
#[derive(Debug)]
pub struct SetPropertyValue {
    property_id: PropertyId,
    value: String,
    affected: AffectedItems,
}

impl SetPropertyValue {
    /// Create a set-property operation. Pure value construction; whether
    /// the property exists and is writable is checked at dispatch time.
    #[must_use]
    pub fn create(property_id: PropertyId, value: String) -> Self {
        let mut affected = AffectedItems::new();
        affected.add(property_id.clone());
        Self {
            property_id,
            value,
            affected,
        }
    }

    /// The property being set.
    #[must_use]
    pub const fn property_id(&self) -> &PropertyId {
        &self.property_id
    }

    /// The new value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Operation for SetPropertyValue {
    fn affected_item_ids(&self) -> &[ItemId] {
        self.affected.as_slice()
    }

    fn accept(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError> {
        visitor.visit_set_property_value(self)
    }
}
