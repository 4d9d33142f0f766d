//! The operation model — immutable, typed pending mutations.
//!
//! Every pending change to the repository is one [`Operation`]: an
//! immutable command object created through a validating factory (never a
//! public constructor), carrying the ordered, duplicate-free set of item
//! identifiers it will touch. Dispatch is double dispatch — the driver
//! calls [`Operation::accept`], the operation calls back the one
//! [`OperationVisitor`] method for its concrete kind — so executing a batch
//! never needs a type test, and adding a kind is a compile error for every
//! visitor implementation until it handles the new method.
//!
//! Factories are the validation boundary: "can this object exist" fails
//! fast at creation time with no partial state, while "can this object's
//! effect be applied" is deferred to dispatch time against live repository
//! state.
//!
//! # Modules
//!
//! One file per concrete kind, mirroring the operation set of the SPI:
//! structure ([`add_node`], [`add_property`], [`set_property`],
//! [`remove_item`]), tree rearrangement ([`move_tree`], [`copy_tree`],
//! [`clone_tree`]), and versioning ([`versioning`],
//! [`resolve_merge_conflict`]).

pub mod add_node;
pub mod add_property;
pub mod clone_tree;
pub mod copy_tree;
pub mod move_tree;
pub mod remove_item;
pub mod resolve_merge_conflict;
pub mod set_property;
pub mod versioning;

use std::fmt;

pub use add_node::AddNode;
pub use add_property::AddProperty;
pub use clone_tree::CloneTree;
pub use copy_tree::CopyTree;
pub use move_tree::MoveTree;
pub use remove_item::RemoveItem;
pub use resolve_merge_conflict::ResolveMergeConflict;
pub use set_property::SetPropertyValue;
pub use versioning::{Checkin, Checkout};

use crate::error::RepositoryError;
use crate::model::{ItemId, RepoPath};

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// An immutable description of one pending mutation.
///
/// Implementations are value objects: every payload field and the affected
/// set are fixed when the factory returns and never change afterwards,
/// which makes operations safe to share read-only across threads.
pub trait Operation: fmt::Debug + Send + Sync {
    /// The identifiers this operation will read or mutate, in registration
    /// order, duplicate-free. Side-effect-free; two calls return the same
    /// slice.
    ///
    /// Path-based operations (move/copy/clone) return an empty slice —
    /// their targets are resolved to identifiers by the backend, not here.
    fn affected_item_ids(&self) -> &[ItemId];

    /// Dispatch to the visitor method for this concrete kind.
    ///
    /// # Errors
    /// The union of every checked failure kind any kind can raise; each
    /// visitor method documents the narrower set it actually produces.
    fn accept(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError>;
}

// ---------------------------------------------------------------------------
// OperationVisitor
// ---------------------------------------------------------------------------

/// One handler per concrete operation kind.
///
/// The execution layer supplies one implementation per strategy (transient
/// local apply, remote SPI submit, recording test double, ...). All methods
/// are mandatory: a new operation kind cannot be added without every
/// visitor implementation handling it.
pub trait OperationVisitor {
    /// Handle [`AddNode`]. May raise constraint-violation, item-exists,
    /// no-such-node-type, access-denied, version, or lock failures.
    fn visit_add_node(&mut self, op: &AddNode) -> Result<(), RepositoryError>;

    /// Handle [`AddProperty`]. May raise constraint-violation, item-exists,
    /// access-denied, version, or lock failures.
    fn visit_add_property(&mut self, op: &AddProperty) -> Result<(), RepositoryError>;

    /// Handle [`SetPropertyValue`]. May raise constraint-violation,
    /// access-denied, version, or lock failures.
    fn visit_set_property_value(&mut self, op: &SetPropertyValue)
    -> Result<(), RepositoryError>;

    /// Handle [`RemoveItem`]. May raise constraint-violation,
    /// access-denied, version, or lock failures.
    fn visit_remove_item(&mut self, op: &RemoveItem) -> Result<(), RepositoryError>;

    /// Handle [`MoveTree`]. May raise constraint-violation, item-exists,
    /// access-denied, version, or lock failures.
    fn visit_move_tree(&mut self, op: &MoveTree) -> Result<(), RepositoryError>;

    /// Handle [`CopyTree`]. In addition to the [`Self::visit_move_tree`]
    /// set, may raise workspace-not-found — copying crosses workspaces.
    fn visit_copy_tree(&mut self, op: &CopyTree) -> Result<(), RepositoryError>;

    /// Handle [`CloneTree`]. In addition to the [`Self::visit_move_tree`]
    /// set, may raise workspace-not-found — cloning crosses workspaces.
    fn visit_clone_tree(&mut self, op: &CloneTree) -> Result<(), RepositoryError>;

    /// Handle [`ResolveMergeConflict`]. In addition to the common set, may
    /// raise no-such-node-type — resolving a conflict can re-evaluate node
    /// type applicability.
    fn visit_resolve_merge_conflict(
        &mut self,
        op: &ResolveMergeConflict,
    ) -> Result<(), RepositoryError>;

    /// Handle [`Checkout`]. May raise version, lock, or access-denied
    /// failures.
    fn visit_checkout(&mut self, op: &Checkout) -> Result<(), RepositoryError>;

    /// Handle [`Checkin`]. May raise version, lock, or access-denied
    /// failures.
    fn visit_checkin(&mut self, op: &Checkin) -> Result<(), RepositoryError>;
}

// ---------------------------------------------------------------------------
// AffectedItems
// ---------------------------------------------------------------------------

/// Ordered, duplicate-free accumulator for affected item identifiers.
///
/// Only operation constructors hold one of these mutably; once the factory
/// returns, the set is frozen by construction — no mutator is reachable.
/// Registering an identifier twice is defined behavior: the duplicate is
/// ignored and first-occurrence order is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct AffectedItems {
    ids: Vec<ItemId>,
}

impl AffectedItems {
    pub(crate) const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    pub(crate) fn add(&mut self, id: impl Into<ItemId>) {
        let id = id.into();
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    pub(crate) fn as_slice(&self) -> &[ItemId] {
        &self.ids
    }
}

// ---------------------------------------------------------------------------
// Shared tree-argument preconditions
// ---------------------------------------------------------------------------

/// Argument checks shared by the move/copy/clone factories: the root is
/// never a legal source or destination, and the destination must not sit at
/// or below the source.
pub(crate) fn check_tree_args(src: &RepoPath, dest: &RepoPath) -> Result<(), RepositoryError> {
    if src.is_root() {
        return Err(RepositoryError::InvalidPath {
            path: src.to_string(),
            reason: "the root cannot be the source of a tree operation".to_owned(),
        });
    }
    if dest.is_root() {
        return Err(RepositoryError::InvalidPath {
            path: dest.to_string(),
            reason: "the root cannot be the destination of a tree operation".to_owned(),
        });
    }
    if src == dest {
        return Err(RepositoryError::InvalidPath {
            path: dest.to_string(),
            reason: "source and destination are the same path".to_owned(),
        });
    }
    if src.is_ancestor_of(dest) {
        return Err(RepositoryError::InvalidPath {
            path: dest.to_string(),
            reason: format!("destination lies below the source '{src}'"),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
