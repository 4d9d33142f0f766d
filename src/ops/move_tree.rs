//! Move a subtree within the current workspace.

use crate::error::RepositoryError;
use crate::model::{ItemId, RepoPath};
use crate::ops::{AffectedItems, Operation, OperationVisitor, check_tree_args};
use crate::validator::{CheckOptions, ItemStateValidator};

/// Move the subtree at `src_path` to `dest_path`, same workspace.
#[derive(Debug)]
pub struct MoveTree {
    src_path: RepoPath,
    dest_path: RepoPath,
    affected: AffectedItems,
}

impl MoveTree {
    /// Create a move operation. Same path preconditions as the copy
    /// family; no workspace check because a move never leaves the current
    /// workspace.
    ///
    /// # Errors
    /// [`RepositoryError::InvalidPath`] for a structurally illegal path
    /// pair; any validation failure kind from `validator`, surfaced
    /// unchanged.
    pub fn create(
        src_path: RepoPath,
        dest_path: RepoPath,
        validator: &dyn ItemStateValidator,
    ) -> Result<Self, RepositoryError> {
        check_tree_args(&src_path, &dest_path)?;
        validator.check_copy(&src_path, &dest_path, CheckOptions::ALL)?;
        Ok(Self {
            src_path,
            dest_path,
            affected: AffectedItems::new(),
        })
    }

    /// The current path of the subtree.
    #[must_use]
    pub const fn src_path(&self) -> &RepoPath {
        &self.src_path
    }

    /// Where the subtree moves to.
    #[must_use]
    pub const fn dest_path(&self) -> &RepoPath {
        &self.dest_path
    }
}

impl Operation for MoveTree {
    fn affected_item_ids(&self) -> &[ItemId] {
        self.affected.as_slice()
    }

    fn accept(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError> {
        visitor.visit_move_tree(self)
    }
}
