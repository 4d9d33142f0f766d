//! Clone a subtree from another workspace.

use crate::error::RepositoryError;
use crate::model::{ItemId, RepoPath, WorkspaceName};
use crate::ops::{AffectedItems, Operation, OperationVisitor, check_tree_args};
use crate::provider::ManagerProvider;
use crate::validator::{CheckOptions, ItemStateValidator};

/// Clone the subtree at `src_path` in the workspace `src_workspace` to
/// `dest_path` in the current workspace, preserving item identity.
///
/// Because clones preserve identity, an item with the same identity may
/// already exist in the destination workspace. `remove_existing` selects
/// the conflict policy: `true` removes the occupying item, `false` makes
/// the collision an [`RepositoryError::ItemExists`] failure at commit time.
#[derive(Debug)]
pub struct CloneTree {
    src_path: RepoPath,
    dest_path: RepoPath,
    src_workspace: WorkspaceName,
    remove_existing: bool,
    affected: AffectedItems,
}

impl CloneTree {
    /// Create a clone operation.
    ///
    /// Path legality is checked here (the root is not a legal endpoint,
    /// the destination may not sit below the source); workspace access is
    /// checked against the provider's permission oracle; semantic legality
    /// of the destination is delegated to `validator`.
    ///
    /// # Errors
    /// [`RepositoryError::InvalidPath`] for a structurally illegal path
    /// pair; [`RepositoryError::WorkspaceNotFound`] if `src_workspace`
    /// does not exist; [`RepositoryError::AccessDenied`] if the subject
    /// may not read it; any validation failure kind from `validator`
    /// (item-exists, constraint-violation, access-denied, version, lock)
    /// surfaced unchanged.
    pub fn create(
        src_path: RepoPath,
        dest_path: RepoPath,
        src_workspace: WorkspaceName,
        remove_existing: bool,
        provider: &dyn ManagerProvider,
        validator: &dyn ItemStateValidator,
    ) -> Result<Self, RepositoryError> {
        check_tree_args(&src_path, &dest_path)?;
        if !provider.access_manager().can_access(&src_workspace)? {
            return Err(RepositoryError::AccessDenied {
                action: "read".to_owned(),
                target: src_workspace.to_string(),
            });
        }
        // With remove_existing the occupying item is removed instead of
        // conflicting, so the collision check is skipped at creation time.
        let options = if remove_existing {
            CheckOptions::ACCESS
                | CheckOptions::LOCK
                | CheckOptions::VERSIONING
                | CheckOptions::CONSTRAINTS
        } else {
            CheckOptions::ALL
        };
        validator.check_copy(&src_path, &dest_path, options)?;
        Ok(Self {
            src_path,
            dest_path,
            src_workspace,
            remove_existing,
            affected: AffectedItems::new(),
        })
    }

    /// The source path, in the source workspace.
    #[must_use]
    pub const fn src_path(&self) -> &RepoPath {
        &self.src_path
    }

    /// The destination path, in the current workspace.
    #[must_use]
    pub const fn dest_path(&self) -> &RepoPath {
        &self.dest_path
    }

    /// The workspace the subtree is cloned from.
    #[must_use]
    pub const fn src_workspace(&self) -> &WorkspaceName {
        &self.src_workspace
    }

    /// Whether an item occupying the destination identity is removed
    /// rather than treated as a conflict.
    #[must_use]
    pub const fn is_remove_existing(&self) -> bool {
        self.remove_existing
    }
}

impl Operation for CloneTree {
    fn affected_item_ids(&self) -> &[ItemId] {
        self.affected.as_slice()
    }

    fn accept(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError> {
        visitor.visit_clone_tree(self)
    }
}
