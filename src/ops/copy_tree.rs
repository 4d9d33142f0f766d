//! Copy a subtree, within or across workspaces.

use crate::error::RepositoryError;
use crate::model::{ItemId, RepoPath, WorkspaceName};
use crate::ops::{AffectedItems, Operation, OperationVisitor, check_tree_args};
use crate::provider::ManagerProvider;
use crate::validator::{CheckOptions, ItemStateValidator};

/// Copy the subtree at `src_path` in `src_workspace` to `dest_path` in the
/// current workspace.
///
/// Unlike [`CloneTree`](crate::ops::CloneTree), a copy mints fresh item
/// identities, so it never collides with an existing identity and has no
/// `remove_existing` policy.
#[derive(Debug)]
pub struct CopyTree {
    src_path: RepoPath,
    dest_path: RepoPath,
    src_workspace: WorkspaceName,
    affected: AffectedItems,
}

impl CopyTree {
    /// Create a copy operation. `src_workspace` may name the current
    /// workspace (an intra-workspace copy); access to it is checked either
    /// way.
    ///
    /// # Errors
    /// [`RepositoryError::InvalidPath`] for a structurally illegal path
    /// pair; [`RepositoryError::WorkspaceNotFound`] if `src_workspace`
    /// does not exist; [`RepositoryError::AccessDenied`] if the subject
    /// may not read it; any validation failure kind from `validator`,
    /// surfaced unchanged.
    pub fn create(
        src_path: RepoPath,
        dest_path: RepoPath,
        src_workspace: WorkspaceName,
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
        validator.check_copy(&src_path, &dest_path, CheckOptions::ALL)?;
        Ok(Self {
            src_path,
            dest_path,
            src_workspace,
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

    /// The workspace the subtree is copied from.
    #[must_use]
    pub const fn src_workspace(&self) -> &WorkspaceName {
        &self.src_workspace
    }
}

impl Operation for CopyTree {
    fn affected_item_ids(&self) -> &[ItemId] {
        self.affected.as_slice()
    }

    fn accept(&self, visitor: &mut dyn OperationVisitor) -> Result<(), RepositoryError> {
        visitor.visit_copy_tree(self)
    }
}
