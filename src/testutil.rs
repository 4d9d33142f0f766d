//! Shared unit-test doubles: a recording visitor, a permissive validator,
//! selectively failing validators, and a configurable permission oracle
//! bound behind a [`ManagerProvider`].

use std::collections::BTreeSet;

use crate::error::RepositoryError;
use crate::model::{ItemId, Name, NodeId, RelPath, RepoPath, WorkspaceName};
use crate::ops::{
    AddNode, AddProperty, Checkin, Checkout, CloneTree, CopyTree, MoveTree, OperationVisitor,
    RemoveItem, ResolveMergeConflict, SetPropertyValue,
};
use crate::provider::ManagerProvider;
use crate::security::{AccessManager, Action};
use crate::validator::{CheckOptions, ItemStateValidator};

// ---------------------------------------------------------------------------
// RecordingVisitor
// ---------------------------------------------------------------------------

/// Records which visit method fired, in order. Every method succeeds.
#[derive(Debug, Default)]
pub(crate) struct RecordingVisitor {
    pub(crate) calls: Vec<&'static str>,
}

impl OperationVisitor for RecordingVisitor {
    fn visit_add_node(&mut self, _op: &AddNode) -> Result<(), RepositoryError> {
        self.calls.push("add_node");
        Ok(())
    }

    fn visit_add_property(&mut self, _op: &AddProperty) -> Result<(), RepositoryError> {
        self.calls.push("add_property");
        Ok(())
    }

    fn visit_set_property_value(
        &mut self,
        _op: &SetPropertyValue,
    ) -> Result<(), RepositoryError> {
        self.calls.push("set_property_value");
        Ok(())
    }

    fn visit_remove_item(&mut self, _op: &RemoveItem) -> Result<(), RepositoryError> {
        self.calls.push("remove_item");
        Ok(())
    }

    fn visit_move_tree(&mut self, _op: &MoveTree) -> Result<(), RepositoryError> {
        self.calls.push("move_tree");
        Ok(())
    }

    fn visit_copy_tree(&mut self, _op: &CopyTree) -> Result<(), RepositoryError> {
        self.calls.push("copy_tree");
        Ok(())
    }

    fn visit_clone_tree(&mut self, _op: &CloneTree) -> Result<(), RepositoryError> {
        self.calls.push("clone_tree");
        Ok(())
    }

    fn visit_resolve_merge_conflict(
        &mut self,
        _op: &ResolveMergeConflict,
    ) -> Result<(), RepositoryError> {
        self.calls.push("resolve_merge_conflict");
        Ok(())
    }

    fn visit_checkout(&mut self, _op: &Checkout) -> Result<(), RepositoryError> {
        self.calls.push("checkout");
        Ok(())
    }

    fn visit_checkin(&mut self, _op: &Checkin) -> Result<(), RepositoryError> {
        self.calls.push("checkin");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validator that approves everything.
#[derive(Debug)]
pub(crate) struct ApproveAll;

impl ItemStateValidator for ApproveAll {
    fn check_add_node(
        &self,
        _parent: &NodeId,
        _name: &Name,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn check_remove_item(
        &self,
        _item: &ItemId,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn check_copy(
        &self,
        _src: &RepoPath,
        _dest: &RepoPath,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Validator that fails every copy check with a fixed error.
#[derive(Debug)]
pub(crate) struct RejectCopies {
    pub(crate) error: RepositoryError,
}

impl ItemStateValidator for RejectCopies {
    fn check_add_node(
        &self,
        _parent: &NodeId,
        _name: &Name,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn check_remove_item(
        &self,
        _item: &ItemId,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn check_copy(
        &self,
        _src: &RepoPath,
        _dest: &RepoPath,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Err(self.error.clone())
    }
}

/// Validator that fails every add-node check with a fixed error.
#[derive(Debug)]
pub(crate) struct RejectAdds {
    pub(crate) error: RepositoryError,
}

impl ItemStateValidator for RejectAdds {
    fn check_add_node(
        &self,
        _parent: &NodeId,
        _name: &Name,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Err(self.error.clone())
    }

    fn check_remove_item(
        &self,
        _item: &ItemId,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn check_copy(
        &self,
        _src: &RepoPath,
        _dest: &RepoPath,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Validator that fails every remove check with a fixed error.
#[derive(Debug)]
pub(crate) struct RejectRemoves {
    pub(crate) error: RepositoryError,
}

impl ItemStateValidator for RejectRemoves {
    fn check_add_node(
        &self,
        _parent: &NodeId,
        _name: &Name,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn check_remove_item(
        &self,
        _item: &ItemId,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Err(self.error.clone())
    }

    fn check_copy(
        &self,
        _src: &RepoPath,
        _dest: &RepoPath,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Validator whose only complaint is an occupied destination — and only
/// when the collision check is actually requested.
#[derive(Debug)]
pub(crate) struct CollideAt {
    pub(crate) dest: RepoPath,
}

impl ItemStateValidator for CollideAt {
    fn check_add_node(
        &self,
        _parent: &NodeId,
        _name: &Name,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn check_remove_item(
        &self,
        _item: &ItemId,
        _options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn check_copy(
        &self,
        _src: &RepoPath,
        dest: &RepoPath,
        options: CheckOptions,
    ) -> Result<(), RepositoryError> {
        if options.contains(CheckOptions::COLLISION) && dest == &self.dest {
            return Err(RepositoryError::ItemExists {
                path: dest.to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Access oracle + provider
// ---------------------------------------------------------------------------

/// Configurable permission oracle. `workspaces: None` means every
/// workspace exists; `grant` is the blanket answer for known targets.
#[derive(Debug)]
pub(crate) struct FixedAccess {
    workspaces: Option<BTreeSet<WorkspaceName>>,
    grant: bool,
}

impl AccessManager for FixedAccess {
    fn is_granted_on_new(
        &self,
        _parent: &NodeId,
        _rel_path: &RelPath,
        _actions: &[Action],
    ) -> Result<bool, RepositoryError> {
        Ok(self.grant)
    }

    fn is_granted(&self, _item: &ItemId, _actions: &[Action]) -> Result<bool, RepositoryError> {
        Ok(self.grant)
    }

    fn can_access(&self, workspace: &WorkspaceName) -> Result<bool, RepositoryError> {
        if let Some(known) = &self.workspaces
            && !known.contains(workspace)
        {
            return Err(RepositoryError::WorkspaceNotFound {
                name: workspace.clone(),
            });
        }
        Ok(self.grant)
    }
}

/// A [`ManagerProvider`] handing out a [`FixedAccess`] oracle.
#[derive(Debug)]
pub(crate) struct FixedProvider {
    access: FixedAccess,
}

impl FixedProvider {
    /// Every workspace exists and everything is granted.
    pub(crate) const fn permissive() -> Self {
        Self {
            access: FixedAccess {
                workspaces: None,
                grant: true,
            },
        }
    }

    /// Only the named workspaces exist; access to them is granted.
    pub(crate) fn with_workspaces(names: &[&str]) -> Self {
        Self {
            access: FixedAccess {
                workspaces: Some(Self::parse_names(names)),
                grant: true,
            },
        }
    }

    /// The named workspaces exist but access to them is denied.
    pub(crate) fn denying(names: &[&str]) -> Self {
        Self {
            access: FixedAccess {
                workspaces: Some(Self::parse_names(names)),
                grant: false,
            },
        }
    }

    fn parse_names(names: &[&str]) -> BTreeSet<WorkspaceName> {
        names
            .iter()
            .map(|n| WorkspaceName::new(n).expect("test workspace name"))
            .collect()
    }
}

impl ManagerProvider for FixedProvider {
    fn access_manager(&self) -> &dyn AccessManager {
        &self.access
    }
}
