//! Permission contract for the Arbor client layer.
//!
//! [`AccessManager`] is the oracle every mutating operation must satisfy
//! before it may execute: "is this action permitted on this item, path, or
//! workspace". It is stateless from the caller's point of view — every query
//! is a pure function of (subject, target, actions) at call time — and must
//! be safe for concurrent invocation, because operations in a batch may be
//! validated in parallel before commit.
//!
//! The acting subject is *not* a parameter of the contract. Implementations
//! bind their subject when they are constructed (a session hands each
//! consumer an oracle already scoped to the authenticated subject), which
//! keeps the trait context-free and trivially testable.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RepositoryError;
use crate::model::{ItemId, NodeId, RelPath, WorkspaceName};

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// A permission action token.
///
/// The action set is open: the four well-known tokens below cover the
/// operations this layer issues itself, and [`Action::custom`] admits
/// forward-compatible tokens a backend may define.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Action(Cow<'static, str>);

impl Action {
    /// Read an existing item.
    pub const READ: Self = Self(Cow::Borrowed("read"));
    /// Remove an existing item.
    pub const REMOVE: Self = Self(Cow::Borrowed("remove"));
    /// Add a child node under an existing parent.
    pub const ADD_NODE: Self = Self(Cow::Borrowed("add_node"));
    /// Set (add or change) a property on an existing node.
    pub const SET_PROPERTY: Self = Self(Cow::Borrowed("set_property"));

    /// A backend-defined action token outside the well-known set.
    #[must_use]
    pub fn custom(token: impl Into<String>) -> Self {
        Self(Cow::Owned(token.into()))
    }

    /// The token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Action {
    fn from(token: String) -> Self {
        Self(Cow::Owned(token))
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.0.into_owned()
    }
}

// ---------------------------------------------------------------------------
// AccessManager
// ---------------------------------------------------------------------------

/// The permission oracle gating every mutating action.
///
/// All queries are side-effect-free and safe to call repeatedly and
/// concurrently, with no ordering requirement between calls. A query about
/// a target that does not exist is an **error**, never `Ok(false)`:
/// "denied" and "does not exist" are distinct outcomes.
pub trait AccessManager: Send + Sync {
    /// Are `actions` granted on the *not-yet-existing* item addressed by
    /// `rel_path` below the existing node `parent`?
    ///
    /// Used for prospective changes, e.g. "may I add a node named `x`
    /// under this parent".
    ///
    /// # Errors
    /// [`RepositoryError::ItemNotFound`] if `parent` does not resolve;
    /// [`RepositoryError::Internal`] for any other repository failure.
    fn is_granted_on_new(
        &self,
        parent: &NodeId,
        rel_path: &RelPath,
        actions: &[Action],
    ) -> Result<bool, RepositoryError>;

    /// Are `actions` granted on the existing item `item`?
    ///
    /// # Errors
    /// [`RepositoryError::ItemNotFound`] if `item` does not resolve;
    /// [`RepositoryError::Internal`] for any other repository failure.
    fn is_granted(&self, item: &ItemId, actions: &[Action]) -> Result<bool, RepositoryError>;

    /// Can the existing item `item` be read?
    ///
    /// Equivalent to `is_granted(item, [Action::READ])`; implementations
    /// that override this must preserve the equivalence.
    ///
    /// # Errors
    /// Same contract as [`Self::is_granted`].
    fn can_read(&self, item: &ItemId) -> Result<bool, RepositoryError> {
        self.is_granted(item, &[Action::READ])
    }

    /// Can the existing item `item` be removed?
    ///
    /// Equivalent to `is_granted(item, [Action::REMOVE])`; implementations
    /// that override this must preserve the equivalence.
    ///
    /// # Errors
    /// Same contract as [`Self::is_granted`].
    fn can_remove(&self, item: &ItemId) -> Result<bool, RepositoryError> {
        self.is_granted(item, &[Action::REMOVE])
    }

    /// Is the bound subject granted access to the workspace `workspace`?
    ///
    /// # Errors
    /// [`RepositoryError::WorkspaceNotFound`] if no workspace with that
    /// name exists; [`RepositoryError::Internal`] for any other failure.
    fn can_access(&self, workspace: &WorkspaceName) -> Result<bool, RepositoryError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
