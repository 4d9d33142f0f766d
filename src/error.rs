//! Repository error types for the Arbor client layer.
//!
//! Defines [`RepositoryError`], the unified checked-failure type for the
//! whole transaction layer. Every variant is a recoverable, caller-visible
//! condition: factories raise argument and validation failures, the
//! permission oracle raises access and not-found failures, and visitor
//! implementations surface backend failures unchanged. Nothing here is
//! retried or swallowed — retry policy belongs to the transport layer.
//!
//! "Permission denied" and "target does not exist" are distinct variants on
//! purpose; conflating them loses information the caller needs.

use std::fmt;

use crate::model::types::{ErrorKind, ValidationError};
use crate::model::{ItemId, WorkspaceName};

// ---------------------------------------------------------------------------
// RepositoryError
// ---------------------------------------------------------------------------

/// Unified error type for Arbor client operations.
///
/// Each variant is self-contained: the receiver should understand what
/// happened and what to do next without additional context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RepositoryError {
    /// A path argument was malformed or structurally illegal for the
    /// requested operation.
    InvalidPath {
        /// The offending path, as given.
        path: String,
        /// Why the path is unusable.
        reason: String,
    },

    /// An item or workspace name failed validation.
    InvalidName {
        /// The invalid name.
        name: String,
        /// Why the name is invalid.
        reason: String,
    },

    /// An identifier failed validation.
    InvalidIdentifier {
        /// The invalid identifier value.
        value: String,
        /// Why the identifier is invalid.
        reason: String,
    },

    /// The addressed item does not exist.
    ItemNotFound {
        /// The identifier that did not resolve.
        id: ItemId,
    },

    /// The named workspace does not exist.
    WorkspaceNotFound {
        /// The workspace name that was not found.
        name: WorkspaceName,
    },

    /// An item already occupies the target identity and `remove_existing`
    /// was not requested.
    ItemExists {
        /// The occupied destination path.
        path: String,
    },

    /// A node-type or structural constraint forbids the change.
    ConstraintViolation {
        /// What constraint was violated.
        detail: String,
    },

    /// A referenced node type is not registered.
    NoSuchNodeType {
        /// The unknown node-type name.
        name: String,
    },

    /// The permission oracle denied the action.
    AccessDenied {
        /// The denied action token.
        action: String,
        /// The item, path, or workspace the action targeted.
        target: String,
    },

    /// The backend does not support this kind of change.
    Unsupported {
        /// What was attempted.
        detail: String,
    },

    /// The change violates versioning rules (e.g. the target is checked in).
    Version {
        /// What versioning rule was violated.
        detail: String,
    },

    /// The target is locked by another session.
    Lock {
        /// Description of the lock conflict.
        detail: String,
    },

    /// A generic repository failure with no more specific classification.
    Internal {
        /// Description of the failure.
        detail: String,
    },
}

impl RepositoryError {
    /// True for the not-found variants ([`Self::ItemNotFound`],
    /// [`Self::WorkspaceNotFound`]).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. } | Self::WorkspaceNotFound { .. })
    }

    /// True for construction-time argument errors — the variants a factory
    /// raises before consulting any collaborator.
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPath { .. } | Self::InvalidName { .. } | Self::InvalidIdentifier { .. }
        )
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath { path, reason } => {
                write!(f, "invalid path '{path}': {reason}")
            }
            Self::InvalidName { name, reason } => {
                write!(f, "invalid name '{name}': {reason}")
            }
            Self::InvalidIdentifier { value, reason } => {
                write!(f, "invalid identifier '{value}': {reason}")
            }
            Self::ItemNotFound { id } => {
                write!(f, "item '{id}' not found")
            }
            Self::WorkspaceNotFound { name } => {
                write!(f, "workspace '{name}' not found")
            }
            Self::ItemExists { path } => {
                write!(
                    f,
                    "an item already exists at '{path}'.\n  To fix: remove it first, or request remove_existing where the operation supports it."
                )
            }
            Self::ConstraintViolation { detail } => {
                write!(f, "constraint violation: {detail}")
            }
            Self::NoSuchNodeType { name } => {
                write!(f, "no such node type: '{name}'")
            }
            Self::AccessDenied { action, target } => {
                write!(f, "access denied: action '{action}' on '{target}'")
            }
            Self::Unsupported { detail } => {
                write!(f, "unsupported repository operation: {detail}")
            }
            Self::Version { detail } => {
                write!(
                    f,
                    "versioning conflict: {detail}\n  To fix: check the node out (or resolve its merge state) and retry."
                )
            }
            Self::Lock { detail } => {
                write!(f, "lock conflict: {detail}")
            }
            Self::Internal { detail } => {
                write!(f, "repository error: {detail}")
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

// ---------------------------------------------------------------------------
// From impls
// ---------------------------------------------------------------------------

impl From<ValidationError> for RepositoryError {
    fn from(err: ValidationError) -> Self {
        match err.kind {
            ErrorKind::Path => Self::InvalidPath {
                path: err.value,
                reason: err.reason,
            },
            ErrorKind::Name | ErrorKind::WorkspaceName => Self::InvalidName {
                name: err.value,
                reason: err.reason,
            },
            ErrorKind::NodeId => Self::InvalidIdentifier {
                value: err.value,
                reason: err.reason,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeId;

    #[test]
    fn not_found_predicate() {
        let item = RepositoryError::ItemNotFound {
            id: ItemId::from(NodeId::new("n1").unwrap()),
        };
        let ws = RepositoryError::WorkspaceNotFound {
            name: WorkspaceName::new("ws1").unwrap(),
        };
        let denied = RepositoryError::AccessDenied {
            action: "read".to_owned(),
            target: "n1".to_owned(),
        };
        assert!(item.is_not_found());
        assert!(ws.is_not_found());
        assert!(!denied.is_not_found());
    }

    #[test]
    fn argument_error_predicate() {
        let err: RepositoryError = NodeId::new("a b").unwrap_err().into();
        assert!(err.is_argument_error());
        assert!(matches!(err, RepositoryError::InvalidIdentifier { .. }));
    }

    #[test]
    fn validation_error_kind_mapping() {
        let path_err: RepositoryError = crate::model::RepoPath::parse("relative")
            .unwrap_err()
            .into();
        assert!(matches!(path_err, RepositoryError::InvalidPath { .. }));

        let name_err: RepositoryError = WorkspaceName::new("BAD").unwrap_err().into();
        assert!(matches!(name_err, RepositoryError::InvalidName { .. }));
    }

    #[test]
    fn display_distinguishes_denied_from_missing() {
        let denied = RepositoryError::AccessDenied {
            action: "remove".to_owned(),
            target: "/a/b".to_owned(),
        };
        let missing = RepositoryError::ItemNotFound {
            id: ItemId::from(NodeId::new("n1").unwrap()),
        };
        assert!(format!("{denied}").contains("access denied"));
        assert!(format!("{missing}").contains("not found"));
    }

    #[test]
    fn every_variant_displays_nonempty() {
        let variants: Vec<RepositoryError> = vec![
            RepositoryError::InvalidPath {
                path: "p".into(),
                reason: "r".into(),
            },
            RepositoryError::InvalidName {
                name: "n".into(),
                reason: "r".into(),
            },
            RepositoryError::InvalidIdentifier {
                value: "v".into(),
                reason: "r".into(),
            },
            RepositoryError::ItemNotFound {
                id: ItemId::from(NodeId::new("n1").unwrap()),
            },
            RepositoryError::WorkspaceNotFound {
                name: WorkspaceName::new("ws1").unwrap(),
            },
            RepositoryError::ItemExists { path: "/a".into() },
            RepositoryError::ConstraintViolation { detail: "d".into() },
            RepositoryError::NoSuchNodeType { name: "t".into() },
            RepositoryError::AccessDenied {
                action: "read".into(),
                target: "t".into(),
            },
            RepositoryError::Unsupported { detail: "d".into() },
            RepositoryError::Version { detail: "d".into() },
            RepositoryError::Lock { detail: "d".into() },
            RepositoryError::Internal { detail: "d".into() },
        ];
        for v in variants {
            assert!(!format!("{v}").is_empty());
        }
    }
}
