//! Item-state validation seam.
//!
//! [`ItemStateValidator`] is the collaborator that answers "is this
//! prospective change structurally legal" against live repository state:
//! node-type constraints, collisions, locks, versioning. The transaction
//! layer calls it only from the factory methods of path-based operations;
//! the expensive dispatch-time checks stay with the backend.
//!
//! Which checks run is controlled by a [`CheckOptions`] mask so a caller
//! can skip classes of checks the surrounding protocol already guarantees.

use std::fmt;

use crate::error::RepositoryError;
use crate::model::{ItemId, Name, NodeId, RepoPath};

// ---------------------------------------------------------------------------
// CheckOptions
// ---------------------------------------------------------------------------

/// A mask selecting which legality checks a validator should run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CheckOptions(u8);

impl CheckOptions {
    /// Run no checks.
    pub const NONE: Self = Self(0);
    /// Check the permission oracle.
    pub const ACCESS: Self = Self(1);
    /// Check for lock conflicts.
    pub const LOCK: Self = Self(1 << 1);
    /// Check versioning rules (target must not be checked in).
    pub const VERSIONING: Self = Self(1 << 2);
    /// Check node-type constraints.
    pub const CONSTRAINTS: Self = Self(1 << 3);
    /// Check for name collisions at the target identity.
    pub const COLLISION: Self = Self(1 << 4);
    /// Run every check.
    pub const ALL: Self = Self(0b1_1111);

    /// True if every check in `other` is also selected in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// The union of two masks.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl std::ops::BitOr for CheckOptions {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Display for CheckOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABELS: [(CheckOptions, &str); 5] = [
            (CheckOptions::ACCESS, "access"),
            (CheckOptions::LOCK, "lock"),
            (CheckOptions::VERSIONING, "versioning"),
            (CheckOptions::CONSTRAINTS, "constraints"),
            (CheckOptions::COLLISION, "collision"),
        ];
        if *self == Self::NONE {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, label) in LABELS {
            if self.contains(flag) {
                if !first {
                    f.write_str("+")?;
                }
                first = false;
                f.write_str(label)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ItemStateValidator
// ---------------------------------------------------------------------------

/// Validates structural and constraint legality of a prospective change.
///
/// Implementations raise the same failure kinds the factories surface
/// unchanged: [`RepositoryError::ItemExists`],
/// [`RepositoryError::ConstraintViolation`],
/// [`RepositoryError::NoSuchNodeType`], [`RepositoryError::AccessDenied`],
/// [`RepositoryError::Version`], and [`RepositoryError::Lock`].
pub trait ItemStateValidator: Send + Sync {
    /// Check that a child node named `name` may be added below `parent`.
    ///
    /// # Errors
    /// Any of the validation failure kinds listed on the trait, scoped by
    /// `options`.
    fn check_add_node(
        &self,
        parent: &NodeId,
        name: &Name,
        options: CheckOptions,
    ) -> Result<(), RepositoryError>;

    /// Check that `item` may be removed.
    ///
    /// # Errors
    /// Any of the validation failure kinds listed on the trait, scoped by
    /// `options`.
    fn check_remove_item(&self, item: &ItemId, options: CheckOptions)
    -> Result<(), RepositoryError>;

    /// Check that the subtree at `src` may be copied, cloned, or moved to
    /// `dest` — the destination's parent must exist, must not be locked,
    /// and node-type constraints must admit the new child.
    ///
    /// # Errors
    /// Any of the validation failure kinds listed on the trait, scoped by
    /// `options`.
    fn check_copy(
        &self,
        src: &RepoPath,
        dest: &RepoPath,
        options: CheckOptions,
    ) -> Result<(), RepositoryError>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
