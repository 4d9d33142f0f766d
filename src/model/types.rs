//! Core identifier types for the Arbor client layer.
//!
//! Foundation value types used throughout the transaction layer: node and
//! property identifiers, the item-identifier sum over both, and validated
//! workspace names. All of them are construct-once values — once built they
//! never change, so operations holding them are safe to share read-only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::path::Name;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// A stable, SPI-assigned node identifier.
///
/// The client never mints these — the backend assigns them and the client
/// only round-trips them. The format is therefore opaque; validation only
/// rejects values that could not survive a wire round trip: empty strings,
/// whitespace, embedded `/`, and anything longer than 256 characters.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Maximum accepted identifier length, in characters.
    pub const MAX_LEN: usize = 256;

    /// Create a new `NodeId` from a string, validating format.
    ///
    /// # Errors
    /// Returns an error if the string is empty, longer than
    /// [`Self::MAX_LEN`], or contains whitespace or `/`.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        Self::validate(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Return the inner identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), ValidationError> {
        let err = |reason: String| ValidationError {
            kind: ErrorKind::NodeId,
            value: s.to_owned(),
            reason,
        };
        if s.is_empty() {
            return Err(err("must not be empty".to_owned()));
        }
        if s.chars().count() > Self::MAX_LEN {
            return Err(err(format!("must be at most {} characters", Self::MAX_LEN)));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(err("must not contain whitespace".to_owned()));
        }
        if s.contains('/') {
            return Err(err("must not contain '/'".to_owned()));
        }
        Ok(())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NodeId {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NodeId {
    type Error = ValidationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(&s)?;
        Ok(Self(s))
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

// ---------------------------------------------------------------------------
// PropertyId
// ---------------------------------------------------------------------------

/// A property identifier — the parent node plus the property's name.
///
/// Properties have no identity of their own in the SPI; they are addressed
/// through the node that holds them.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyId {
    parent: NodeId,
    name: Name,
}

impl PropertyId {
    /// Address the property `name` on the node `parent`.
    #[must_use]
    pub const fn new(parent: NodeId, name: Name) -> Self {
        Self { parent, name }
    }

    /// The node holding the property.
    #[must_use]
    pub const fn parent(&self) -> &NodeId {
        &self.parent
    }

    /// The property's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.parent, self.name)
    }
}

// ---------------------------------------------------------------------------
// ItemId
// ---------------------------------------------------------------------------

/// An item identifier — either a node or a property.
///
/// This is the unit of affected-item tracking: every operation declares the
/// `ItemId`s it will read or mutate, and the batch uses those sets to detect
/// write-write conflicts and to drive cache invalidation after a commit.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemId {
    /// A node.
    Node(NodeId),
    /// A property on a node.
    Property(PropertyId),
}

impl ItemId {
    /// True if this identifies a node.
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// The node this item belongs to: the node itself, or the property's
    /// parent.
    #[must_use]
    pub const fn enclosing_node(&self) -> &NodeId {
        match self {
            Self::Node(id) => id,
            Self::Property(id) => id.parent(),
        }
    }
}

impl From<NodeId> for ItemId {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<PropertyId> for ItemId {
    fn from(id: PropertyId) -> Self {
        Self::Property(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => fmt::Display::fmt(id, f),
            Self::Property(id) => fmt::Display::fmt(id, f),
        }
    }
}

// ---------------------------------------------------------------------------
// WorkspaceName
// ---------------------------------------------------------------------------

/// A validated workspace name.
///
/// Workspace names must be lowercase alphanumeric with hyphens, 1–64
/// characters, and must not start or end with a hyphen.
/// Examples: `default`, `staging`, `release-2`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorkspaceName(String);

impl WorkspaceName {
    /// Create a new `WorkspaceName`, validating format.
    ///
    /// # Errors
    /// Returns an error if the name is empty, longer than 64 characters,
    /// contains anything other than `a-z`, `0-9`, `-`, or starts or ends
    /// with a hyphen.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        Self::validate(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Return the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), ValidationError> {
        let err = |reason: String| ValidationError {
            kind: ErrorKind::WorkspaceName,
            value: s.to_owned(),
            reason,
        };
        if s.is_empty() || s.len() > 64 {
            return Err(err("must be 1-64 characters".to_owned()));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(err(
                "must contain only lowercase letters, digits, and hyphens".to_owned(),
            ));
        }
        if s.starts_with('-') || s.ends_with('-') {
            return Err(err("must not start or end with a hyphen".to_owned()));
        }
        Ok(())
    }
}

impl fmt::Display for WorkspaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WorkspaceName {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for WorkspaceName {
    type Error = ValidationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(&s)?;
        Ok(Self(s))
    }
}

impl From<WorkspaceName> for String {
    fn from(name: WorkspaceName) -> Self {
        name.0
    }
}

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// Which value type failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A [`NodeId`].
    NodeId,
    /// A [`WorkspaceName`].
    WorkspaceName,
    /// A path segment ([`Name`]).
    Name,
    /// A repository path.
    Path,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeId => write!(f, "node id"),
            Self::WorkspaceName => write!(f, "workspace name"),
            Self::Name => write!(f, "name"),
            Self::Path => write!(f, "path"),
        }
    }
}

/// A value failed construction-time validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    /// Which value type was being constructed.
    pub kind: ErrorKind,
    /// The invalid value.
    pub value: String,
    /// Human-readable explanation.
    pub reason: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {}: {:?} — {}",
            self.kind, self.value, self.reason
        )
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
