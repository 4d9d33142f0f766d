//! Repository path types.
//!
//! Three value types cover every way this layer addresses an item by
//! location rather than by id:
//!
//! - [`Name`] — a single path segment.
//! - [`RelPath`] — a non-empty relative path, used when asking about an item
//!   that does not exist yet (e.g. "may I add a node named `x/y` under this
//!   parent").
//! - [`RepoPath`] — an absolute, normalized path from the workspace root.
//!
//! All three validate on construction and are immutable afterwards, in the
//! same construct-once style as the identifier types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::types::{ErrorKind, ValidationError};

// ---------------------------------------------------------------------------
// Name
// ---------------------------------------------------------------------------

/// A single validated path segment.
///
/// Segments must be non-empty, contain no `/` and no whitespace, and must
/// not be the navigation segments `.` or `..`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a new `Name`, validating format.
    ///
    /// # Errors
    /// Returns an error if the segment is empty, contains `/` or
    /// whitespace, or is `.` or `..`.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        Self::validate(s)?;
        Ok(Self(s.to_owned()))
    }

    /// Return the segment as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), ValidationError> {
        let err = |reason: &str| ValidationError {
            kind: ErrorKind::Name,
            value: s.to_owned(),
            reason: reason.to_owned(),
        };
        if s.is_empty() {
            return Err(err("must not be empty"));
        }
        if s == "." || s == ".." {
            return Err(err("'.' and '..' are not valid item names"));
        }
        if s.contains('/') {
            return Err(err("must not contain '/'"));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(err("must not contain whitespace"));
        }
        Ok(())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(&s)?;
        Ok(Self(s))
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

// ---------------------------------------------------------------------------
// RelPath
// ---------------------------------------------------------------------------

/// A non-empty relative path: one or more [`Name`] segments.
///
/// Used by the permission contract to name a not-yet-existing item below an
/// existing parent node.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelPath(Vec<Name>);

impl RelPath {
    /// Parse a relative path like `"a/b/c"`.
    ///
    /// # Errors
    /// Returns an error if the string is empty, starts or ends with `/`,
    /// or any segment fails [`Name`] validation.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError {
                kind: ErrorKind::Path,
                value: s.to_owned(),
                reason: "relative path must not be empty".to_owned(),
            });
        }
        if s.starts_with('/') {
            return Err(ValidationError {
                kind: ErrorKind::Path,
                value: s.to_owned(),
                reason: "relative path must not start with '/'".to_owned(),
            });
        }
        let segments = s
            .split('/')
            .map(Name::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|mut e| {
                e.kind = ErrorKind::Path;
                e.value = s.to_owned();
                e
            })?;
        Ok(Self(segments))
    }

    /// A relative path of a single segment.
    #[must_use]
    pub fn from_name(name: Name) -> Self {
        Self(vec![name])
    }

    /// The path's segments, in order.
    #[must_use]
    pub fn segments(&self) -> &[Name] {
        &self.0
    }

    /// The last segment — the name of the addressed item.
    ///
    /// Never panics: a `RelPath` has at least one segment.
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn name(&self) -> &Name {
        self.0.last().expect("RelPath is never empty")
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for seg in &self.0 {
            if !first {
                f.write_str("/")?;
            }
            first = false;
            f.write_str(seg.as_str())?;
        }
        Ok(())
    }
}

impl FromStr for RelPath {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RelPath {
    type Error = ValidationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<RelPath> for String {
    fn from(path: RelPath) -> Self {
        path.to_string()
    }
}

// ---------------------------------------------------------------------------
// RepoPath
// ---------------------------------------------------------------------------

/// An absolute, normalized repository path.
///
/// The root is `/` (zero segments). Paths are always stored normalized —
/// [`RepoPath::parse`] rejects `.` / `..` / empty segments outright, while
/// [`RepoPath::parse_lenient`] resolves them first (for callers configured
/// with `strict_paths = false`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoPath(Vec<Name>);

impl RepoPath {
    /// The root path, `/`.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse an absolute path like `"/a/b/c"`, strictly.
    ///
    /// # Errors
    /// Returns an error if the string does not start with `/`, or contains
    /// an empty, `.`, `..`, or otherwise invalid segment. `"/"` parses to
    /// the root.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let rest = Self::strip_root(s)?;
        if rest.is_empty() {
            return Ok(Self::root());
        }
        let segments = rest
            .split('/')
            .map(Name::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|mut e| {
                e.kind = ErrorKind::Path;
                e.value = s.to_owned();
                e
            })?;
        Ok(Self(segments))
    }

    /// Parse an absolute path, normalizing `.` and `..` segments and
    /// collapsing repeated `/`.
    ///
    /// # Errors
    /// Returns an error if the string does not start with `/`, a `..`
    /// would climb above the root, or a remaining segment is invalid.
    pub fn parse_lenient(s: &str) -> Result<Self, ValidationError> {
        let rest = Self::strip_root(s)?;
        let mut segments: Vec<Name> = Vec::new();
        for raw in rest.split('/') {
            match raw {
                "" | "." => {}
                ".." => {
                    if segments.pop().is_none() {
                        return Err(ValidationError {
                            kind: ErrorKind::Path,
                            value: s.to_owned(),
                            reason: "'..' climbs above the root".to_owned(),
                        });
                    }
                }
                seg => segments.push(Name::new(seg).map_err(|mut e| {
                    e.kind = ErrorKind::Path;
                    e.value = s.to_owned();
                    e
                })?),
            }
        }
        Ok(Self(segments))
    }

    fn strip_root(s: &str) -> Result<&str, ValidationError> {
        s.strip_prefix('/').ok_or_else(|| ValidationError {
            kind: ErrorKind::Path,
            value: s.to_owned(),
            reason: "repository paths must be absolute (start with '/')".to_owned(),
        })
    }

    /// True if this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path's segments, in order. Empty for the root.
    #[must_use]
    pub fn segments(&self) -> &[Name] {
        &self.0
    }

    /// The last segment, or `None` for the root.
    #[must_use]
    pub fn name(&self) -> Option<&Name> {
        self.0.last()
    }

    /// The parent path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// This path with `name` appended.
    #[must_use]
    pub fn join(&self, name: Name) -> Self {
        let mut segments = self.0.clone();
        segments.push(name);
        Self(segments)
    }

    /// True if `self` is a strict ancestor of `other` (the root is an
    /// ancestor of everything but itself).
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        self.0.len() < other.0.len() && other.0[..self.0.len()] == self.0[..]
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for seg in &self.0 {
            write!(f, "/{seg}")?;
        }
        Ok(())
    }
}

impl FromStr for RepoPath {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RepoPath {
    type Error = ValidationError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<RepoPath> for String {
    fn from(path: RepoPath) -> Self {
        path.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
