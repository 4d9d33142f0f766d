//! Arbor data model — identifier and path value types.

pub mod path;
pub mod types;

pub use path::{Name, RelPath, RepoPath};
pub use types::{ItemId, NodeId, PropertyId, ValidationError, WorkspaceName};
