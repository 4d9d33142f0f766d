//! Session-scoped manager provider.
//!
//! Operation factories need session-scoped collaborators (today: the
//! permission oracle) without knowing how the surrounding session obtains
//! or caches them. [`ManagerProvider`] is that seam — the session hands a
//! provider to each factory call, and the factory asks it for what it
//! needs.

use crate::security::AccessManager;

/// Supplies a factory with the session-scoped managers it needs.
pub trait ManagerProvider {
    /// The permission oracle bound to the session's subject.
    fn access_manager(&self) -> &dyn AccessManager;
}
