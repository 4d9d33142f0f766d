//! Arbor client transaction layer.
//!
//! The client side of a hierarchical content repository speaks to its
//! backend through a service-provider interface (SPI). This crate is the
//! layer in between: callers queue immutable, typed [`ops::Operation`]
//! objects into a [`batch::Batch`], and an [`ops::OperationVisitor`]
//! supplied by the execution layer applies them — locally against the
//! transient state, or remotely over the SPI. Every operation carries the
//! item identifiers it touches (for conflict detection and cache
//! invalidation), and every mutating operation passes the
//! [`security::AccessManager`] permission gate before it may execute.
//!
//! Transport, caching, constraint validation internals, and session
//! lifecycle live behind the collaborator seams in [`validator`] and
//! [`provider`]; this crate defines their contracts only.

pub mod batch;
pub mod config;
pub mod error;
pub mod model;
pub mod ops;
pub mod provider;
pub mod security;
pub mod validator;

#[cfg(test)]
pub(crate) mod testutil;

pub use batch::Batch;
pub use error::RepositoryError;
