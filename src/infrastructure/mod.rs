//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! - [`cache`] - Resolution cache (Redis, in-process and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`detection`] - Region and device classifiers

pub mod cache;
pub mod detection;
pub mod persistence;
