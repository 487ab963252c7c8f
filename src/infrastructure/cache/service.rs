//! Cache service trait, cached value and error types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Errors that can occur during cache operations.
///
/// These are transient by nature. Callers log them and fall back to the
/// database (reads) or carry on without caching (writes).
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
    #[error("Cache serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// The cached projection of a link, keyed by short code.
///
/// Serialized as `{"linkId": .., "originalUrl": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedLink {
    pub link_id: i64,
    pub original_url: String,
}

/// Trait for caching short code mappings.
///
/// The cache is advisory: a miss never means "does not exist". Entries expire
/// on their own after the TTL given at write time; writing an existing key
/// replaces the value and restarts its TTL.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process cache
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Looks up the cached projection for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(entry))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend is unreachable or the stored
    /// value cannot be decoded.
    async fn get(&self, short_code: &str) -> CacheResult<Option<CachedLink>>;

    /// Stores the projection for a short code with the given TTL.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend rejects the write.
    async fn set(&self, short_code: &str, entry: &CachedLink, ttl: Duration) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Backend name for logs and health reports.
    fn name(&self) -> &'static str;
}
