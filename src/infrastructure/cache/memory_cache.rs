//! In-process cache backed by `moka`.

use super::service::{CacheResult, CacheService, CachedLink};
use async_trait::async_trait;
use moka::future::Cache;
use moka::policy::Expiry;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Clone)]
struct Entry {
    link: CachedLink,
    ttl: Duration,
}

/// Expires every entry after the TTL it was written with. Overwrites restart
/// the clock.
struct WriteTtl;

impl Expiry<String, Entry> for WriteTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Cache living inside the service process.
///
/// Used when Redis is not configured or not reachable at startup. Lookups
/// are lock-free and bounded by `max_capacity` entries.
pub struct MemoryCache {
    inner: Cache<String, Entry>,
}

impl MemoryCache {
    pub fn new(max_capacity: u64) -> Self {
        debug!("Using MemoryCache (max capacity: {})", max_capacity);

        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(WriteTtl)
            .build();

        Self { inner }
    }

    /// Number of live entries, after pending maintenance has run.
    pub async fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, short_code: &str) -> CacheResult<Option<CachedLink>> {
        Ok(self.inner.get(short_code).await.map(|entry| entry.link))
    }

    async fn set(&self, short_code: &str, entry: &CachedLink, ttl: Duration) -> CacheResult<()> {
        self.inner
            .insert(
                short_code.to_string(),
                Entry {
                    link: entry.clone(),
                    ttl,
                },
            )
            .await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
