//! Link creation and cache-aside resolution.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Link, NewLink, ResolvedLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheService, CachedLink};
use crate::utils::code_generator::CodeGenerator;
use crate::utils::url_validator::validate_original_url;

/// TTL applied to cache entries unless configured otherwise.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Insert attempts per creation before a collision is reported.
pub const DEFAULT_MAX_CODE_ATTEMPTS: usize = 5;

/// Service for creating and resolving short links.
///
/// The database is authoritative; the cache holds `{link_id, original_url}`
/// projections keyed by short code. Creation writes through to the cache so
/// the first redirect after creation is already a hit. Resolution is
/// cache-aside: probe, fall back to the database on a miss, repopulate.
///
/// Cache failures never fail a request. They are logged and the operation
/// continues as if the cache were empty.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
    code_generator: CodeGenerator,
    cache_ttl: Duration,
    max_code_attempts: usize,
}

impl LinkService {
    /// Creates a new link service with default code length, TTL and retry count.
    pub fn new(link_repository: Arc<dyn LinkRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            link_repository,
            cache,
            code_generator: CodeGenerator::default(),
            cache_ttl: DEFAULT_CACHE_TTL,
            max_code_attempts: DEFAULT_MAX_CODE_ATTEMPTS,
        }
    }

    pub fn with_code_generator(mut self, code_generator: CodeGenerator) -> Self {
        self.code_generator = code_generator;
        self
    }

    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    /// Sets how many codes are tried before giving up. At least one attempt is always made.
    pub fn with_max_code_attempts(mut self, max_code_attempts: usize) -> Self {
        self.max_code_attempts = max_code_attempts.max(1);
        self
    }

    /// Creates a short link for `original_url` and warms the cache with it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not `http(s)://`;
    /// nothing is read or written in that case.
    ///
    /// Returns [`AppError::Conflict`] if every generated code collided with an
    /// existing one.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_link(&self, original_url: &str) -> Result<Link, AppError> {
        validate_original_url(original_url)?;

        let link = self.insert_with_fresh_code(original_url).await?;

        self.populate_cache(
            &link.short_code,
            CachedLink {
                link_id: link.id,
                original_url: link.original_url.clone(),
            },
        )
        .await;

        counter!("links_created_total").increment(1);
        info!(link_id = link.id, short_code = %link.short_code, "Link created");

        Ok(link)
    }

    /// Resolves a short code to its target.
    ///
    /// A cache hit answers without touching the database.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(resolved))` if the code exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the cache missed and the database failed.
    pub async fn resolve(&self, short_code: &str) -> Result<Option<ResolvedLink>, AppError> {
        match self.cache.get(short_code).await {
            Ok(Some(entry)) => {
                counter!("cache_hits_total").increment(1);
                debug!("Cache HIT for {}", short_code);
                return Ok(Some(ResolvedLink {
                    link_id: entry.link_id,
                    original_url: entry.original_url,
                    from_cache: true,
                }));
            }
            Ok(None) => {
                counter!("cache_misses_total").increment(1);
                debug!("Cache MISS for {}", short_code);
            }
            Err(e) => {
                counter!("cache_errors_total").increment(1);
                warn!("Cache read failed for {}: {}. Falling back to database", short_code, e);
            }
        }

        let Some(link) = self.link_repository.find_by_code(short_code).await? else {
            return Ok(None);
        };

        self.populate_cache(
            short_code,
            CachedLink {
                link_id: link.id,
                original_url: link.original_url.clone(),
            },
        )
        .await;

        Ok(Some(ResolvedLink {
            link_id: link.id,
            original_url: link.original_url,
            from_cache: false,
        }))
    }

    /// Checks if the link store is reachable.
    pub async fn store_healthy(&self) -> bool {
        self.link_repository.health_check().await
    }

    /// Inserts the link, drawing a new code each time the store reports a collision.
    async fn insert_with_fresh_code(&self, original_url: &str) -> Result<Link, AppError> {
        for attempt in 1..=self.max_code_attempts {
            let new_link = NewLink {
                short_code: self.code_generator.generate(),
                original_url: original_url.to_string(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    counter!("code_collisions_total").increment(1);
                    warn!(
                        attempt,
                        max_attempts = self.max_code_attempts,
                        "Short code collision"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::conflict(
            "Failed to generate a unique short code",
            json!({ "attempts": self.max_code_attempts }),
        ))
    }

    async fn populate_cache(&self, short_code: &str, entry: CachedLink) {
        if let Err(e) = self.cache.set(short_code, &entry, self.cache_ttl).await {
            counter!("cache_errors_total").increment(1);
            warn!("Cache write failed for {}: {}", short_code, e);
        }
    }
}
