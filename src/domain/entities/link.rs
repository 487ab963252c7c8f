//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL as stored in the database.
///
/// Links are immutable once created: neither the code nor the target ever
/// change, which is what makes caching the mapping safe.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
}

/// Outcome of resolving a short code.
///
/// `from_cache` tells whether the answer came from the resolution cache
/// or from the database.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLink {
    pub link_id: i64,
    pub original_url: String,
    pub from_cache: bool,
}
