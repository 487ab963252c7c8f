//! DTOs for link creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: u64 = 2048;

/// Request to shorten a URL.
///
/// `originalUrl` is optional at the serde level so that a missing field is
/// reported with the same validation error as an empty one.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[validate(length(max = MAX_URL_LENGTH, message = "originalUrl must be at most 2048 characters"))]
    pub original_url: Option<String>,
}

/// A created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub link_id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            link_id: link.id,
            short_code: link.short_code,
            original_url: link.original_url,
            created_at: link.created_at,
        }
    }
}
