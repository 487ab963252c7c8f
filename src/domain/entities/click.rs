//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a shortened link is followed.
///
/// Clicks are append-only. They point back at their link through `link_id`
/// but never modify it.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub region: String,
    pub device: String,
    pub clicked_at: DateTime<Utc>,
}

impl Click {
    /// Creates a new Click instance.
    ///
    /// Raw request metadata is optional; the derived `region` and `device`
    /// classifications are always present (possibly as their "unknown" sentinels).
    pub fn new(
        id: i64,
        link_id: i64,
        ip: Option<String>,
        user_agent: Option<String>,
        region: String,
        device: String,
        clicked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            link_id,
            ip,
            user_agent,
            region,
            device,
            clicked_at,
        }
    }
}

/// Input data for recording a click. The timestamp is set by the database.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub region: String,
    pub device: String,
}
