//! Click event model for asynchronous click tracking.

/// A redirect that still has to be recorded.
///
/// Created by the redirect handler and sent through a bounded channel to the
/// click worker, so the HTTP response never waits on the database. Request
/// metadata is kept raw here; region and device are derived by the worker.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    pub short_code: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let event = ClickEvent::new(
    ///     42,
    ///     "Ab3dE9xZ".to_string(),
    ///     Some("203.0.113.7".to_string()),
    ///     Some("Mozilla/5.0"),
    /// );
    /// ```
    pub fn new(
        link_id: i64,
        short_code: String,
        ip: Option<String>,
        user_agent: Option<&str>,
    ) -> Self {
        Self {
            link_id,
            short_code,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
        }
    }
}
