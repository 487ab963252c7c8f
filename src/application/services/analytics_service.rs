//! Click recording and per-link analytics.

use std::sync::Arc;

use metrics::counter;
use tracing::{debug, error};

use crate::domain::entities::{Click, ClickSummary, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Service for recording clicks and summarizing them.
pub struct AnalyticsService {
    repository: Arc<dyn ClickRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(repository: Arc<dyn ClickRepository>) -> Self {
        Self { repository }
    }

    /// Records a click for a link.
    ///
    /// Recording is best effort: a store failure is logged and reported as
    /// `None` so that it can never affect the redirect that produced the click.
    pub async fn record_click(
        &self,
        link_id: i64,
        ip: Option<String>,
        user_agent: Option<String>,
        region: String,
        device: String,
    ) -> Option<Click> {
        let new_click = NewClick {
            link_id,
            ip,
            user_agent,
            region,
            device,
        };

        match self.repository.insert(new_click).await {
            Ok(click) => {
                counter!("clicks_recorded_total").increment(1);
                debug!(link_id, click_id = click.id, "Click recorded");
                Some(click)
            }
            Err(e) => {
                counter!("clicks_failed_total").increment(1);
                error!(link_id, "Failed to record click: {}", e);
                None
            }
        }
    }

    /// Summarizes every click of the link behind `short_code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(summary))` if the link exists (with zero counts if it has no clicks)
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_analytics(&self, short_code: &str) -> Result<Option<ClickSummary>, AppError> {
        let Some(found) = self.repository.find_link_with_clicks(short_code).await? else {
            return Ok(None);
        };

        Ok(Some(found.clicks.iter().collect()))
    }
}
