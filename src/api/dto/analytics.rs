//! DTOs for the analytics endpoint.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entities::ClickSummary;

/// Click counts for a link, keys sorted for stable output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total: u64,
    pub by_region: BTreeMap<String, u64>,
    pub by_device: BTreeMap<String, u64>,
}

impl From<ClickSummary> for AnalyticsResponse {
    fn from(summary: ClickSummary) -> Self {
        Self {
            total: summary.total,
            by_region: summary.by_region,
            by_device: summary.by_device,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_grouped_counts() {
        let mut summary = ClickSummary::default();
        summary.add("US", "mobile");
        summary.add("US", "desktop");
        summary.add("DE", "mobile");

        let value = serde_json::to_value(AnalyticsResponse::from(summary)).unwrap();

        assert_eq!(
            value,
            json!({
                "total": 3,
                "byRegion": { "DE": 1, "US": 2 },
                "byDevice": { "desktop": 1, "mobile": 2 }
            })
        );
    }

    #[test]
    fn test_empty_summary() {
        let value = serde_json::to_value(AnalyticsResponse::from(ClickSummary::default())).unwrap();

        assert_eq!(value, json!({ "total": 0, "byRegion": {}, "byDevice": {} }));
    }
}
