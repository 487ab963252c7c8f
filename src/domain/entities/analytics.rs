//! Click summary computed over a link's full click history.

use std::collections::BTreeMap;

use super::click::Click;

/// Counts of clicks grouped by region and by device.
///
/// Built by folding over an unordered collection of clicks, so the result
/// does not depend on the order the database returns them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickSummary {
    pub total: u64,
    pub by_region: BTreeMap<String, u64>,
    pub by_device: BTreeMap<String, u64>,
}

impl ClickSummary {
    /// Adds one click to the counts.
    pub fn add(&mut self, region: &str, device: &str) {
        self.total += 1;
        *self.by_region.entry(region.to_string()).or_insert(0) += 1;
        *self.by_device.entry(device.to_string()).or_insert(0) += 1;
    }
}

impl<'a> FromIterator<&'a Click> for ClickSummary {
    fn from_iter<I: IntoIterator<Item = &'a Click>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut summary, click| {
            summary.add(&click.region, &click.device);
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn click(region: &str, device: &str) -> Click {
        Click::new(
            0,
            1,
            None,
            None,
            region.to_string(),
            device.to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_summary() {
        let summary: ClickSummary = Vec::<Click>::new().iter().collect();

        assert_eq!(summary.total, 0);
        assert!(summary.by_region.is_empty());
        assert!(summary.by_device.is_empty());
    }

    #[test]
    fn test_groups_by_region_and_device() {
        let clicks = vec![
            click("US", "mobile"),
            click("US", "desktop"),
            click("DE", "mobile"),
        ];

        let summary: ClickSummary = clicks.iter().collect();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_region.get("US"), Some(&2));
        assert_eq!(summary.by_region.get("DE"), Some(&1));
        assert_eq!(summary.by_device.get("mobile"), Some(&2));
        assert_eq!(summary.by_device.get("desktop"), Some(&1));
    }

    #[test]
    fn test_order_independent() {
        let forward = vec![
            click("US", "mobile"),
            click("Unknown", "unknown"),
            click("FR", "tablet"),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let a: ClickSummary = forward.iter().collect();
        let b: ClickSummary = backward.iter().collect();

        assert_eq!(a, b);
    }
}
