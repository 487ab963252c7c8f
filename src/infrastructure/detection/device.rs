//! User-Agent based device classification using `woothee`.

use tracing::trace;
use woothee::parser::Parser;

use crate::domain::classifiers::{DeviceClassifier, DeviceKind};

/// Classifies clients from their `User-Agent` header.
///
/// - no header or a blank one → `unknown`
/// - woothee `smartphone` / `mobilephone` → `mobile`, or `tablet` for iPads,
///   Android agents without the `Mobile` token and agents that say `Tablet`
/// - anything else, including agents woothee does not recognise → `desktop`
#[derive(Debug, Clone, Copy, Default)]
pub struct WootheeDeviceClassifier;

impl WootheeDeviceClassifier {
    pub fn new() -> Self {
        Self
    }
}

fn looks_like_tablet(user_agent: &str) -> bool {
    user_agent.contains("iPad")
        || user_agent.contains("Tablet")
        || (user_agent.contains("Android") && !user_agent.contains("Mobile"))
}

impl DeviceClassifier for WootheeDeviceClassifier {
    fn classify_device(&self, user_agent: Option<&str>) -> DeviceKind {
        let Some(ua) = user_agent.map(str::trim).filter(|ua| !ua.is_empty()) else {
            return DeviceKind::Unknown;
        };

        let parser = Parser::new();
        let category = parser.parse(ua).map(|r| r.category).unwrap_or_default();

        let kind = match category {
            "smartphone" | "mobilephone" if looks_like_tablet(ua) => DeviceKind::Tablet,
            "smartphone" | "mobilephone" => DeviceKind::Mobile,
            _ => DeviceKind::Desktop,
        };

        trace!("Device for {:?}: category={}, kind={}", ua, category, kind);
        kind
    }
}
