//! Contracts for deriving analytics dimensions from raw request metadata.
//!
//! Classifiers never fail observably: anything they cannot make sense of is
//! mapped to a sentinel ([`UNKNOWN_REGION`] or [`DeviceKind::Unknown`]).

use std::fmt;

/// Region reported when an IP cannot be located.
pub const UNKNOWN_REGION: &str = "Unknown";

/// Coarse device category of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    Desktop,
    Mobile,
    Tablet,
    Unknown,
}

impl DeviceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::Desktop => "desktop",
            DeviceKind::Mobile => "mobile",
            DeviceKind::Tablet => "tablet",
            DeviceKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a client IP to a country code.
pub trait RegionClassifier: Send + Sync {
    /// Returns an ISO 3166-1 alpha-2 code, or [`UNKNOWN_REGION`].
    fn classify_region(&self, ip: Option<&str>) -> String;
}

/// Maps a `User-Agent` header to a [`DeviceKind`].
pub trait DeviceClassifier: Send + Sync {
    fn classify_device(&self, user_agent: Option<&str>) -> DeviceKind;
}
