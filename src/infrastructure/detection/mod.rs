//! Implementations of the region and device classifiers.
//!
//! - [`WootheeDeviceClassifier`] - `User-Agent` parsing with `woothee`
//! - [`MaxMindRegionClassifier`] - Country lookup in a GeoLite2 database
//! - [`NullRegionClassifier`] - Fallback when no database is configured

mod device;
mod region;

pub use device::WootheeDeviceClassifier;
pub use region::{MaxMindRegionClassifier, NullRegionClassifier};

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::classifiers::RegionClassifier;

/// Builds the region classifier for the configured GeoIP database.
///
/// Falls back to [`NullRegionClassifier`] when no path is set or the file
/// cannot be opened.
pub fn region_classifier(geoip_db_path: Option<&str>) -> Arc<dyn RegionClassifier> {
    let Some(path) = geoip_db_path else {
        info!("GeoIP database not configured, regions will be reported as Unknown");
        return Arc::new(NullRegionClassifier);
    };

    match MaxMindRegionClassifier::open(path) {
        Ok(classifier) => {
            info!("GeoIP: using MaxMind database at {}", path);
            Arc::new(classifier)
        }
        Err(e) => {
            warn!(
                "GeoIP: failed to open {}: {}. Regions will be reported as Unknown",
                path, e
            );
            Arc::new(NullRegionClassifier)
        }
    }
}
