//! IP based region classification.

use std::net::IpAddr;

use maxminddb::Reader;
use tracing::trace;

use crate::domain::classifiers::{RegionClassifier, UNKNOWN_REGION};

/// Looks up client IPs in a local MaxMind GeoLite2 database.
///
/// Unparseable addresses, private ranges and addresses missing from the
/// database all map to `"Unknown"`.
pub struct MaxMindRegionClassifier {
    reader: Reader<Vec<u8>>,
}

impl MaxMindRegionClassifier {
    /// Opens a `.mmdb` file.
    pub fn open(path: &str) -> Result<Self, maxminddb::MaxMindDbError> {
        let reader = Reader::open_readfile(path)?;
        Ok(Self { reader })
    }

    fn lookup_country(&self, ip: &str) -> Option<String> {
        let ip_addr: IpAddr = ip.parse().ok()?;

        let result = self.reader.lookup(ip_addr).ok()?;
        let city: maxminddb::geoip2::City = result.decode().ok()??;

        city.country.iso_code.map(String::from)
    }
}

impl RegionClassifier for MaxMindRegionClassifier {
    fn classify_region(&self, ip: Option<&str>) -> String {
        let region = ip
            .and_then(|ip| self.lookup_country(ip))
            .unwrap_or_else(|| UNKNOWN_REGION.to_string());

        trace!("Region for {:?}: {}", ip, region);
        region
    }
}

/// Classifier used when no GeoIP database is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRegionClassifier;

impl RegionClassifier for NullRegionClassifier {
    fn classify_region(&self, _ip: Option<&str>) -> String {
        UNKNOWN_REGION.to_string()
    }
}
