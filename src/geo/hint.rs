use serde::{Deserialize, Serialize};
use std::fmt;

/// Latitude/longitude pair used to bias the model toward a region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoHint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoHint {
    /// Rotterdam city centre, the club's home.
    pub const ROTTERDAM: GeoHint = GeoHint {
        latitude: 51.9225,
        longitude: 4.47917,
    };

    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Default for GeoHint {
    fn default() -> Self {
        Self::ROTTERDAM
    }
}

impl fmt::Display for GeoHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
