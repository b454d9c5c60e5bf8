//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// A resolved place or a bare coordinate pair.
///
/// Optional metadata is omitted from JSON when absent, so a location built
/// from caller-supplied coordinates serializes as `{"lat": .., "lon": ..}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Place name as reported by the geocoder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Country name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Latitude in decimal degrees
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// First-level administrative region (state, province, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin1: Option<String>,
}

impl Location {
    /// Create a location from coordinates only
    #[must_use]
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            name: None,
            country: None,
            latitude,
            longitude,
            admin1: None,
        }
    }

    /// Create a named location
    #[must_use]
    pub fn named(
        name: impl Into<String>,
        country: Option<String>,
        latitude: f64,
        longitude: f64,
        admin1: Option<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            country,
            latitude,
            longitude,
            admin1,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
