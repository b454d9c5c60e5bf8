//! `WeatherDash` - weather and commute dashboard backend
//!
//! This library resolves place names, fetches Open-Meteo forecasts and
//! normalizes them into a compact payload, and serves it over HTTP together
//! with a travel-time endpoint.

pub mod api;
pub mod config;
pub mod error;
pub mod location_resolver;
pub mod logging;
pub mod models;
pub mod routing;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::AppConfig;
pub use error::WeatherDashError;
pub use location_resolver::{GeocodeClient, LocationResolver};
pub use models::{Location, NormalizedResponse, RawForecast};
pub use routing::TravelInfo;
pub use weather::{ForecastClient, WeatherQuery, WeatherService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherDashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
