//! Weather data: upstream forecast fetches, unit conversion and the
//! normalization that turns a raw forecast into the client payload.

use async_trait::async_trait;

use crate::error::WeatherDashError;
use crate::models::RawForecast;

pub mod normalize;
pub mod open_meteo;
pub mod service;
pub mod units;

pub use normalize::{WINDOW_HOURS, normalize, render_now, satellite_url};
pub use open_meteo::{OpenMeteoForecastClient, OpenMeteoGeocoder};
pub use service::{WeatherQuery, WeatherService};

/// Forecast provider for a coordinate pair
#[async_trait]
pub trait ForecastClient: Send + Sync {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<RawForecast, WeatherDashError>;
}
