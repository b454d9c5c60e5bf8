//! Open-Meteo HTTP clients
//!
//! Geocoding (<https://geocoding-api.open-meteo.com>) and forecast
//! (<https://api.open-meteo.com>) endpoints. Neither requires an API key.
//! Calls are single-shot: a timeout, transport failure or non-success
//! status is reported immediately, without retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error, instrument};

use super::ForecastClient;
use crate::config::{GeocodingConfig, WeatherConfig};
use crate::error::WeatherDashError;
use crate::location_resolver::GeocodeClient;
use crate::models::{Location, RawForecast};

/// Hourly series requested from the forecast endpoint
pub const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,precipitation,precipitation_probability,wind_speed_10m,wind_direction_10m,apparent_temperature";

/// Daily series requested from the forecast endpoint
pub const DAILY_FIELDS: &str =
    "weathercode,temperature_2m_max,temperature_2m_min,precipitation_sum,wind_speed_10m_max";

const USER_AGENT: &str = concat!("WeatherDash/", env!("CARGO_PKG_VERSION"));

/// Open-Meteo client errors
#[derive(Debug, Error)]
pub enum OpenMeteoError {
    /// HTTP client could not be built
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// Request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Transport-level failure
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream answered with a non-success status
    #[error("Unexpected status: HTTP {0}")]
    Status(u16),

    /// Body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl OpenMeteoError {
    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::RequestFailed(err.to_string())
        }
    }

    fn into_upstream(self, service: &'static str) -> WeatherDashError {
        WeatherDashError::upstream(service, self.to_string())
    }
}

fn build_client(timeout: Duration) -> Result<Client, OpenMeteoError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| OpenMeteoError::ClientSetup(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, OpenMeteoError> {
    debug!(url = %url, ?query, "Calling Open-Meteo");

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| OpenMeteoError::from_reqwest(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(OpenMeteoError::Status(status.as_u16()));
    }

    response
        .json()
        .await
        .map_err(|e| OpenMeteoError::ParseError(e.to_string()))
}

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: Option<String>,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location {
            name: result.name,
            country: result.country,
            latitude: result.latitude,
            longitude: result.longitude,
            admin1: result.admin1,
        }
    }
}

/// Place-name lookup against the Open-Meteo geocoding API
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    client: Client,
    base_url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self, WeatherDashError> {
        let client = build_client(config.timeout()).map_err(|e| e.into_upstream("geocoding"))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GeocodeClient for OpenMeteoGeocoder {
    #[instrument(skip(self))]
    async fn geocode(&self, city: &str) -> Result<Option<Location>, WeatherDashError> {
        let url = format!("{}/search", self.base_url);
        let query = [
            ("name", city.to_string()),
            ("count", "1".to_string()),
            ("language", "en".to_string()),
            ("format", "json".to_string()),
        ];

        let response: GeocodingResponse =
            get_json(&self.client, &url, &query).await.map_err(|e| {
                error!(error = %e, "Geocoding request failed");
                e.into_upstream("geocoding")
            })?;

        let location = response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(Location::from);

        match &location {
            Some(found) => debug!(
                name = ?found.name,
                coordinates = %found.format_coordinates(),
                "Geocoding match"
            ),
            None => debug!("Geocoding returned no results"),
        }

        Ok(location)
    }
}

/// Forecast fetches against the Open-Meteo forecast API
#[derive(Debug, Clone)]
pub struct OpenMeteoForecastClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoForecastClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherDashError> {
        let client = build_client(config.timeout()).map_err(|e| e.into_upstream("forecast"))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn forecast_query(latitude: f64, longitude: f64) -> [(&'static str, String); 6] {
        [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current_weather", "true".to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ]
    }
}

#[async_trait]
impl ForecastClient for OpenMeteoForecastClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<RawForecast, WeatherDashError> {
        let url = format!("{}/forecast", self.base_url);
        let query = Self::forecast_query(latitude, longitude);

        let forecast: RawForecast = get_json(&self.client, &url, &query).await.map_err(|e| {
            error!(error = %e, "Forecast request failed");
            e.into_upstream("forecast")
        })?;

        debug!(
            hours = forecast.hourly.as_ref().map_or(0, |h| h.time.len()),
            days = forecast.daily.as_ref().map_or(0, |d| d.time.len()),
            "Forecast received"
        );
        Ok(forecast)
    }
}
