//! Weather lookups for a city or a coordinate pair

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use super::ForecastClient;
use super::normalize::{normalize, render_now};
use crate::error::WeatherDashError;
use crate::location_resolver::LocationResolver;
use crate::models::{Location, NormalizedResponse};

/// Message returned when neither a city nor both coordinates are given
pub const MISSING_LOCATION: &str = "Missing coordinates or city";

/// What the caller asked for. A non-blank city wins over coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl WeatherQuery {
    #[must_use]
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn coordinates(lat: f64, lon: f64) -> Self {
        Self {
            city: None,
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    fn trimmed_city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}

/// Resolves the location, fetches the forecast and normalizes it
pub struct WeatherService {
    resolver: LocationResolver,
    forecast: Arc<dyn ForecastClient>,
}

impl WeatherService {
    #[must_use]
    pub fn new(resolver: LocationResolver, forecast: Arc<dyn ForecastClient>) -> Self {
        Self { resolver, forecast }
    }

    #[must_use]
    pub fn resolver(&self) -> &LocationResolver {
        &self.resolver
    }

    async fn locate(&self, query: &WeatherQuery) -> Result<Location, WeatherDashError> {
        if let Some(city) = query.trimmed_city() {
            return match self.resolver.resolve(city).await? {
                Some(location) => Ok(location),
                None => {
                    warn!(city, "City not found");
                    Err(WeatherDashError::location_not_found(city))
                }
            };
        }

        match (query.lat, query.lon) {
            (Some(lat), Some(lon)) => Ok(Location::from_coordinates(lat, lon)),
            _ => Err(WeatherDashError::missing_input(MISSING_LOCATION)),
        }
    }

    #[instrument(skip(self))]
    pub async fn weather(&self, query: WeatherQuery) -> Result<NormalizedResponse, WeatherDashError> {
        let location = self.locate(&query).await?;
        debug!(coordinates = %location.format_coordinates(), "Location resolved");

        let raw = self
            .forecast
            .fetch(location.latitude, location.longitude)
            .await?;

        let now = render_now(Utc::now(), raw.utc_offset_seconds);
        let response = normalize(location, raw, &now);

        info!(
            timezone = %response.timezone,
            hours = response.hourly_24h.len(),
            days = response.daily.time.len(),
            "Weather normalized"
        );
        Ok(response)
    }
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService")
            .field("resolver", &self.resolver)
            .field("forecast", &"<ForecastClient>")
            .finish()
    }
}
