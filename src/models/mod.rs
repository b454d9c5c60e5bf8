//! Data models for the WeatherDash service
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and metadata
//! - Forecast: Raw upstream forecast payload and hourly records
//! - Weather: Normalized payload returned to clients

pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{
    CurrentWeather, DailySeries, HourlyRecord, HourlySeries, HourlyValues, RawForecast,
};
pub use location::Location;
pub use weather::{CurrentConditions, DailySummary, HourlyEntry, NormalizedResponse};
