//! Normalized weather payload returned to clients

use serde::Serialize;

use super::Location;

/// Unified current/hourly/daily view of one forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResponse {
    pub location: Location,
    pub timezone: String,
    pub satellite_url: String,
    pub current: CurrentConditions,
    pub hourly_24h: Vec<HourlyEntry>,
    pub daily: DailySummary,
}

/// "Right now" block; absent values serialize as `null`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub time: Option<String>,
    pub temperature_c: Option<f64>,
    pub temperature_f: Option<f64>,
    pub apparent_temperature_c: Option<f64>,
    pub apparent_temperature_f: Option<f64>,
    pub windspeed: Option<f64>,
    pub winddirection: Option<f64>,
    pub weathercode: Option<u8>,
    pub relative_humidity: Option<f64>,
    pub precipitation: Option<f64>,
}

/// One hour of the 24-hour window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyEntry {
    pub time: String,
    pub temperature_c: Option<f64>,
    pub temperature_f: Option<f64>,
    pub apparent_temperature_c: Option<f64>,
    pub apparent_temperature_f: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub precipitation: Option<f64>,
    pub precipitation_probability: Option<f64>,
}

/// Daily series under client-facing names
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySummary {
    pub time: Vec<String>,
    pub tmax_c: Vec<Option<f64>>,
    pub tmin_c: Vec<Option<f64>>,
    pub precip_sum_mm: Vec<Option<f64>>,
    pub wind_max: Vec<Option<f64>>,
    pub weathercode: Vec<Option<u8>>,
}
