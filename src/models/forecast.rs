//! Raw forecast payload as returned by the forecast API
//!
//! Every section and every series is optional upstream. Missing pieces
//! deserialize to empty values so the normalizer never has to deal with
//! out-of-range indices.

use serde::{Deserialize, Serialize};

/// Timezone label used when the upstream payload carries none
pub const DEFAULT_TIMEZONE: &str = "local";

/// Forecast response for a single coordinate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawForecast {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    /// Offset of the forecast's local time from UTC
    pub utc_offset_seconds: Option<i32>,
    #[serde(rename = "current_weather")]
    pub current: Option<CurrentWeather>,
    pub hourly: Option<HourlySeries>,
    pub daily: Option<DailySeries>,
}

/// Current weather snapshot
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentWeather {
    pub time: Option<String>,
    /// Temperature in Celsius
    pub temperature: Option<f64>,
    /// Wind speed in km/h
    pub windspeed: Option<f64>,
    /// Wind direction in degrees
    pub winddirection: Option<f64>,
    /// WMO weather code
    pub weathercode: Option<u8>,
}

/// Hourly parallel series sharing one `time` axis
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub apparent_temperature: Vec<Option<f64>>,
    pub relative_humidity_2m: Vec<Option<f64>>,
    pub precipitation: Vec<Option<f64>>,
    pub precipitation_probability: Vec<Option<f64>>,
    pub wind_speed_10m: Vec<Option<f64>>,
    pub wind_direction_10m: Vec<Option<f64>>,
}

/// Daily parallel series, passed through to clients untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub wind_speed_10m_max: Vec<Option<f64>>,
    pub weathercode: Vec<Option<u8>>,
}

/// Measurements of one hour; `None` when the series had no value there
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HourlyValues {
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub precipitation: Option<f64>,
    pub precipitation_probability: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
}

/// One entry of the hourly time axis with its measurements
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRecord {
    pub time: String,
    pub values: HourlyValues,
}

fn value_at(series: &[Option<f64>], index: usize) -> Option<f64> {
    series.get(index).copied().flatten()
}

impl HourlySeries {
    /// Values found at `index` in each series, independent of the time axis
    #[must_use]
    pub fn values_at(&self, index: usize) -> HourlyValues {
        HourlyValues {
            temperature: value_at(&self.temperature_2m, index),
            apparent_temperature: value_at(&self.apparent_temperature, index),
            relative_humidity: value_at(&self.relative_humidity_2m, index),
            precipitation: value_at(&self.precipitation, index),
            precipitation_probability: value_at(&self.precipitation_probability, index),
            wind_speed: value_at(&self.wind_speed_10m, index),
            wind_direction: value_at(&self.wind_direction_10m, index),
        }
    }

    /// Zip the parallel series into one record per timestamp
    #[must_use]
    pub fn records(&self) -> Vec<HourlyRecord> {
        self.time
            .iter()
            .enumerate()
            .map(|(index, time)| HourlyRecord {
                time: time.clone(),
                values: self.values_at(index),
            })
            .collect()
    }
}

impl RawForecast {
    /// Timezone reported upstream, or [`DEFAULT_TIMEZONE`]
    #[must_use]
    pub fn timezone(&self) -> &str {
        self.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE)
    }
}
