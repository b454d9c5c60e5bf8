//! Forecast normalization
//!
//! Turns a [`RawForecast`] into the client-facing [`NormalizedResponse`]:
//! a "right now" block, the next 24 hourly samples and the daily series.
//! Everything here is pure; the caller supplies "now".

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Utc};

use super::units::fahrenheit_display;
use crate::models::{
    CurrentConditions, CurrentWeather, DailySeries, DailySummary, HourlyEntry, HourlyRecord,
    HourlySeries, Location, NormalizedResponse, RawForecast,
};

/// Number of hourly samples returned to clients
pub const WINDOW_HOURS: usize = 24;

/// Timestamp layout compared against the hourly time axis
const NOW_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Render `now` in the forecast's local time when the offset is known,
/// otherwise in the server's local time.
#[must_use]
pub fn render_now(now: DateTime<Utc>, utc_offset_seconds: Option<i32>) -> String {
    local_naive(now, utc_offset_seconds)
        .format(NOW_FORMAT)
        .to_string()
}

fn local_naive(now: DateTime<Utc>, utc_offset_seconds: Option<i32>) -> NaiveDateTime {
    match utc_offset_seconds.and_then(FixedOffset::east_opt) {
        Some(offset) => now.with_timezone(&offset).naive_local(),
        None => now.with_timezone(&Local).naive_local(),
    }
}

/// Index of the first record strictly after `now`, or 0 if there is none.
///
/// Timestamps are ISO-8601 strings of one layout, so string order is
/// chronological order.
fn window_start(records: &[HourlyRecord], now: &str) -> usize {
    records
        .iter()
        .position(|record| record.time.as_str() > now)
        .unwrap_or(0)
}

/// Up to [`WINDOW_HOURS`] records starting at the first future sample
#[must_use]
pub fn next_hours<'a>(records: &'a [HourlyRecord], now: &str) -> &'a [HourlyRecord] {
    let start = window_start(records, now);
    let end = records.len().min(start + WINDOW_HOURS);
    &records[start..end]
}

/// Deterministic precipitation radar embed for a coordinate
#[must_use]
pub fn satellite_url(latitude: f64, longitude: f64) -> String {
    format!(
        "https://embed.windy.com/embed2.html?lat={latitude}&lon={longitude}&zoom=8&level=surface&overlay=rain&product=ecmwf&menu=&message=&marker=&calendar=&pressure=&type=map&location=coordinates&detail=&metricWind=default&metricTemp=%C2%B0C&radarRange=-1"
    )
}

impl From<&HourlyRecord> for HourlyEntry {
    fn from(record: &HourlyRecord) -> Self {
        let values = &record.values;
        Self {
            time: record.time.clone(),
            temperature_c: values.temperature,
            temperature_f: fahrenheit_display(values.temperature),
            apparent_temperature_c: values.apparent_temperature,
            apparent_temperature_f: fahrenheit_display(values.apparent_temperature),
            wind_speed: values.wind_speed,
            wind_direction: values.wind_direction,
            precipitation: values.precipitation,
            precipitation_probability: values.precipitation_probability,
        }
    }
}

impl From<DailySeries> for DailySummary {
    fn from(daily: DailySeries) -> Self {
        Self {
            time: daily.time,
            tmax_c: daily.temperature_2m_max,
            tmin_c: daily.temperature_2m_min,
            precip_sum_mm: daily.precipitation_sum,
            wind_max: daily.wind_speed_10m_max,
            weathercode: daily.weathercode,
        }
    }
}

fn current_conditions(current: CurrentWeather, hourly: &HourlySeries) -> CurrentConditions {
    // Hour-level fields come from the first hourly slot, not the window start.
    let first_hour = hourly.values_at(0);

    CurrentConditions {
        temperature_f: fahrenheit_display(current.temperature),
        temperature_c: current.temperature,
        time: current.time,
        apparent_temperature_c: first_hour.apparent_temperature,
        apparent_temperature_f: fahrenheit_display(first_hour.apparent_temperature),
        windspeed: current.windspeed,
        winddirection: current.winddirection,
        weathercode: current.weathercode,
        relative_humidity: first_hour.relative_humidity,
        precipitation: first_hour.precipitation,
    }
}

/// Build the client payload for `location` from `raw`, windowed at `now`.
#[must_use]
pub fn normalize(location: Location, raw: RawForecast, now: &str) -> NormalizedResponse {
    let timezone = raw.timezone().to_string();
    let hourly = raw.hourly.unwrap_or_default();
    let records = hourly.records();

    let hourly_24h = next_hours(&records, now)
        .iter()
        .map(HourlyEntry::from)
        .collect();

    NormalizedResponse {
        satellite_url: satellite_url(location.latitude, location.longitude),
        timezone,
        current: current_conditions(raw.current.unwrap_or_default(), &hourly),
        hourly_24h,
        daily: raw.daily.unwrap_or_default().into(),
        location,
    }
}
