//! Travel time between two addresses
//!
//! No routing provider is queried yet: every request gets the same fixed
//! commute, echoed back with the caller's addresses.

use serde::Serialize;
use tracing::instrument;

use crate::error::WeatherDashError;

/// Message returned when either address is missing or blank
pub const MISSING_ADDRESS: &str = "Missing from or to address";

const DISTANCE: &str = "12.3 km";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub severity: Severity,
    pub description: String,
}

impl Alert {
    fn new(severity: Severity, description: &str) -> Self {
        Self {
            severity,
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteInfo {
    pub duration: String,
    pub distance: String,
    pub traffic_status: String,
    pub traffic_level: TrafficLevel,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Routes {
    pub outbound: RouteInfo,
    #[serde(rename = "return")]
    pub return_trip: RouteInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelInfo {
    pub from: String,
    pub to: String,
    pub routes: Routes,
}

fn outbound() -> RouteInfo {
    RouteInfo {
        duration: "25 min".to_string(),
        distance: DISTANCE.to_string(),
        traffic_status: "Moderate traffic".to_string(),
        traffic_level: TrafficLevel::Moderate,
        alerts: vec![
            Alert::new(Severity::Medium, "Slow traffic on M77 near junction 3"),
            Alert::new(Severity::Low, "Minor delays on A77"),
        ],
    }
}

fn return_trip() -> RouteInfo {
    RouteInfo {
        duration: "28 min".to_string(),
        distance: DISTANCE.to_string(),
        traffic_status: "Heavy traffic".to_string(),
        traffic_level: TrafficLevel::Heavy,
        alerts: vec![Alert::new(Severity::High, "Major delays on M77 southbound")],
    }
}

fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[instrument]
pub fn get_travel(from: Option<&str>, to: Option<&str>) -> Result<TravelInfo, WeatherDashError> {
    let (Some(from), Some(to)) = (required(from), required(to)) else {
        return Err(WeatherDashError::missing_input(MISSING_ADDRESS));
    };

    tracing::debug!("Returning fixed commute");
    Ok(TravelInfo {
        from: from.to_string(),
        to: to.to_string(),
        routes: Routes {
            outbound: outbound(),
            return_trip: return_trip(),
        },
    })
}
