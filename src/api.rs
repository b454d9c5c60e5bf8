//! JSON endpoints mounted under `/api`

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::error::WeatherDashError;
use crate::models::NormalizedResponse;
use crate::routing::{self, TravelInfo};
use crate::weather::{WeatherQuery, WeatherService};

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub weather: Arc<WeatherService>,
}

impl AppState {
    #[must_use]
    pub fn new(weather: WeatherService) -> Self {
        Self {
            weather: Arc::new(weather),
        }
    }
}

impl WeatherDashError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherDashError::MissingInput { .. } => StatusCode::BAD_REQUEST,
            WeatherDashError::LocationNotFound { .. } => StatusCode::NOT_FOUND,
            WeatherDashError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            WeatherDashError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WeatherDashError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

/// Raw query string for `/api/weather`; coordinates that fail to parse
/// are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct WeatherParams {
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

fn parse_coordinate(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl From<WeatherParams> for WeatherQuery {
    fn from(params: WeatherParams) -> Self {
        Self {
            lat: parse_coordinate(params.lat.as_deref()),
            lon: parse_coordinate(params.lon.as_deref()),
            city: params.city,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TravelParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/travel", get(get_travel))
        .with_state(state)
}

async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<NormalizedResponse>, WeatherDashError> {
    let response = state.weather.weather(params.into()).await?;
    Ok(Json(response))
}

async fn get_travel(Query(params): Query<TravelParams>) -> Result<Json<TravelInfo>, WeatherDashError> {
    let travel = routing::get_travel(params.from.as_deref(), params.to.as_deref())?;
    Ok(Json(travel))
}
