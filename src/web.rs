use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    Router,
    http::StatusCode,
    response::{Html, Json},
    routing::get,
};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::config::AppConfig;
use crate::location_resolver::LocationResolver;
use crate::weather::{OpenMeteoForecastClient, OpenMeteoGeocoder, WeatherService};

const INDEX_HTML: &str = include_str!("../assets/index.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

/// Full application router: landing page, health, JSON API and static files
pub fn build_app(state: AppState, static_dir: &str, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/api", api::router(state))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::GATEWAY_TIMEOUT,
                    request_timeout,
                ))
                .layer(cors),
        )
}

/// Wire the Open-Meteo clients into the shared state
pub fn build_state(config: &AppConfig) -> Result<AppState> {
    let geocoder = OpenMeteoGeocoder::new(&config.geocoding)
        .context("Failed to create geocoding client")?;
    let forecast = OpenMeteoForecastClient::new(&config.weather)
        .context("Failed to create forecast client")?;

    let resolver = LocationResolver::new(Arc::new(geocoder), config.geocoding.cache_capacity);
    Ok(AppState::new(WeatherService::new(
        resolver,
        Arc::new(forecast),
    )))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

pub async fn run(config: AppConfig) -> Result<()> {
    let state = build_state(&config)?;
    let app = build_app(
        state,
        &config.server.static_dir,
        config.server.request_timeout(),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", config.server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Web server stopped");
    Ok(())
}
