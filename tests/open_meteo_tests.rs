//! Integration tests for the Open-Meteo clients using wiremock
//!
//! These tests run the geocoding and forecast clients against a mock HTTP
//! server and check request parameters, decoding and error mapping.

use std::time::Duration;

use weatherdash::config::{GeocodingConfig, WeatherConfig};
use weatherdash::weather::open_meteo::{DAILY_FIELDS, HOURLY_FIELDS};
use weatherdash::weather::{OpenMeteoForecastClient, OpenMeteoGeocoder};
use weatherdash::{ForecastClient, GeocodeClient, WeatherDashError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn geocoder(mock_server: &MockServer) -> OpenMeteoGeocoder {
    let config = GeocodingConfig {
        base_url: mock_server.uri(),
        timeout_seconds: 1,
        ..GeocodingConfig::default()
    };
    OpenMeteoGeocoder::new(&config).unwrap()
}

fn forecast_client(mock_server: &MockServer) -> OpenMeteoForecastClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_seconds: 1,
    };
    OpenMeteoForecastClient::new(&config).unwrap()
}

fn paris_search_response() -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "id": 2988507,
                "name": "Paris",
                "latitude": 48.85341,
                "longitude": 2.3488,
                "elevation": 42.0,
                "country_code": "FR",
                "timezone": "Europe/Paris",
                "country": "France",
                "admin1": "Île-de-France"
            }
        ],
        "generationtime_ms": 0.5
    })
}

fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 48.86,
        "longitude": 2.3399997,
        "generationtime_ms": 0.2,
        "utc_offset_seconds": 3600,
        "timezone": "Europe/Paris",
        "timezone_abbreviation": "CET",
        "current_weather": {
            "time": "2024-01-15T12:00",
            "temperature": 7.4,
            "windspeed": 11.2,
            "winddirection": 240,
            "weathercode": 3,
            "is_day": 1
        },
        "hourly": {
            "time": ["2024-01-15T00:00", "2024-01-15T01:00", "2024-01-15T02:00"],
            "temperature_2m": [6.1, null, 5.8],
            "relative_humidity_2m": [81, 83, 85],
            "precipitation": [0.0, 0.1, 0.0],
            "precipitation_probability": [10, 20, 15],
            "wind_speed_10m": [9.8, 10.4, 11.0],
            "wind_direction_10m": [230, 235, 240],
            "apparent_temperature": [3.2, 2.9, 2.5]
        },
        "daily": {
            "time": ["2024-01-15", "2024-01-16"],
            "weathercode": [3, 61],
            "temperature_2m_max": [8.0, 6.0],
            "temperature_2m_min": [2.0, 1.0],
            "precipitation_sum": [0.0, 5.5],
            "wind_speed_10m_max": [15.0, 20.0]
        }
    })
}

#[tokio::test]
async fn test_geocode_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "Paris"))
        .and(query_param("count", "1"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_search_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let location = geocoder(&mock_server)
        .geocode("Paris")
        .await
        .unwrap()
        .expect("Paris should resolve");

    assert_eq!(location.name.as_deref(), Some("Paris"));
    assert_eq!(location.country.as_deref(), Some("France"));
    assert_eq!(location.admin1.as_deref(), Some("Île-de-France"));
    assert!((location.latitude - 48.86).abs() < 0.01);
    assert!((location.longitude - 2.35).abs() < 0.01);
}

#[tokio::test]
async fn test_geocode_empty_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})),
        )
        .mount(&mock_server)
        .await;

    let location = geocoder(&mock_server).geocode("Atlantis").await.unwrap();
    assert!(location.is_none());
}

#[tokio::test]
async fn test_geocode_result_without_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "Somewhere"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{"latitude": 10.0, "longitude": 20.0, "country": "X"}]
        })))
        .mount(&mock_server)
        .await;

    let location = geocoder(&mock_server)
        .geocode("Somewhere")
        .await
        .unwrap()
        .expect("a match without a name is still a match");

    assert_eq!(location.name, None);
    assert_eq!(location.country.as_deref(), Some("X"));
    assert_eq!(location.admin1, None);
    assert_eq!(location.latitude, 10.0);
    assert_eq!(location.longitude, 20.0);
    assert_eq!(
        serde_json::to_value(&location).unwrap(),
        serde_json::json!({"country": "X", "lat": 10.0, "lon": 20.0})
    );
}

#[tokio::test]
async fn test_geocode_missing_results_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"generationtime_ms": 0.3})),
        )
        .mount(&mock_server)
        .await;

    let location = geocoder(&mock_server)
        .geocode("Nonexistent City Name")
        .await
        .unwrap();
    assert!(location.is_none());
}

#[tokio::test]
async fn test_geocode_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = geocoder(&mock_server).geocode("Paris").await.unwrap_err();
    match err {
        WeatherDashError::Upstream { service, message } => {
            assert_eq!(service, "geocoding");
            assert!(message.contains("500"));
        }
        other => panic!("Expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_forecast_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "48.85341"))
        .and(query_param("longitude", "2.3488"))
        .and(query_param("current_weather", "true"))
        .and(query_param("hourly", HOURLY_FIELDS))
        .and(query_param("daily", DAILY_FIELDS))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let forecast = forecast_client(&mock_server)
        .fetch(48.85341, 2.3488)
        .await
        .unwrap();

    assert_eq!(forecast.timezone(), "Europe/Paris");
    assert_eq!(forecast.utc_offset_seconds, Some(3600));

    let current = forecast.current.expect("current block");
    assert_eq!(current.temperature, Some(7.4));
    assert_eq!(current.weathercode, Some(3));

    let hourly = forecast.hourly.expect("hourly block");
    let records = hourly.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].values.temperature, None);
    assert_eq!(records[2].values.wind_direction, Some(240.0));

    let daily = forecast.daily.expect("daily block");
    assert_eq!(daily.weathercode, vec![Some(3), Some(61)]);
}

#[tokio::test]
async fn test_forecast_partial_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latitude": 10.0,
                "longitude": 20.0
            })),
        )
        .mount(&mock_server)
        .await;

    let forecast = forecast_client(&mock_server).fetch(10.0, 20.0).await.unwrap();

    assert!(forecast.current.is_none());
    assert!(forecast.hourly.is_none());
    assert_eq!(forecast.timezone(), "local");
}

#[tokio::test]
async fn test_forecast_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = forecast_client(&mock_server)
        .fetch(10.0, 20.0)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        WeatherDashError::Upstream {
            service: "forecast",
            ..
        }
    ));
}

#[tokio::test]
async fn test_forecast_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = forecast_client(&mock_server)
        .fetch(10.0, 20.0)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Parse error"));
}

#[tokio::test]
async fn test_forecast_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(sample_forecast_response())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let err = forecast_client(&mock_server)
        .fetch(10.0, 20.0)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("timed out"));
}
