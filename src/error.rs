//! Error types and handling for `WeatherDash`

use thiserror::Error;

/// Main error type for the `WeatherDash` service
#[derive(Error, Debug)]
pub enum WeatherDashError {
    /// The client omitted required request parameters
    #[error("Missing input: {message}")]
    MissingInput { message: String },

    /// Geocoding produced no match for the query
    #[error("Location not found: {query}")]
    LocationNotFound { query: String },

    /// An external service failed or answered with a non-success status
    #[error("Upstream error from {service}: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl WeatherDashError {
    /// Create a new missing input error
    pub fn missing_input<S: Into<String>>(message: S) -> Self {
        Self::MissingInput {
            message: message.into(),
        }
    }

    /// Create a new location not found error
    pub fn location_not_found<S: Into<String>>(query: S) -> Self {
        Self::LocationNotFound {
            query: query.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(service: &'static str, message: S) -> Self {
        Self::Upstream {
            service,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherDashError::MissingInput { message } => message.clone(),
            WeatherDashError::LocationNotFound { .. } => "City not found".to_string(),
            WeatherDashError::Upstream { .. } => {
                "Upstream weather service unavailable".to_string()
            }
            WeatherDashError::Config { .. } => {
                "Configuration error. Please check the service configuration.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let missing = WeatherDashError::missing_input("Missing coordinates or city");
        assert!(matches!(missing, WeatherDashError::MissingInput { .. }));

        let not_found = WeatherDashError::location_not_found("Atlantis");
        assert!(matches!(not_found, WeatherDashError::LocationNotFound { .. }));

        let upstream = WeatherDashError::upstream("forecast", "HTTP 503");
        assert!(matches!(
            upstream,
            WeatherDashError::Upstream {
                service: "forecast",
                ..
            }
        ));
    }

    #[test]
    fn test_user_messages() {
        let missing = WeatherDashError::missing_input("Missing from or to address");
        assert_eq!(missing.user_message(), "Missing from or to address");

        let not_found = WeatherDashError::location_not_found("Atlantis");
        assert_eq!(not_found.user_message(), "City not found");

        let upstream = WeatherDashError::upstream("geocoding", "connection refused");
        assert!(!upstream.user_message().contains("connection refused"));
    }

    #[test]
    fn test_display_keeps_details() {
        let upstream = WeatherDashError::upstream("geocoding", "HTTP 500");
        assert_eq!(
            upstream.to_string(),
            "Upstream error from geocoding: HTTP 500"
        );
    }
}
