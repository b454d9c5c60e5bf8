//! Temperature unit conversion

/// Convert Celsius to Fahrenheit. No rounding at this layer.
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Round to one decimal place for presentation
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Presentation value in Fahrenheit; absence stays absent
#[must_use]
pub fn fahrenheit_display(celsius: Option<f64>) -> Option<f64> {
    celsius.map(|c| round1(celsius_to_fahrenheit(c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 32.0)]
    #[case(100.0, 212.0)]
    #[case(-40.0, -40.0)]
    #[case(37.0, 98.6)]
    #[case(-17.5, 0.5)]
    fn test_celsius_to_fahrenheit(#[case] celsius: f64, #[case] expected: f64) {
        assert!((celsius_to_fahrenheit(celsius) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_conversion_matches_formula() {
        for tenth in -500..=500 {
            let c = f64::from(tenth) / 10.0;
            assert_eq!(celsius_to_fahrenheit(c), c * 9.0 / 5.0 + 32.0);
        }
    }

    #[rstest]
    #[case(7.4, 45.3)]
    #[case(12.34, 54.2)]
    #[case(-3.33, 26.0)]
    #[case(21.0, 69.8)]
    fn test_fahrenheit_display_rounds_to_one_decimal(#[case] celsius: f64, #[case] expected: f64) {
        let shown = fahrenheit_display(Some(celsius)).unwrap();
        assert!((shown - expected).abs() < 1e-9);
        assert!(((shown * 10.0).round() - shown * 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_fahrenheit_display_propagates_absence() {
        assert_eq!(fahrenheit_display(None), None);
    }
}
