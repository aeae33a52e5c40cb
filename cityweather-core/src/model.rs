use std::fmt;

use serde::Serialize;

use crate::error::FetchError;

/// A city name as entered by the user, trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery(String);

impl WeatherQuery {
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let city = raw.trim();
        if city.is_empty() {
            return Err(FetchError::InvalidInput);
        }

        Ok(WeatherQuery(city.to_string()))
    }

    pub fn city(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for WeatherQuery {
    type Error = FetchError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        WeatherQuery::parse(value)
    }
}

impl fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the provider's `weather` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub main_category: String,
    pub description: String,
    pub icon_code: String,
}

/// Validated current conditions for one location.
///
/// Only constructible through the schema validator or [`WeatherReport::new`],
/// both of which reject an empty `conditions` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    location_name: String,
    temperature_c: f64,
    feels_like_c: f64,
    humidity_pct: f64,
    conditions: Vec<Condition>,
    wind_speed_mps: f64,
}

impl WeatherReport {
    pub fn new(
        location_name: String,
        temperature_c: f64,
        feels_like_c: f64,
        humidity_pct: f64,
        conditions: Vec<Condition>,
        wind_speed_mps: f64,
    ) -> Result<Self, FetchError> {
        if conditions.is_empty() {
            return Err(FetchError::InvalidSchema(
                "`weather` must contain at least one entry".to_string(),
            ));
        }

        Ok(WeatherReport {
            location_name,
            temperature_c,
            feels_like_c,
            humidity_pct,
            conditions,
            wind_speed_mps,
        })
    }

    pub fn location_name(&self) -> &str {
        &self.location_name
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn feels_like_c(&self) -> f64 {
        self.feels_like_c
    }

    pub fn humidity_pct(&self) -> f64 {
        self.humidity_pct
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// The first condition, which drives icon and background selection.
    pub fn primary_condition(&self) -> &Condition {
        // non-empty by construction
        &self.conditions[0]
    }

    pub fn wind_speed_mps(&self) -> f64 {
        self.wind_speed_mps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        let query = WeatherQuery::parse("  New York \t").expect("valid city");
        assert_eq!(query.city(), "New York");
        assert_eq!(query.to_string(), "New York");
    }

    #[test]
    fn blank_queries_are_rejected() {
        for raw in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(WeatherQuery::parse(raw), Err(FetchError::InvalidInput), "{raw:?}");
        }
    }

    #[test]
    fn report_requires_a_condition() {
        let err = WeatherReport::new("Paris".into(), 15.4, 14.0, 72.0, vec![], 3.6).unwrap_err();
        assert!(matches!(err, FetchError::InvalidSchema(_)));
    }

    #[test]
    fn primary_condition_is_first_entry() {
        let report = WeatherReport::new(
            "Oslo".into(),
            -3.2,
            -8.0,
            90.0,
            vec![
                Condition {
                    main_category: "Snow".into(),
                    description: "light snow".into(),
                    icon_code: "13d".into(),
                },
                Condition {
                    main_category: "Mist".into(),
                    description: "mist".into(),
                    icon_code: "50d".into(),
                },
            ],
            5.1,
        )
        .expect("valid report");

        assert_eq!(report.primary_condition().main_category, "Snow");
        assert_eq!(report.conditions().len(), 2);
    }
}
