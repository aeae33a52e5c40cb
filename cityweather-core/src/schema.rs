//! Shape check for the provider's current-conditions payload.
//!
//! The body is untrusted: it is decoded into strict typed structs and then
//! converted into a [`WeatherReport`]. Anything that does not fit becomes
//! [`FetchError::InvalidSchema`]. Unknown extra fields are ignored.

use serde::Deserialize;

use crate::{
    error::FetchError,
    model::{Condition, WeatherReport},
};

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl TryFrom<OwCurrentResponse> for WeatherReport {
    type Error = FetchError;

    fn try_from(raw: OwCurrentResponse) -> Result<Self, Self::Error> {
        let conditions = raw
            .weather
            .into_iter()
            .map(|w| Condition {
                main_category: w.main,
                description: w.description,
                icon_code: w.icon,
            })
            .collect();

        WeatherReport::new(
            raw.name,
            raw.main.temp,
            raw.main.feels_like,
            raw.main.humidity,
            conditions,
            raw.wind.speed,
        )
    }
}

/// Validate a current-conditions body.
pub(crate) fn parse_current(body: &str) -> Result<WeatherReport, FetchError> {
    let raw: OwCurrentResponse =
        serde_json::from_str(body).map_err(|err| FetchError::InvalidSchema(err.to_string()))?;

    WeatherReport::try_from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paris() -> serde_json::Value {
        json!({
            "coord": { "lon": 2.35, "lat": 48.85 },
            "name": "Paris",
            "main": { "temp": 15.4, "feels_like": 14.7, "humidity": 72, "pressure": 1016 },
            "weather": [
                { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
            ],
            "wind": { "speed": 3.6, "deg": 240 },
            "cod": 200
        })
    }

    #[test]
    fn accepts_full_payload_and_passes_numbers_through() {
        let report = parse_current(&paris().to_string()).expect("valid payload");

        assert_eq!(report.location_name(), "Paris");
        assert_eq!(report.temperature_c(), 15.4);
        assert_eq!(report.feels_like_c(), 14.7);
        assert_eq!(report.humidity_pct(), 72.0);
        assert_eq!(report.wind_speed_mps(), 3.6);
        assert_eq!(report.primary_condition().main_category, "Clear");
        assert_eq!(report.primary_condition().description, "clear sky");
        assert_eq!(report.primary_condition().icon_code, "01d");
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let removals: [(&str, Option<&str>); 8] = [
            ("name", None),
            ("main", None),
            ("main", Some("temp")),
            ("main", Some("humidity")),
            ("main", Some("feels_like")),
            ("weather", None),
            ("wind", None),
            ("wind", Some("speed")),
        ];

        for (field, nested) in removals {
            let mut body = paris();
            match nested {
                Some(inner) => {
                    body[field].as_object_mut().expect("object").remove(inner);
                }
                None => {
                    body.as_object_mut().expect("object").remove(field);
                }
            }

            let err = parse_current(&body.to_string()).unwrap_err();
            assert!(matches!(err, FetchError::InvalidSchema(_)), "{field}/{nested:?}: {err:?}");
        }
    }

    #[test]
    fn missing_condition_fields_are_rejected() {
        for key in ["main", "description", "icon"] {
            let mut body = paris();
            body["weather"][0].as_object_mut().expect("object").remove(key);

            let err = parse_current(&body.to_string()).unwrap_err();
            assert!(matches!(err, FetchError::InvalidSchema(_)), "{key}");
        }
    }

    #[test]
    fn wrong_types_are_rejected() {
        let mut body = paris();
        body["main"]["temp"] = json!("15.4");
        assert!(matches!(
            parse_current(&body.to_string()),
            Err(FetchError::InvalidSchema(_))
        ));

        let mut body = paris();
        body["name"] = json!(null);
        assert!(matches!(
            parse_current(&body.to_string()),
            Err(FetchError::InvalidSchema(_))
        ));

        let mut body = paris();
        body["weather"] = json!({ "main": "Clear" });
        assert!(matches!(
            parse_current(&body.to_string()),
            Err(FetchError::InvalidSchema(_))
        ));
    }

    #[test]
    fn empty_weather_list_is_rejected() {
        let mut body = paris();
        body["weather"] = json!([]);

        let err = parse_current(&body.to_string()).unwrap_err();
        assert!(matches!(err, FetchError::InvalidSchema(_)));
    }

    #[test]
    fn non_json_body_is_rejected() {
        let err = parse_current("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::InvalidSchema(_)));
    }
}
