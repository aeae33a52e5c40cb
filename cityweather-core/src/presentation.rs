//! Presentation state derived from a validated report.
//!
//! Unknown provider categories never fail: the icon degrades to
//! [`IconVariant::Clouds`] and the background to [`DEFAULT_BACKGROUND`].
//! The two fallbacks are independent.

use serde::Serialize;

use crate::model::WeatherReport;

/// Background shown before any search and for unmapped categories.
pub const DEFAULT_BACKGROUND: &str = "/background1.jpg";

/// Background shown in the failed state.
pub const ERROR_BACKGROUND: &str = "/background2.jpg";

const BACKGROUNDS: [(&str, &str); 8] = [
    ("Clear", "/clear.jpg"),
    ("Clouds", "/cloudy.jpg"),
    ("Rain", "/rain.jpg"),
    ("Thunderstorm", "/lightning.jpg"),
    ("Snow", "/snowfall.jpg"),
    ("Mist", "/mist.jpg"),
    ("Fog", "/fog.jpg"),
    ("Haze", "/haze.jpg"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IconVariant {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Fog,
}

impl IconVariant {
    /// Case-sensitive match on the provider's main category.
    pub fn from_category(category: &str) -> Self {
        match category {
            "Clear" => IconVariant::Clear,
            "Clouds" => IconVariant::Clouds,
            "Rain" => IconVariant::Rain,
            "Thunderstorm" => IconVariant::Thunderstorm,
            "Snow" => IconVariant::Snow,
            "Mist" | "Fog" | "Haze" => IconVariant::Fog,
            _ => IconVariant::Clouds,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconVariant::Clear => "clear",
            IconVariant::Clouds => "clouds",
            IconVariant::Rain => "rain",
            IconVariant::Thunderstorm => "thunderstorm",
            IconVariant::Snow => "snow",
            IconVariant::Fog => "fog",
        }
    }
}

impl std::fmt::Display for IconVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn background_for(category: &str) -> &'static str {
    BACKGROUNDS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, key)| *key)
        .unwrap_or(DEFAULT_BACKGROUND)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub icon: IconVariant,
    pub background_key: &'static str,
}

pub fn map_to_presentation(report: &WeatherReport) -> Presentation {
    let category = report.primary_condition().main_category.as_str();

    Presentation {
        icon: IconVariant::from_category(category),
        background_key: background_for(category),
    }
}

/// Round for display; halves go up (`-2.5` → `-2`, `2.5` → `3`).
pub fn round_display(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Display-ready numbers for a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub location_name: String,
    pub icon: IconVariant,
    pub temperature_c: i64,
    pub feels_like_c: i64,
    pub humidity_pct: i64,
    pub wind_speed_mps: i64,
    pub description: String,
}

impl ReportView {
    pub fn from_report(report: &WeatherReport) -> Self {
        let primary = report.primary_condition();

        ReportView {
            location_name: report.location_name().to_string(),
            icon: IconVariant::from_category(&primary.main_category),
            temperature_c: round_display(report.temperature_c()),
            feels_like_c: round_display(report.feels_like_c()),
            humidity_pct: round_display(report.humidity_pct()),
            wind_speed_mps: round_display(report.wind_speed_mps()),
            description: primary.description.clone(),
        }
    }
}
