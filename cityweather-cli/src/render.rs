use cityweather_core::{AppState, IconVariant, Phase, ReportView};

pub fn icon_glyph(icon: IconVariant) -> &'static str {
    match icon {
        IconVariant::Clear => "☀",
        IconVariant::Clouds => "☁",
        IconVariant::Rain => "🌧",
        IconVariant::Thunderstorm => "⛈",
        IconVariant::Snow => "❄",
        IconVariant::Fog => "🌫",
    }
}

/// Human-readable rendering of the controller state.
pub fn render_state(state: &AppState) -> String {
    match (&state.report, &state.error_message) {
        (_, Some(message)) => format!("Error: {message}"),
        (Some(report), None) => {
            let view = ReportView::from_report(report);
            format!(
                "{}\n{}  {}°C  {}\nFeels like {}°C · Humidity {}% · Wind {} m/s",
                view.location_name,
                icon_glyph(view.icon),
                view.temperature_c,
                view.description,
                view.feels_like_c,
                view.humidity_pct,
                view.wind_speed_mps,
            )
        }
        (None, None) if state.phase == Phase::Searching => "Searching...".to_string(),
        (None, None) => "Enter a city name to look up the weather.".to_string(),
    }
}
