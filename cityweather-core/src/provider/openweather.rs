use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    error::FetchError,
    model::{WeatherQuery, WeatherReport},
    schema,
};

use super::WeatherProvider;

/// Current-conditions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

const UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for OpenWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(
        &self,
        query: &WeatherQuery,
        api_key: &str,
    ) -> Result<WeatherReport, FetchError> {
        debug!(city = %query, url = %self.base_url, "requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("q", query.city()), ("appid", api_key), ("units", UNITS)])
            .send()
            .await
            .map_err(|err| {
                warn!(city = %query, error = %err, "OpenWeather request failed");
                FetchError::not_found()
            })?;

        let status = res.status();
        if !status.is_success() {
            debug!(city = %query, status = %status, "OpenWeather rejected the request");
            return Err(FetchError::not_found());
        }

        let body = res.text().await.map_err(|err| {
            warn!(city = %query, error = %err, "Failed to read OpenWeather response body");
            FetchError::not_found()
        })?;

        schema::parse_current(&body).inspect_err(|err| {
            warn!(city = %query, error = %err, body = %truncate_body(&body), "OpenWeather payload rejected");
        })
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body;
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_openweather() {
        assert_eq!(OpenWeatherProvider::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "é".repeat(150);
        let cut = truncate_body(&body);
        assert!(cut.len() <= 200);
        assert!(cut.chars().all(|c| c == 'é'));

        assert_eq!(truncate_body("short"), "short");
    }
}
