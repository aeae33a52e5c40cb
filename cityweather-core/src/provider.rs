use crate::{
    Config, WeatherQuery, WeatherReport, error::FetchError,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

/// Source of current conditions for a validated query.
///
/// Implementations perform exactly one upstream call per invocation.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(
        &self,
        query: &WeatherQuery,
        api_key: &str,
    ) -> Result<WeatherReport, FetchError>;
}

/// Validate the inputs, then ask `provider` for current conditions.
///
/// The city is checked before the credential; either failure returns
/// without touching the provider.
pub async fn fetch(
    provider: &dyn WeatherProvider,
    city: &str,
    credential: Option<&str>,
) -> Result<WeatherReport, FetchError> {
    let query = WeatherQuery::parse(city)?;

    let api_key = credential
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(FetchError::MissingCredential)?;

    provider.current(&query, api_key).await
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> Arc<dyn WeatherProvider> {
    Arc::new(OpenWeatherProvider::with_base_url(config.base_url()))
}
