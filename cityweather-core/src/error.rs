use thiserror::Error;

/// Message carried by [`FetchError::NotFound`] for every transport or HTTP failure.
pub const NOT_FOUND_MESSAGE: &str = "City Not Found";

const FALLBACK_MESSAGE: &str = "Failed to get weather data";

/// Why a lookup did not produce a [`crate::WeatherReport`].
///
/// Every variant is recoverable: the controller turns it into a user-facing
/// message and stays ready for the next search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The city name was empty after trimming. No request was sent.
    #[error("city name is empty")]
    InvalidInput,

    /// No API key is available. No request was sent.
    #[error("no API key configured")]
    MissingCredential,

    /// The request failed in transport or the provider answered with a non-2xx status.
    #[error("{0}")]
    NotFound(String),

    /// The provider answered, but the payload does not have the expected shape.
    #[error("invalid weather payload: {0}")]
    InvalidSchema(String),
}

impl FetchError {
    pub fn not_found() -> Self {
        FetchError::NotFound(NOT_FOUND_MESSAGE.to_string())
    }

    /// Text shown to the user in the failed state.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::InvalidInput => "City name is required".to_string(),
            FetchError::MissingCredential => {
                "API key is missing. Please set the weather API credential.".to_string()
            }
            FetchError::InvalidSchema(_) => "Invalid weather data received".to_string(),
            FetchError::NotFound(message) if message.trim().is_empty() => {
                FALLBACK_MESSAGE.to_string()
            }
            FetchError::NotFound(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_match_each_variant() {
        assert_eq!(FetchError::InvalidInput.user_message(), "City name is required");
        assert_eq!(
            FetchError::MissingCredential.user_message(),
            "API key is missing. Please set the weather API credential."
        );
        assert_eq!(
            FetchError::InvalidSchema("missing field `feels_like`".into()).user_message(),
            "Invalid weather data received"
        );
        assert_eq!(FetchError::not_found().user_message(), "City Not Found");
    }

    #[test]
    fn empty_not_found_message_falls_back() {
        let err = FetchError::NotFound(String::new());
        assert_eq!(err.user_message(), "Failed to get weather data");
    }
}
