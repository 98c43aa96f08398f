//! Error types for the recommendation pipeline

use thiserror::Error;

/// Everything that can go wrong between fetching the forecast and
/// producing a recommendation.
#[derive(Error, Debug)]
pub enum WearError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Weather service request failed: {0}")]
    Network(String),

    #[error("Unexpected weather data format: {0}")]
    Format(String),

    #[error("Not enough forecast data for today: {0}")]
    InsufficientData(String),

    #[error("Recommendation model unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Recommendation model failed: {0}")]
    Generation(String),
}

pub type WearResult<T> = std::result::Result<T, WearError>;
