use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// OpenWeatherMap API Models
// ============================================================================

/// 5-day/3-hour forecast response. `list` stays optional so a missing
/// field can be reported as a format error instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub list: Option<Vec<RawForecastEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawForecastEntry {
    pub dt: Option<i64>,
    pub main: Option<RawMain>,
    pub rain: Option<RawPrecipitation>,
    pub snow: Option<RawPrecipitation>,
    #[serde(default)]
    pub weather: Vec<RawWeather>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMain {
    pub temp: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPrecipitation {
    #[serde(rename = "3h")]
    pub three_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawWeather {
    pub description: Option<String>,
}

// ============================================================================
// Gemini API Models
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PromptFeedback {
    #[serde(rename = "blockReason")]
    pub block_reason: Option<String>,
}

// ============================================================================
// Domain Models
// ============================================================================

/// One 3-hour forecast bucket
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub timestamp: DateTime<Utc>,
    /// Degrees Fahrenheit
    pub temperature: Option<f64>,
    /// Rain volume over the bucket in mm. `Some` whenever the provider sent
    /// a rain object at all.
    pub rain_3h: Option<f64>,
    pub snow_3h: Option<f64>,
    pub description: Option<String>,
}

impl ForecastEntry {
    /// Converts a provider entry, returning `None` when it has no usable
    /// timestamp.
    pub fn from_raw(raw: RawForecastEntry) -> Option<Self> {
        let timestamp = DateTime::from_timestamp(raw.dt?, 0)?;
        Some(Self {
            timestamp,
            temperature: raw.main.and_then(|m| m.temp),
            rain_3h: raw.rain.map(|r| r.three_hour.unwrap_or(0.0)),
            snow_3h: raw.snow.map(|s| s.three_hour.unwrap_or(0.0)),
            description: raw.weather.into_iter().next().and_then(|w| w.description),
        })
    }
}

/// Body of `GET /what_to_wear`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendation: String,
}
