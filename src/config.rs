//! Process configuration
//!
//! Read once from the environment at startup (after `dotenvy` has loaded any
//! `.env` file) and shared read-only afterwards.

use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_GEMINI_MODEL, DEFAULT_LATITUDE, DEFAULT_LONGITUDE,
    DEFAULT_REQUEST_TIMEOUT_SECS, GEMINI_API_BASE, OPENWEATHER_API_BASE,
};
use crate::error::{WearError, WearResult};

/// Which recommender answers requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Rules,
    Gemini,
}

impl FromStr for Strategy {
    type Err = WearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rules" | "rule" => Ok(Strategy::Rules),
            "gemini" | "model" | "llm" => Ok(Strategy::Gemini),
            other => Err(WearError::Configuration(format!(
                "unknown recommender '{}', expected 'rules' or 'gemini'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub location: Location,
    /// OpenWeatherMap key; the fetcher refuses to run without it
    pub weather_api_key: Option<String>,
    pub weather_api_base: String,
    /// Gemini key; only needed by the model strategy
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub strategy: Strategy,
    pub bind_addr: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: Location {
                latitude: DEFAULT_LATITUDE,
                longitude: DEFAULT_LONGITUDE,
            },
            weather_api_key: None,
            weather_api_base: OPENWEATHER_API_BASE.to_string(),
            gemini_api_key: None,
            gemini_api_base: GEMINI_API_BASE.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            strategy: Strategy::Rules,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Builds the configuration from process environment variables.
    pub fn from_env() -> WearResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Blank values
    /// are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> WearResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let strategy = match get("RECOMMENDER") {
            Some(value) => value.parse()?,
            None => defaults.strategy,
        };

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(value) => Duration::from_secs(parse_number("REQUEST_TIMEOUT_SECS", &value)?),
            None => defaults.request_timeout,
        };

        let latitude = match get("WEATHER_LATITUDE") {
            Some(value) => parse_number("WEATHER_LATITUDE", &value)?,
            None => defaults.location.latitude,
        };
        let longitude = match get("WEATHER_LONGITUDE") {
            Some(value) => parse_number("WEATHER_LONGITUDE", &value)?,
            None => defaults.location.longitude,
        };

        Ok(Self {
            location: Location {
                latitude,
                longitude,
            },
            weather_api_key: get("OPENWEATHER_API_KEY").or_else(|| get("API_KEY")),
            weather_api_base: get("OPENWEATHER_API_BASE").unwrap_or(defaults.weather_api_base),
            gemini_api_key: get("GEMINI_API_KEY"),
            gemini_api_base: get("GEMINI_API_BASE").unwrap_or(defaults.gemini_api_base),
            gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            strategy,
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            request_timeout,
        })
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> WearResult<T> {
    value
        .parse()
        .map_err(|_| WearError::Configuration(format!("{} has invalid value '{}'", key, value)))
}
