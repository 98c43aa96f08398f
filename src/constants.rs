/// User agent string for outbound HTTP requests
pub const USER_AGENT: &str = "what-to-wear/0.1.0";

/// OpenWeatherMap API base URL
pub const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Gemini REST API base URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// New York City
pub const DEFAULT_LATITUDE: f64 = 40.7128;
pub const DEFAULT_LONGITUDE: f64 = -74.0060;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// A single 3-hour bucket with more rain than this (mm) counts as heavy rain
pub const HEAVY_RAIN_THRESHOLD_MM: f64 = 5.0;

/// Used in the prompt when nothing more specific is known about the day
pub const FALLBACK_CONDITIONS: &str = "variable conditions";
