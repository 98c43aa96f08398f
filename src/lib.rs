//! Clothing recommendations from today's weather forecast
//!
//! Fetches the OpenWeatherMap 5-day/3-hour forecast for a fixed location,
//! reduces today's entries to a few statistics, and picks what to wear with
//! either a fixed rule table or a Gemini prompt.

pub mod config;
pub mod constants;
pub mod error;
pub mod forecast;
pub mod formatters;
pub mod gemini;
pub mod models;
pub mod recommend;
pub mod server;
pub mod service;
pub mod stats;

pub use config::{Config, Location, Strategy};
pub use error::{WearError, WearResult};
pub use forecast::ForecastFetcher;
pub use gemini::GeminiRecommender;
pub use models::{ForecastEntry, RecommendationResponse};
pub use recommend::{BaseLayer, Recommendation, Recommender, RuleBasedRecommender};
pub use service::WearService;
pub use stats::DailyStatistics;
