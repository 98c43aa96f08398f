use std::sync::Arc;

use reqwest::Client;

use crate::config::{Config, Strategy};
use crate::constants::USER_AGENT;
use crate::error::{WearError, WearResult};
use crate::forecast::ForecastFetcher;
use crate::formatters::format_error;
use crate::gemini::GeminiRecommender;
use crate::recommend::{Recommendation, Recommender, RuleBasedRecommender};
use crate::stats::DailyStatistics;

/// Runs fetch, reduce and recommend for each request
#[derive(Clone)]
pub struct WearService {
    fetcher: ForecastFetcher,
    recommender: Arc<dyn Recommender>,
}

impl WearService {
    /// Creates the service with the recommender named in `config`
    pub fn new(config: &Config) -> WearResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| WearError::Configuration(e.to_string()))?;

        let recommender: Arc<dyn Recommender> = match config.strategy {
            Strategy::Rules => Arc::new(RuleBasedRecommender),
            Strategy::Gemini => Arc::new(GeminiRecommender::new(client.clone(), config)),
        };

        Ok(Self::with_recommender(
            ForecastFetcher::new(client, config),
            recommender,
        ))
    }

    pub fn with_recommender(fetcher: ForecastFetcher, recommender: Arc<dyn Recommender>) -> Self {
        if !fetcher.has_api_key() {
            tracing::warn!("Weather API key is not set; every request will report an error");
        }
        Self {
            fetcher,
            recommender,
        }
    }

    pub fn recommender_name(&self) -> &'static str {
        self.recommender.name()
    }

    /// Today's recommendation
    pub async fn what_to_wear(&self) -> WearResult<Recommendation> {
        let entries = self.fetcher.fetch_today().await?;
        let stats = DailyStatistics::from_entries(&entries)?;
        tracing::info!(
            min_temp = stats.min_temp,
            max_temp = stats.max_temp,
            will_rain = stats.will_rain,
            will_snow = stats.will_snow,
            heavy_rain = stats.heavy_rain,
            "Reduced {} forecast entries",
            entries.len()
        );
        self.recommender.recommend(&stats).await
    }

    /// Same as [`Self::what_to_wear`], with failures turned into a labeled
    /// message so the caller always has something to show.
    pub async fn recommendation_text(&self) -> String {
        match self.what_to_wear().await {
            Ok(recommendation) => recommendation.into_string(),
            Err(err) => {
                tracing::error!(recommender = self.recommender.name(), "Request failed: {}", err);
                format_error(&err)
            }
        }
    }
}
