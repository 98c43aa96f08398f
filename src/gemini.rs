//! Recommendations delegated to a Gemini model

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::{WearError, WearResult};
use crate::formatters::format_prompt;
use crate::models::{Content, GenerateContentRequest, GenerateContentResponse, Part};
use crate::recommend::{Recommendation, Recommender};
use crate::stats::DailyStatistics;

/// Asks a hosted model what to wear. Best effort: the answer is whatever
/// the model says.
#[derive(Clone)]
pub struct GeminiRecommender {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiRecommender {
    pub fn new(client: Client, config: &Config) -> Self {
        if config.gemini_api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; model recommendations are unavailable");
        }
        Self {
            client,
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_api_base.clone(),
            model: config.gemini_model.clone(),
        }
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> WearResult<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| WearError::Generation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %body, "Model request rejected");
            return Err(WearError::Generation(format!(
                "request failed with status: {}",
                status
            )));
        }

        let data = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| WearError::Generation(e.to_string()))?;

        let text = data
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            let block_reason = data
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref());
            let finish_reason = data
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref());
            tracing::warn!(?block_reason, ?finish_reason, "Model returned no text");
            return Err(WearError::Generation(match block_reason {
                Some(reason) => format!("prompt was blocked: {}", reason),
                None => "model returned an empty response".to_string(),
            }));
        }

        Ok(text)
    }
}

#[async_trait]
impl Recommender for GeminiRecommender {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn recommend(&self, stats: &DailyStatistics) -> WearResult<Recommendation> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            WearError::ServiceUnavailable("model client is not configured".to_string())
        })?;

        let prompt = format_prompt(stats);
        tracing::debug!(%prompt, model = %self.model, "Requesting model recommendation");

        match self.generate(api_key, &prompt).await {
            Ok(text) => Ok(Recommendation::from_text(&text)),
            Err(err) => {
                tracing::error!(%prompt, error = %err, "Model recommendation failed");
                Err(err)
            }
        }
    }
}
