//! Forecast fetching from OpenWeatherMap

use chrono::{NaiveDate, Utc};
use reqwest::Client;

use crate::config::{Config, Location};
use crate::error::{WearError, WearResult};
use crate::models::{ForecastEntry, ForecastResponse};

/// Pulls the 5-day/3-hour forecast for one fixed location
#[derive(Clone)]
pub struct ForecastFetcher {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    location: Location,
}

impl ForecastFetcher {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            api_key: config.weather_api_key.clone(),
            base_url: config.weather_api_base.clone(),
            location: config.location,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Today's entries, where "today" is the current UTC date
    pub async fn fetch_today(&self) -> WearResult<Vec<ForecastEntry>> {
        self.fetch_for_date(Utc::now().date_naive()).await
    }

    /// Fetches the forecast and keeps the entries falling on `date` (UTC),
    /// in provider order.
    pub async fn fetch_for_date(&self, date: NaiveDate) -> WearResult<Vec<ForecastEntry>> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| WearError::Configuration("weather API key is not set".to_string()))?;

        let url = format!("{}/forecast", self.base_url.trim_end_matches('/'));
        tracing::info!(
            "Fetching forecast for {}, {}",
            self.location.latitude,
            self.location.longitude
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", self.location.latitude.to_string()),
                ("lon", self.location.longitude.to_string()),
                ("appid", api_key.to_string()),
                ("units", "imperial".to_string()),
            ])
            .send()
            .await
            .map_err(|e| WearError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WearError::Network(format!(
                "request failed with status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WearError::Network(e.to_string()))?;

        let entries = parse_forecast(&body)?;
        let today = entries_for_date(entries, date);
        tracing::debug!("{} forecast entries fall on {}", today.len(), date);
        Ok(today)
    }
}

/// Decodes a forecast body, dropping entries without a usable timestamp.
pub fn parse_forecast(body: &str) -> WearResult<Vec<ForecastEntry>> {
    let response: ForecastResponse = serde_json::from_str(body).map_err(|e| {
        tracing::debug!(payload = %body, "Undecodable forecast payload");
        WearError::Format(e.to_string())
    })?;

    let Some(raw_entries) = response.list else {
        tracing::debug!(payload = %body, "Forecast payload without 'list'");
        return Err(WearError::Format("response has no 'list' field".to_string()));
    };

    let total = raw_entries.len();
    let entries: Vec<ForecastEntry> = raw_entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, raw)| {
            let entry = ForecastEntry::from_raw(raw);
            if entry.is_none() {
                tracing::warn!("Skipping forecast entry {} without a valid 'dt'", i);
            }
            entry
        })
        .collect();

    if total > 0 && entries.is_empty() {
        return Err(WearError::Format(
            "no forecast entry carries a valid 'dt' timestamp".to_string(),
        ));
    }

    Ok(entries)
}

pub fn entries_for_date(entries: Vec<ForecastEntry>, date: NaiveDate) -> Vec<ForecastEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.timestamp.date_naive() == date)
        .collect()
}
