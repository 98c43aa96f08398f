//! Reduction of a day's forecast entries into decision inputs

use crate::constants::{FALLBACK_CONDITIONS, HEAVY_RAIN_THRESHOLD_MM};
use crate::error::{WearError, WearResult};
use crate::formatters::{RAIN_CONDITION, SNOW_CONDITION};
use crate::models::ForecastEntry;

/// What the recommenders know about the day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyStatistics {
    /// Degrees Fahrenheit
    pub min_temp: f64,
    pub max_temp: f64,
    pub will_rain: bool,
    pub will_snow: bool,
    pub heavy_rain: bool,
    /// Short descriptors for the prompt; the rule table ignores them
    pub conditions: Vec<String>,
}

impl DailyStatistics {
    pub fn from_entries(entries: &[ForecastEntry]) -> WearResult<Self> {
        if entries.is_empty() {
            return Err(WearError::InsufficientData(
                "no forecast entries for today".to_string(),
            ));
        }

        let (min_temp, max_temp) = entries
            .iter()
            .filter_map(|e| e.temperature)
            .fold(None, |acc: Option<(f64, f64)>, t| match acc {
                None => Some((t, t)),
                Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
            })
            .ok_or_else(|| {
                WearError::InsufficientData("no forecast entry has a temperature".to_string())
            })?;

        let will_rain = entries
            .iter()
            .any(|e| e.rain_3h.is_some() || mentions(e, "rain"));
        let will_snow = entries
            .iter()
            .any(|e| e.snow_3h.is_some() || mentions(e, "snow"));
        let heavy_rain = entries
            .iter()
            .any(|e| e.rain_3h.is_some_and(|mm| mm > HEAVY_RAIN_THRESHOLD_MM));

        let mut conditions = Vec::new();
        if will_rain {
            conditions.push(RAIN_CONDITION.to_string());
        }
        if will_snow {
            conditions.push(SNOW_CONDITION.to_string());
        }
        if conditions.is_empty() {
            let middle = &entries[entries.len() / 2];
            conditions.push(
                middle
                    .description
                    .clone()
                    .unwrap_or_else(|| FALLBACK_CONDITIONS.to_string()),
            );
        }

        Ok(Self {
            min_temp,
            max_temp,
            will_rain,
            will_snow,
            heavy_rain,
            conditions,
        })
    }
}

fn mentions(entry: &ForecastEntry, word: &str) -> bool {
    entry
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(word))
}
