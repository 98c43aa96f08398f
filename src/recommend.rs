//! Clothing recommendation strategies

use std::fmt;

use async_trait::async_trait;

use crate::error::WearResult;
use crate::formatters::format_items;
use crate::stats::DailyStatistics;

/// A clothing recommendation, serialized as one comma-separated string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation(String);

impl Recommendation {
    /// Joins items in order, dropping repeats.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for item in items {
            let item = item.into();
            if !distinct.contains(&item) {
                distinct.push(item);
            }
        }
        Self(format_items(&distinct))
    }

    /// Free-form text taken as-is apart from surrounding whitespace
    pub fn from_text(text: &str) -> Self {
        Self(text.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns a day's statistics into something to wear
#[async_trait]
pub trait Recommender: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    async fn recommend(&self, stats: &DailyStatistics) -> WearResult<Recommendation>;
}

/// Temperature bracket chosen before precipitation add-ons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseLayer {
    Frigid,
    Freezing,
    Cold,
    Hot,
    Cool,
    Mild,
}

impl BaseLayer {
    /// First matching bracket wins. The min-temperature brackets are checked
    /// before the max-temperature ones, so a day from 35°F to 80°F gets a coat.
    pub fn for_stats(stats: &DailyStatistics) -> Self {
        if stats.min_temp < 20.0 {
            BaseLayer::Frigid
        } else if stats.min_temp < 30.0 {
            BaseLayer::Freezing
        } else if stats.min_temp < 40.0 {
            BaseLayer::Cold
        } else if stats.max_temp > 75.0 {
            BaseLayer::Hot
        } else if stats.max_temp < 65.0 {
            BaseLayer::Cool
        } else {
            BaseLayer::Mild
        }
    }

    pub fn items(self) -> &'static [&'static str] {
        match self {
            BaseLayer::Frigid => &["thermal underwear", "heavy coat"],
            BaseLayer::Freezing => &["thermal underwear if biking", "heavy coat"],
            BaseLayer::Cold => &["coat"],
            BaseLayer::Hot => &["t-shirt", "shorts"],
            BaseLayer::Cool => &["warm jacket"],
            BaseLayer::Mild => &["warm-comfortable clothes"],
        }
    }
}

/// Fixed rule table
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedRecommender;

impl RuleBasedRecommender {
    pub fn items(stats: &DailyStatistics) -> Vec<&'static str> {
        let mut items = BaseLayer::for_stats(stats).items().to_vec();
        if stats.will_rain {
            items.push("rain jacket");
        }
        if stats.heavy_rain {
            items.push("umbrella");
        }
        if stats.will_snow {
            items.push("winter boots");
        }
        items
    }
}

#[async_trait]
impl Recommender for RuleBasedRecommender {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn recommend(&self, stats: &DailyStatistics) -> WearResult<Recommendation> {
        Ok(Recommendation::from_items(Self::items(stats)))
    }
}
