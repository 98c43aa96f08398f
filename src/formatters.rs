use crate::error::WearError;
use crate::stats::DailyStatistics;

pub const RAIN_CONDITION: &str = "potential for rain";
pub const SNOW_CONDITION: &str = "potential for snow";

/// Builds the model prompt for a day's statistics
pub fn format_prompt(stats: &DailyStatistics) -> String {
    format!(
        "Today's weather forecast: low of {:.1}\u{00b0}F, high of {:.1}\u{00b0}F, with {}. \
        What should I wear today? Reply only with a concise, comma-separated list of \
        clothing items and accessories, no explanations.",
        stats.min_temp,
        stats.max_temp,
        stats.conditions.join(", ")
    )
}

/// Joins clothing items the way the endpoint reports them
pub fn format_items<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// User-facing text for a failed request
pub fn format_error(err: &WearError) -> String {
    format!("Error: {}", err)
}
