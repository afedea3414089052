//! Render-time formatting for the metric and recommendation regions
//!
//! Metric keys stay raw (`avg_response_time`) in the data model; the
//! humanized form exists only at render time.

use serde_json::Value;

/// One label/value line of the detailed-metrics region
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: String,
    pub value: String,
}

/// Rows for the detailed-metrics region, in payload order
pub fn metric_rows(metrics: &serde_json::Map<String, Value>) -> Vec<MetricRow> {
    metrics
        .iter()
        .map(|(key, value)| MetricRow {
            label: humanize_metric_key(key),
            value: format_metric_value(value),
        })
        .collect()
}

/// Humanize a metric key: underscores become spaces, words are capitalized
///
/// `avg_response_time` -> `Avg Response Time`
pub fn humanize_metric_key(key: &str) -> String {
    key.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print a metric value bare: strings without quotes, numbers as-is
pub fn format_metric_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Heading of the recommendations region
pub fn recommendations_heading(query_type: &str) -> String {
    format!("{query_type} Recommendations")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
