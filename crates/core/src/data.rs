//! Data structures for the metrics payload

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque, fully parsed chart figure (traces + layout)
///
/// The figure is handed verbatim to the charting collaborator; nothing in
/// the dashboard looks inside it beyond confirming it deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartSpec(serde_json::Value);

impl ChartSpec {
    /// Wrap an already-parsed figure definition
    pub fn new(figure: serde_json::Value) -> Self {
        Self(figure)
    }

    /// The figure definition as plain JSON
    pub fn figure(&self) -> &serde_json::Value {
        &self.0
    }
}

/// A string or numeric scalar, kept exactly as the backend supplied it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Number(n) => write!(f, "{n}"),
            ScalarValue::Text(s) => f.write_str(s),
        }
    }
}

/// A single content recommendation
///
/// Field names match the backend payload keys exactly; all four are
/// required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Content title
    #[serde(rename = "Content Title")]
    pub title: String,
    /// Kind of content (movie, webseries, documentary, ...)
    #[serde(rename = "Content Type")]
    pub content_type: String,
    /// View count, numeric or pre-formatted
    #[serde(rename = "Total Views")]
    pub total_views: ScalarValue,
    /// Like count, numeric or pre-formatted
    #[serde(rename = "Total Likes")]
    pub total_likes: ScalarValue,
}

/// A fully validated metrics payload, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    /// Bar chart figure for the key performance metrics
    pub bar_chart: ChartSpec,
    /// Scatter figure covering every metric
    pub detailed_chart: ChartSpec,
    /// Metric key/value pairs in backend order; keys stay raw here and
    /// are humanized at render time
    pub metrics: serde_json::Map<String, serde_json::Value>,
    /// Ranked recommendations, in backend order
    pub recommendations: Vec<Recommendation>,
}
