//! Validating decode of the raw metrics payload
//!
//! The backend answers with one of two shapes:
//!
//! ```text
//! { "error": "..." }
//! { "bar_chart": "<json>", "detailed_chart": "<json>",
//!   "metrics": {...}, "raw_recommendations": [...] }
//! ```
//!
//! Both charts arrive as JSON-encoded strings, not native objects. Extra
//! fields (the backend also sends a pre-formatted `recommendations` list)
//! are ignored.

use crate::data::{ChartSpec, MetricsReport, Recommendation};
use crate::error::{Error, Result};
use serde_json::Value;

/// Decode a raw payload into a [`MetricsReport`]
///
/// A non-empty `error` field short-circuits to [`Error::Reported`] before
/// any shape validation. Pure: no I/O, deterministic for a given input.
pub fn interpret(raw: &Value) -> Result<MetricsReport> {
    if let Some(message) = raw.get("error").and_then(Value::as_str) {
        if !message.is_empty() {
            return Err(Error::Reported(message.to_string()));
        }
    }

    let payload = raw.as_object().ok_or(Error::Malformed("payload"))?;

    let bar_chart = chart_field(payload, "bar_chart")?;
    let detailed_chart = chart_field(payload, "detailed_chart")?;

    let metrics = payload
        .get("metrics")
        .and_then(Value::as_object)
        .cloned()
        .ok_or(Error::Malformed("metrics"))?;

    let raw_recommendations = payload
        .get("raw_recommendations")
        .and_then(Value::as_array)
        .ok_or(Error::Malformed("raw_recommendations"))?;

    // A single bad element rejects the whole list; the panel is never
    // rendered partially.
    let recommendations = raw_recommendations
        .iter()
        .map(|entry| {
            serde_json::from_value::<Recommendation>(entry.clone())
                .map_err(|_| Error::Malformed("recommendation"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(MetricsReport {
        bar_chart,
        detailed_chart,
        metrics,
        recommendations,
    })
}

/// Parse one of the JSON-string-embedded chart fields
fn chart_field(payload: &serde_json::Map<String, Value>, key: &'static str) -> Result<ChartSpec> {
    let text = payload
        .get(key)
        .and_then(Value::as_str)
        .ok_or(Error::Malformed(key))?;

    let figure = serde_json::from_str(text).map_err(|_| Error::Malformed(key))?;
    Ok(ChartSpec::new(figure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn success_payload() -> Value {
        json!({
            "bar_chart": r#"{"data":[{"type":"bar","x":["throughput"],"y":[283.83]}],"layout":{"height":400}}"#,
            "detailed_chart": r#"{"data":[{"type":"scatter","mode":"markers+text"}],"layout":{"title":"Detailed Metrics Comparison"}}"#,
            "metrics": {
                "total_execution_time": 704.64,
                "throughput": 283.83,
                "avg_response_time": 67.91
            },
            "raw_recommendations": [
                {
                    "Content Title": "Series west issue.",
                    "Content Type": "movie",
                    "Total Views": 9951,
                    "Total Likes": 3206
                }
            ],
            "recommendations": ["Title: Series west issue. | Type: movie | Views: 9951 | Likes: 3206"]
        })
    }

    #[test]
    fn test_interpret_success_payload() {
        let report = interpret(&success_payload()).unwrap();

        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].title, "Series west issue.");
        assert_eq!(report.metrics.len(), 3);
        assert_eq!(
            report.bar_chart.figure()["data"][0]["type"],
            json!("bar")
        );
    }

    #[test]
    fn test_interpret_keeps_metric_order_and_raw_keys() {
        let report = interpret(&success_payload()).unwrap();

        let keys: Vec<&String> = report.metrics.keys().collect();
        assert_eq!(
            keys,
            ["total_execution_time", "throughput", "avg_response_time"]
        );
    }

    #[test]
    fn test_error_field_short_circuits() {
        let raw = json!({ "error": "no data" });

        match interpret(&raw) {
            Err(Error::Reported(message)) => {
                assert_eq!(message, "no data");
                assert_eq!(
                    Error::Reported(message).display_message(),
                    "Error: no data"
                );
            }
            other => panic!("expected reported error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_error_field_is_not_a_report() {
        let mut raw = success_payload();
        raw["error"] = json!("");

        assert!(interpret(&raw).is_ok());
    }

    #[test]
    fn test_chart_that_is_not_json_is_malformed() {
        let mut raw = success_payload();
        raw["bar_chart"] = json!("not json {{");

        assert!(matches!(
            interpret(&raw),
            Err(Error::Malformed("bar_chart"))
        ));
    }

    #[test]
    fn test_chart_that_is_not_a_string_is_malformed() {
        let mut raw = success_payload();
        raw["detailed_chart"] = json!({"data": []});

        assert!(matches!(
            interpret(&raw),
            Err(Error::Malformed("detailed_chart"))
        ));
    }

    #[test]
    fn test_missing_metrics_is_malformed() {
        let mut raw = success_payload();
        raw.as_object_mut().unwrap().remove("metrics");

        assert!(matches!(interpret(&raw), Err(Error::Malformed("metrics"))));
    }

    #[test]
    fn test_one_bad_recommendation_rejects_the_batch() {
        let mut raw = success_payload();
        raw["raw_recommendations"] = json!([
            {
                "Content Title": "Explain power experience perhaps.",
                "Content Type": "movie",
                "Total Views": 9813,
                "Total Likes": 1412
            },
            {
                "Content Title": "Just order reduce.",
                "Content Type": "webseries",
                "Total Views": 9764
            }
        ]);

        assert!(matches!(
            interpret(&raw),
            Err(Error::Malformed("recommendation"))
        ));
    }

    #[test]
    fn test_non_object_payload_is_malformed() {
        assert!(matches!(
            interpret(&json!([1, 2, 3])),
            Err(Error::Malformed("payload"))
        ));
    }

    #[test]
    fn test_chart_figures_survive_interpretation_unchanged() {
        let figure = json!({
            "data": [{"type": "bar", "x": ["a"], "y": [1.5], "marker": {"color": "blue"}}],
            "layout": {"title": "t", "xaxis_title": "Metrics"}
        });
        let raw = json!({
            "bar_chart": serde_json::to_string(&figure).unwrap(),
            "detailed_chart": serde_json::to_string(&figure).unwrap(),
            "metrics": {},
            "raw_recommendations": []
        });

        let report = interpret(&raw).unwrap();
        assert_eq!(report.bar_chart.figure(), &figure);
        assert_eq!(report.detailed_chart.figure(), &figure);
    }
}
