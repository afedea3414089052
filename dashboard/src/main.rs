//! Dioxus-based metrics dashboard for query-lens
//!
//! A pure Rust frontend that compiles to WebAssembly. The dashboard fetches
//! a metrics payload for the selected database/region/query-type triple and
//! renders it as two Plotly charts, a detailed metric grid, and a content
//! recommendations panel.

use dioxus::prelude::*;
use gloo_net::http::Request;
use tracing::{debug, warn};

use query_lens_core::{
    display::{metric_rows, recommendations_heading},
    interpret, Error, MetricsReport, Recommendation, RequestSequence, Selection,
};

mod plotly;

/// Selector option sets offered by the deployed backend
const DATABASES: &[&str] = &["MongoDB", "DynamoDB", "ElasticSearch"];
const REGIONS: &[&str] = &["Asia", "Europe", "North America", "South America"];
const QUERY_TYPES: &[&str] = &["Local", "Global"];

/// Chart sub-region ids handed to the Plotly collaborator
const BAR_CHART_DIV: &str = "bar-chart";
const DETAILED_CHART_DIV: &str = "detailed-chart";

fn main() {
    tracing_wasm::set_as_global_default();
    launch(App);
}

#[component]
fn App() -> Element {
    // Current selector values
    let region = use_signal(|| REGIONS[0].to_string());
    let database = use_signal(|| DATABASES[0].to_string());
    let query_type = use_signal(|| QUERY_TYPES[0].to_string());

    // Latest-issued fetch wins; earlier in-flight results are discarded
    let mut sequence = use_signal(RequestSequence::new);

    // Last successfully rendered payload, kept through later failures so
    // the metric and recommendation regions degrade in place
    let mut report = use_signal(|| None::<(Selection, MetricsReport)>);
    let mut error = use_signal(|| None::<Error>);

    // Refetch on initial load and whenever any selector changes
    use_effect(move || {
        let selection = Selection::new(region(), database(), query_type());
        let token = sequence.write().issue();

        spawn(async move {
            let outcome = load_metrics(&selection).await;

            if !sequence.peek().is_current(token) {
                debug!("discarding stale response for {}", selection.metrics_path());
                return;
            }

            match outcome {
                Ok(data) => {
                    error.set(None);
                    report.set(Some((selection, data)));
                }
                Err(e) => {
                    warn!("metrics pipeline failed: {e}");
                    error.set(Some(e));
                }
            }
        });
    });

    rsx! {
        style { {include_str!("styles.css")} }

        div { class: "app",
            Header {}

            main { class: "container",
                SelectorBar { region, database, query_type }

                if report.read().is_none() && error.read().is_none() {
                    LoadingSpinner {}
                }

                ChartPanel { report, error }

                if let Some((selection, data)) = report.read().as_ref() {
                    MetricsGrid { metrics: data.metrics.clone() }
                    Recommendations {
                        query_type: selection.query_type.clone(),
                        items: data.recommendations.clone()
                    }
                }
            }

            Footer {}
        }
    }
}

/// Fetch and interpret the metrics payload for one selection
async fn load_metrics(selection: &Selection) -> Result<MetricsReport, Error> {
    let path = selection.metrics_path();
    debug!("fetching {path}");

    let response = Request::get(&path)
        .send()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(Error::Transport(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }

    let text = response
        .text()
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;

    let raw: serde_json::Value = serde_json::from_str(&text)?;
    interpret(&raw)
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "header",
            div { class: "header-content",
                h1 { class: "title", "Database Performance Dashboard" }
                p { class: "subtitle", "Query metrics across regions and engines" }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p {
                "query-lens • Built with "
                a { href: "https://dioxuslabs.com", "Dioxus" }
            }
        }
    }
}

#[component]
fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner" }
            p { "Loading metrics..." }
        }
    }
}

#[component]
fn SelectorBar(
    region: Signal<String>,
    database: Signal<String>,
    query_type: Signal<String>,
) -> Element {
    rsx! {
        div { class: "selector-bar",
            SelectorField {
                label: "Region",
                id: "region-select",
                options: REGIONS,
                value: region
            }
            SelectorField {
                label: "Database",
                id: "database-select",
                options: DATABASES,
                value: database
            }
            SelectorField {
                label: "Query Type",
                id: "query-type-select",
                options: QUERY_TYPES,
                value: query_type
            }
        }
    }
}

#[component]
fn SelectorField(
    label: &'static str,
    id: &'static str,
    options: &'static [&'static str],
    mut value: Signal<String>,
) -> Element {
    rsx! {
        label { class: "selector-field",
            span { class: "selector-label", "{label}" }
            select {
                id: "{id}",
                value: "{value}",
                onchange: move |evt| value.set(evt.value()),
                for opt in options {
                    option { value: "{opt}", "{opt}" }
                }
            }
        }
    }
}

/// The chart region: two Plotly sub-regions on success, a single error
/// line on failure
#[component]
fn ChartPanel(
    report: Signal<Option<(Selection, MetricsReport)>>,
    error: Signal<Option<Error>>,
) -> Element {
    // Re-plot after each new report has been committed to the DOM. The two
    // calls are guarded independently: a collaborator failure loses that
    // chart only.
    use_effect(move || {
        if error.read().is_some() {
            return;
        }
        if let Some((_, data)) = report.read().as_ref() {
            if let Err(e) = plotly::render(BAR_CHART_DIV, &data.bar_chart) {
                warn!("bar chart render failed: {e:?}");
            }
            if let Err(e) = plotly::render(DETAILED_CHART_DIV, &data.detailed_chart) {
                warn!("detailed chart render failed: {e:?}");
            }
        }
    });

    rsx! {
        div { id: "metrics-chart", class: "chart-region",
            if let Some(e) = error.read().as_ref() {
                p { class: "chart-error", {e.display_message()} }
            } else if report.read().is_some() {
                div { id: "{BAR_CHART_DIV}", class: "chart-slot" }
                div { id: "{DETAILED_CHART_DIV}", class: "chart-slot" }
            }
        }
    }
}

#[component]
fn MetricsGrid(metrics: serde_json::Map<String, serde_json::Value>) -> Element {
    let rows = metric_rows(&metrics);

    rsx! {
        section { id: "detailed-metrics", class: "metrics-region",
            h3 { "Detailed Metrics" }
            div { class: "metrics-grid",
                for row in rows {
                    div { class: "metric-item", key: "{row.label}",
                        strong { "{row.label}: " }
                        "{row.value}"
                    }
                }
            }
        }
    }
}

#[component]
fn Recommendations(query_type: String, items: Vec<Recommendation>) -> Element {
    let heading = recommendations_heading(&query_type);

    rsx! {
        section { id: "recommendations", class: "recommendations-region",
            h2 { "{heading}" }
            for (idx, rec) in items.iter().enumerate() {
                div { class: "recommendation-card", key: "{idx}",
                    h3 { "{rec.title}" }
                    p {
                        strong { "Type: " }
                        "{rec.content_type}"
                    }
                    p {
                        strong { "Total Views: " }
                        "{rec.total_views}"
                    }
                    p {
                        strong { "Total Likes: " }
                        "{rec.total_likes}"
                    }
                }
            }
        }
    }
}
