//! Selection snapshots and metrics request paths

use url::Url;

/// The three user-chosen parameters driving one metrics request
///
/// A snapshot is taken at the moment a fetch is triggered; later selector
/// changes never mutate a snapshot already in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Deployment region (e.g. "Asia", "North America")
    pub region: String,
    /// Backing database (e.g. "MongoDB", "ElasticSearch")
    pub database: String,
    /// Query scope (e.g. "Local", "Global")
    pub query_type: String,
}

impl Selection {
    /// Snapshot a selection from the current selector values
    pub fn new(region: String, database: String, query_type: String) -> Self {
        Self {
            region,
            database,
            query_type,
        }
    }

    /// The request path for this selection, each segment percent-encoded
    ///
    /// Segment order is fixed: database, region, query type. Values are
    /// taken verbatim; decoding them is the backend's job.
    pub fn metrics_path(&self) -> String {
        // Url needs an absolute base; only the encoded path is kept.
        let mut url = Url::parse("http://localhost/").expect("static base URL parses");
        url.path_segments_mut()
            .expect("http URLs always have path segments")
            .pop_if_empty()
            .extend([
                "metrics",
                self.database.as_str(),
                self.region.as_str(),
                self.query_type.as_str(),
            ]);
        url.path().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_metrics_path_segment_order() {
        let selection = Selection::new(
            "us-east".to_string(),
            "mongo".to_string(),
            "trending".to_string(),
        );

        assert_eq!(selection.metrics_path(), "/metrics/mongo/us-east/trending");
    }

    #[test]
    fn test_metrics_path_encodes_spaces() {
        let selection = Selection::new(
            "North America".to_string(),
            "MongoDB".to_string(),
            "Local".to_string(),
        );

        assert_eq!(
            selection.metrics_path(),
            "/metrics/MongoDB/North%20America/Local"
        );
    }

    #[test]
    fn test_metrics_path_encodes_slashes_inside_segments() {
        let selection = Selection::new(
            "eu/west".to_string(),
            "DynamoDB".to_string(),
            "Global".to_string(),
        );

        assert_eq!(
            selection.metrics_path(),
            "/metrics/DynamoDB/eu%2Fwest/Global"
        );
    }
}
