//! query-lens-core - Selection and payload logic for the query-lens dashboard
//!
//! This crate contains WASM-compatible code with no DOM or network access,
//! so the whole selection -> fetch -> render pipeline can be tested natively.
//!
//! # Features
//!
//! - Selection snapshots and deterministic metrics request paths
//! - Validating interpreter for the heterogeneous metrics payload
//! - Stale-response bookkeeping for in-flight fetches
//! - Render-time formatting of metric keys and values

pub mod data;
pub mod display;
pub mod error;
pub mod interpret;
pub mod selection;
pub mod sequence;

pub use data::{ChartSpec, MetricsReport, Recommendation, ScalarValue};
pub use error::{Error, Result};
pub use interpret::interpret;
pub use selection::Selection;
pub use sequence::{RequestSequence, RequestToken};
