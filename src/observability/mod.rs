//! Observability module for monitoring and metrics.
//!
//! Logging goes through `tracing`; this module adds counters for failures
//! contained by the error boundary.

pub mod metrics;

pub use metrics::{BoundaryMetrics, MetricsSummary};
