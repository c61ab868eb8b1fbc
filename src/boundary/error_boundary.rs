//! The error boundary that contains failures of wrapped operations.

use super::report::Report;
use super::sink::{ReportSink, TracingSink};
use crate::error::BookResult;
use crate::observability::BoundaryMetrics;
use std::fmt;
use std::sync::Arc;

/// Converts failed operations into a single report and a `None` result.
///
/// A successful operation passes through untouched and produces no report.
/// A failed one is classified, reported exactly once to the sink, counted,
/// and never propagated. The boundary is cheap to clone; clones share the
/// sink and the metrics.
///
/// # Example
///
/// ```
/// use contact_book::boundary::{ErrorBoundary, MemorySink};
/// use contact_book::error::BookError;
///
/// let sink = MemorySink::new();
/// let boundary = ErrorBoundary::with_sink(sink.clone());
///
/// let found: Option<u32> = boundary.contain("find", Err(BookError::ContactNotFound("Jane".into())));
/// assert!(found.is_none());
/// assert_eq!(sink.messages(), vec!["Contact not found."]);
/// ```
#[derive(Clone)]
pub struct ErrorBoundary {
    sink: Arc<dyn ReportSink>,
    metrics: BoundaryMetrics,
}

impl ErrorBoundary {
    /// Create a boundary reporting to a shared sink.
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self {
            sink,
            metrics: BoundaryMetrics::new(),
        }
    }

    /// Create a boundary that owns its sink.
    pub fn with_sink(sink: impl ReportSink + 'static) -> Self {
        Self::new(Arc::new(sink))
    }

    /// Pass a successful result through, or report the failure and yield `None`.
    pub fn contain<T>(&self, operation: &str, result: BookResult<T>) -> Option<T> {
        self.metrics.record_operation();

        match result {
            Ok(value) => Some(value),
            Err(error) => {
                let report = Report::from_error(operation, &error);
                tracing::debug!(
                    operation = %operation,
                    error = ?error,
                    "Contained failure"
                );
                self.metrics.record_failure(report.kind);
                self.sink.report(&report);
                None
            }
        }
    }

    /// Run a fallible closure inside the boundary.
    pub fn run<T, F>(&self, operation: &str, f: F) -> Option<T>
    where
        F: FnOnce() -> BookResult<T>,
    {
        self.contain(operation, f())
    }

    /// Counters of everything this boundary (and its clones) has contained.
    pub fn metrics(&self) -> &BoundaryMetrics {
        &self.metrics
    }
}

impl Default for ErrorBoundary {
    fn default() -> Self {
        Self::with_sink(TracingSink)
    }
}

impl fmt::Debug for ErrorBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBoundary")
            .field("metrics", &self.metrics.summary())
            .finish()
    }
}
