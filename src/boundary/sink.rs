//! Destinations for boundary reports.

use super::report::Report;
use std::sync::{Arc, Mutex};

/// Receives one report per contained failure.
///
/// Implementations must not fail; a sink that cannot deliver drops the report.
pub trait ReportSink: Send + Sync {
    /// Deliver a report.
    fn report(&self, report: &Report);
}

/// Default sink: emits every report as a `tracing` event.
///
/// Validation and unclassified failures are logged at `error`, lookup misses
/// at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&self, report: &Report) {
        if report.kind.is_not_found() {
            tracing::warn!(
                operation = %report.operation,
                kind = %report.kind,
                "{}",
                report.message
            );
        } else {
            tracing::error!(
                operation = %report.operation,
                kind = %report.kind,
                "{}",
                report.message
            );
        }
    }
}

/// Sink that keeps reports in memory so they can be inspected later.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every report received so far.
    pub fn reports(&self) -> Vec<Report> {
        if let Ok(reports) = self.reports.lock() {
            reports.clone()
        } else {
            Vec::new()
        }
    }

    /// Messages of every report received so far.
    pub fn messages(&self) -> Vec<String> {
        self.reports().into_iter().map(|r| r.message).collect()
    }

    /// Number of reports received.
    pub fn len(&self) -> usize {
        if let Ok(reports) = self.reports.lock() {
            reports.len()
        } else {
            0
        }
    }

    /// Check if no report has been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all captured reports.
    pub fn clear(&self) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.clear();
        }
    }
}

impl ReportSink for MemorySink {
    fn report(&self, report: &Report) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(report.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::FailureKind;

    fn sample(message: &str) -> Report {
        Report {
            operation: "find".to_string(),
            kind: FailureKind::ContactNotFound,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_memory_sink_captures() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.report(&sample("Contact not found."));
        sink.report(&sample("Contact not found."));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.messages(), vec!["Contact not found."; 2]);
    }

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let other = sink.clone();
        other.report(&sample("Contact not found."));

        assert_eq!(sink.len(), 1);
        sink.clear();
        assert!(other.is_empty());
    }

    #[test]
    fn test_tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.report(&sample("Contact not found."));
    }
}
