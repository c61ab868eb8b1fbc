//! Counters for operations passing through the error boundary.
//!
//! These give a cheap view of how often user input is rejected and how
//! often lookups miss, without having to parse the logs.

use crate::boundary::FailureKind;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics tracker shared by an error boundary and its clones.
#[derive(Debug, Clone)]
pub struct BoundaryMetrics {
    operations_total: Arc<AtomicU64>,
    required_field_total: Arc<AtomicU64>,
    field_format_total: Arc<AtomicU64>,
    phone_not_found_total: Arc<AtomicU64>,
    contact_not_found_total: Arc<AtomicU64>,
    unclassified_total: Arc<AtomicU64>,
}

impl BoundaryMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            operations_total: Arc::new(AtomicU64::new(0)),
            required_field_total: Arc::new(AtomicU64::new(0)),
            field_format_total: Arc::new(AtomicU64::new(0)),
            phone_not_found_total: Arc::new(AtomicU64::new(0)),
            contact_not_found_total: Arc::new(AtomicU64::new(0)),
            unclassified_total: Arc::new(AtomicU64::new(0)),
        }
    }

    fn counter(&self, kind: FailureKind) -> &AtomicU64 {
        match kind {
            FailureKind::RequiredField => &self.required_field_total,
            FailureKind::FieldFormat => &self.field_format_total,
            FailureKind::PhoneNotFound => &self.phone_not_found_total,
            FailureKind::ContactNotFound => &self.contact_not_found_total,
            FailureKind::Unclassified => &self.unclassified_total,
        }
    }

    /// Track an operation entering the boundary.
    pub fn record_operation(&self) {
        self.operations_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a contained failure.
    pub fn record_failure(&self, kind: FailureKind) {
        self.counter(kind).fetch_add(1, Ordering::Relaxed);
    }

    /// Get the total number of operations that went through the boundary.
    pub fn operations_total(&self) -> u64 {
        self.operations_total.load(Ordering::Relaxed)
    }

    /// Get the number of contained failures of one kind.
    pub fn failures_of(&self, kind: FailureKind) -> u64 {
        self.counter(kind).load(Ordering::Relaxed)
    }

    /// Get the total number of contained failures.
    pub fn failures_total(&self) -> u64 {
        FailureKind::ALL.iter().map(|k| self.failures_of(*k)).sum()
    }

    /// Get the failure rate (0.0 to 1.0).
    pub fn failure_rate(&self) -> f64 {
        let failures = self.failures_total() as f64;
        let total = self.operations_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            failures / total
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.operations_total.store(0, Ordering::Relaxed);
        for kind in FailureKind::ALL {
            self.counter(kind).store(0, Ordering::Relaxed);
        }
    }

    /// Get a snapshot of all counters.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            operations_total: self.operations_total(),
            failures_total: self.failures_total(),
            required_field_total: self.failures_of(FailureKind::RequiredField),
            field_format_total: self.failures_of(FailureKind::FieldFormat),
            phone_not_found_total: self.failures_of(FailureKind::PhoneNotFound),
            contact_not_found_total: self.failures_of(FailureKind::ContactNotFound),
            unclassified_total: self.failures_of(FailureKind::Unclassified),
        }
    }
}

impl Default for BoundaryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot of boundary metrics values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub operations_total: u64,
    pub failures_total: u64,
    pub required_field_total: u64,
    pub field_format_total: u64,
    pub phone_not_found_total: u64,
    pub contact_not_found_total: u64,
    pub unclassified_total: u64,
}

impl std::fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Boundary Summary:\n\
             Operations: {}\n\
             Contained Failures: {}\n\
             Required Field: {}\n\
             Field Format: {}\n\
             Phone Not Found: {}\n\
             Contact Not Found: {}\n\
             Unclassified: {}",
            self.operations_total,
            self.failures_total,
            self.required_field_total,
            self.field_format_total,
            self.phone_not_found_total,
            self.contact_not_found_total,
            self.unclassified_total,
        )
    }
}
