//! Contact Book - an in-memory contact directory with validated fields.
//!
//! Contacts are records of one validated name and any number of validated
//! phone numbers, stored in a directory keyed by name. Operations that can
//! fail on bad input or on a lookup miss are contained by an error boundary:
//! the failure is reported once through a pluggable sink and the caller gets
//! `None` back instead of an error.
//!
//! # Architecture
//!
//! - **domain**: `Name` and `Phone` value objects and their validation errors
//! - **models**: the `Record` aggregate
//! - **directory**: the keyed `Directory` collection
//! - **boundary**: failure classification, reports and report sinks
//! - **observability**: counters for contained failures
//! - **error**: crate error types
//! - **config**: configuration for the demo binary

pub mod boundary;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;

// Re-export commonly used types
pub use boundary::{ErrorBoundary, FailureKind, MemorySink, Report, ReportSink, TracingSink};
pub use config::Config;
pub use directory::Directory;
pub use domain::{Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
pub use observability::{BoundaryMetrics, MetricsSummary};
