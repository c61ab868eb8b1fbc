//! Error boundary for record and directory operations.
//!
//! Every operation that can fail on user input or on a lookup miss goes
//! through an [`ErrorBoundary`]. The boundary is the single place where a
//! failure is classified into a [`FailureKind`] and turned into a
//! human-readable [`Report`]. Reports go to an injectable [`ReportSink`];
//! [`TracingSink`] is the default and [`MemorySink`] captures them for
//! inspection.

pub mod error_boundary;
pub mod report;
pub mod sink;

pub use error_boundary::ErrorBoundary;
pub use report::{FailureKind, Report};
pub use sink::{MemorySink, ReportSink, TracingSink};
