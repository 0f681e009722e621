//! Application services for task reporting.

mod reports;

pub use reports::{ReportError, ReportResult, ReportsService};
