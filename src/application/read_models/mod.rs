//! Read models for query operations
//!
//! View-optimized structs that give formatters a sorted, denormalized
//! picture of a resolution result.

mod resolution_report;
mod resolution_report_builder;

pub use resolution_report::{DescriptorView, ReportEntry, ReportMetadataView, ResolutionReport};
pub use resolution_report_builder::ResolutionReportBuilder;
