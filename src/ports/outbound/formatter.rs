use crate::application::read_models::ResolutionReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a resolution report
///
/// This port abstracts the output formats (JSON, plain text).
pub trait ReportFormatter {
    /// Formats the resolution report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ResolutionReport) -> Result<String>;
}
