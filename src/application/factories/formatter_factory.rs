use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selecting an infrastructure adapter by application-level format keeps
/// the CLI unaware of concrete formatter types.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use fraction_resolver::application::dto::OutputFormat;
    /// use fraction_resolver::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Text);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Text => Box::new(TextFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Text => "📝 Generating text report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{ReportMetadataView, ResolutionReport};

    fn empty_report() -> ResolutionReport {
        ResolutionReport {
            metadata: ReportMetadataView {
                timestamp: "2024-01-01T00:00:00+00:00".to_string(),
                tool_name: "fraction-resolver".to_string(),
                tool_version: "0.4.0".to_string(),
            },
            configuration: "runtimeClasspath".to_string(),
            entries: Vec::new(),
        }
    }

    #[test]
    fn test_create_json_formatter() {
        let output = FormatterFactory::create(OutputFormat::Json)
            .format(&empty_report())
            .unwrap();
        assert!(output.trim_start().starts_with('{'));
    }

    #[test]
    fn test_create_text_formatter() {
        let output = FormatterFactory::create(OutputFormat::Text)
            .format(&empty_report())
            .unwrap();
        assert!(output.starts_with("Configuration: runtimeClasspath"));
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Generating JSON report..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Text),
            "📝 Generating text report..."
        );
    }
}
