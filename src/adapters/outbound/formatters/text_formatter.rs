use crate::application::read_models::{DescriptorView, ResolutionReport};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TextFormatter adapter rendering one block per top-level dependency,
/// children tab-indented beneath it
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    /// `group:artifact:type[:classifier]:version:scope`
    fn render_descriptor(descriptor: &DescriptorView) -> String {
        match &descriptor.classifier {
            Some(classifier) => format!(
                "{}:{}:{}:{}:{}:{}",
                descriptor.group,
                descriptor.artifact,
                descriptor.artifact_type,
                classifier,
                descriptor.version,
                descriptor.scope
            ),
            None => format!(
                "{}:{}:{}:{}:{}",
                descriptor.group,
                descriptor.artifact,
                descriptor.artifact_type,
                descriptor.version,
                descriptor.scope
            ),
        }
    }

    fn render_header(&self, output: &mut String, report: &ResolutionReport) {
        output.push_str(&format!("Configuration: {}\n", report.configuration));
        output.push_str(&format!(
            "Generated by {} {} at {}\n",
            report.metadata.tool_name, report.metadata.tool_version, report.metadata.timestamp
        ));
        output.push_str(&format!(
            "{} top-level dependencies, {} fraction(s)\n",
            report.entries.len(),
            report.fraction_count()
        ));
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ResolutionReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, report);

        if report.entries.is_empty() {
            output.push_str("\n(no dependencies)\n");
            return Ok(output);
        }

        for entry in &report.entries {
            output.push('\n');
            output.push_str(&Self::render_descriptor(&entry.dependency));
            if entry.fraction {
                output.push_str(" [fraction]");
            }
            if entry.project {
                output.push_str(" [project]");
            }
            output.push('\n');
            for child in &entry.children {
                output.push('\t');
                output.push_str(&Self::render_descriptor(child));
                output.push('\n');
            }
        }

        Ok(output)
    }
}
