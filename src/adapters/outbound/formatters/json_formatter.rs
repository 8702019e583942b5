use crate::application::read_models::{
    DescriptorView, ReportEntry, ReportMetadataView, ResolutionReport,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Document<'a> {
    configuration: &'a str,
    metadata: Metadata<'a>,
    summary: Summary,
    dependencies: Vec<Dependency<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tools: Vec<Tool<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct Summary {
    #[serde(rename = "topLevel")]
    top_level: usize,
    fractions: usize,
}

#[derive(Debug, Serialize)]
struct Dependency<'a> {
    #[serde(flatten)]
    descriptor: &'a DescriptorView,
    fraction: bool,
    project: bool,
    #[serde(rename = "dependsOn", skip_serializing_if = "no_children")]
    depends_on: &'a [DescriptorView],
}

fn no_children(children: &&[DescriptorView]) -> bool {
    children.is_empty()
}

/// JsonFormatter adapter for machine-readable reports
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ResolutionReport) -> Result<String> {
        let document = Document {
            configuration: &report.configuration,
            metadata: self.build_metadata(&report.metadata),
            summary: Summary {
                top_level: report.entries.len(),
                fractions: report.fraction_count(),
            },
            dependencies: report.entries.iter().map(|e| self.build_dependency(e)).collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

impl JsonFormatter {
    fn build_metadata<'a>(&self, metadata: &'a ReportMetadataView) -> Metadata<'a> {
        Metadata {
            timestamp: &metadata.timestamp,
            tools: vec![Tool {
                name: &metadata.tool_name,
                version: &metadata.tool_version,
            }],
        }
    }

    fn build_dependency<'a>(&self, entry: &'a ReportEntry) -> Dependency<'a> {
        Dependency {
            descriptor: &entry.dependency,
            fraction: entry.fraction,
            project: entry.project,
            depends_on: &entry.children,
        }
    }
}
