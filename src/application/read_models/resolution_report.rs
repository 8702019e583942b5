//! Resolution report read model

use serde::Serialize;

/// Main read model for a resolved configuration
///
/// Entries and children are sorted so that two reports of the same
/// result render identically.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionReport {
    pub metadata: ReportMetadataView,
    pub configuration: String,
    pub entries: Vec<ReportEntry>,
}

impl ResolutionReport {
    pub fn fraction_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.fraction).count()
    }

    pub fn find(&self, gav: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|entry| entry.dependency.gav() == gav)
    }
}

/// View representation of report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadataView {
    /// RFC 3339 timestamp
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// One top-level dependency and everything attributed to it
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub dependency: DescriptorView,
    /// Promoted because its coordinates are a known fraction
    pub fraction: bool,
    /// Refers to a project of this build or of an included build
    pub project: bool,
    pub children: Vec<DescriptorView>,
}

/// Flat view of a dependency descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorView {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub scope: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl DescriptorView {
    pub fn gav(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }
}
