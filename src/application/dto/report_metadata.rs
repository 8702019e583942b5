use chrono::{DateTime, Utc};

/// Provenance attached to every report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    timestamp: DateTime<Utc>,
    tool_name: String,
    tool_version: String,
}

impl ReportMetadata {
    pub fn new(
        timestamp: DateTime<Utc>,
        tool_name: impl Into<String>,
        tool_version: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
        }
    }

    /// Metadata stamped now with this crate's name and version
    pub fn current() -> Self {
        Self::new(Utc::now(), env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}
