//! Builder for constructing a ResolutionReport from a ResolveResponse

use super::resolution_report::{DescriptorView, ReportEntry, ReportMetadataView, ResolutionReport};
use crate::application::dto::{ReportMetadata, ResolveResponse};
use crate::fraction_resolution::domain::DependencyDescriptor;

/// Transforms the domain result into the sorted read model
pub struct ResolutionReportBuilder;

impl ResolutionReportBuilder {
    pub fn build(response: &ResolveResponse) -> ResolutionReport {
        let entries = response
            .result
            .sorted()
            .into_iter()
            .map(|(key, children)| ReportEntry {
                dependency: Self::build_descriptor(key),
                fraction: response.fraction_keys.contains(&key.key()),
                project: response.project_gavs.contains(&key.gav()),
                children: children.into_iter().map(Self::build_descriptor).collect(),
            })
            .collect();

        ResolutionReport {
            metadata: Self::build_metadata(&response.metadata),
            configuration: response.configuration.clone(),
            entries,
        }
    }

    fn build_metadata(metadata: &ReportMetadata) -> ReportMetadataView {
        ReportMetadataView {
            timestamp: metadata.timestamp().to_rfc3339(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
        }
    }

    fn build_descriptor(descriptor: &DependencyDescriptor) -> DescriptorView {
        DescriptorView {
            group: descriptor.group().to_string(),
            artifact: descriptor.artifact().to_string(),
            version: descriptor.version().to_string(),
            scope: descriptor.scope().to_string(),
            artifact_type: descriptor.artifact_type().to_string(),
            classifier: descriptor.classifier().map(str::to_string),
            file: descriptor.file().map(|path| path.display().to_string()),
        }
    }
}
