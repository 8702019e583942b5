use super::ReportMetadata;
use crate::fraction_resolution::domain::{FractionKey, ResolutionResult};
use std::collections::HashSet;

/// ResolveResponse - Internal response DTO from dependency resolution
///
/// Carries the raw domain result; adapters format it through the
/// `ResolutionReport` read model.
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    /// Configuration that was resolved
    pub configuration: String,
    /// Top-level dependency to its children
    pub result: ResolutionResult,
    /// Fraction keys known while resolving, used to flag promoted entries
    pub fraction_keys: HashSet<FractionKey>,
    /// GAVs of top-level dependencies that are projects of this build
    pub project_gavs: HashSet<String>,
    pub metadata: ReportMetadata,
}

impl ResolveResponse {
    pub fn new(
        configuration: impl Into<String>,
        result: ResolutionResult,
        fraction_keys: HashSet<FractionKey>,
        project_gavs: HashSet<String>,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            configuration: configuration.into(),
            result,
            fraction_keys,
            project_gavs,
            metadata,
        }
    }
}
