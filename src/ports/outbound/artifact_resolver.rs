use super::project_registry::ProjectHandle;
use crate::fraction_resolution::domain::{ArtifactSpec, ModuleCoordinates, ResolvedArtifact};
use crate::shared::Result;

/// One entry of a batch handed to the native resolution facility
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionRequest {
    /// Resolve by direct reference to a project of this build
    Project(ProjectHandle),
    /// Fetch through the host's repositories
    External(ArtifactSpec),
}

impl ResolutionRequest {
    pub fn coordinates(&self) -> ModuleCoordinates {
        match self {
            ResolutionRequest::Project(handle) => handle.coordinates().clone(),
            ResolutionRequest::External(spec) => spec.coordinates(),
        }
    }
}

/// An artifact produced by the native resolution facility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifactRecord {
    pub coordinates: ModuleCoordinates,
    pub artifact: ResolvedArtifact,
}

impl ResolvedArtifactRecord {
    pub fn new(coordinates: ModuleCoordinates, artifact: ResolvedArtifact) -> Self {
        Self {
            coordinates,
            artifact,
        }
    }
}

/// ArtifactResolver port wrapping the host build tool's resolution facility
pub trait ArtifactResolver {
    /// Resolves a whole batch in one round-trip
    ///
    /// # Arguments
    /// * `requests` - Project references and external specs to resolve
    /// * `transitive` - Whether dependencies of each request are resolved as well
    ///
    /// # Errors
    /// Returns `ResolverError::UnresolvedArtifact` if any request cannot be satisfied
    fn resolve_batch(
        &self,
        requests: &[ResolutionRequest],
        transitive: bool,
    ) -> Result<Vec<ResolvedArtifactRecord>>;
}

impl<T: ArtifactResolver + ?Sized> ArtifactResolver for &T {
    fn resolve_batch(
        &self,
        requests: &[ResolutionRequest],
        transitive: bool,
    ) -> Result<Vec<ResolvedArtifactRecord>> {
        (**self).resolve_batch(requests, transitive)
    }
}
