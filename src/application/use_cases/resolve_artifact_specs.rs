use crate::application::dto::SpecsRequest;
use crate::application::project_index::ProjectIndex;
use crate::fraction_resolution::domain::{ArtifactSpec, DependencyDescriptor, Scope};
use crate::fraction_resolution::services::{SpecClassifier, SpecDisposition};
use crate::ports::outbound::{ArtifactResolver, ProjectRegistry, ResolutionRequest};
use crate::shared::{BuildCache, Result};
use std::collections::HashSet;
use std::sync::Arc;

/// ResolveArtifactSpecsUseCase - resolves a flat collection of artifact specs
/// against the build's native resolution facility
///
/// Specs that already carry a file are returned as they are unless
/// transitive resolution was requested. Everything else goes to the
/// resolver in a single batch; specs naming a project of this build are
/// resolved by direct reference.
///
/// # Type Parameters
/// * `R` - ProjectRegistry implementation
/// * `A` - ArtifactResolver implementation
pub struct ResolveArtifactSpecsUseCase<R, A> {
    project_registry: R,
    artifact_resolver: A,
    cache: Arc<BuildCache>,
}

impl<R, A> ResolveArtifactSpecsUseCase<R, A>
where
    R: ProjectRegistry,
    A: ArtifactResolver,
{
    pub fn new(project_registry: R, artifact_resolver: A, cache: Arc<BuildCache>) -> Self {
        Self {
            project_registry,
            artifact_resolver,
            cache,
        }
    }

    /// Resolves `specs`
    ///
    /// An absent collection is logged and treated as empty.
    ///
    /// # Errors
    /// Returns an error if the native resolution facility fails
    pub fn execute(
        &self,
        specs: Option<&[ArtifactSpec]>,
        request: &SpecsRequest,
    ) -> Result<HashSet<DependencyDescriptor>> {
        let Some(specs) = specs else {
            tracing::warn!("Artifact specification collection is absent");
            return Ok(HashSet::new());
        };
        if specs.is_empty() {
            return Ok(HashSet::new());
        }

        let classifier = SpecClassifier::new(
            request.default_group.as_str(),
            request.transitive,
            request.exclude_defaults,
        );
        let index = ProjectIndex::new(&self.project_registry, &self.cache);

        let mut result = HashSet::new();
        let mut batch = Vec::new();
        for spec in specs {
            let project = index.project_for(&spec.coordinates());
            match classifier.classify(spec, project.is_some()) {
                SpecDisposition::Skip => {
                    tracing::debug!("Skipping {}; supplied by the runtime", spec.gav());
                }
                SpecDisposition::PassThrough => {
                    result.insert(spec.to_descriptor());
                }
                SpecDisposition::ResolveProject => {
                    if let Some(handle) = project {
                        batch.push(ResolutionRequest::Project(handle));
                    }
                }
                SpecDisposition::ResolveExternal => {
                    batch.push(ResolutionRequest::External(spec.clone()));
                }
            }
        }

        if !batch.is_empty() {
            tracing::debug!("Resolving {} artifact spec(s) in one batch", batch.len());
            let resolved = self
                .artifact_resolver
                .resolve_batch(&batch, request.transitive)?;
            result.extend(resolved.iter().map(|record| {
                DependencyDescriptor::for_artifact(Scope::Compile, &record.coordinates, &record.artifact)
            }));
        }

        Ok(result)
    }
}
