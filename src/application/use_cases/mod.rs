/// Use cases module containing application business logic orchestration
mod resolve_artifact_specs;
mod resolve_project_dependencies;

pub use resolve_artifact_specs::ResolveArtifactSpecsUseCase;
pub use resolve_project_dependencies::ResolveProjectDependenciesUseCase;
