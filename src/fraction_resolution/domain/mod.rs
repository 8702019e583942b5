pub mod artifact_spec;
pub mod configuration;
pub mod coordinates;
pub mod dependency_descriptor;
pub mod dependency_graph;
pub mod resolution_result;
pub mod scope;

pub use artifact_spec::ArtifactSpec;
pub use configuration::{DeclaredConfiguration, ProjectConfiguration};
pub use coordinates::{FractionKey, ModuleCoordinates, ModuleKey};
pub use dependency_descriptor::DependencyDescriptor;
pub use dependency_graph::{
    DependencyGraph, DependencyGraphBuilder, NodeId, ResolvedArtifact, ResolvedModule,
};
pub use resolution_result::ResolutionResult;
pub use scope::Scope;
