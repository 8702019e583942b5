/// Mock implementations for testing
mod mock_artifact_resolver;
mod mock_fraction_catalog;
mod mock_graph_provider;
mod mock_progress_reporter;
mod mock_project_registry;

pub use mock_artifact_resolver::MockArtifactResolver;
pub use mock_fraction_catalog::MockFractionCatalog;
pub use mock_graph_provider::MockGraphProvider;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_registry::MockProjectRegistry;
