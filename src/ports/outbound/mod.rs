/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the host build, the fraction catalog and the console.
pub mod artifact_resolver;
pub mod dependency_graph_provider;
pub mod formatter;
pub mod fraction_catalog;
pub mod input_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_registry;

pub use artifact_resolver::{ArtifactResolver, ResolutionRequest, ResolvedArtifactRecord};
pub use dependency_graph_provider::DependencyGraphProvider;
pub use formatter::ReportFormatter;
pub use fraction_catalog::{FractionCatalog, FractionDescriptor};
pub use input_reader::InputReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_registry::{ProjectHandle, ProjectRegistry};
