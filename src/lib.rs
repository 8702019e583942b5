//! fraction-resolver - dependency resolution and fraction detection for
//! fraction-based application server builds
//!
//! The library turns a build's resolved dependency graph into a map of
//! top-level dependencies and the dependencies they bring along, promoting
//! every fraction found below a non-fraction dependency so it is reported
//! at the top level. It also resolves flat lists of artifact specs and
//! models the testing projects used to verify fraction autodetection.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`fraction_resolution`): Pure domain values and algorithms
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Testing project model** (`testing_project`): Scenario definitions and expectations
//! - **Shared** (`shared`): Common utilities, error types and the build cache
//!
//! # Example
//!
//! ```no_run
//! use fraction_resolver::prelude::*;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let reader = FileSystemReader::new();
//! let snapshot = BuildSnapshot::load(&reader, Path::new("build-snapshot.json"))?;
//! let catalog = TomlFractionCatalog::load(&reader, Path::new("fractions.toml"))?;
//!
//! // Create use case; the snapshot serves as graph provider and project registry
//! let use_case = ResolveProjectDependenciesUseCase::new(
//!     &snapshot,
//!     catalog,
//!     &snapshot,
//!     StderrProgressReporter::new(),
//!     Arc::new(BuildCache::new()),
//! );
//!
//! // Execute
//! let response = use_case.execute(ResolveRequest::new("runtimeClasspath", true))?;
//!
//! // Format output
//! let report = ResolutionReportBuilder::build(&response);
//! println!("{}", JsonFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod fraction_resolution;
pub mod ports;
pub mod shared;
pub mod testing_project;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::build_snapshot::BuildSnapshot;
    pub use crate::adapters::outbound::catalog::TomlFractionCatalog;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{ResolveRequest, ResolveResponse, SpecsRequest};
    pub use crate::application::read_models::{ResolutionReport, ResolutionReportBuilder};
    pub use crate::application::use_cases::{
        ResolveArtifactSpecsUseCase, ResolveProjectDependenciesUseCase,
    };
    pub use crate::fraction_resolution::domain::{
        ArtifactSpec, DependencyDescriptor, FractionKey, ModuleCoordinates, ResolutionResult,
        Scope,
    };
    pub use crate::fraction_resolution::services::{GraphResolver, ScopeMapper};
    pub use crate::ports::outbound::{
        ArtifactResolver, DependencyGraphProvider, FractionCatalog, OutputPresenter,
        ProgressReporter, ProjectRegistry, ReportFormatter,
    };
    pub use crate::shared::error::ResolverError;
    pub use crate::shared::{BuildCache, Result};
    pub use crate::testing_project::TestingProject;
}
