use crate::application::dto::{ReportMetadata, ResolveRequest, ResolveResponse};
use crate::application::project_index::ProjectIndex;
use crate::fraction_resolution::domain::{FractionKey, ResolutionResult};
use crate::fraction_resolution::services::GraphResolver;
use crate::ports::outbound::{
    DependencyGraphProvider, FractionCatalog, ProgressReporter, ProjectRegistry,
};
use crate::shared::{BuildCache, Result};
use std::collections::HashSet;
use std::sync::Arc;

/// ResolveProjectDependenciesUseCase - resolves one configuration of a build
/// into top-level dependencies and the dependencies they bring along
///
/// # Type Parameters
/// * `G` - DependencyGraphProvider implementation
/// * `C` - FractionCatalog implementation
/// * `R` - ProjectRegistry implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveProjectDependenciesUseCase<G, C, R, PR> {
    graph_provider: G,
    fraction_catalog: C,
    project_registry: R,
    progress_reporter: PR,
    cache: Arc<BuildCache>,
}

impl<G, C, R, PR> ResolveProjectDependenciesUseCase<G, C, R, PR>
where
    G: DependencyGraphProvider,
    C: FractionCatalog,
    R: ProjectRegistry,
    PR: ProgressReporter,
{
    /// Creates a new use case with injected dependencies
    pub fn new(
        graph_provider: G,
        fraction_catalog: C,
        project_registry: R,
        progress_reporter: PR,
        cache: Arc<BuildCache>,
    ) -> Self {
        Self {
            graph_provider,
            fraction_catalog,
            project_registry,
            progress_reporter,
            cache,
        }
    }

    /// Executes the resolution
    ///
    /// A configuration the build does not declare yields an empty result.
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be read, the configuration
    /// has no canonical scope, or the graph violates a resolution invariant.
    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        let fraction_keys = self.load_fraction_keys()?;

        self.progress_reporter.report(&format!(
            "🔍 Resolving configuration '{}'",
            request.configuration
        ));

        let Some(configuration) = self.graph_provider.configuration(&request.configuration)? else {
            tracing::warn!(
                "Unable to find configuration '{}'; no dependencies resolved",
                request.configuration
            );
            self.progress_reporter.report_error(&format!(
                "⚠️  Configuration '{}' not found, nothing to resolve",
                request.configuration
            ));
            return Ok(self.build_response(&request, ResolutionResult::new(), fraction_keys));
        };

        let result = GraphResolver::resolve_top_level(
            &configuration,
            &fraction_keys,
            request.transitive_children,
        )?;
        Self::log_resolved_map(&result);

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} top-level dependencies",
            result.len()
        ));

        Ok(self.build_response(&request, result, fraction_keys))
    }

    fn load_fraction_keys(&self) -> Result<HashSet<FractionKey>> {
        let keys = self.fraction_catalog.fraction_keys()?;
        self.progress_reporter
            .report(&format!("📚 Loaded {} known fraction(s)", keys.len()));
        Ok(keys)
    }

    fn build_response(
        &self,
        request: &ResolveRequest,
        result: ResolutionResult,
        fraction_keys: HashSet<FractionKey>,
    ) -> ResolveResponse {
        let index = ProjectIndex::new(&self.project_registry, &self.cache);
        let total = result.len();
        let mut project_gavs = HashSet::new();
        for (position, key) in result.keys().enumerate() {
            let gav = key.gav();
            self.progress_reporter
                .report_progress(position + 1, total, Some(&gav));
            if index.is_project(&key.coordinates()) {
                project_gavs.insert(gav);
            }
        }

        ResolveResponse::new(
            request.configuration.clone(),
            result,
            fraction_keys,
            project_gavs,
            ReportMetadata::current(),
        )
    }

    fn log_resolved_map(result: &ResolutionResult) {
        tracing::info!("{}", Self::render_resolved_map(result));
    }

    /// One line per top-level entry, its children tab-indented below it
    fn render_resolved_map(result: &ResolutionResult) -> String {
        let mut dump = String::from("Resolved dependencies:");
        for (key, children) in result.sorted() {
            dump.push_str(&format!("\n{}", key));
            for child in children {
                dump.push_str(&format!("\n\t{}", child));
            }
        }
        dump
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraction_resolution::domain::{
        DeclaredConfiguration, DependencyGraph, ModuleCoordinates, ModuleKey,
        ProjectConfiguration, ResolvedArtifact,
    };
    use crate::ports::outbound::{FractionDescriptor, ProjectHandle};
    use std::cell::RefCell;

    struct FixedGraph;

    impl DependencyGraphProvider for FixedGraph {
        fn configuration(&self, name: &str) -> Result<Option<ProjectConfiguration>> {
            if name != "runtimeClasspath" {
                return Ok(None);
            }
            let web = ModuleCoordinates::new("com.example", "web", "1.0");
            let jaxrs = ModuleCoordinates::new("io.thorntail", "jaxrs", "2.5.0");
            let api = ModuleCoordinates::new("javax.ws.rs", "api", "2.1");

            let mut builder = DependencyGraph::builder();
            let web_id = builder.add_module(web, vec![ResolvedArtifact::jar("/build/web.jar")]);
            let jaxrs_id = builder.add_module(jaxrs, vec![ResolvedArtifact::jar("/repo/jaxrs.jar")]);
            let api_id = builder.add_module(api, vec![ResolvedArtifact::jar("/repo/api.jar")]);
            builder
                .add_child(web_id, jaxrs_id)
                .add_child(jaxrs_id, api_id)
                .add_first_level(web_id);

            let hierarchy = vec![DeclaredConfiguration::new(
                "implementation",
                vec![ModuleKey::new("com.example", "web")],
            )];
            Ok(Some(ProjectConfiguration::new(name, hierarchy, builder.build())))
        }
    }

    struct SingleFraction;

    impl FractionCatalog for SingleFraction {
        fn fraction_descriptors(&self) -> Result<Vec<FractionDescriptor>> {
            Ok(vec![FractionDescriptor::new("io.thorntail", "jaxrs")])
        }
    }

    struct SingleProject;

    impl ProjectRegistry for SingleProject {
        fn root_project(&self) -> String {
            "app".to_string()
        }

        fn all_projects(&self) -> Vec<ProjectHandle> {
            vec![ProjectHandle::new(
                ModuleCoordinates::new("com.example", "web", "1.0"),
                "web",
            )]
        }

        fn included_builds(&self) -> Vec<String> {
            Vec::new()
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        errors: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, _message: &str) {}
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, _message: &str) {}
    }

    fn use_case(
        reporter: &RecordingReporter,
    ) -> ResolveProjectDependenciesUseCase<FixedGraph, SingleFraction, SingleProject, &RecordingReporter>
    {
        ResolveProjectDependenciesUseCase::new(
            FixedGraph,
            SingleFraction,
            SingleProject,
            reporter,
            Arc::new(BuildCache::new()),
        )
    }

    #[test]
    fn test_fraction_is_promoted_and_project_flagged() {
        let reporter = RecordingReporter::default();
        let response = use_case(&reporter)
            .execute(ResolveRequest::new("runtimeClasspath", true))
            .unwrap();

        assert_eq!(response.result.len(), 2);
        assert!(response.project_gavs.contains("com.example:web:1.0"));
        assert!(!response.project_gavs.contains("io.thorntail:jaxrs:2.5.0"));
        assert!(response
            .fraction_keys
            .contains(&ModuleKey::new("io.thorntail", "jaxrs")));
        assert!(reporter.errors.borrow().is_empty());
    }

    #[test]
    fn test_missing_configuration_is_empty_not_error() {
        let reporter = RecordingReporter::default();
        let response = use_case(&reporter)
            .execute(ResolveRequest::new("compileClasspath", true))
            .unwrap();

        assert!(response.result.is_empty());
        assert_eq!(response.configuration, "compileClasspath");
        assert_eq!(reporter.errors.borrow().len(), 1);
        assert!(reporter.errors.borrow()[0].contains("compileClasspath"));
    }

    #[test]
    fn test_direct_children_only() {
        let reporter = RecordingReporter::default();
        let response = use_case(&reporter)
            .execute(ResolveRequest::new("runtimeClasspath", false))
            .unwrap();

        assert_eq!(response.result.len(), 1);
        let (_, children) = response.result.iter().next().unwrap();
        assert_eq!(children.len(), 1);
    }

    #[test]
    fn test_render_resolved_map() {
        let reporter = RecordingReporter::default();
        let response = use_case(&reporter)
            .execute(ResolveRequest::new("runtimeClasspath", true))
            .unwrap();

        let dump = ResolveProjectDependenciesUseCase::<
            FixedGraph,
            SingleFraction,
            SingleProject,
            &RecordingReporter,
        >::render_resolved_map(&response.result);

        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Resolved dependencies:",
                "com.example:web:jar:1.0:compile",
                "\tcom.example:web:jar:1.0:compile",
                "io.thorntail:jaxrs:jar:2.5.0:compile",
                "\tjavax.ws.rs:api:jar:2.1:compile",
            ]
        );
    }
}
