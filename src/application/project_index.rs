use crate::fraction_resolution::domain::ModuleCoordinates;
use crate::ports::outbound::{ProjectHandle, ProjectRegistry};
use crate::shared::BuildCache;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

const PROJECT_GAV_COLLECTION: &str = "project_gav_collection";
const INCLUDED_PROJECT_IDENTIFIERS: &str = "included_project_identifiers";

/// Cached lookups over the projects of a build
///
/// Both lookups are computed on first use and memoised in the `BuildCache`
/// under the root project's identity, so every use case of one invocation
/// shares them.
pub struct ProjectIndex<'a, R> {
    registry: &'a R,
    cache: &'a BuildCache,
}

impl<'a, R: ProjectRegistry> ProjectIndex<'a, R> {
    pub fn new(registry: &'a R, cache: &'a BuildCache) -> Self {
        Self { registry, cache }
    }

    /// Every project of the build keyed by `group:artifact:version`
    pub fn projects_by_gav(&self) -> Arc<HashMap<String, ProjectHandle>> {
        let owner = self.registry.root_project();
        self.cache
            .get_or_insert_with(&owner, PROJECT_GAV_COLLECTION, || {
                self.registry
                    .all_projects()
                    .into_iter()
                    .map(|project| (project.coordinates().gav(), project))
                    .collect::<HashMap<_, _>>()
            })
    }

    /// GAVs of every module advertised by an included build
    pub fn included_project_identifiers(&self) -> Arc<HashSet<String>> {
        let owner = self.registry.root_project();
        self.cache
            .get_or_insert_with(&owner, INCLUDED_PROJECT_IDENTIFIERS, || {
                let mut identifiers = HashSet::new();
                for build in self.registry.included_builds() {
                    match self.registry.available_modules(&build) {
                        Some(modules) => {
                            identifiers.extend(modules.iter().map(ModuleCoordinates::gav))
                        }
                        None => tracing::debug!(
                            "Included build '{}' does not report its modules; skipping",
                            build
                        ),
                    }
                }
                identifiers
            })
    }

    /// Whether the coordinates belong to this build or one it includes
    pub fn is_project(&self, coordinates: &ModuleCoordinates) -> bool {
        let gav = coordinates.gav();
        self.projects_by_gav().contains_key(&gav) || self.included_project_identifiers().contains(&gav)
    }

    /// The project of this build with the given coordinates
    pub fn project_for(&self, coordinates: &ModuleCoordinates) -> Option<ProjectHandle> {
        self.projects_by_gav().get(&coordinates.gav()).cloned()
    }
}
