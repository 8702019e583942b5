use crate::fraction_resolution::domain::ModuleCoordinates;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build-internal reference to a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectHandle {
    coordinates: ModuleCoordinates,
    path: PathBuf,
}

impl ProjectHandle {
    pub fn new(coordinates: ModuleCoordinates, path: impl Into<PathBuf>) -> Self {
        Self {
            coordinates,
            path: path.into(),
        }
    }

    pub fn coordinates(&self) -> &ModuleCoordinates {
        &self.coordinates
    }

    /// Project directory, relative to the build root
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

/// ProjectRegistry port describing the projects of the running build
pub trait ProjectRegistry {
    /// Identity of the root project; owner of every cached lookup
    fn root_project(&self) -> String;

    /// Every project of the build, root included
    fn all_projects(&self) -> Vec<ProjectHandle>;

    /// Names of the builds included into this one
    fn included_builds(&self) -> Vec<String>;

    /// Modules an included build can substitute for external dependencies
    ///
    /// # Returns
    /// `None` when the host build tool cannot report them. Callers treat
    /// that as "no modules" rather than as a failure.
    fn available_modules(&self, _included_build: &str) -> Option<Vec<ModuleCoordinates>> {
        None
    }
}

impl<T: ProjectRegistry + ?Sized> ProjectRegistry for &T {
    fn root_project(&self) -> String {
        (**self).root_project()
    }

    fn all_projects(&self) -> Vec<ProjectHandle> {
        (**self).all_projects()
    }

    fn included_builds(&self) -> Vec<String> {
        (**self).included_builds()
    }

    fn available_modules(&self, included_build: &str) -> Option<Vec<ModuleCoordinates>> {
        (**self).available_modules(included_build)
    }
}
