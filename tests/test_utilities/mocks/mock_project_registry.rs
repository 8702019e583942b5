use fraction_resolver::ports::outbound::ProjectHandle;
use fraction_resolver::prelude::*;
use std::collections::HashMap;

/// Mock ProjectRegistry with projects and included builds
pub struct MockProjectRegistry {
    root: String,
    projects: Vec<ProjectHandle>,
    included: Vec<String>,
    available: HashMap<String, Vec<ModuleCoordinates>>,
}

impl MockProjectRegistry {
    pub fn new(root: &str) -> Self {
        Self {
            root: root.to_string(),
            projects: Vec::new(),
            included: Vec::new(),
            available: HashMap::new(),
        }
    }

    pub fn with_project(mut self, group: &str, name: &str, version: &str) -> Self {
        self.projects.push(ProjectHandle::new(
            ModuleCoordinates::new(group, name, version),
            name,
        ));
        self
    }

    /// An included build; `modules` of `None` means it cannot list them
    pub fn with_included_build(mut self, name: &str, modules: Option<Vec<ModuleCoordinates>>) -> Self {
        self.included.push(name.to_string());
        if let Some(modules) = modules {
            self.available.insert(name.to_string(), modules);
        }
        self
    }
}

impl ProjectRegistry for MockProjectRegistry {
    fn root_project(&self) -> String {
        self.root.clone()
    }

    fn all_projects(&self) -> Vec<ProjectHandle> {
        self.projects.clone()
    }

    fn included_builds(&self) -> Vec<String> {
        self.included.clone()
    }

    fn available_modules(&self, included_build: &str) -> Option<Vec<ModuleCoordinates>> {
        self.available.get(included_build).cloned()
    }
}
