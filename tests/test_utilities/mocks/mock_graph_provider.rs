use fraction_resolver::fraction_resolution::domain::ProjectConfiguration;
use fraction_resolver::prelude::*;
use std::collections::HashMap;

/// Mock DependencyGraphProvider holding prepared configurations by name
#[derive(Default)]
pub struct MockGraphProvider {
    configurations: HashMap<String, ProjectConfiguration>,
}

impl MockGraphProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configuration(mut self, configuration: ProjectConfiguration) -> Self {
        self.configurations
            .insert(configuration.name().to_string(), configuration);
        self
    }
}

impl DependencyGraphProvider for MockGraphProvider {
    fn configuration(&self, name: &str) -> Result<Option<ProjectConfiguration>> {
        Ok(self.configurations.get(name).cloned())
    }
}
