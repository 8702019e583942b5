use super::{DependencyGraph, ModuleKey};

/// A dependency configuration as declared in the build, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredConfiguration {
    name: String,
    dependencies: Vec<ModuleKey>,
}

impl DeclaredConfiguration {
    pub fn new(name: impl Into<String>, dependencies: Vec<ModuleKey>) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependencies(&self) -> &[ModuleKey] {
        &self.dependencies
    }
}

/// A requested configuration: its hierarchy and its resolved graph.
///
/// `hierarchy` lists the configuration itself followed by everything it
/// extends, in the order the host build reports them.
#[derive(Debug, Clone)]
pub struct ProjectConfiguration {
    name: String,
    hierarchy: Vec<DeclaredConfiguration>,
    graph: DependencyGraph,
}

impl ProjectConfiguration {
    pub fn new(name: impl Into<String>, hierarchy: Vec<DeclaredConfiguration>, graph: DependencyGraph) -> Self {
        Self {
            name: name.into(),
            hierarchy,
            graph,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hierarchy(&self) -> &[DeclaredConfiguration] {
        &self.hierarchy
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }
}
