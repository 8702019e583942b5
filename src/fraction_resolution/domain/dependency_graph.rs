use super::ModuleCoordinates;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Index of a module inside a [`DependencyGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// One file produced by a resolved module
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    #[serde(rename = "type", default = "default_artifact_type")]
    pub artifact_type: String,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_artifact_type() -> String {
    "jar".to_string()
}

impl ResolvedArtifact {
    pub fn new(artifact_type: impl Into<String>, classifier: Option<String>, file: Option<PathBuf>) -> Self {
        Self {
            artifact_type: artifact_type.into(),
            classifier,
            file,
        }
    }

    pub fn jar(file: impl Into<PathBuf>) -> Self {
        Self::new("jar", None, Some(file.into()))
    }
}

/// A module of the resolved graph together with its artifacts and edges
#[derive(Debug, Clone)]
pub struct ResolvedModule {
    coordinates: ModuleCoordinates,
    artifacts: Vec<ResolvedArtifact>,
    children: Vec<NodeId>,
}

impl ResolvedModule {
    pub fn coordinates(&self) -> &ModuleCoordinates {
        &self.coordinates
    }

    pub fn artifacts(&self) -> &[ResolvedArtifact] {
        &self.artifacts
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Aggregator and platform modules carry no artifacts
    pub fn has_artifacts(&self) -> bool {
        !self.artifacts.is_empty()
    }
}

/// Read-only resolved dependency graph of one configuration.
///
/// Modules are stored in an arena and shared between parents, so the
/// structure is a DAG. Cycles are not expected but are tolerated by every
/// traversal in this crate.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    modules: Vec<ResolvedModule>,
    first_level: Vec<NodeId>,
}

impl DependencyGraph {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> DependencyGraphBuilder {
        DependencyGraphBuilder::default()
    }

    pub fn module(&self, id: NodeId) -> &ResolvedModule {
        &self.modules[id.0]
    }

    pub fn first_level(&self) -> &[NodeId] {
        &self.first_level
    }

    pub fn find(&self, coordinates: &ModuleCoordinates) -> Option<NodeId> {
        self.modules
            .iter()
            .position(|m| &m.coordinates == coordinates)
            .map(NodeId)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Incrementally assembles a [`DependencyGraph`].
///
/// Adding the same coordinates twice yields the same node, which is how
/// shared subtrees are expressed.
#[derive(Debug, Default)]
pub struct DependencyGraphBuilder {
    modules: Vec<ResolvedModule>,
    index: HashMap<ModuleCoordinates, NodeId>,
    first_level: Vec<NodeId>,
}

impl DependencyGraphBuilder {
    pub fn add_module(
        &mut self,
        coordinates: ModuleCoordinates,
        artifacts: Vec<ResolvedArtifact>,
    ) -> NodeId {
        if let Some(id) = self.index.get(&coordinates) {
            return *id;
        }
        let id = NodeId(self.modules.len());
        self.index.insert(coordinates.clone(), id);
        self.modules.push(ResolvedModule {
            coordinates,
            artifacts,
            children: Vec::new(),
        });
        id
    }

    pub fn node(&self, coordinates: &ModuleCoordinates) -> Option<NodeId> {
        self.index.get(coordinates).copied()
    }

    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> &mut Self {
        let children = &mut self.modules[parent.0].children;
        if !children.contains(&child) {
            children.push(child);
        }
        self
    }

    pub fn add_first_level(&mut self, id: NodeId) -> &mut Self {
        if !self.first_level.contains(&id) {
            self.first_level.push(id);
        }
        self
    }

    pub fn build(self) -> DependencyGraph {
        DependencyGraph {
            modules: self.modules,
            first_level: self.first_level,
        }
    }
}
