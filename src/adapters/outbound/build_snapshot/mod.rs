//! Build snapshot adapter
//!
//! A snapshot is a JSON export of everything the resolver needs from the
//! host build tool: its projects, the builds it includes, the resolved
//! module graph and the declared configurations. One [`BuildSnapshot`]
//! serves as graph provider, project registry and artifact resolver.

mod snapshot_file;

use crate::fraction_resolution::domain::{
    DeclaredConfiguration, DependencyGraph, ModuleCoordinates, ModuleKey, NodeId,
    ProjectConfiguration, ResolvedArtifact,
};
use crate::ports::outbound::{
    ArtifactResolver, DependencyGraphProvider, InputReader, ProjectHandle, ProjectRegistry,
    ResolutionRequest, ResolvedArtifactRecord,
};
use crate::shared::error::ResolverError;
use crate::shared::Result;
use snapshot_file::{ConfigurationEntry, ModuleEntry, SnapshotFile};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
struct IncludedBuild {
    name: String,
    available_modules: Option<Vec<ModuleCoordinates>>,
}

/// In-memory build snapshot, validated on load
#[derive(Debug, Clone)]
pub struct BuildSnapshot {
    root_project: String,
    projects: Vec<ProjectHandle>,
    included_builds: Vec<IncludedBuild>,
    modules: Vec<ModuleEntry>,
    module_index: HashMap<String, usize>,
    configurations: HashMap<String, ConfigurationEntry>,
}

impl BuildSnapshot {
    pub fn load<R: InputReader>(reader: &R, path: &Path) -> Result<Self> {
        let content = reader.read_input(path)?;
        Self::parse(&content, path).map_err(Into::into)
    }

    /// Parses and validates snapshot JSON; `source` only names the input in errors
    pub fn parse(content: &str, source: &Path) -> std::result::Result<Self, ResolverError> {
        let parse_error = |details: String| ResolverError::SnapshotParseError {
            path: source.to_path_buf(),
            details,
        };

        let file: SnapshotFile =
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        let mut module_index = HashMap::new();
        for (position, module) in file.modules.iter().enumerate() {
            if module_index
                .insert(module.coordinates.gav(), position)
                .is_some()
            {
                return Err(parse_error(format!(
                    "module '{}' is listed twice",
                    module.coordinates
                )));
            }
        }

        for module in &file.modules {
            if let Some(child) = module
                .children
                .iter()
                .find(|child| !module_index.contains_key(child.as_str()))
            {
                return Err(parse_error(format!(
                    "module '{}' references unknown child '{}'",
                    module.coordinates, child
                )));
            }
        }

        let mut configurations = HashMap::new();
        for configuration in &file.configurations {
            if configurations
                .insert(configuration.name.clone(), configuration.clone())
                .is_some()
            {
                return Err(parse_error(format!(
                    "configuration '{}' is listed twice",
                    configuration.name
                )));
            }
        }

        for configuration in &file.configurations {
            Self::validate_configuration(configuration, &module_index, &configurations)
                .map_err(parse_error)?;
        }

        let projects = file
            .projects
            .into_iter()
            .map(|project| {
                let path = project.path.unwrap_or_else(|| PathBuf::from("."));
                ProjectHandle::new(project.coordinates, path)
            })
            .collect();

        let included_builds = file
            .included_builds
            .into_iter()
            .map(|build| IncludedBuild {
                name: build.name,
                available_modules: build.available_modules,
            })
            .collect();

        tracing::debug!(
            "Loaded snapshot of '{}': {} module(s), {} configuration(s)",
            file.root_project,
            file.modules.len(),
            configurations.len()
        );

        Ok(Self {
            root_project: file.root_project,
            projects,
            included_builds,
            modules: file.modules,
            module_index,
            configurations,
        })
    }

    fn validate_configuration(
        configuration: &ConfigurationEntry,
        module_index: &HashMap<String, usize>,
        configurations: &HashMap<String, ConfigurationEntry>,
    ) -> std::result::Result<(), String> {
        if let Some(parent) = configuration
            .extends_from
            .iter()
            .find(|parent| !configurations.contains_key(parent.as_str()))
        {
            return Err(format!(
                "configuration '{}' extends unknown configuration '{}'",
                configuration.name, parent
            ));
        }
        if let Some(dependency) = configuration
            .dependencies
            .iter()
            .find(|dependency| ModuleKey::parse(dependency).is_none())
        {
            return Err(format!(
                "configuration '{}' declares '{}', expected 'group:artifact'",
                configuration.name, dependency
            ));
        }
        if let Some(gav) = configuration
            .first_level
            .iter()
            .find(|gav| !module_index.contains_key(gav.as_str()))
        {
            return Err(format!(
                "configuration '{}' lists unknown module '{}'",
                configuration.name, gav
            ));
        }
        Ok(())
    }

    /// Names of every configuration in the snapshot, sorted
    pub fn configuration_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.configurations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn module(&self, gav: &str) -> Option<&ModuleEntry> {
        self.module_index.get(gav).map(|&position| &self.modules[position])
    }

    /// The configuration itself followed by everything it extends.
    ///
    /// Follows Gradle's ordering: a superconfiguration reached a second time
    /// is moved to the end, so shared ancestors come after every path that
    /// leads to them.
    fn hierarchy<'a>(&'a self, name: &'a str) -> Vec<DeclaredConfiguration> {
        let mut order = vec![name];
        let mut path = vec![name];
        self.collect_super_configurations(name, &mut order, &mut path);

        order
            .into_iter()
            .filter_map(|current| {
                let entry = self.configurations.get(current)?;
                let dependencies = entry
                    .dependencies
                    .iter()
                    .filter_map(|dependency| ModuleKey::parse(dependency))
                    .collect();
                Some(DeclaredConfiguration::new(current, dependencies))
            })
            .collect()
    }

    fn collect_super_configurations<'a>(
        &'a self,
        name: &str,
        order: &mut Vec<&'a str>,
        path: &mut Vec<&'a str>,
    ) {
        let Some(entry) = self.configurations.get(name) else {
            return;
        };
        for parent in entry.extends_from.iter().map(String::as_str) {
            // a cycle would never terminate
            if path.contains(&parent) {
                tracing::warn!("Configuration '{}' extends itself through '{}'", parent, name);
                continue;
            }
            order.retain(|&existing| existing != parent);
            order.push(parent);
            path.push(parent);
            self.collect_super_configurations(parent, order, path);
            path.pop();
        }
    }

    /// Builds the graph reachable from `first_level`
    fn graph(&self, first_level: &[String]) -> DependencyGraph {
        let mut builder = DependencyGraph::builder();
        let mut ids: HashMap<&str, NodeId> = HashMap::new();
        let mut discovered = Vec::new();
        let mut stack: Vec<&str> = first_level.iter().rev().map(String::as_str).collect();

        while let Some(gav) = stack.pop() {
            if ids.contains_key(gav) {
                continue;
            }
            let Some(module) = self.module(gav) else {
                continue;
            };
            let id = builder.add_module(module.coordinates.clone(), module.artifacts.clone());
            ids.insert(gav, id);
            discovered.push((id, module));
            stack.extend(module.children.iter().rev().map(String::as_str));
        }

        for (parent, module) in discovered {
            for child in &module.children {
                if let Some(&child_id) = ids.get(child.as_str()) {
                    builder.add_child(parent, child_id);
                }
            }
        }
        for gav in first_level {
            if let Some(&id) = ids.get(gav.as_str()) {
                builder.add_first_level(id);
            }
        }
        builder.build()
    }

    /// Artifacts of `gav` and, when `transitive`, of everything below it
    fn collect_artifacts(&self, gav: &str, transitive: bool) -> Vec<ResolvedArtifactRecord> {
        let mut records = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![gav];

        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            let Some(module) = self.module(current) else {
                continue;
            };
            records.extend(
                module
                    .artifacts
                    .iter()
                    .map(|artifact| ResolvedArtifactRecord::new(module.coordinates.clone(), artifact.clone())),
            );
            if transitive {
                stack.extend(module.children.iter().map(String::as_str));
            }
        }
        records
    }

    fn resolve_request(
        &self,
        request: &ResolutionRequest,
        transitive: bool,
    ) -> std::result::Result<Vec<ResolvedArtifactRecord>, ResolverError> {
        let coordinates = request.coordinates();
        let gav = coordinates.gav();
        let unresolved = || ResolverError::UnresolvedArtifact {
            coordinates: gav.clone(),
        };

        let module = self.module(&gav).ok_or_else(unresolved)?;
        let mut records = self.collect_artifacts(&gav, transitive);

        if let ResolutionRequest::External(spec) = request {
            // only the requested artifact of the module itself is wanted
            let matches = |artifact: &ResolvedArtifact| {
                artifact.artifact_type == spec.artifact_type && artifact.classifier == spec.classifier
            };
            if !module.artifacts.iter().any(matches) {
                return Err(unresolved());
            }
            records.retain(|record| record.coordinates != module.coordinates || matches(&record.artifact));
        }
        Ok(records)
    }
}

impl DependencyGraphProvider for BuildSnapshot {
    fn configuration(&self, name: &str) -> Result<Option<ProjectConfiguration>> {
        let Some(entry) = self.configurations.get(name) else {
            return Ok(None);
        };
        Ok(Some(ProjectConfiguration::new(
            name,
            self.hierarchy(name),
            self.graph(&entry.first_level),
        )))
    }
}

impl ProjectRegistry for BuildSnapshot {
    fn root_project(&self) -> String {
        self.root_project.clone()
    }

    fn all_projects(&self) -> Vec<ProjectHandle> {
        self.projects.clone()
    }

    fn included_builds(&self) -> Vec<String> {
        self.included_builds.iter().map(|build| build.name.clone()).collect()
    }

    fn available_modules(&self, included_build: &str) -> Option<Vec<ModuleCoordinates>> {
        self.included_builds
            .iter()
            .find(|build| build.name == included_build)
            .and_then(|build| build.available_modules.clone())
    }
}

impl ArtifactResolver for BuildSnapshot {
    fn resolve_batch(
        &self,
        requests: &[ResolutionRequest],
        transitive: bool,
    ) -> Result<Vec<ResolvedArtifactRecord>> {
        let mut records = Vec::new();
        for request in requests {
            records.extend(self.resolve_request(request, transitive)?);
        }
        Ok(records)
    }
}
