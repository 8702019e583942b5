//! On-disk layout of a build snapshot
//!
//! ```json
//! {
//!   "root_project": "demo",
//!   "projects": [{ "group": "com.example", "name": "demo", "version": "1.0", "path": "." }],
//!   "included_builds": [{ "name": "shared", "available_modules": [ ... ] }],
//!   "modules": [{
//!     "group": "io.thorntail", "name": "jaxrs", "version": "2.5.0.Final",
//!     "artifacts": [{ "type": "jar", "file": "/repo/jaxrs.jar" }],
//!     "children": ["javax.ws.rs:javax.ws.rs-api:2.1"]
//!   }],
//!   "configurations": [{
//!     "name": "runtimeClasspath",
//!     "extends_from": ["implementation"],
//!     "dependencies": [],
//!     "first_level": ["io.thorntail:jaxrs:2.5.0.Final"]
//!   }]
//! }
//! ```
//!
//! Modules and first-level entries refer to each other by
//! `group:name:version`; declared dependencies by `group:name`.

use crate::fraction_resolution::domain::{ModuleCoordinates, ResolvedArtifact};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub(super) struct SnapshotFile {
    pub root_project: String,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub included_builds: Vec<IncludedBuildEntry>,
    #[serde(default)]
    pub modules: Vec<ModuleEntry>,
    #[serde(default)]
    pub configurations: Vec<ConfigurationEntry>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProjectEntry {
    #[serde(flatten)]
    pub coordinates: ModuleCoordinates,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub(super) struct IncludedBuildEntry {
    pub name: String,
    /// Absent when the exporting build tool cannot list them
    #[serde(default)]
    pub available_modules: Option<Vec<ModuleCoordinates>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ModuleEntry {
    #[serde(flatten)]
    pub coordinates: ModuleCoordinates,
    #[serde(default)]
    pub artifacts: Vec<ResolvedArtifact>,
    #[serde(default)]
    pub children: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ConfigurationEntry {
    pub name: String,
    #[serde(default)]
    pub extends_from: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub first_level: Vec<String>,
}
