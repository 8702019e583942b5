use super::{ModuleCoordinates, ModuleKey, ResolvedArtifact, Scope};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Immutable description of one resolved dependency.
///
/// Identity is `(scope, group, artifact, version, type, classifier)`. The
/// resolved file is carried along but never takes part in equality, hashing
/// or ordering.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyDescriptor {
    scope: Scope,
    group: String,
    artifact: String,
    version: String,
    #[serde(rename = "type")]
    artifact_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<PathBuf>,
}

impl DependencyDescriptor {
    pub fn new(
        scope: Scope,
        coordinates: &ModuleCoordinates,
        artifact_type: impl Into<String>,
        classifier: Option<String>,
        file: Option<PathBuf>,
    ) -> Self {
        Self {
            scope,
            group: coordinates.group().to_string(),
            artifact: coordinates.name().to_string(),
            version: coordinates.version().to_string(),
            artifact_type: artifact_type.into(),
            classifier,
            file,
        }
    }

    /// Descriptor for a single artifact of a module
    pub fn for_artifact(scope: Scope, coordinates: &ModuleCoordinates, artifact: &ResolvedArtifact) -> Self {
        Self::new(
            scope,
            coordinates,
            artifact.artifact_type.clone(),
            artifact.classifier.clone(),
            artifact.file.clone(),
        )
    }

    /// Descriptor for a module as a whole: type, classifier and file come
    /// from its first artifact, type falls back to `jar`.
    pub fn for_module(scope: Scope, coordinates: &ModuleCoordinates, artifacts: &[ResolvedArtifact]) -> Self {
        match artifacts.first() {
            Some(first) => Self::for_artifact(scope, coordinates, first),
            None => Self::new(scope, coordinates, "jar", None, None),
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn key(&self) -> ModuleKey {
        ModuleKey::new(&self.group, &self.artifact)
    }

    pub fn coordinates(&self) -> ModuleCoordinates {
        ModuleCoordinates::new(&self.group, &self.artifact, &self.version)
    }

    pub fn gav(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }

    fn identity(&self) -> (&str, &str, &str, &str, Option<&str>, Scope) {
        (
            &self.group,
            &self.artifact,
            &self.version,
            &self.artifact_type,
            self.classifier.as_deref(),
            self.scope,
        )
    }
}

impl PartialEq for DependencyDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for DependencyDescriptor {}

impl Hash for DependencyDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for DependencyDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DependencyDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl fmt::Display for DependencyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.artifact_type)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        write!(f, ":{}:{}", self.version, self.scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn coords() -> ModuleCoordinates {
        ModuleCoordinates::new("org.acme", "widget", "2.0")
    }

    #[test]
    fn test_equality_ignores_file() {
        let a = DependencyDescriptor::new(Scope::Compile, &coords(), "jar", None, Some("/a.jar".into()));
        let b = DependencyDescriptor::new(Scope::Compile, &coords(), "jar", None, Some("/b.jar".into()));
        let c = DependencyDescriptor::new(Scope::Compile, &coords(), "jar", None, None);
        assert_eq!(a, b);
        assert_eq!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_equality_respects_scope_and_classifier() {
        let base = DependencyDescriptor::new(Scope::Compile, &coords(), "jar", None, None);
        let runtime = DependencyDescriptor::new(Scope::Runtime, &coords(), "jar", None, None);
        let sources = DependencyDescriptor::new(
            Scope::Compile,
            &coords(),
            "jar",
            Some("sources".to_string()),
            None,
        );
        assert_ne!(base, runtime);
        assert_ne!(base, sources);
    }

    #[test]
    fn test_for_module_uses_first_artifact() {
        let artifacts = vec![
            ResolvedArtifact::new("war", Some("web".to_string()), Some("/w.war".into())),
            ResolvedArtifact::jar("/w.jar"),
        ];
        let descriptor = DependencyDescriptor::for_module(Scope::Runtime, &coords(), &artifacts);
        assert_eq!(descriptor.artifact_type(), "war");
        assert_eq!(descriptor.classifier(), Some("web"));
        assert_eq!(descriptor.file(), Some(Path::new("/w.war")));
    }

    #[test]
    fn test_for_module_without_artifacts_defaults_to_jar() {
        let descriptor = DependencyDescriptor::for_module(Scope::Compile, &coords(), &[]);
        assert_eq!(descriptor.artifact_type(), "jar");
        assert!(descriptor.classifier().is_none());
        assert!(descriptor.file().is_none());
    }

    #[test]
    fn test_display() {
        let plain = DependencyDescriptor::new(Scope::Provided, &coords(), "jar", None, None);
        assert_eq!(plain.to_string(), "org.acme:widget:jar:2.0:provided");

        let classified =
            DependencyDescriptor::new(Scope::Test, &coords(), "jar", Some("tests".to_string()), None);
        assert_eq!(classified.to_string(), "org.acme:widget:jar:tests:2.0:test");
    }

    #[test]
    fn test_key_and_gav() {
        let descriptor = DependencyDescriptor::new(Scope::Compile, &coords(), "jar", None, None);
        assert_eq!(descriptor.key().as_str(), "org.acme:widget");
        assert_eq!(descriptor.gav(), "org.acme:widget:2.0");
    }
}
