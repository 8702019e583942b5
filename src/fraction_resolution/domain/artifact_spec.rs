use super::{DependencyDescriptor, ModuleCoordinates, Scope};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Abstract artifact request, possibly already resolved to a file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactSpec {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(rename = "type", default = "default_type")]
    pub artifact_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_type() -> String {
    "jar".to_string()
}

impl ArtifactSpec {
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            version: version.to_string(),
            artifact_type: default_type(),
            classifier: None,
            scope: Scope::default(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_classifier(mut self, classifier: &str) -> Self {
        self.classifier = Some(classifier.to_string());
        self
    }

    pub fn with_type(mut self, artifact_type: &str) -> Self {
        self.artifact_type = artifact_type.to_string();
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn coordinates(&self) -> ModuleCoordinates {
        ModuleCoordinates::new(&self.group_id, &self.artifact_id, &self.version)
    }

    /// `group:artifact:version`
    pub fn gav(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// A spec that already points at a file needs no resolution round-trip
    pub fn is_resolved(&self) -> bool {
        self.file.is_some()
    }

    pub fn to_descriptor(&self) -> DependencyDescriptor {
        DependencyDescriptor::new(
            self.scope,
            &self.coordinates(),
            self.artifact_type.clone(),
            self.classifier.clone(),
            self.file.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_json() {
        let spec: ArtifactSpec = serde_json::from_str(
            r#"{"group_id": "io.thorntail", "artifact_id": "cdi", "version": "2.7.0"}"#,
        )
        .unwrap();
        assert_eq!(spec.artifact_type, "jar");
        assert_eq!(spec.scope, Scope::Compile);
        assert!(!spec.is_resolved());
        assert_eq!(spec.gav(), "io.thorntail:cdi:2.7.0");
    }

    #[test]
    fn test_to_descriptor_carries_file() {
        let spec = ArtifactSpec::new("org.acme", "lib", "1.0")
            .with_classifier("tests")
            .with_scope(Scope::Test)
            .with_file("/repo/lib-1.0-tests.jar");
        let descriptor = spec.to_descriptor();
        assert!(spec.is_resolved());
        assert_eq!(descriptor.scope(), Scope::Test);
        assert_eq!(descriptor.classifier(), Some("tests"));
        assert_eq!(
            descriptor.file().map(|p| p.to_string_lossy().into_owned()),
            Some("/repo/lib-1.0-tests.jar".to_string())
        );
    }
}
