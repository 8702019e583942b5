use crate::fraction_resolution::domain::ArtifactSpec;

/// What to do with one artifact spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecDisposition {
    /// Supplied by the runtime container; dropped silently
    Skip,
    /// Already resolved and not transitive; returned unchanged
    PassThrough,
    /// Resolve by direct reference to the in-build project
    ResolveProject,
    /// Hand to the native resolution facility by coordinates
    ResolveExternal,
}

/// SpecClassifier decides how each artifact spec is resolved
///
/// Pure decision logic; project membership is looked up by the caller.
#[derive(Debug, Clone)]
pub struct SpecClassifier {
    default_group: String,
    transitive: bool,
    exclude_defaults: bool,
}

impl SpecClassifier {
    /// # Arguments
    /// * `default_group` - The framework's reserved group id
    /// * `transitive` - Whether specs are resolved transitively
    /// * `exclude_defaults` - Skip reserved-group specs that are not projects
    pub fn new(default_group: impl Into<String>, transitive: bool, exclude_defaults: bool) -> Self {
        Self {
            default_group: default_group.into(),
            transitive,
            exclude_defaults,
        }
    }

    pub fn classify(&self, spec: &ArtifactSpec, is_project: bool) -> SpecDisposition {
        if self.exclude_defaults && spec.group_id == self.default_group && !is_project {
            return SpecDisposition::Skip;
        }

        if !spec.is_resolved() || self.transitive {
            if is_project {
                SpecDisposition::ResolveProject
            } else {
                SpecDisposition::ResolveExternal
            }
        } else {
            SpecDisposition::PassThrough
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP: &str = "io.thorntail";

    fn unresolved(group: &str) -> ArtifactSpec {
        ArtifactSpec::new(group, "thing", "1.0")
    }

    fn resolved(group: &str) -> ArtifactSpec {
        unresolved(group).with_file("/repo/thing-1.0.jar")
    }

    #[test]
    fn test_reserved_group_is_skipped_when_excluding_defaults() {
        let classifier = SpecClassifier::new(GROUP, false, true);
        assert_eq!(classifier.classify(&unresolved(GROUP), false), SpecDisposition::Skip);
        assert_eq!(classifier.classify(&resolved(GROUP), false), SpecDisposition::Skip);
    }

    #[test]
    fn test_reserved_group_project_is_kept() {
        let classifier = SpecClassifier::new(GROUP, false, true);
        assert_eq!(
            classifier.classify(&unresolved(GROUP), true),
            SpecDisposition::ResolveProject
        );
    }

    #[test]
    fn test_reserved_group_kept_without_exclusion() {
        let classifier = SpecClassifier::new(GROUP, false, false);
        assert_eq!(
            classifier.classify(&unresolved(GROUP), false),
            SpecDisposition::ResolveExternal
        );
    }

    #[test]
    fn test_resolved_non_transitive_passes_through() {
        let classifier = SpecClassifier::new(GROUP, false, true);
        assert_eq!(
            classifier.classify(&resolved("org.acme"), false),
            SpecDisposition::PassThrough
        );
        assert_eq!(
            classifier.classify(&resolved("org.acme"), true),
            SpecDisposition::PassThrough
        );
    }

    #[test]
    fn test_transitive_forces_resolution() {
        let classifier = SpecClassifier::new(GROUP, true, false);
        assert_eq!(
            classifier.classify(&resolved("org.acme"), false),
            SpecDisposition::ResolveExternal
        );
        assert_eq!(
            classifier.classify(&resolved("org.acme"), true),
            SpecDisposition::ResolveProject
        );
    }

    #[test]
    fn test_unresolved_external() {
        let classifier = SpecClassifier::new(GROUP, false, false);
        assert_eq!(
            classifier.classify(&unresolved("org.acme"), false),
            SpecDisposition::ResolveExternal
        );
    }
}
