use crate::fraction_resolution::domain::Scope;
use crate::shared::error::ResolverError;

/// Build-tool configuration names and the canonical scope each one maps to.
///
/// `default` and `master` show up when a dependency-management plugin
/// rewrites scopes; they are treated as compile.
const REMAPPED_SCOPES: &[(&str, Scope)] = &[
    ("platform-runtime", Scope::Import),
    ("enforced-platform-runtime", Scope::Import),
    ("compile", Scope::Compile),
    ("api", Scope::Compile),
    ("implementation", Scope::Compile),
    ("apiElements", Scope::Compile),
    ("compileClasspath", Scope::Compile),
    ("default", Scope::Compile),
    ("master", Scope::Compile),
    ("providedCompile", Scope::Provided),
    ("compileOnly", Scope::Provided),
    ("runtime", Scope::Runtime),
    ("runtimeOnly", Scope::Runtime),
    ("runtimeElements", Scope::Runtime),
    ("runtimeClasspath", Scope::Runtime),
    ("providedRuntime", Scope::Runtime),
    ("testImplementation", Scope::Test),
    ("testCompileOnly", Scope::Test),
    ("testRuntimeOnly", Scope::Test),
    ("testCompile", Scope::Test),
    ("testCompileClasspath", Scope::Test),
    ("testRuntime", Scope::Test),
    ("testRuntimeClasspath", Scope::Test),
];

/// ScopeMapper translates native configuration names into [`Scope`]s
pub struct ScopeMapper;

impl ScopeMapper {
    /// Looks a configuration name up in the static table
    pub fn lookup(configuration: &str) -> Option<Scope> {
        REMAPPED_SCOPES
            .iter()
            .find(|(name, _)| *name == configuration)
            .map(|(_, scope)| *scope)
    }

    /// Maps `configuration`, falling back to `default` for custom names
    pub fn resolve(configuration: &str, default: Scope) -> Scope {
        Self::lookup(configuration).unwrap_or(default)
    }

    /// Scope used for custom configurations inside the hierarchy of the
    /// requested one.
    ///
    /// # Errors
    /// Returns `ResolverError::UnknownConfiguration` when the requested
    /// configuration itself is not in the table.
    pub fn default_scope_for(requested: &str) -> Result<Scope, ResolverError> {
        Self::lookup(requested).ok_or_else(|| ResolverError::UnknownConfiguration {
            name: requested.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_names() {
        assert_eq!(ScopeMapper::lookup("compileOnly"), Some(Scope::Provided));
        assert_eq!(ScopeMapper::lookup("testRuntimeOnly"), Some(Scope::Test));
        assert_eq!(ScopeMapper::lookup("platform-runtime"), Some(Scope::Import));
        assert_eq!(
            ScopeMapper::lookup("enforced-platform-runtime"),
            Some(Scope::Import)
        );
        assert_eq!(ScopeMapper::lookup("implementation"), Some(Scope::Compile));
        assert_eq!(ScopeMapper::lookup("providedRuntime"), Some(Scope::Runtime));
        assert_eq!(ScopeMapper::lookup("master"), Some(Scope::Compile));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(ScopeMapper::lookup("CompileOnly"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(
            ScopeMapper::resolve("myCustomConfiguration", Scope::Runtime),
            Scope::Runtime
        );
        assert_eq!(ScopeMapper::resolve("api", Scope::Runtime), Scope::Compile);
    }

    #[test]
    fn test_default_scope_for_requested_configuration() {
        assert_eq!(
            ScopeMapper::default_scope_for("runtimeClasspath").unwrap(),
            Scope::Runtime
        );
    }

    #[test]
    fn test_default_scope_for_unknown_configuration_fails() {
        let err = ScopeMapper::default_scope_for("shadow").unwrap_err();
        assert!(matches!(err, ResolverError::UnknownConfiguration { ref name } if name == "shadow"));
    }

    #[test]
    fn test_table_has_no_duplicates() {
        let mut names: Vec<_> = REMAPPED_SCOPES.iter().map(|(name, _)| *name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 23);
    }
}
