/// ResolveRequest - Internal request DTO for project dependency resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    /// Configuration to resolve, e.g. `runtimeClasspath`
    pub configuration: String,
    /// Promote fraction subtrees instead of keeping only direct children
    pub transitive_children: bool,
}

impl ResolveRequest {
    pub fn new(configuration: impl Into<String>, transitive_children: bool) -> Self {
        Self {
            configuration: configuration.into(),
            transitive_children,
        }
    }
}
