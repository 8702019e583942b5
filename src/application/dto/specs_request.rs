/// SpecsRequest - Internal request DTO for artifact spec resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecsRequest {
    /// Resolve dependencies of each spec as well
    pub transitive: bool,
    /// Drop specs of the default group unless they are projects of this build
    pub exclude_defaults: bool,
    /// Group whose artifacts the runtime supplies itself
    pub default_group: String,
}

impl SpecsRequest {
    pub fn new(transitive: bool, exclude_defaults: bool, default_group: impl Into<String>) -> Self {
        Self {
            transitive,
            exclude_defaults,
            default_group: default_group.into(),
        }
    }
}
