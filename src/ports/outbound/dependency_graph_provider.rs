use crate::fraction_resolution::domain::ProjectConfiguration;
use crate::shared::Result;

/// DependencyGraphProvider port exposing the host build's resolved graphs
///
/// Resolution itself (fetching, conflict resolution, checksums) has
/// already been performed by the host build tool.
pub trait DependencyGraphProvider {
    /// Returns the named configuration with its hierarchy and resolved graph
    ///
    /// # Arguments
    /// * `name` - Configuration name, e.g. `runtimeClasspath`
    ///
    /// # Returns
    /// `None` when the build does not declare a configuration of that name
    ///
    /// # Errors
    /// Returns an error if the configuration exists but its graph is inconsistent
    fn configuration(&self, name: &str) -> Result<Option<ProjectConfiguration>>;
}

impl<T: DependencyGraphProvider + ?Sized> DependencyGraphProvider for &T {
    fn configuration(&self, name: &str) -> Result<Option<ProjectConfiguration>> {
        (**self).configuration(name)
    }
}
