use crate::fraction_resolution::domain::{
    DependencyDescriptor, DependencyGraph, FractionKey, ModuleKey, NodeId, ProjectConfiguration,
    ResolutionResult, Scope,
};
use crate::fraction_resolution::services::ScopeMapper;
use crate::shared::error::ResolverError;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// GraphResolver collapses a resolved dependency graph into a map of
/// top-level dependencies.
///
/// Known fractions are packaging units: when one is reached, its whole
/// subtree is promoted to a top-level entry of its own. Everything else
/// stays nested under the first-level dependency that pulled it in.
///
/// Traversal is sequential. First-level dependencies are visited in graph
/// order and children in declared order, so when two roots reach the same
/// fraction the earlier root claims it. A root that is not a fraction is
/// listed among its own children, next to everything nested below it.
pub struct GraphResolver;

impl GraphResolver {
    /// Dependency chains deeper than this are truncated with a warning
    const MAX_DEPTH: usize = 256;

    /// Resolves the first-level dependencies of `configuration`.
    ///
    /// # Arguments
    /// * `configuration` - Requested configuration with hierarchy and resolved graph
    /// * `known_fractions` - `group:artifact` keys of every known fraction
    /// * `transitive_children` - Promote fraction subtrees (true) or keep only
    ///   direct children (false)
    ///
    /// # Errors
    /// * `ResolverError::UnknownConfiguration` if the requested configuration
    ///   has no canonical scope
    /// * `ResolverError::ResolutionInvariant` if a first-level dependency is
    ///   not declared anywhere in the hierarchy
    pub fn resolve_top_level(
        configuration: &ProjectConfiguration,
        known_fractions: &HashSet<FractionKey>,
        transitive_children: bool,
    ) -> Result<ResolutionResult> {
        let default_scope = ScopeMapper::default_scope_for(configuration.name())?;
        let scopes = Self::scope_map(configuration, default_scope);
        let graph = configuration.graph();

        let mut result = ResolutionResult::new();
        for &root in graph.first_level() {
            let module = graph.module(root);
            let key = module.coordinates().key();
            let scope = *scopes
                .get(&key)
                .ok_or_else(|| ResolverError::ResolutionInvariant {
                    dependency: key.to_string(),
                })?;

            if scope.is_import() || !module.has_artifacts() {
                tracing::debug!("Skipping {} (scope: {}, artifacts: {})", key, scope, module.artifacts().len());
                continue;
            }

            if transitive_children {
                let mut promotion = Promotion {
                    graph,
                    known_fractions,
                    scope,
                    root_descriptor: DependencyDescriptor::for_module(
                        scope,
                        module.coordinates(),
                        module.artifacts(),
                    ),
                    visited: HashSet::new(),
                    result: &mut result,
                };
                promotion.visit(root, 0);
            } else {
                Self::resolve_direct(graph, scope, root, &mut result);
            }
        }

        Ok(result)
    }

    /// Assigns a scope to every declared dependency in the hierarchy.
    ///
    /// Configurations later in the hierarchy overwrite earlier assignments.
    fn scope_map(configuration: &ProjectConfiguration, default_scope: Scope) -> HashMap<ModuleKey, Scope> {
        let mut scopes = HashMap::new();
        for declared in configuration.hierarchy() {
            let scope = ScopeMapper::resolve(declared.name(), default_scope);
            for dependency in declared.dependencies() {
                scopes.insert(dependency.clone(), scope);
            }
        }
        scopes
    }

    /// Non-transitive mode: the entry holds the root's direct children that
    /// carry artifacts; grandchildren are dropped.
    fn resolve_direct(graph: &DependencyGraph, scope: Scope, root: NodeId, result: &mut ResolutionResult) {
        let module = graph.module(root);
        let key = DependencyDescriptor::for_module(scope, module.coordinates(), module.artifacts());
        let children = module
            .children()
            .iter()
            .map(|&child| graph.module(child))
            .filter(|child| child.has_artifacts())
            .map(|child| DependencyDescriptor::for_module(scope, child.coordinates(), child.artifacts()))
            .collect();

        if !result.claim(key, children) {
            tracing::debug!("{} is already a top-level entry", module.coordinates());
        }
    }
}

/// State of one PROMOTE pass rooted at a first-level dependency
struct Promotion<'a> {
    graph: &'a DependencyGraph,
    known_fractions: &'a HashSet<FractionKey>,
    scope: Scope,
    root_descriptor: DependencyDescriptor,
    visited: HashSet<NodeId>,
    result: &'a mut ResolutionResult,
}

impl Promotion<'_> {
    fn visit(&mut self, node: NodeId, depth: usize) {
        if depth >= GraphResolver::MAX_DEPTH {
            tracing::warn!(
                "Maximum traversal depth ({}) reached below {}. Dependency chain may be truncated.",
                GraphResolver::MAX_DEPTH,
                self.root_descriptor
            );
            return;
        }
        if !self.visited.insert(node) {
            return;
        }

        let module = self.graph.module(node);
        let descriptor = DependencyDescriptor::for_module(self.scope, module.coordinates(), module.artifacts());
        if self.result.contains_key(&descriptor) {
            return;
        }

        if self.known_fractions.contains(&module.coordinates().key()) {
            tracing::debug!("Promoting fraction {} to top level", descriptor);
            let descendants = self.descendants(node);
            self.result.claim(descriptor, descendants);
            return;
        }

        // the root itself lands in its own child set
        if module.has_artifacts() {
            self.result.attach(&self.root_descriptor, descriptor);
        }

        for &child in module.children() {
            self.visit(child, depth + 1);
        }
    }

    /// Every artifact below `parent`, excluding the parent's own artifacts
    fn descendants(&self, parent: NodeId) -> HashSet<DependencyDescriptor> {
        let mut stack = vec![parent];
        let mut seen = HashSet::from([parent]);
        let mut dependencies = HashSet::new();

        while let Some(current) = stack.pop() {
            let module = self.graph.module(current);
            if current != parent {
                for artifact in module.artifacts() {
                    dependencies.insert(DependencyDescriptor::for_artifact(
                        self.scope,
                        module.coordinates(),
                        artifact,
                    ));
                }
            }
            for &child in module.children() {
                if seen.insert(child) {
                    stack.push(child);
                }
            }
        }
        dependencies
    }
}
