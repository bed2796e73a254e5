use crate::dependency_graph::domain::{DependencyGraph, DependencyIndex};
use std::collections::HashSet;

/// GraphExpander service computing the subgraph reachable from a root package
///
/// This service contains pure business logic. It never mutates the index and
/// keeps no state between calls.
pub struct GraphExpander;

impl GraphExpander {
    /// Expands the dependency graph of `root`
    ///
    /// Packages are visited depth-first in pre-order: a package is recorded
    /// before any of its dependencies, and dependencies are followed in the
    /// order they were declared. Each package is recorded at most once, which
    /// also makes cyclic declarations terminate. Dependencies without an index
    /// entry stay in their parent's list but get no entry of their own.
    ///
    /// If `root` is not in the index the returned graph is empty.
    pub fn expand(root: &str, index: &DependencyIndex) -> DependencyGraph {
        let mut graph = DependencyGraph::new(root);
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![root];

        while let Some(package) = stack.pop() {
            if visited.contains(package) {
                continue;
            }
            let Some(dependencies) = index.dependencies_of(package) else {
                continue;
            };

            visited.insert(package);
            graph.insert(package, dependencies);

            // Reverse so the first declared dependency is expanded first
            stack.extend(dependencies.iter().rev().map(String::as_str));
        }

        graph
    }
}
