use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// DependencyGraph aggregate holding the packages reachable from a root
///
/// Each key is a package that was visited exactly once during expansion,
/// mapped to its direct dependencies copied verbatim from the index.
/// Packages are kept in the order they were visited, so iterating the graph
/// replays the pre-order traversal. Serializes as a map in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyGraph {
    #[serde(skip)]
    root: String,
    #[serde(flatten)]
    dependencies: IndexMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            dependencies: IndexMap::new(),
        }
    }

    /// Records `package` with its direct dependencies.
    ///
    /// Returns `false` and leaves the graph untouched if the package is
    /// already present.
    pub(crate) fn insert(&mut self, package: &str, dependencies: &[String]) -> bool {
        match self.dependencies.entry(package.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(dependencies.to_vec());
                true
            }
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    /// An empty graph means the root package was not in the index
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.dependencies.contains_key(package)
    }

    pub fn dependencies_of(&self, package: &str) -> Option<&[String]> {
        self.dependencies.get(package).map(Vec::as_slice)
    }

    /// Package names in visit order
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }

    /// `(package, dependencies)` pairs in visit order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.dependencies
            .iter()
            .map(|(name, dependencies)| (name.as_str(), dependencies.as_slice()))
    }

    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(Vec::len).sum()
    }

    pub fn to_map(&self) -> HashMap<String, Vec<String>> {
        self.dependencies
            .iter()
            .map(|(name, dependencies)| (name.clone(), dependencies.clone()))
            .collect()
    }
}
