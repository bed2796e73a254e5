use std::collections::HashMap;

/// DependencyIndex maps every package declared in a package index to the
/// names of its direct dependencies.
///
/// Dependency names may refer to packages that have no entry of their own.
/// The index has no public mutators: it is built by [`IndexParser`] or
/// collected from `(name, dependencies)` pairs.
///
/// [`IndexParser`]: crate::dependency_graph::services::IndexParser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyIndex {
    entries: HashMap<String, Vec<String>>,
}

impl DependencyIndex {
    pub(crate) fn from_entries(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.entries.contains_key(package)
    }

    /// Returns the declared direct dependencies of `package`, or `None`
    /// when the index has no entry for it
    pub fn dependencies_of(&self, package: &str) -> Option<&[String]> {
        self.entries.get(package).map(Vec::as_slice)
    }

    /// Package names in arbitrary order
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &HashMap<String, Vec<String>> {
        &self.entries
    }
}

impl<K, V, D> FromIterator<(K, V)> for DependencyIndex
where
    K: Into<String>,
    V: IntoIterator<Item = D>,
    D: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|(name, deps)| (name.into(), deps.into_iter().map(Into::into).collect()))
            .collect();
        Self { entries }
    }
}
