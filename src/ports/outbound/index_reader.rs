use crate::dependency_graph::domain::DependencyIndex;
use crate::shared::Result;
use std::path::Path;

/// IndexReader port for loading a package index
///
/// This port abstracts where the index text comes from and how it is
/// stored (plain text, gzip, ...).
pub trait IndexReader {
    /// Reads and parses the package index at `index_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The index file does not exist
    /// - The stream cannot be read or decompressed
    fn read_index(&self, index_path: &Path) -> Result<DependencyIndex>;
}
