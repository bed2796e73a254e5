use super::with_extension_appended;
use crate::adapters::outbound::filesystem::OutputFileWriter;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// JsonRenderer adapter writing the graph as a JSON adjacency map
///
/// ```json
/// { "root": "package-a", "packages": { "package-a": ["package-b"], "package-b": [] } }
/// ```
///
/// `root` is the first node added, and packages keep the order in which they
/// were added.
#[derive(Default)]
pub struct JsonRenderer {
    packages: IndexMap<String, Vec<String>>,
}

#[derive(Serialize)]
struct JsonGraph<'a> {
    root: Option<&'a str>,
    packages: &'a IndexMap<String, Vec<String>>,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes everything added so far
    pub fn to_json(&self) -> Result<String> {
        let graph = JsonGraph {
            root: self.packages.keys().next().map(String::as_str),
            packages: &self.packages,
        };
        Ok(serde_json::to_string_pretty(&graph)?)
    }
}

impl GraphRenderer for JsonRenderer {
    fn add_node(&mut self, name: &str) {
        self.packages.entry(name.to_string()).or_default();
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        self.packages
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
    }

    fn render(&mut self, output: &Path) -> Result<PathBuf> {
        let output = with_extension_appended(output, OutputFormat::Json.extension());
        OutputFileWriter::write(&output, &self.to_json()?)?;
        Ok(output)
    }
}
