use super::{with_extension_appended, DotDocument};
use crate::adapters::outbound::filesystem::OutputFileWriter;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// DotSourceRenderer adapter writing the Graphviz DOT source to a `.dot` file
///
/// Useful when Graphviz is not installed locally; the file can be rendered
/// later with `dot -Tpng graph.dot -o graph.png`.
#[derive(Default)]
pub struct DotSourceRenderer {
    document: DotDocument,
}

impl DotSourceRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GraphRenderer for DotSourceRenderer {
    fn add_node(&mut self, name: &str) {
        self.document.add_node(name);
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        self.document.add_edge(from, to);
    }

    fn render(&mut self, output: &Path) -> Result<PathBuf> {
        let output = with_extension_appended(output, OutputFormat::Dot.extension());
        OutputFileWriter::write(&output, &self.document.source())?;
        Ok(output)
    }
}
