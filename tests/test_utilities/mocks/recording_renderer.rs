use depgraph_viz::prelude::*;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Node(String),
    Edge(String, String),
    Render(PathBuf),
}

/// Renderer that records every call it receives
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RecordedCall>,
}

#[allow(dead_code)]
impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RecordedCall::Render(_)))
            .count()
    }

    pub fn nodes(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::Node(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn edges(&self) -> Vec<(&str, &str)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::Edge(from, to) => Some((from.as_str(), to.as_str())),
                _ => None,
            })
            .collect()
    }
}

impl GraphRenderer for RecordingRenderer {
    fn add_node(&mut self, name: &str) {
        self.calls.push(RecordedCall::Node(name.to_string()));
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        self.calls
            .push(RecordedCall::Edge(from.to_string(), to.to_string()));
    }

    fn render(&mut self, output: &Path) -> Result<PathBuf> {
        self.calls.push(RecordedCall::Render(output.to_path_buf()));
        Ok(output.to_path_buf())
    }
}
