use crate::dependency_graph::domain::DependencyGraph;
use std::path::PathBuf;

/// VisualizeResponse - Internal response DTO from the visualization use case
#[derive(Debug, Clone)]
pub struct VisualizeResponse {
    /// The expanded graph that was handed to the renderer
    pub graph: DependencyGraph,
    /// Number of packages declared in the index
    pub index_size: usize,
    /// File actually written by the renderer
    pub output_path: PathBuf,
}

impl VisualizeResponse {
    pub fn new(graph: DependencyGraph, index_size: usize, output_path: PathBuf) -> Self {
        Self {
            graph,
            index_size,
            output_path,
        }
    }
}
