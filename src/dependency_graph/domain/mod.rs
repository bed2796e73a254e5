pub mod dependency_graph;
pub mod dependency_index;

pub use dependency_graph::DependencyGraph;
pub use dependency_index::DependencyIndex;
