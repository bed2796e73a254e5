use crate::dependency_graph::domain::DependencyGraph;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// GraphRenderer port for drawing a dependency graph
///
/// A renderer is a node/edge sink plus a render trigger. The core never
/// knows which backend or image format sits behind it.
pub trait GraphRenderer {
    /// Adds a node for `name`
    fn add_node(&mut self, name: &str);

    /// Adds a directed edge from `from` to `to`
    fn add_edge(&mut self, from: &str, to: &str);

    /// Renders everything added so far
    ///
    /// # Arguments
    /// * `output` - Requested output location; backends may append a file extension
    ///
    /// # Returns
    /// The path of the file that was actually written
    fn render(&mut self, output: &Path) -> Result<PathBuf>;
}

/// Feeds a graph into a renderer in visit order.
///
/// Every package gets one `add_node` call, followed by one `add_edge` call per
/// dependency in declaration order. Dependencies without an entry of their own
/// only show up as edge targets.
pub fn draw_graph<R: GraphRenderer + ?Sized>(graph: &DependencyGraph, renderer: &mut R) {
    for (package, dependencies) in graph.iter() {
        draw_package(package, dependencies, renderer);
    }
}

/// Feeds a single package and its outgoing edges into a renderer
pub fn draw_package<R: GraphRenderer + ?Sized>(
    package: &str,
    dependencies: &[String],
    renderer: &mut R,
) {
    renderer.add_node(package);
    for dependency in dependencies {
        renderer.add_edge(package, dependency);
    }
}
