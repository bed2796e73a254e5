use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::fmt;

/// Edge weight of a dependency arrow; never printed
#[derive(Debug, Clone, Copy)]
struct DependsOn;

impl fmt::Display for DependsOn {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// DotDocument collects packages and dependency arrows into a directed graph
/// and prints it as Graphviz DOT source
///
/// Nodes are numbered in first-seen order. An edge whose target was never
/// added as a node still creates that node, so it is drawn like Graphviz
/// would draw an implicit node.
#[derive(Debug, Clone, Default)]
pub struct DotDocument {
    graph: DiGraph<String, DependsOn>,
    nodes: HashMap<String, NodeIndex>,
}

impl DotDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.nodes.get(name) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), index);
        index
    }

    pub fn add_node(&mut self, name: &str) {
        self.node(name);
    }

    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from = self.node(from);
        let to = self.node(to);
        self.graph.add_edge(from, to, DependsOn);
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Renders the full `digraph` source
    pub fn source(&self) -> String {
        format!(
            "{}",
            Dot::with_config(&self.graph, &[Config::EdgeNoLabel])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_labels_nodes_in_first_seen_order() {
        let mut dot = DotDocument::new();
        dot.add_node("package-a");
        dot.add_edge("package-a", "package-b");
        dot.add_node("package-b");

        let source = dot.source();
        assert!(source.starts_with("digraph {"));
        assert!(source.contains("0 [ label = \"package-a\" ]"));
        assert!(source.contains("1 [ label = \"package-b\" ]"));
        assert!(source.contains("0 -> 1"));
        assert_eq!(dot.node_count(), 2);
        assert_eq!(dot.edge_count(), 1);
    }

    #[test]
    fn test_repeated_node_is_added_once() {
        let mut dot = DotDocument::new();
        dot.add_node("libc6");
        dot.add_node("libc6");
        dot.add_edge("bash", "libc6");

        assert_eq!(dot.node_count(), 2);
        assert_eq!(dot.source().matches("label = \"libc6\"").count(), 1);
        assert!(dot.source().contains("1 -> 0"));
    }

    #[test]
    fn test_edge_labels_are_omitted() {
        let mut dot = DotDocument::new();
        dot.add_edge("libstdc++6", "gcc-12-base");

        let source = dot.source();
        assert!(source.contains("label = \"libstdc++6\""));
        assert_eq!(source.matches("label").count(), 2);
    }

    #[test]
    fn test_empty_document() {
        let dot = DotDocument::new();
        assert!(dot.is_empty());
        assert!(dot.source().starts_with("digraph {"));
        assert!(!dot.source().contains("label"));
    }
}
