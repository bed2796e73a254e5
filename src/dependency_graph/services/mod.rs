mod graph_expander;
mod index_parser;

pub use graph_expander::GraphExpander;
pub use index_parser::IndexParser;
