/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, Graphviz, console, etc.).
pub mod graph_renderer;
pub mod index_reader;
pub mod progress_reporter;

pub use graph_renderer::{draw_graph, draw_package, GraphRenderer};
pub use index_reader::IndexReader;
pub use progress_reporter::ProgressReporter;
