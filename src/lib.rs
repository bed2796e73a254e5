//! depgraph-viz - Dependency graph visualizer for Debian package indexes
//!
//! This library reads a `Packages` index (plain or gzip-compressed), expands
//! the dependencies reachable from one package, and hands the resulting graph
//! to a renderer such as Graphviz. It follows hexagonal architecture:
//!
//! - **Domain Layer** (`dependency_graph`): Index/graph models, the stanza parser and the graph expander
//! - **Application Layer** (`application`): The visualization use case, DTOs and renderer selection
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depgraph_viz::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = VisualizeDependenciesUseCase::new(
//!     FileSystemIndexReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let mut renderer = RendererFactory::create(OutputFormat::Svg, LayoutEngine::Dot, None);
//! let request = VisualizeRequest::new("bash", "Packages.gz", "bash_dependencies");
//! let response = use_case.execute(request, renderer.as_mut())?;
//! println!("{}", response.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! The core can also be used without any I/O:
//!
//! ```
//! use depgraph_viz::prelude::*;
//!
//! let index = IndexParser::parse_str("Package: app\nDepends: lib (>= 1.0)\n\nPackage: lib\n");
//! let graph = GraphExpander::expand("app", &index);
//! assert_eq!(graph.packages().collect::<Vec<_>>(), vec!["app", "lib"]);
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemIndexReader;
    pub use crate::adapters::outbound::renderers::{
        DotSourceRenderer, GraphvizRenderer, JsonRenderer,
    };
    pub use crate::application::dto::{
        LayoutEngine, OutputFormat, VisualizeRequest, VisualizeResponse,
    };
    pub use crate::application::factories::RendererFactory;
    pub use crate::application::use_cases::VisualizeDependenciesUseCase;
    pub use crate::dependency_graph::domain::{DependencyGraph, DependencyIndex};
    pub use crate::dependency_graph::services::{GraphExpander, IndexParser};
    pub use crate::ports::inbound::GraphVisualizationPort;
    pub use crate::ports::outbound::{
        draw_graph, draw_package, GraphRenderer, IndexReader, ProgressReporter,
    };
    pub use crate::shared::error::{DepgraphError, ExitCode};
    pub use crate::shared::Result;
}
