use crate::application::dto::{VisualizeRequest, VisualizeResponse};
use crate::dependency_graph::services::GraphExpander;
use crate::ports::inbound::GraphVisualizationPort;
use crate::ports::outbound::{draw_package, GraphRenderer, IndexReader, ProgressReporter};
use crate::shared::error::DepgraphError;
use crate::shared::Result;

/// VisualizeDependenciesUseCase - Core use case for dependency visualization
///
/// Reads the package index, expands the graph of the requested package and
/// hands it to a renderer, in that order.
///
/// # Type Parameters
/// * `IR` - IndexReader implementation
/// * `PR` - ProgressReporter implementation
pub struct VisualizeDependenciesUseCase<IR, PR> {
    index_reader: IR,
    progress_reporter: PR,
}

impl<IR, PR> VisualizeDependenciesUseCase<IR, PR>
where
    IR: IndexReader,
    PR: ProgressReporter,
{
    /// Creates a new VisualizeDependenciesUseCase with injected dependencies
    pub fn new(index_reader: IR, progress_reporter: PR) -> Self {
        Self {
            index_reader,
            progress_reporter,
        }
    }

    /// Executes the visualization use case
    ///
    /// # Errors
    /// Returns an error if the index cannot be read, if the package is not in
    /// the index, or if the renderer fails. `render` is called exactly once,
    /// and only when the graph is non-empty.
    ///
    /// [`GraphExpander::expand`] itself never fails: an unknown package
    /// yields an empty graph. This use case turns that empty graph into
    /// [`DepgraphError::PackageNotFound`] so the CLI can exit non-zero.
    pub fn execute<R>(&self, request: VisualizeRequest, renderer: &mut R) -> Result<VisualizeResponse>
    where
        R: GraphRenderer + ?Sized,
    {
        // Step 1: Read and parse the package index
        self.progress_reporter.report(&format!(
            "📖 Loading package index from: {}",
            request.index_path.display()
        ));

        let index = self.index_reader.read_index(&request.index_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", index.len()));

        // Step 2: Expand the dependency graph of the requested package
        let graph = GraphExpander::expand(&request.package, &index);

        if graph.is_empty() {
            return Err(DepgraphError::PackageNotFound {
                package: request.package,
            }
            .into());
        }

        self.progress_reporter.report(&format!(
            "📊 Expanded '{}': {} package(s), {} dependency edge(s)",
            graph.root(),
            graph.len(),
            graph.edge_count()
        ));

        // Step 3: Draw in visit order, then render
        let total = graph.len();
        for (position, (package, dependencies)) in graph.iter().enumerate() {
            draw_package(package, dependencies, renderer);
            self.progress_reporter
                .report_progress(position + 1, total, Some(package));
        }
        let output_path = match renderer.render(&request.output_path) {
            Ok(path) => path,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ Rendering failed for '{}'", graph.root()));
                return Err(e);
            }
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Output complete: {}",
            output_path.display()
        ));

        Ok(VisualizeResponse::new(graph, index.len(), output_path))
    }
}

impl<IR, PR> GraphVisualizationPort for VisualizeDependenciesUseCase<IR, PR>
where
    IR: IndexReader,
    PR: ProgressReporter,
{
    fn visualize(
        &self,
        request: VisualizeRequest,
        renderer: &mut dyn GraphRenderer,
    ) -> Result<VisualizeResponse> {
        self.execute(request, renderer)
    }
}
