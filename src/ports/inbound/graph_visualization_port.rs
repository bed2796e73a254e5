use crate::application::dto::{VisualizeRequest, VisualizeResponse};
use crate::ports::outbound::GraphRenderer;
use crate::shared::Result;

/// GraphVisualizationPort - Inbound port for the visualization use case
///
/// This port defines the interface that external adapters (CLI, etc.)
/// use to trigger dependency graph visualization.
pub trait GraphVisualizationPort {
    /// Expands the dependencies of `request.package` and draws them with `renderer`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The package index cannot be found, read or decompressed
    /// - The package is not declared in the index
    /// - The renderer fails to produce its output
    fn visualize(
        &self,
        request: VisualizeRequest,
        renderer: &mut dyn GraphRenderer,
    ) -> Result<VisualizeResponse>;
}
