use crate::adapters::outbound::renderers::{DotSourceRenderer, GraphvizRenderer, JsonRenderer};
use crate::application::dto::{LayoutEngine, OutputFormat};
use crate::ports::outbound::GraphRenderer;
use std::path::PathBuf;

/// Factory for creating graph renderers
///
/// This factory encapsulates the selection of renderer adapters based on the
/// requested output format. Image formats go through Graphviz, the others are
/// written directly.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to render
    /// * `engine` - Graphviz layout engine (ignored by non-image formats)
    /// * `graphviz_program` - Explicit Graphviz executable, or `None` to use `dot` from PATH
    ///
    /// # Examples
    /// ```
    /// use depgraph_viz::application::dto::{LayoutEngine, OutputFormat};
    /// use depgraph_viz::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Dot, LayoutEngine::Dot, None);
    /// ```
    pub fn create(
        format: OutputFormat,
        engine: LayoutEngine,
        graphviz_program: Option<PathBuf>,
    ) -> Box<dyn GraphRenderer> {
        match format {
            OutputFormat::Png | OutputFormat::Svg | OutputFormat::Pdf => match graphviz_program {
                Some(program) => Box::new(GraphvizRenderer::with_program(engine, format, program)),
                None => Box::new(GraphvizRenderer::new(engine, format)),
            },
            OutputFormat::Dot => Box::new(DotSourceRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat, engine: LayoutEngine) -> String {
        if format.requires_graphviz() {
            format!(
                "🎨 Rendering {} image with Graphviz ({} layout)...",
                format.extension().to_uppercase(),
                engine
            )
        } else {
            format!("📝 Writing {} output...", format.extension().to_uppercase())
        }
    }
}
