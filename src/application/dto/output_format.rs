/// Output format enumeration for dependency graph rendering
///
/// This enum represents the supported output formats. It belongs in the
/// application layer as both the CLI (inbound adapter) and the renderers
/// (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// PNG image rendered by Graphviz (default)
    #[default]
    Png,
    /// SVG image rendered by Graphviz
    Svg,
    /// PDF document rendered by Graphviz
    Pdf,
    /// Graphviz DOT source, no Graphviz installation needed
    Dot,
    /// JSON adjacency map
    Json,
}

impl OutputFormat {
    /// File extension appended to the output path
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Dot => "dot",
            OutputFormat::Json => "json",
        }
    }

    /// Whether this format needs the Graphviz executable
    pub fn requires_graphviz(self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Svg | OutputFormat::Pdf)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            "dot" | "gv" => Ok(OutputFormat::Dot),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'png', 'svg', 'pdf', 'dot' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
