use std::path::PathBuf;

/// VisualizeRequest - Internal request DTO for the visualization use case
#[derive(Debug, Clone)]
pub struct VisualizeRequest {
    /// Root package whose dependencies are expanded
    pub package: String,
    /// Path to a Packages or Packages.gz file
    pub index_path: PathBuf,
    /// Requested output location; renderers append the format extension
    pub output_path: PathBuf,
}

impl VisualizeRequest {
    pub fn new(
        package: impl Into<String>,
        index_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            package: package.into(),
            index_path: index_path.into(),
            output_path: output_path.into(),
        }
    }
}
