/// Renderer adapters for the GraphRenderer port
mod dot_document;
mod dot_source_renderer;
mod graphviz_renderer;
mod json_renderer;

pub use dot_document::DotDocument;
pub use dot_source_renderer::DotSourceRenderer;
pub use graphviz_renderer::GraphvizRenderer;
pub use json_renderer::JsonRenderer;

use std::path::{Path, PathBuf};

/// Appends `.{extension}` to `output` unless it already ends with it
pub(crate) fn with_extension_appended(output: &Path, extension: &str) -> PathBuf {
    let has_extension = output
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false);
    if has_extension {
        return output.to_path_buf();
    }
    let mut file_name = output.as_os_str().to_owned();
    file_name.push(".");
    file_name.push(extension);
    PathBuf::from(file_name)
}
