use crate::shared::error::DepgraphError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// OutputFileWriter for renderers that produce text output themselves
pub struct OutputFileWriter;

impl OutputFileWriter {
    /// Writes `content` to `path` after the same checks the Graphviz
    /// renderer runs before handing a path to the external program
    pub fn write(path: &Path, content: &str) -> Result<()> {
        Self::validate_output_path(path)?;

        fs::write(path, content).map_err(|e| DepgraphError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }

    /// Security validation before writing:
    /// - Parent directory must exist
    /// - Reject if output path exists and is a symlink
    pub fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.exists() {
                return Err(DepgraphError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }

        if let Ok(metadata) = fs::symlink_metadata(path) {
            if metadata.is_symlink() {
                return Err(DepgraphError::FileWriteError {
                    path: path.to_path_buf(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
