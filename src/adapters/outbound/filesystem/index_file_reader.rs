use crate::dependency_graph::domain::DependencyIndex;
use crate::dependency_graph::services::IndexParser;
use crate::ports::outbound::IndexReader;
use crate::shared::error::DepgraphError;
use crate::shared::Result;
use flate2::read::MultiGzDecoder;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// File suffix that triggers transparent gzip decompression
const GZIP_SUFFIX: &str = ".gz";

/// FileSystemIndexReader adapter for reading package indexes from disk
///
/// Files whose name ends in `.gz` are decompressed on the fly, including
/// every member of a concatenated gzip file; anything else is read as plain
/// text. The file handle lives only for the duration of
/// [`IndexReader::read_index`] and is closed on every exit path.
pub struct FileSystemIndexReader;

impl FileSystemIndexReader {
    pub fn new() -> Self {
        Self
    }

    fn is_gzip(path: &Path) -> bool {
        path.to_string_lossy().ends_with(GZIP_SUFFIX)
    }

    /// Validates the index path before opening it:
    /// - Reject symbolic links
    /// - Validate the path is a regular file
    fn validate_index_path(path: &Path) -> Result<()> {
        let metadata = fs::symlink_metadata(path).map_err(|e| DepgraphError::IndexFormatError {
            path: path.to_path_buf(),
            details: format!("Failed to read file metadata: {}", e),
        })?;

        if metadata.is_symlink() {
            return Err(DepgraphError::InvalidIndexPath {
                path: path.to_path_buf(),
                reason: "Security: Index path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(DepgraphError::InvalidIndexPath {
                path: path.to_path_buf(),
                reason: "Not a regular file".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for FileSystemIndexReader {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexReader for FileSystemIndexReader {
    fn read_index(&self, index_path: &Path) -> Result<DependencyIndex> {
        if !index_path.exists() {
            return Err(DepgraphError::IndexNotFound {
                path: index_path.to_path_buf(),
                suggestion: "Pass the path of a Packages or Packages.gz file with --index, \
                             e.g. one downloaded from a Debian mirror's dists/<suite>/main/binary-<arch>/ directory."
                    .to_string(),
            }
            .into());
        }

        Self::validate_index_path(index_path)?;

        let file = File::open(index_path).map_err(|e| DepgraphError::IndexFormatError {
            path: index_path.to_path_buf(),
            details: e.to_string(),
        })?;

        let reader: Box<dyn BufRead> = if Self::is_gzip(index_path) {
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        IndexParser::parse(reader).map_err(|e| {
            DepgraphError::IndexFormatError {
                path: index_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
