use std::path::Path;
use depgraph_viz::prelude::*;

/// Mock IndexReader parsing in-memory index text
pub struct MockIndexReader {
    pub content: String,
    pub should_fail: bool,
}

#[allow(dead_code)]
impl MockIndexReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl IndexReader for MockIndexReader {
    fn read_index(&self, index_path: &Path) -> Result<DependencyIndex> {
        if self.should_fail {
            return Err(DepgraphError::IndexFormatError {
                path: index_path.to_path_buf(),
                details: "Mock index read failure".to_string(),
            }
            .into());
        }
        Ok(IndexParser::parse_str(&self.content))
    }
}
