use crate::dependency_graph::domain::DependencyIndex;
use std::collections::HashMap;
use std::io::{self, BufRead};

const PACKAGE_FIELD: &str = "Package:";
const DEPENDS_FIELD: &str = "Depends:";

/// IndexParser service turning package-index stanza text into a DependencyIndex
///
/// Only `Package` and `Depends` fields are interpreted; every other line is
/// skipped. Malformed or incomplete stanzas never fail the parse.
pub struct IndexParser;

impl IndexParser {
    /// Parses a package index from a buffered reader
    ///
    /// # Errors
    /// Returns the underlying I/O error if a line cannot be read, which
    /// includes decompression failures of a wrapping decoder and invalid UTF-8.
    pub fn parse<R: BufRead>(reader: R) -> io::Result<DependencyIndex> {
        let mut state = ParseState::default();
        for line in reader.lines() {
            state.process_line(&line?);
        }
        Ok(state.finish())
    }

    /// Parses package index text already held in memory
    pub fn parse_str(content: &str) -> DependencyIndex {
        let mut state = ParseState::default();
        for line in content.lines() {
            state.process_line(line);
        }
        state.finish()
    }

    /// Extracts package names from a `Depends` value.
    ///
    /// Each comma-separated fragment contributes its first whitespace
    /// delimited token, which drops version constraints like `(>= 1.2)` and
    /// any `| alternative` that follows.
    fn split_depends(value: &str) -> impl Iterator<Item = String> + '_ {
        value
            .split(',')
            .filter_map(|fragment| fragment.split_whitespace().next())
            .map(str::to_string)
    }
}

/// Line-processing state scoped to a single parse call
#[derive(Default)]
struct ParseState {
    entries: HashMap<String, Vec<String>>,
    current_package: Option<String>,
}

impl ParseState {
    fn process_line(&mut self, raw_line: &str) {
        let line = raw_line.trim();

        if let Some(value) = line.strip_prefix(PACKAGE_FIELD) {
            let name = value.trim().to_string();
            self.entries.insert(name.clone(), Vec::new());
            // A nameless stanza still gets a key but collects no dependencies
            self.current_package = Some(name).filter(|name| !name.is_empty());
        } else if let Some(value) = line.strip_prefix(DEPENDS_FIELD) {
            if let Some(current) = &self.current_package {
                if let Some(dependencies) = self.entries.get_mut(current) {
                    dependencies.extend(IndexParser::split_depends(value));
                }
            }
        }
    }

    fn finish(self) -> DependencyIndex {
        DependencyIndex::from_entries(self.entries)
    }
}
