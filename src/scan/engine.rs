//! Scanning engine that reads candidate files and collects references

use std::path::Path;

use tracing::{debug, info};

use crate::files::CandidateFile;
use crate::parser::{parse_env_references, strip_comments};
use crate::scan::References;

/// Configuration for the scanning engine
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanConfig {
    /// Scan comments too instead of stripping them first
    pub include_comments: bool,
}

/// Reads candidate files in order and extracts their environment references
#[derive(Debug, Default)]
pub struct ScanEngine {
    config: ScanConfig,
}

impl ScanEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Scan every included file, skipping those that cannot be read or
    /// whose comments cannot be stripped
    pub fn scan(&self, files: &[CandidateFile]) -> References {
        let sources: Vec<(String, String)> = files
            .iter()
            .filter(|f| f.included)
            .filter_map(|f| {
                self.load(&f.path)
                    .map(|text| (f.original.clone(), text))
            })
            .collect();

        let references = extract(sources.iter().map(|(id, text)| (id.as_str(), text.as_str())));
        info!(
            files = sources.len(),
            variables = references.len(),
            "scan complete"
        );
        references
    }

    fn load(&self, path: &Path) -> Option<String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable file");
                return None;
            }
        };

        if self.config.include_comments {
            return Some(content);
        }

        match strip_comments(&content) {
            Ok(stripped) => Some(stripped),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping file, cannot strip comments");
                None
            }
        }
    }
}

/// Extract unique references from already loaded sources
///
/// Sources are scanned in the order given and matches within a source left
/// to right. The first occurrence of a name decides its default.
pub fn extract<'a, I>(sources: I) -> References
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut references = References::new();

    for (id, text) in sources {
        let mut found = 0;
        for reference in parse_env_references(text) {
            if references.insert(reference) {
                found += 1;
            }
        }
        debug!(file = id, new_variables = found, "scanned");
    }

    references
}
