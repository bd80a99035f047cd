use std::path::PathBuf;

/// A file named on the command line or produced by a glob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// The path as the user wrote it (or as the glob produced it)
    pub original: String,
    /// Absolute path used for reading
    pub path: PathBuf,
    /// Whether the file exists and is a regular file
    pub included: bool,
}

impl CandidateFile {
    /// Classify `path` by checking the filesystem
    pub fn classify(original: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let included = std::fs::metadata(&path)
            .map(|m| m.is_file())
            .unwrap_or(false);
        Self {
            original: original.into(),
            path,
            included,
        }
    }

    pub fn excluded(original: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            original: original.into(),
            path: path.into(),
            included: false,
        }
    }
}
