use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("OUTPUT FILES CANNOT HAVE THE SAME NAME")]
    SameOutputFile,

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to console: {0}")]
    Console(#[from] io::Error),
}
