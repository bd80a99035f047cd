mod candidate;
mod discovery;

pub use candidate::CandidateFile;
pub use discovery::{DEFAULT_IGNORE, discover_files};
