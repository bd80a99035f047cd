mod comments;
mod env_reference;

pub use comments::{StripError, strip_comments};
pub use env_reference::parse_env_references;
