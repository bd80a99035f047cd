mod engine;
mod reference;

pub use engine::{ScanConfig, ScanEngine, extract};
pub use reference::{EnvReference, References};
