pub mod cli;
pub mod error;
pub mod files;
pub mod logging;
pub mod output;
pub mod parser;
pub mod run;
pub mod scan;

pub use error::Error;
pub use run::{Outcome, run};
