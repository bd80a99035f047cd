use clap::{Parser, ValueEnum};

use crate::error::Error;
use crate::files::DEFAULT_IGNORE;

#[derive(Parser, Debug)]
#[command(name = "envinit")]
#[command(
    author,
    version,
    about = "Generate a .env file from the environment variables your code reads"
)]
#[command(
    long_about = "Scans source files for `process.env.NAME || default` references and \
    writes every variable found, with its default, to a .env file. With --safe, \
    variables without a default are also written to a .env.example file for \
    loaders that check required variables at startup."
)]
pub struct Args {
    /// Files or glob patterns to scan
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Also write the safe file listing required variables
    #[arg(short, long)]
    pub safe: bool,

    /// Include comments when scanning for environment variables
    #[arg(short, long)]
    pub comments: bool,

    /// Patterns of files to ignore (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_values = DEFAULT_IGNORE)]
    pub ignore: Vec<String>,

    /// Console output level
    #[arg(short, long, value_name = "LEVEL", default_value = "normal", ignore_case = true)]
    pub output: ConsoleLevel,

    /// File output level
    #[arg(short = 'O', long, value_name = "LEVEL", default_value = "normal", ignore_case = true)]
    pub file_output: FileLevel,

    /// Name of the output file
    #[arg(long, value_name = "NAME", default_value = ".env")]
    pub filename: String,

    /// Name of the safe output file
    #[arg(long, value_name = "NAME", default_value = ".env.example")]
    pub safe_filename: String,

    /// Console output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConsoleLevel {
    /// Print nothing
    Silent,
    /// Print the header and the variables found
    Normal,
    /// Also print the files that were scanned or excluded
    Verbose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FileLevel {
    /// Only the variables
    Minimal,
    /// The header and the variables
    Normal,
    /// Also the files that were scanned or excluded
    Verbose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl ConsoleLevel {
    pub fn is_silent(self) -> bool {
        self == ConsoleLevel::Silent
    }

    pub fn shows_header(self) -> bool {
        self != ConsoleLevel::Silent
    }

    pub fn shows_file_list(self) -> bool {
        self == ConsoleLevel::Verbose
    }
}

impl FileLevel {
    pub fn shows_header(self) -> bool {
        self != FileLevel::Minimal
    }

    pub fn shows_file_list(self) -> bool {
        self == FileLevel::Verbose
    }
}

impl Args {
    /// Check preconditions that must hold before any file is touched
    pub fn validate(&self) -> Result<(), Error> {
        if self.safe && self.filename == self.safe_filename {
            return Err(Error::SameOutputFile);
        }

        Ok(())
    }
}
