//! One invocation: discover, scan, render and write

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::{Args, OutputFormat};
use crate::error::Error;
use crate::files::discover_files;
use crate::output::{
    Header, format_file_list, format_header, format_listing, format_listing_json,
    format_required_listing,
};
use crate::scan::{EnvReference, ScanConfig, ScanEngine};

pub const NO_FILES: &str = "NO FILES TO PROCESS, exiting ...";

/// What a run produced
#[derive(Debug)]
pub enum Outcome {
    /// No candidate file could be scanned, nothing was written
    NoFiles,
    Generated {
        references: Vec<EnvReference>,
        written: Vec<PathBuf>,
    },
}

/// Run the generator for `args`, resolving paths against `base`
///
/// Console output goes to `console` unless the console level is silent.
pub fn run<W: Write>(args: &Args, base: &Path, console: &mut W) -> Result<Outcome, Error> {
    if let Err(e) = args.validate() {
        if !args.output.is_silent() {
            writeln!(console, "ERROR: {}", e)?;
        }
        return Err(e);
    }

    let mut console_buf = String::new();
    let mut file_buf = String::new();

    if args.output.shows_header() || args.file_output.shows_header() {
        let header = format_header(&Header::detect(base));
        if args.output.shows_header() {
            console_buf.push_str(&header);
        }
        if args.file_output.shows_header() {
            file_buf.push_str(&header);
        }
    }

    let files = discover_files(base, &args.files, &args.ignore);
    if !files.iter().any(|f| f.included) {
        console_buf.push_str(NO_FILES);
        console_buf.push('\n');
        if !args.output.is_silent() {
            console.write_all(console_buf.as_bytes())?;
        }
        return Ok(Outcome::NoFiles);
    }

    let file_list = format_file_list(&files);
    if args.output.shows_file_list() {
        console_buf.push_str(&file_list);
    }
    if args.file_output.shows_file_list() {
        file_buf.push_str(&file_list);
    }

    let engine = ScanEngine::new().with_config(ScanConfig {
        include_comments: args.comments,
    });
    let references = engine.scan(&files).into_vec();

    // The safe file shares the header and file list of the main file
    let mut safe_buf = file_buf.clone();
    let listing = format_listing(&references);
    console_buf.push_str(&listing);
    file_buf.push_str(&listing);
    safe_buf.push_str(&format_required_listing(&references));

    if !args.output.is_silent() {
        match args.format {
            OutputFormat::Text => console.write_all(console_buf.as_bytes())?,
            OutputFormat::Json => writeln!(console, "{}", format_listing_json(&references))?,
        }
    }

    let mut written = Vec::new();
    if args.safe {
        written.push(write_output(base, &args.safe_filename, &safe_buf)?);
    }
    written.push(write_output(base, &args.filename, &file_buf)?);

    Ok(Outcome::Generated {
        references,
        written,
    })
}

fn write_output(base: &Path, filename: &str, content: &str) -> Result<PathBuf, Error> {
    let path = base.join(&*shellexpand::tilde(filename));
    std::fs::write(&path, content).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = content.len(), "wrote output file");
    Ok(path)
}
