//! Header and file list blocks shared by console and file output

use std::path::Path;

use serde::Deserialize;

use crate::files::CandidateFile;

/// Information printed at the top of generated output
#[derive(Debug, Clone)]
pub struct Header {
    pub project: Option<String>,
    pub generated_at: String,
}

#[derive(Deserialize)]
struct PackageJson {
    name: Option<String>,
}

impl Header {
    /// Build a header for a run in `dir`, picking up the project name from
    /// `package.json` when there is one
    pub fn detect(dir: &Path) -> Self {
        Self {
            project: read_project_name(dir),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

fn read_project_name(dir: &Path) -> Option<String> {
    let content = std::fs::read_to_string(dir.join("package.json")).ok()?;
    let package: PackageJson = serde_json::from_str(&content).ok()?;
    package.name.filter(|n| !n.is_empty())
}

/// Format the header block, followed by a blank line
pub fn format_header(header: &Header) -> String {
    let mut output = String::new();

    if let Some(ref project) = header.project {
        output.push_str(&format!("# Project: {}\n", project));
    }
    output.push_str(&format!(
        "# Generated by {} {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    output.push_str(&format!("# {}\n", header.generated_at));
    output.push('\n');

    output
}

/// Format the list of candidate files, `+` for scanned and `-` for excluded
pub fn format_file_list(files: &[CandidateFile]) -> String {
    let mut output = String::new();

    for file in files {
        let marker = if file.included { '+' } else { '-' };
        output.push_str(&format!("# {} {}\n", marker, file.original));
    }
    output.push('\n');

    output
}
