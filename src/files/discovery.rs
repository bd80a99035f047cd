use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use glob::{MatchOptions, Pattern, glob_with};
use regex::Regex;
use tracing::{debug, warn};

use super::CandidateFile;

/// Ignore patterns applied when none are given on the command line
pub const DEFAULT_IGNORE: [&str; 2] = ["node_modules/**", "test/**"];

static STAR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*{2,}").unwrap());

/// Patterns containing wildcards are expanded, anything else is a literal path
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Discover candidate files relative to `base`
///
/// Returns files in command-line order with duplicates removed, each
/// classified as included (an existing regular file) or not. Globs that
/// match nothing are kept as a single excluded entry.
pub fn discover_files(base: &Path, patterns: &[String], ignore: &[String]) -> Vec<CandidateFile> {
    let ignore = compile_ignore(ignore);
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files = Vec::new();

    for raw in patterns {
        let pattern = shellexpand::tilde(raw).into_owned();

        let originals = if is_glob_pattern(&pattern) {
            match expand_glob(base, &pattern) {
                Ok(matches) if !matches.is_empty() => matches,
                Ok(_) => {
                    debug!(pattern = %raw, "glob matched no files");
                    files.push(CandidateFile::excluded(raw.as_str(), base.join(&pattern)));
                    continue;
                }
                Err(e) => {
                    warn!(pattern = %raw, error = %e, "invalid glob pattern");
                    files.push(CandidateFile::excluded(raw.as_str(), base.join(&pattern)));
                    continue;
                }
            }
        } else {
            vec![pattern]
        };

        for original in originals {
            if is_ignored(&ignore, &original) {
                debug!(file = %original, "ignored");
                continue;
            }

            let path = base.join(&original);
            if !seen.insert(path.clone()) {
                continue;
            }
            files.push(CandidateFile::classify(original, path));
        }
    }

    debug!(
        candidates = files.len(),
        included = files.iter().filter(|f| f.included).count(),
        "file discovery complete"
    );
    files
}

/// Collapse `**` that is not a whole path segment into `*`, so `**.js`
/// behaves like `*.js` instead of being rejected
fn normalize_globstar(pattern: &str) -> String {
    pattern
        .split('/')
        .map(|segment| {
            if segment == "**" {
                segment.to_string()
            } else {
                STAR_RUN.replace_all(segment, "*").into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Expand `pattern` under `base`, returning matches written relative to
/// `base` when the pattern itself was relative
fn expand_glob(base: &Path, pattern: &str) -> Result<Vec<String>, glob::PatternError> {
    let pattern = normalize_globstar(pattern);
    let relative = Path::new(&pattern).is_relative();
    let full = if relative {
        format!(
            "{}/{}",
            Pattern::escape(&base.to_string_lossy()).trim_end_matches('/'),
            pattern
        )
    } else {
        pattern
    };

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut matches = Vec::new();
    for entry in glob_with(&full, options)?.flatten() {
        let shown = if relative {
            entry.strip_prefix(base).unwrap_or(&entry).to_path_buf()
        } else {
            entry
        };
        matches.push(shown.to_string_lossy().into_owned());
    }
    Ok(matches)
}

fn compile_ignore(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .filter_map(|p| match Pattern::new(&normalize_globstar(p)) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!(pattern = p, error = %e, "invalid ignore pattern");
                None
            }
        })
        .collect()
}

fn is_ignored(ignore: &[Pattern], path: &str) -> bool {
    let path = path.strip_prefix("./").unwrap_or(path);
    ignore.iter().any(|p| p.matches(path))
}
