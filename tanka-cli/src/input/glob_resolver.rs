//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve file patterns to actual file paths
///
/// A pattern naming an existing directory stands for every file directly
/// inside it.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = expand_directory(pattern);
        let paths = glob(&pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

fn expand_directory(pattern: &str) -> String {
    let path = Path::new(pattern);
    if path.is_dir() {
        let escaped = glob::Pattern::escape(pattern.trim_end_matches('/'));
        format!("{escaped}/*")
    } else {
        pattern.to_string()
    }
}
