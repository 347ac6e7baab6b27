//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

/// Resolve input patterns to poem files
///
/// Plain paths are kept even when they do not exist, so that the poem loader
/// reports them as missing. Glob patterns expand to the files they match,
/// sorted. Duplicates are dropped, first occurrence wins.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        if !is_glob(pattern) {
            push_unique(&mut files, PathBuf::from(pattern));
            continue;
        }

        let paths = glob(pattern).map_err(|e| {
            CliError::InvalidPattern(format!("{pattern}: {}", e.msg))
        })?;

        let mut matched: Vec<PathBuf> = paths
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("skipping unreadable path while resolving {pattern}: {e}");
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect();

        if matched.is_empty() {
            log::warn!("pattern matched no files: {pattern}");
        }
        matched.sort();
        for path in matched {
            push_unique(&mut files, path);
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInput.into());
    }

    Ok(files)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

fn push_unique(files: &mut Vec<PathBuf>, path: PathBuf) {
    if !files.contains(&path) {
        files.push(path);
    }
}
