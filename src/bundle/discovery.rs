use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

use crate::bundle::error::BundleError;

/// Lists summary files directly inside `directory` whose name matches `pattern`.
///
/// Subdirectories are never entered. A missing directory has no results.
pub fn list_results(directory: &Path, pattern: &str) -> Result<Vec<PathBuf>, BundleError> {
    let pattern = Pattern::new(pattern)?;
    if !directory.is_dir() {
        return Ok(Vec::new());
    }
    let mut results = Vec::new();
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| pattern.matches(name));
        if matches && !path.is_dir() {
            results.push(path);
        }
    }
    results.sort();
    Ok(results)
}
