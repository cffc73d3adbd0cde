//! Input file discovery from glob patterns

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Expand glob patterns into a sorted, deduplicated list of files.
///
/// Matched directories are skipped. A pattern set that matches nothing
/// at all is an error, so a typo never silently converts zero posts.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let matched_before = files.len();
        let entries = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for entry in entries {
            let path = entry.with_context(|| format!("Error resolving pattern: {}", pattern))?;
            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == matched_before {
            log::debug!("Pattern matched no files: {}", pattern);
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_literal_path() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("post.txt");
        fs::write(&file_path, "content").unwrap();

        let pattern = file_path.display().to_string();
        let files = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn test_resolves_glob_pattern() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("c.md"), "c").unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let files = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_repeated_patterns_dedup() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("post.txt");
        fs::write(&file_path, "content").unwrap();

        let pattern = file_path.display().to_string();
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();
        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn test_no_matches_is_an_error() {
        let result = resolve_patterns(&["nonexistent-file.txt".to_string()]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let result = resolve_patterns(&["a[".to_string()]);
        assert!(result.is_err());
    }
}
