// src/discovery.rs
//! Repository scanning: produces the flat `RepoFile` listing the engine consumes.

use crate::config::Config;
use crate::error::{ImpactError, Result};
use crate::paths;
use crate::types::RepoFile;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Walks `root` and returns every file and directory, sorted by path.
///
/// Pruned directories are skipped entirely; exclude patterns drop matching
/// paths (and, for directories, everything beneath them).
///
/// # Errors
/// Returns error if `root` is not a directory, or if the walk cannot read
/// `root` itself. Failures below the root are logged and skipped.
pub fn discover(root: &Path, config: &Config) -> Result<Vec<RepoFile>> {
    if root.exists() && !root.is_dir() {
        return Err(ImpactError::Io {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
            path: root.to_path_buf(),
        });
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_pruned(e, root, config));

    let (mut files, error_count) = accumulate_walker(walker, root)?;
    if error_count > 0 {
        warn!(error_count, "errors encountered during file walk");
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    debug!(entries = files.len(), root = %root.display(), "discovery complete");
    Ok(files)
}

fn is_pruned(entry: &DirEntry, root: &Path, config: &Config) -> bool {
    if entry.file_type().is_dir() && config.should_prune(&entry.file_name().to_string_lossy()) {
        return true;
    }
    let rel = relative_path(entry.path(), root);
    config.exclude_patterns.iter().any(|re| re.is_match(&rel))
}

fn accumulate_walker<I>(walker: I, root: &Path) -> Result<(Vec<RepoFile>, usize)>
where
    I: Iterator<Item = walkdir::Result<DirEntry>>,
{
    let mut files = Vec::new();
    let mut errors = 0;

    for item in walker {
        match item {
            Ok(entry) if entry.depth() > 0 => {
                if let Some(file) = to_repo_file(&entry, root) {
                    files.push(file);
                }
            }
            Ok(_) => {}
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                debug!(error = %e, "walk error");
                errors += 1;
            }
        }
    }
    Ok((files, errors))
}

fn to_repo_file(entry: &DirEntry, root: &Path) -> Option<RepoFile> {
    let path = relative_path(entry.path(), root);
    let file_type = entry.file_type();

    if file_type.is_dir() {
        return Some(RepoFile::dir(path));
    }
    if !file_type.is_file() {
        return None;
    }
    let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
    Some(RepoFile::file(path, size))
}

/// Root-relative, forward-slash path of a walked entry.
fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    paths::normalize(&rel.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lists_files_and_dirs_relative_to_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/nested")).unwrap();
        fs::write(temp.path().join("src/nested/a.ts"), "x").unwrap();
        fs::write(temp.path().join("main.py"), "print(1)").unwrap();

        let files = discover(temp.path(), &Config::new()).unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["main.py", "src", "src/nested", "src/nested/a.ts"]);
        assert!(files[1].is_dir);
        assert_eq!(files[3].size, 1);
    }

    #[test]
    fn pruned_dirs_are_skipped() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("node_modules/react")).unwrap();
        fs::write(temp.path().join("node_modules/react/index.js"), "").unwrap();
        fs::write(temp.path().join("index.js"), "").unwrap();

        let files = discover(temp.path(), &Config::new()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "index.js");
    }

    #[test]
    fn missing_root_is_walk_error() {
        let temp = TempDir::new().unwrap();
        let err = discover(&temp.path().join("absent"), &Config::new()).unwrap_err();
        assert!(matches!(err, ImpactError::Walk(_)));
    }

    #[test]
    fn file_root_is_io_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("main.py");
        fs::write(&file, "").unwrap();
        let err = discover(&file, &Config::new()).unwrap_err();
        assert!(matches!(err, ImpactError::Io { .. }));
    }
}
