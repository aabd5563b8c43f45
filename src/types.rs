// src/types.rs
use serde::{Deserialize, Serialize};

/// One entry of the scanned repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoFile {
    /// POSIX-style path relative to the repository root.
    pub path: String,
    pub size: u64,
    pub is_dir: bool,
}

impl RepoFile {
    /// Creates a regular file entry.
    #[must_use]
    pub fn file(path: impl Into<String>, size: u64) -> Self {
        Self { path: path.into(), size, is_dir: false }
    }

    /// Creates a directory entry.
    #[must_use]
    pub fn dir(path: impl Into<String>) -> Self {
        Self { path: path.into(), size: 0, is_dir: true }
    }
}

/// What changes when a single file changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeImpact {
    pub file: String,
    /// Files this file imports directly.
    pub imports: Vec<String>,
    /// Files that import this file directly.
    pub imported_by: Vec<String>,
    /// Transitive dependents in discovery order, closest first.
    pub affected_files: Vec<String>,
    pub affected_tests: Vec<String>,
    pub affected_docs: Vec<String>,
}

impl ChangeImpact {
    /// An impact record with every list empty, used for unknown files.
    #[must_use]
    pub fn empty(file: impl Into<String>) -> Self {
        Self { file: file.into(), ..Self::default() }
    }

    /// Returns true if nothing references or depends on this file.
    #[must_use]
    pub fn is_isolated(&self) -> bool {
        self.imports.is_empty()
            && self.imported_by.is_empty()
            && self.affected_files.is_empty()
            && self.affected_docs.is_empty()
    }
}

/// Likely entry points, in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFileSet {
    files: Vec<String>,
}

impl KeyFileSet {
    #[must_use]
    pub fn new(files: Vec<String>) -> Self {
        Self { files }
    }

    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a KeyFileSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_impact_has_no_entries() {
        let impact = ChangeImpact::empty("src/missing.ts");
        assert_eq!(impact.file, "src/missing.ts");
        assert!(impact.is_isolated());
        assert!(impact.affected_tests.is_empty());
    }

    #[test]
    fn constructors_set_dir_flag() {
        assert!(RepoFile::dir("src").is_dir);
        assert!(!RepoFile::file("src/a.ts", 10).is_dir);
    }
}
