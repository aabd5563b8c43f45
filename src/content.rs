// src/content.rs
//! Content lookup: how the engine obtains file text.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Supplies the text of a repository file by its relative path.
///
/// `None` means the content is unavailable (missing, unreadable, or not
/// UTF-8); callers treat that as "no information", never as an error.
pub trait ContentSource: Sync {
    fn read(&self, path: &str) -> Option<String>;
}

/// Reads files from a checkout on disk.
#[derive(Debug, Clone)]
pub struct FsContent {
    root: PathBuf,
}

impl FsContent {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for FsContent {
    fn read(&self, path: &str) -> Option<String> {
        match fs::read_to_string(self.root.join(path)) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!(path, error = %e, "content unavailable");
                None
            }
        }
    }
}

/// Contents held in memory, keyed by relative path.
#[derive(Debug, Clone, Default)]
pub struct MemoryContent {
    files: HashMap<String, String>,
}

impl MemoryContent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryContent {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl ContentSource for MemoryContent {
    fn read(&self, path: &str) -> Option<String> {
        self.files.get(path).cloned()
    }
}

impl ContentSource for HashMap<String, String> {
    fn read(&self, path: &str) -> Option<String> {
        self.get(path).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_content_lookup() {
        let content = MemoryContent::new().with("src/a.ts", "export {}");
        assert_eq!(content.read("src/a.ts").as_deref(), Some("export {}"));
        assert_eq!(content.read("src/b.ts"), None);
    }

    #[test]
    fn collects_from_pairs() {
        let content: MemoryContent = [("a.py", "import b")].into_iter().collect();
        assert!(content.read("a.py").is_some());
    }
}
