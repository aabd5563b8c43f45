use serde::{Deserialize, Serialize};

/// Hard ceiling on the number of key files handed to downstream fan-out.
pub const KEY_FILE_CAP: usize = 10;

/// Naming and layout conventions the engine matches paths against.
///
/// These tables are static defaults; a repository may override any of them
/// through `impactmap.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conventions {
    /// Basenames (without extension) that mark likely entry points, best first.
    #[serde(default = "default_priority_names")]
    pub priority_names: Vec<String>,
    /// Directory names whose contents are tests.
    #[serde(default = "default_test_dirs")]
    pub test_dirs: Vec<String>,
    /// Markers that appear just before the extension of a test file (`foo.test.ts`).
    #[serde(default = "default_test_markers")]
    pub test_markers: Vec<String>,
    /// Whole-name suffixes that mark a test file (`foo_test.go`).
    #[serde(default = "default_test_suffixes")]
    pub test_suffixes: Vec<String>,
    #[serde(default = "default_doc_dirs")]
    pub doc_dirs: Vec<String>,
    #[serde(default = "default_doc_extensions")]
    pub doc_extensions: Vec<String>,
    /// Root-level markdown files produced by the surrounding tooling.
    #[serde(default = "default_generated_docs")]
    pub generated_docs: Vec<String>,
    #[serde(default = "default_max_key_files")]
    pub max_key_files: usize,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            priority_names: default_priority_names(),
            test_dirs: default_test_dirs(),
            test_markers: default_test_markers(),
            test_suffixes: default_test_suffixes(),
            doc_dirs: default_doc_dirs(),
            doc_extensions: default_doc_extensions(),
            generated_docs: default_generated_docs(),
            max_key_files: default_max_key_files(),
        }
    }
}

impl Conventions {
    /// Effective key file limit, never above [`KEY_FILE_CAP`].
    #[must_use]
    pub fn key_file_limit(&self) -> usize {
        self.max_key_files.min(KEY_FILE_CAP)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_priority_names() -> Vec<String> {
    strings(&["index", "main", "app", "server", "cli"])
}
fn default_test_dirs() -> Vec<String> {
    strings(&["test", "tests", "__tests__"])
}
fn default_test_markers() -> Vec<String> {
    strings(&["test", "spec"])
}
fn default_test_suffixes() -> Vec<String> {
    strings(&["_test.go"])
}
fn default_doc_dirs() -> Vec<String> {
    strings(&["docs", "doc"])
}
fn default_doc_extensions() -> Vec<String> {
    strings(&["md", "mdx", "rst", "txt", "adoc"])
}
fn default_generated_docs() -> Vec<String> {
    strings(&["ONBOARDING.md"])
}
fn default_max_key_files() -> usize {
    KEY_FILE_CAP
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directory names skipped entirely during the walk.
    #[serde(default = "default_prune_dirs")]
    pub prune_dirs: Vec<String>,
    /// Regex patterns matched against normalized relative paths.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self { prune_dirs: default_prune_dirs(), exclude: Vec::new() }
    }
}

fn default_prune_dirs() -> Vec<String> {
    strings(&[
        ".git",
        "node_modules",
        "target",
        "dist",
        "build",
        "out",
        "coverage",
        "__pycache__",
        ".venv",
        "venv",
        "vendor",
        ".next",
    ])
}

/// On-disk shape of `impactmap.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImpactToml {
    #[serde(default)]
    pub conventions: Conventions,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub conventions: Conventions,
    pub prune_dirs: Vec<String>,
    pub exclude_patterns: Vec<regex::Regex>,
}
