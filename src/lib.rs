//! Change impact engine: builds a file-level import graph for a repository
//! and answers which files, tests, and docs are affected when a file changes.

pub mod cli;
pub mod config;
pub mod content;
pub mod discovery;
pub mod error;
pub mod file_class;
pub mod graph;
pub mod lang;
pub mod paths;
pub mod ranking;
pub mod reporting;
pub mod types;

pub use content::{ContentSource, FsContent, MemoryContent};
pub use graph::{build_graph, compute_impact, ImpactAnalyzer, ImportGraph};
pub use ranking::{rank_key_files, KeyFileRanker};
pub use types::{ChangeImpact, KeyFileSet, RepoFile};
