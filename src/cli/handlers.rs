// src/cli/handlers.rs
use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;

use super::args::OutputFormat;
use crate::config::Config;
use crate::content::FsContent;
use crate::discovery;
use crate::graph::{build_graph, ImpactAnalyzer, ImportGraph};
use crate::paths;
use crate::ranking::KeyFileRanker;
use crate::reporting::{console, markdown};
use crate::types::{ChangeImpact, KeyFileSet, RepoFile};

/// A scanned repository with its graph, ready for queries.
pub struct Workspace {
    pub config: Config,
    pub files: Vec<RepoFile>,
    pub contents: FsContent,
    pub graph: ImportGraph,
}

impl Workspace {
    /// Loads config, discovers files, and builds the import graph under `root`.
    ///
    /// # Errors
    /// Returns error if the config is invalid or `root` cannot be walked.
    pub fn open(root: &Path) -> Result<Self> {
        let config = Config::load(root)
            .with_context(|| format!("loading config from {}", root.display()))?;
        let files = discovery::discover(root, &config)?;
        let contents = FsContent::new(root);
        let graph = build_graph(&files, &contents);
        Ok(Self { config, files, contents, graph })
    }

    #[must_use]
    pub fn key_files(&self) -> KeyFileSet {
        KeyFileRanker::new(&self.config.conventions).rank(&self.files)
    }

    #[must_use]
    pub fn impacts(&self, targets: &[String]) -> Vec<ChangeImpact> {
        ImpactAnalyzer::new(&self.graph, &self.files, &self.contents, &self.config.conventions)
            .analyze_all(targets)
    }
}

/// Prints the key file set.
///
/// # Errors
/// Returns error if discovery or serialization fails.
pub fn handle_keys(root: &Path, format: OutputFormat) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let keys = workspace.key_files();

    match format {
        OutputFormat::Text => print!("{}", console::format_keys(&keys)),
        OutputFormat::Markdown => print!("{}", markdown::render_list("Key files", keys.files())),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&keys)?),
    }
    Ok(())
}

/// Prints impact records for `targets`, or for every key file when empty.
///
/// # Errors
/// Returns error if discovery or serialization fails.
pub fn handle_impact(root: &Path, targets: &[String], format: OutputFormat) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let keys = workspace.key_files();

    let targets: Vec<String> = if targets.is_empty() {
        keys.files().to_vec()
    } else {
        targets.iter().map(|t| paths::normalize(t)).collect()
    };
    let impacts = workspace.impacts(&targets);

    match format {
        OutputFormat::Text => {
            for impact in &impacts {
                print!("{}", console::format_impact(impact));
            }
        }
        OutputFormat::Markdown => print!("{}", markdown::render_report(&keys, &impacts)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&impacts)?),
    }
    Ok(())
}

/// Prints a graph summary, or the direct edges of one file.
///
/// # Errors
/// Returns error if discovery or serialization fails.
pub fn handle_graph(root: &Path, file: Option<&str>, format: OutputFormat) -> Result<()> {
    let workspace = Workspace::open(root)?;
    let graph = &workspace.graph;

    let Some(file) = file else {
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&graph.snapshot())?),
            OutputFormat::Text | OutputFormat::Markdown => {
                println!("{}", console::format_graph_summary(graph));
            }
        }
        return Ok(());
    };

    let file = paths::normalize(file);
    let imports = graph.imports_of(&file);
    let imported_by = graph.imported_by_of(&file);

    match format {
        OutputFormat::Json => {
            let edges = json!({ "file": file, "imports": imports, "imported_by": imported_by });
            println!("{}", serde_json::to_string_pretty(&edges)?);
        }
        OutputFormat::Text | OutputFormat::Markdown => {
            print!("{}", markdown::render_list("Imports", &imports));
            println!();
            print!("{}", markdown::render_list("Imported by", &imported_by));
        }
    }
    Ok(())
}
