// src/reporting/console.rs
//! Colored terminal output for the CLI.

use colored::Colorize;
use std::collections::BTreeMap;

use super::{more_marker, pluralize, truncate, RENDER_LIMIT};
use crate::graph::ImportGraph;
use crate::lang::Lang;
use crate::types::{ChangeImpact, KeyFileSet};

/// Formats the key file set as a numbered list.
#[must_use]
pub fn format_keys(keys: &KeyFileSet) -> String {
    let mut out = format!(
        "{} {} {}\n",
        "KEY FILES".cyan().bold(),
        keys.len(),
        pluralize("file", keys.len())
    );
    for (rank, file) in keys.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {file}\n", rank + 1));
    }
    out
}

/// Formats one impact record.
#[must_use]
pub fn format_impact(impact: &ChangeImpact) -> String {
    let mut out = format!(
        "\n{} {} | {} affected | {} {}\n",
        "IMPACT".cyan().bold(),
        impact.file.bold(),
        format_count(impact.affected_files.len()),
        impact.affected_tests.len(),
        pluralize("test", impact.affected_tests.len()),
    );
    if impact.is_isolated() {
        out.push_str(&format!("  {}\n", "isolated: no imports, importers, or doc mentions".dimmed()));
    }

    let sections = [
        ("imports", &impact.imports),
        ("imported by", &impact.imported_by),
        ("affected", &impact.affected_files),
        ("tests", &impact.affected_tests),
        ("docs", &impact.affected_docs),
    ];
    for (label, items) in sections {
        out.push_str(&format!("{} {}\n", "▸".yellow(), label.yellow().bold()));
        if items.is_empty() {
            out.push_str(&format!("    {}\n", "none".dimmed()));
            continue;
        }
        let (shown, omitted) = truncate(items, RENDER_LIMIT);
        for item in shown {
            out.push_str(&format!("    {item}\n"));
        }
        if omitted > 0 {
            out.push_str(&format!("    {}\n", more_marker(omitted).dimmed()));
        }
    }
    out
}

/// Formats a one-line summary of the graph, with source files per language.
#[must_use]
pub fn format_graph_summary(graph: &ImportGraph) -> String {
    let mut by_lang: BTreeMap<&str, usize> = BTreeMap::new();
    for lang in graph.paths().filter_map(Lang::from_path) {
        *by_lang.entry(lang.label()).or_default() += 1;
    }
    let languages: Vec<String> = by_lang.iter().map(|(label, n)| format!("{label} {n}")).collect();

    let mut out = format!(
        "{} {} files | {} sources | {} edges",
        "IMPORT GRAPH".cyan().bold(),
        graph.len(),
        graph.source_count(),
        graph.edge_count()
    );
    if !languages.is_empty() {
        out.push_str(&format!(" | {}", languages.join(", ")));
    }
    out
}

fn format_count(n: usize) -> String {
    if n == 0 {
        n.to_string().green().to_string()
    } else {
        n.to_string().red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryContent;
    use crate::graph::build_graph;
    use crate::types::RepoFile;

    #[test]
    fn impact_lists_every_section() {
        colored::control::set_override(false);
        let impact = ChangeImpact {
            file: "src/a.ts".into(),
            imported_by: vec!["src/b.ts".into()],
            affected_files: vec!["src/b.ts".into()],
            ..ChangeImpact::default()
        };
        let out = format_impact(&impact);
        assert!(out.contains("IMPACT src/a.ts | 1 affected | 0 tests"));
        assert!(out.contains("    src/b.ts"));
        assert_eq!(out.matches("none").count(), 3);
        assert!(!out.contains("isolated"));
    }

    #[test]
    fn isolated_file_is_flagged() {
        colored::control::set_override(false);
        let out = format_impact(&ChangeImpact::empty("src/orphan.ts"));
        assert!(out.contains("isolated: no imports, importers, or doc mentions"));
    }

    #[test]
    fn graph_summary_counts_languages() {
        let files = vec![
            RepoFile::file("src/main.rs", 1),
            RepoFile::file("src/lib.rs", 1),
            RepoFile::file("web/app.ts", 1),
            RepoFile::file("README.md", 1),
        ];
        let graph = build_graph(&files, &MemoryContent::new());
        colored::control::set_override(false);
        let out = format_graph_summary(&graph);
        assert!(out.starts_with("IMPORT GRAPH 4 files"));
        assert!(out.ends_with(" | ecmascript 1, rust 2"));
    }

    #[test]
    fn keys_are_numbered() {
        colored::control::set_override(false);
        let keys = KeyFileSet::new(vec!["src/index.ts".into(), "src/app.ts".into()]);
        let out = format_keys(&keys);
        assert!(out.contains(" 1. src/index.ts"));
        assert!(out.contains(" 2. src/app.ts"));
    }
}
