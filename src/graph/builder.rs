// src/graph/builder.rs
//! Graph construction: extraction and edge building.

use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use super::import_graph::{ImportGraph, NodeId};
use super::imports;
use super::resolver::{self, FileIndex};
use crate::content::ContentSource;
use crate::lang::Lang;
use crate::paths;
use crate::types::RepoFile;

/// Builds an [`ImportGraph`] from a repository listing.
pub struct GraphBuilder {
    paths: Vec<String>,
    index: FileIndex,
}

/// Edges discovered in one source file.
struct FileEdges {
    from: NodeId,
    targets: Vec<NodeId>,
    readable: bool,
}

impl GraphBuilder {
    /// Interns every non-directory path of `files` in sorted order.
    #[must_use]
    pub fn new(files: &[RepoFile]) -> Self {
        let paths: Vec<String> = files
            .iter()
            .filter(|f| !f.is_dir)
            .map(|f| paths::normalize(&f.path))
            .filter(|p| !p.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index = FileIndex::new(paths.iter().cloned());
        Self { paths, index }
    }

    /// Reads, extracts, and resolves every source file, then merges once.
    ///
    /// Files whose content is unavailable contribute no edges.
    #[must_use]
    pub fn build<C: ContentSource + ?Sized>(&self, contents: &C) -> ImportGraph {
        let ids: HashMap<&str, NodeId> = self
            .paths
            .iter()
            .enumerate()
            .map(|(id, path)| (path.as_str(), id))
            .collect();

        let sources: Vec<(NodeId, &str, Lang)> = self
            .paths
            .iter()
            .enumerate()
            .filter_map(|(id, path)| Lang::from_path(path).map(|lang| (id, path.as_str(), lang)))
            .collect();

        let per_file: Vec<FileEdges> = sources
            .par_iter()
            .map(|&(from, path, lang)| self.collect_file_edges(from, path, lang, contents, &ids))
            .collect();

        let mut forward: Vec<Vec<NodeId>> = vec![Vec::new(); self.paths.len()];
        let mut skipped = 0usize;
        for edges in per_file {
            if !edges.readable {
                skipped += 1;
            }
            forward[edges.from] = edges.targets;
        }

        let graph = ImportGraph::assemble(self.paths.clone(), forward, sources.len());
        debug!(
            nodes = graph.len(),
            sources = graph.source_count(),
            edges = graph.edge_count(),
            skipped,
            "import graph built"
        );
        graph
    }

    fn collect_file_edges<C: ContentSource + ?Sized>(
        &self,
        from: NodeId,
        path: &str,
        lang: Lang,
        contents: &C,
        ids: &HashMap<&str, NodeId>,
    ) -> FileEdges {
        let Some(content) = contents.read(path) else {
            debug!(path, "skipping unreadable file");
            return FileEdges { from, targets: Vec::new(), readable: false };
        };

        let targets = imports::extract(lang, &content)
            .iter()
            .filter_map(|spec| resolver::resolve(spec, path, &self.index))
            .filter_map(|target| ids.get(target.as_str()).copied())
            .collect();

        FileEdges { from, targets, readable: true }
    }
}

/// Builds the import graph for `files` in one call.
#[must_use]
pub fn build_graph<C: ContentSource + ?Sized>(files: &[RepoFile], contents: &C) -> ImportGraph {
    GraphBuilder::new(files).build(contents)
}
