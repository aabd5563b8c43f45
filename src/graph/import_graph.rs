// src/graph/import_graph.rs
//! The immutable file-level import graph.
//!
//! Paths are interned once into a sorted arena; both edge directions are
//! adjacency lists of arena indices.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Index of a file in the graph arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    paths: Vec<String>,
    ids: HashMap<String, NodeId>,
    imports: Vec<Vec<NodeId>>,
    imported_by: Vec<Vec<NodeId>>,
    sources: usize,
}

/// Path-keyed view of both edge maps, ordered for stable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot {
    pub imports: BTreeMap<String, Vec<String>>,
    pub imported_by: BTreeMap<String, Vec<String>>,
}

impl ImportGraph {
    /// Assembles a graph from sorted, unique `paths` and per-node forward edges.
    ///
    /// Forward lists are sorted and deduplicated, self edges dropped, and the
    /// reverse lists derived in a single pass.
    pub(crate) fn assemble(paths: Vec<String>, mut imports: Vec<Vec<NodeId>>, sources: usize) -> Self {
        imports.resize_with(paths.len(), Vec::new);

        for (from, targets) in imports.iter_mut().enumerate() {
            targets.retain(|to| *to != from && *to < paths.len());
            targets.sort_unstable();
            targets.dedup();
        }

        let mut imported_by: Vec<Vec<NodeId>> = vec![Vec::new(); paths.len()];
        for (from, targets) in imports.iter().enumerate() {
            for &to in targets {
                imported_by[to].push(from);
            }
        }

        let ids = paths
            .iter()
            .enumerate()
            .map(|(id, path)| (path.clone(), id))
            .collect();

        Self { paths, ids, imports, imported_by, sources }
    }

    /// Number of known files (nodes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of files that were parsed for imports.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.sources
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.imports.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn node_id(&self, path: &str) -> Option<NodeId> {
        self.ids.get(path).copied()
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.ids.contains_key(path)
    }

    /// Path of a node. Panics on an id not issued by this graph.
    #[must_use]
    pub fn path(&self, id: NodeId) -> &str {
        &self.paths[id]
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Forward neighbors of `id`, ascending.
    #[must_use]
    pub fn import_ids(&self, id: NodeId) -> &[NodeId] {
        self.imports.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Reverse neighbors of `id`, ascending.
    #[must_use]
    pub fn importer_ids(&self, id: NodeId) -> &[NodeId] {
        self.imported_by.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Files `path` imports directly. Empty for unknown paths.
    #[must_use]
    pub fn imports_of(&self, path: &str) -> Vec<&str> {
        self.node_id(path)
            .map(|id| self.resolve_ids(self.import_ids(id)))
            .unwrap_or_default()
    }

    /// Files that import `path` directly. Empty for unknown paths.
    #[must_use]
    pub fn imported_by_of(&self, path: &str) -> Vec<&str> {
        self.node_id(path)
            .map(|id| self.resolve_ids(self.importer_ids(id)))
            .unwrap_or_default()
    }

    fn resolve_ids(&self, ids: &[NodeId]) -> Vec<&str> {
        ids.iter().map(|&id| self.path(id)).collect()
    }

    /// Returns true if every forward edge has its reverse twin and vice versa,
    /// and no node references itself.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let forward_ok = self.imports.iter().enumerate().all(|(from, targets)| {
            targets
                .iter()
                .all(|&to| to != from && self.imported_by[to].binary_search(&from).is_ok())
        });
        let reverse_ok = self.imported_by.iter().enumerate().all(|(to, sources)| {
            sources
                .iter()
                .all(|&from| from != to && self.imports[from].binary_search(&to).is_ok())
        });
        forward_ok && reverse_ok
    }

    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        let map = |lists: &[Vec<NodeId>]| {
            self.paths
                .iter()
                .zip(lists)
                .map(|(path, ids)| {
                    let targets: Vec<String> = ids.iter().map(|&id| self.paths[id].clone()).collect();
                    (path.clone(), targets)
                })
                .collect::<BTreeMap<_, _>>()
        };
        GraphSnapshot {
            imports: map(&self.imports),
            imported_by: map(&self.imported_by),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(paths: &[&str], imports: Vec<Vec<NodeId>>) -> ImportGraph {
        ImportGraph::assemble(paths.iter().map(|p| (*p).to_string()).collect(), imports, paths.len())
    }

    #[test]
    fn reverse_edges_are_derived() {
        let g = graph(&["a.ts", "b.ts", "c.ts"], vec![vec![], vec![0], vec![0, 1]]);
        assert_eq!(g.imported_by_of("a.ts"), vec!["b.ts", "c.ts"]);
        assert_eq!(g.imports_of("c.ts"), vec!["a.ts", "b.ts"]);
        assert_eq!(g.edge_count(), 3);
        assert!(g.is_consistent());
    }

    #[test]
    fn self_and_duplicate_edges_are_dropped() {
        let g = graph(&["a.ts", "b.ts"], vec![vec![0, 1, 1], vec![]]);
        assert_eq!(g.imports_of("a.ts"), vec!["b.ts"]);
        assert!(g.imported_by_of("a.ts").is_empty());
        assert!(g.is_consistent());
    }

    #[test]
    fn unknown_paths_have_no_edges() {
        let g = graph(&["a.ts"], vec![]);
        assert!(g.imports_of("missing.ts").is_empty());
        assert!(g.imported_by_of("missing.ts").is_empty());
        assert_eq!(g.len(), 1);
    }
}
