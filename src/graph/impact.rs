// src/graph/impact.rs
//! Change impact propagation over reverse import edges.

use rayon::prelude::*;
use std::collections::{HashSet, VecDeque};

use super::import_graph::{ImportGraph, NodeId};
use crate::config::Conventions;
use crate::content::ContentSource;
use crate::file_class;
use crate::paths;
use crate::types::{ChangeImpact, RepoFile};

/// Everything needed to answer impact queries for one repository snapshot.
pub struct ImpactAnalyzer<'a, C: ContentSource + ?Sized> {
    graph: &'a ImportGraph,
    files: &'a [RepoFile],
    contents: &'a C,
    conventions: &'a Conventions,
}

impl<'a, C: ContentSource + ?Sized> ImpactAnalyzer<'a, C> {
    #[must_use]
    pub fn new(
        graph: &'a ImportGraph,
        files: &'a [RepoFile],
        contents: &'a C,
        conventions: &'a Conventions,
    ) -> Self {
        Self { graph, files, contents, conventions }
    }

    /// Computes the impact record for one file.
    #[must_use]
    pub fn analyze(&self, file: &str) -> ChangeImpact {
        compute_impact(file, self.graph, self.files, self.contents, self.conventions)
    }

    /// Computes impact records for many files in parallel, in input order.
    #[must_use]
    pub fn analyze_all<S: AsRef<str> + Sync>(&self, files: &[S]) -> Vec<ChangeImpact> {
        files.par_iter().map(|f| self.analyze(f.as_ref())).collect()
    }
}

/// Computes what is affected when `file` changes.
///
/// Unknown files yield [`ChangeImpact::empty`].
#[must_use]
pub fn compute_impact<C: ContentSource + ?Sized>(
    file: &str,
    graph: &ImportGraph,
    files: &[RepoFile],
    contents: &C,
    conventions: &Conventions,
) -> ChangeImpact {
    let seed = paths::normalize(file);
    let Some(id) = graph.node_id(&seed) else {
        return ChangeImpact::empty(seed);
    };

    let affected_files = collect_dependents(graph, id);
    let affected_tests = affected_tests(&seed, &affected_files, files, conventions);
    let affected_docs = affected_docs(&seed, files, contents, conventions);

    ChangeImpact {
        imports: owned(graph.imports_of(&seed)),
        imported_by: owned(graph.imported_by_of(&seed)),
        affected_files,
        affected_tests,
        affected_docs,
        file: seed,
    }
}

fn owned(paths: Vec<&str>) -> Vec<String> {
    paths.into_iter().map(str::to_string).collect()
}

/// Breadth-first walk over reverse edges; closest dependents first.
///
/// The seed is pre-visited so cycles back to it neither loop nor list it.
#[must_use]
pub fn collect_dependents(graph: &ImportGraph, seed: NodeId) -> Vec<String> {
    let mut visited: HashSet<NodeId> = HashSet::from([seed]);
    let mut queue: VecDeque<NodeId> = VecDeque::from([seed]);
    let mut order = Vec::new();

    while let Some(current) = queue.pop_front() {
        for &dependent in graph.importer_ids(current) {
            if visited.insert(dependent) {
                order.push(graph.path(dependent).to_string());
                queue.push_back(dependent);
            }
        }
    }

    order
}

fn affected_tests(
    seed: &str,
    affected: &[String],
    files: &[RepoFile],
    conventions: &Conventions,
) -> Vec<String> {
    let transitive: Vec<String> = affected
        .iter()
        .filter(|p| file_class::is_test_path(p, conventions))
        .cloned()
        .collect();
    if !transitive.is_empty() {
        return transitive;
    }

    // Nothing imports the seed from a test; fall back to tests named after it.
    let subject = file_class::subject_stem(seed, conventions);
    files
        .iter()
        .filter(|f| !f.is_dir)
        .map(|f| paths::normalize(&f.path))
        .filter(|path| path != seed && file_class::is_test_path(path, conventions))
        .filter(|path| file_class::subject_stem(path, conventions) == subject)
        .collect()
}

fn affected_docs<C: ContentSource + ?Sized>(
    seed: &str,
    files: &[RepoFile],
    contents: &C,
    conventions: &Conventions,
) -> Vec<String> {
    files
        .iter()
        .filter(|f| !f.is_dir)
        .map(|f| (paths::normalize(&f.path), f))
        .filter(|(path, _)| path != seed && file_class::is_doc_path(path, conventions))
        .filter(|(_, f)| contents.read(&f.path).is_some_and(|text| text.contains(seed)))
        .map(|(path, _)| path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryContent;
    use crate::graph::build_graph;

    fn chain() -> (Vec<RepoFile>, MemoryContent) {
        let files = vec![
            RepoFile::file("src/a.ts", 1),
            RepoFile::file("src/b.ts", 1),
            RepoFile::file("src/c.ts", 1),
        ];
        let contents = MemoryContent::new()
            .with("src/a.ts", "export const a = 1;")
            .with("src/b.ts", "import { a } from './a';")
            .with("src/c.ts", "import { b } from './b';");
        (files, contents)
    }

    #[test]
    fn chain_is_discovered_closest_first() {
        let (files, contents) = chain();
        let graph = build_graph(&files, &contents);
        let conventions = Conventions::default();
        let impact = compute_impact("src/a.ts", &graph, &files, &contents, &conventions);
        assert_eq!(impact.affected_files, vec!["src/b.ts", "src/c.ts"]);
        assert_eq!(impact.imported_by, vec!["src/b.ts"]);
        assert!(impact.imports.is_empty());
    }

    #[test]
    fn seed_path_is_normalized() {
        let (files, contents) = chain();
        let graph = build_graph(&files, &contents);
        let impact = compute_impact("./src/b.ts", &graph, &files, &contents, &Conventions::default());
        assert_eq!(impact.file, "src/b.ts");
        assert_eq!(impact.imports, vec!["src/a.ts"]);
    }

    #[test]
    fn unknown_seed_is_empty() {
        let (files, contents) = chain();
        let graph = build_graph(&files, &contents);
        let impact = compute_impact("src/zzz.ts", &graph, &files, &contents, &Conventions::default());
        assert_eq!(impact, ChangeImpact::empty("src/zzz.ts"));
    }

    #[test]
    fn dot_prefixed_listing_never_lists_seed() {
        let files = vec![
            RepoFile::file("./README.md", 1),
            RepoFile::file("./spec/util.spec.ts", 1),
            RepoFile::file("./src/util.ts", 1),
            RepoFile::file("./tests/util.test.ts", 1),
        ];
        let contents = MemoryContent::new().with("./README.md", "Run tests/util.test.ts first.");
        let graph = build_graph(&files, &contents);
        let impact = compute_impact("tests/util.test.ts", &graph, &files, &contents, &Conventions::default());
        assert_eq!(impact.affected_tests, vec!["spec/util.spec.ts"]);
        assert_eq!(impact.affected_docs, vec!["README.md"]);
    }
}
