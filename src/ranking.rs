// src/ranking.rs
//! Key file selection: likely entry points, picked from the listing alone.

use std::cmp::Ordering;

use crate::config::Conventions;
use crate::file_class;
use crate::paths;
use crate::types::{KeyFileSet, RepoFile};

const PRIORITY_SCALE: usize = 100;
const BASELINE_SCORE: usize = 1;

/// Scores and selects entry-point candidates.
pub struct KeyFileRanker<'a> {
    conventions: &'a Conventions,
}

impl<'a> KeyFileRanker<'a> {
    #[must_use]
    pub fn new(conventions: &'a Conventions) -> Self {
        Self { conventions }
    }

    /// Returns up to the key file limit of source files, best first.
    ///
    /// Ties are broken by shorter path, then lexical order, so the result is
    /// stable for a given listing.
    #[must_use]
    pub fn rank(&self, files: &[RepoFile]) -> KeyFileSet {
        let mut scored: Vec<(usize, &str)> = files
            .iter()
            .filter(|f| !f.is_dir)
            .filter(|f| file_class::classify(&f.path).is_source())
            .map(|f| (self.score(&f.path), f.path.as_str()))
            .collect();

        scored.sort_by(|a, b| compare(*a, *b));
        scored.dedup_by(|a, b| a.1 == b.1);

        let files = scored
            .into_iter()
            .take(self.conventions.key_file_limit())
            .map(|(_, path)| path.to_string())
            .collect();
        KeyFileSet::new(files)
    }

    /// Priority names score by list position, divided by path depth so that
    /// root-level entry points beat nested ones. A priority name always scores
    /// above the baseline, however deep.
    #[must_use]
    pub fn score(&self, path: &str) -> usize {
        let stem = paths::file_stem(path);
        let names = &self.conventions.priority_names;
        names
            .iter()
            .position(|name| name == stem)
            .map_or(BASELINE_SCORE, |pos| {
                let scaled = (names.len() - pos) * PRIORITY_SCALE / paths::depth(path).max(1);
                scaled.max(BASELINE_SCORE + 1)
            })
    }
}

fn compare(a: (usize, &str), b: (usize, &str)) -> Ordering {
    b.0.cmp(&a.0)
        .then_with(|| a.1.len().cmp(&b.1.len()))
        .then_with(|| a.1.cmp(b.1))
}

/// Ranks key files with the default conventions.
#[must_use]
pub fn rank_key_files(files: &[RepoFile]) -> KeyFileSet {
    KeyFileRanker::new(&Conventions::default()).rank(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_beats_baseline() {
        let files = vec![
            RepoFile::file("lib/helper.ts", 10),
            RepoFile::file("src/utils.ts", 10),
            RepoFile::file("src/app.ts", 10),
            RepoFile::file("src/index.ts", 10),
        ];
        let keys = rank_key_files(&files);
        assert_eq!(
            keys.files(),
            &["src/index.ts", "src/app.ts", "src/utils.ts", "lib/helper.ts"]
        );
    }

    #[test]
    fn root_level_beats_nested() {
        let c = Conventions::default();
        let ranker = KeyFileRanker::new(&c);
        assert!(ranker.score("main.go") > ranker.score("cmd/server/main.go"));
        assert!(ranker.score("src/cli.rs") > ranker.score("src/other.rs"));
    }

    #[test]
    fn non_source_and_dirs_excluded() {
        let files = vec![
            RepoFile::dir("src"),
            RepoFile::file("index.html", 1),
            RepoFile::file("package.json", 1),
            RepoFile::file("README.md", 1),
        ];
        assert!(rank_key_files(&files).is_empty());
    }
}
