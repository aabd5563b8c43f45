// src/paths.rs
//! Helpers for POSIX-style repository paths held as strings.
//!
//! The engine keys everything by relative path strings, so these helpers
//! never touch the filesystem.

/// Normalizes a user- or OS-supplied path: forward slashes, no leading `./`,
/// no trailing slash.
#[must_use]
pub fn normalize(path: &str) -> String {
    let forward = path.replace('\\', "/");
    let mut trimmed = forward.as_str();
    while let Some(rest) = trimmed.strip_prefix("./") {
        trimmed = rest;
    }
    trimmed.trim_end_matches('/').to_string()
}

/// Directory part of a path, or `""` for root-level files.
#[must_use]
pub fn parent_dir(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(dir, _)| dir)
}

#[must_use]
pub fn file_name(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}

/// File name without its final extension.
#[must_use]
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

#[must_use]
pub fn extension(path: &str) -> Option<&str> {
    let name = file_name(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// Joins two path fragments, treating `""` as the repository root.
#[must_use]
pub fn join(base: &str, rest: &str) -> String {
    match (base.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{rest}"),
    }
}

/// Resolves `rel` against directory `base`, folding `.` and `..`.
/// Returns `None` if the result would escape the repository root.
#[must_use]
pub fn resolve_relative(base: &str, rel: &str) -> Option<String> {
    let mut stack: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    for segment in rel.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop()?;
            }
            other => stack.push(other),
        }
    }
    Some(stack.join("/"))
}

/// Number of `/`-separated segments, i.e. 1 for a root-level file.
#[must_use]
pub fn depth(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_noise() {
        assert_eq!(normalize("./src/a.ts"), "src/a.ts");
        assert_eq!(normalize("src\\lib\\b.rs"), "src/lib/b.rs");
        assert_eq!(normalize("docs/"), "docs");
    }

    #[test]
    fn relative_resolution_folds_dots() {
        assert_eq!(resolve_relative("src/app", "../lib/x").as_deref(), Some("src/lib/x"));
        assert_eq!(resolve_relative("src", "./y").as_deref(), Some("src/y"));
        assert_eq!(resolve_relative("", "../escape"), None);
    }

    #[test]
    fn name_parts() {
        assert_eq!(file_stem("src/foo.test.ts"), "foo.test");
        assert_eq!(extension("src/foo.test.ts"), Some("ts"));
        assert_eq!(extension(".gitignore"), None);
        assert_eq!(file_stem(".gitignore"), ".gitignore");
        assert_eq!(parent_dir("main.go"), "");
        assert_eq!(depth("src/index.ts"), 2);
    }
}
