// src/file_class.rs
//! File classification: distinguishes source code from docs, config, and assets.
//!
//! Source files are ranking candidates and graph sources; documentation is
//! scanned textually for references; tests are recognized purely by path.

use crate::config::Conventions;
use crate::paths;

/// Classification of a repository file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Program text in a recognized language.
    SourceCode,
    /// TOML, YAML, JSON, INI — structured config.
    Config,
    /// HTML, CSS, SVG, images, bundled/minified artifacts.
    Asset,
    /// Markdown, reStructuredText, AsciiDoc.
    Docs,
    /// Lock files, binaries, anything else.
    Other,
}

impl FileKind {
    #[must_use]
    pub fn is_source(self) -> bool {
        matches!(self, Self::SourceCode)
    }
}

/// Classifies a repository path into a `FileKind`.
///
/// Decision order:
/// 1. Minified/bundled name pattern → `Asset`
/// 2. Extension lookup → specific kind
#[must_use]
pub fn classify(path: &str) -> FileKind {
    let name = paths::file_name(path).to_ascii_lowercase();
    if is_minified_artifact(&name) {
        return FileKind::Asset;
    }

    let ext = paths::extension(&name).unwrap_or("");
    classify_by_ext(ext)
}

/// Returns `true` for filenames that indicate a minified or bundled artifact.
fn is_minified_artifact(name: &str) -> bool {
    name.contains(".min.")
        || name.ends_with(".min")
        || name.ends_with(".bundle.js")
        || name.ends_with("-bundle.js")
        || name.ends_with(".d.ts")
}

fn classify_by_ext(ext: &str) -> FileKind {
    match ext {
        "rs" | "py" | "pyi" | "ts" | "tsx" | "js" | "jsx" | "mjs" | "cjs" | "mts" | "cts" | "go"
        | "java" | "kt" | "kts" | "scala" | "swift" | "c" | "h" | "cc" | "cpp" | "hpp" | "cs"
        | "rb" | "php" | "ex" | "exs" | "lua" | "sh" | "vue" | "svelte" => FileKind::SourceCode,

        "toml" | "yaml" | "yml" | "ini" | "cfg" | "env" | "properties" | "json" | "jsonc" => {
            FileKind::Config
        }

        "html" | "htm" | "xml" | "svg" | "css" | "scss" | "sass" | "less" | "png" | "jpg"
        | "jpeg" | "gif" | "ico" | "webp" | "woff" | "woff2" | "ttf" => FileKind::Asset,

        "md" | "mdx" | "rst" | "adoc" => FileKind::Docs,

        _ => FileKind::Other,
    }
}

/// Returns `true` if `path` follows a test-location convention:
/// a `.test.`/`.spec.` marker right before the extension, a test suffix such
/// as `_test.go`, or a parent directory named like `tests`.
#[must_use]
pub fn is_test_path(path: &str, conventions: &Conventions) -> bool {
    let name = paths::file_name(path);
    let stem = paths::file_stem(path);

    let marked = conventions
        .test_markers
        .iter()
        .any(|marker| stem.strip_suffix(marker.as_str()).is_some_and(|s| s.ends_with('.')));
    let suffixed = conventions.test_suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()));
    let in_test_dir = paths::parent_dir(path)
        .split('/')
        .any(|dir| conventions.test_dirs.iter().any(|t| t == dir));

    marked || suffixed || in_test_dir
}

/// Stem with any test marker or suffix removed: `util.test.ts` → `util`.
#[must_use]
pub fn subject_stem<'a>(path: &'a str, conventions: &Conventions) -> &'a str {
    let name = paths::file_name(path);
    for suffix in &conventions.test_suffixes {
        if let Some(base) = name.strip_suffix(suffix.as_str()) {
            return base;
        }
    }

    let stem = paths::file_stem(path);
    for marker in &conventions.test_markers {
        if let Some(base) = stem.strip_suffix(marker.as_str()).and_then(|s| s.strip_suffix('.')) {
            return base;
        }
    }
    stem
}

/// Returns `true` for documentation files whose text may mention other files:
/// doc-extension files under a documentation directory, and root-level
/// markdown other than generated output.
#[must_use]
pub fn is_doc_path(path: &str, conventions: &Conventions) -> bool {
    let dir = paths::parent_dir(path);
    let ext = paths::extension(path).map(str::to_ascii_lowercase);
    let ext = ext.as_deref().unwrap_or("");

    if dir.is_empty() {
        return ext == "md" && !conventions.generated_docs.iter().any(|g| g == path);
    }

    let under_docs = dir
        .split('/')
        .next()
        .is_some_and(|top| conventions.doc_dirs.iter().any(|d| d == top));
    under_docs && conventions.doc_extensions.iter().any(|e| e == ext)
}
