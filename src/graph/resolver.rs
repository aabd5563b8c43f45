// src/graph/resolver.rs
use crate::lang::Lang;
use crate::paths;
use std::collections::HashSet;

/// The set of known, non-directory repository paths.
#[derive(Debug, Clone, Default)]
pub struct FileIndex {
    paths: HashSet<String>,
}

impl FileIndex {
    pub fn new<I: IntoIterator<Item = String>>(paths: I) -> Self {
        Self { paths: paths.into_iter().collect() }
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Resolves an import specifier to a known repository file.
///
/// Returns `None` when the specifier names nothing in `known`, including
/// third-party packages and the importer itself.
#[must_use]
pub fn resolve(specifier: &str, importer: &str, known: &FileIndex) -> Option<String> {
    if specifier.is_empty() {
        return None;
    }
    let lang = Lang::from_path(importer)?;

    let resolved = match lang {
        Lang::EcmaScript => resolve_ecmascript(specifier, importer, known),
        Lang::Python => resolve_python(specifier, importer, known),
        Lang::Go => resolve_go(specifier, importer, known),
        Lang::Rust => resolve_rust(specifier, importer, known),
    }?;

    (resolved != importer).then_some(resolved)
}

fn is_relative(specifier: &str) -> bool {
    specifier == "." || specifier == ".." || specifier.starts_with("./") || specifier.starts_with("../")
}

/// Tries `candidate` verbatim, then with extensions appended, then as a directory.
fn probe(candidate: &str, importer: &str, lang: Lang, known: &FileIndex) -> Option<String> {
    if !candidate.is_empty() && known.contains(candidate) {
        return Some(candidate.to_string());
    }

    let own = paths::extension(importer);
    let extensions = own
        .into_iter()
        .chain(lang.probe_extensions().iter().copied().filter(|e| Some(*e) != own));

    if !candidate.is_empty() {
        for ext in extensions {
            let path = format!("{candidate}.{ext}");
            if known.contains(&path) {
                return Some(path);
            }
        }
    }

    lang.index_files()
        .iter()
        .map(|index| paths::join(candidate, index))
        .find(|path| known.contains(path))
}

fn resolve_ecmascript(specifier: &str, importer: &str, known: &FileIndex) -> Option<String> {
    if is_relative(specifier) {
        let joined = paths::resolve_relative(paths::parent_dir(importer), specifier)?;
        return probe(&joined, importer, Lang::EcmaScript, known);
    }
    if let Some(rooted) = specifier.strip_prefix('/') {
        return probe(rooted, importer, Lang::EcmaScript, known);
    }
    if known.contains(specifier) {
        return Some(specifier.to_string());
    }
    if is_node_module(specifier) {
        return None;
    }
    probe(specifier, importer, Lang::EcmaScript, known)
}

/// Heuristic: bare specifiers without path separators are likely `node_modules`.
fn is_node_module(specifier: &str) -> bool {
    if specifier.starts_with('@') {
        return specifier.splitn(3, '/').count() <= 2;
    }
    !specifier.contains('/')
}

fn resolve_python(specifier: &str, importer: &str, known: &FileIndex) -> Option<String> {
    let dots = specifier.chars().take_while(|c| *c == '.').count();
    let module_path = specifier[dots..].replace('.', "/");

    if dots > 0 {
        let mut base = paths::parent_dir(importer);
        for _ in 1..dots {
            if base.is_empty() {
                return None;
            }
            base = paths::parent_dir(base);
        }
        return probe(&paths::join(base, &module_path), importer, Lang::Python, known);
    }

    // Absolute imports resolve from the root; scripts also import siblings directly.
    probe(&module_path, importer, Lang::Python, known).or_else(|| {
        let sibling = paths::join(paths::parent_dir(importer), &module_path);
        probe(&sibling, importer, Lang::Python, known)
    })
}

fn resolve_go(specifier: &str, importer: &str, known: &FileIndex) -> Option<String> {
    if is_relative(specifier) {
        let joined = paths::resolve_relative(paths::parent_dir(importer), specifier)?;
        if joined.is_empty() {
            return None;
        }
        return probe(&joined, importer, Lang::Go, known);
    }
    // Package import paths address directories, not files.
    known.contains(specifier).then(|| specifier.to_string())
}

fn resolve_rust(specifier: &str, importer: &str, known: &FileIndex) -> Option<String> {
    let parts: Vec<&str> = specifier.split("::").filter(|p| !p.is_empty()).collect();

    match parts.as_slice() {
        ["crate", rest @ ..] => {
            let src = crate_src_dir(importer);
            probe_rust_module(&src, rest, known).or_else(|| crate_root(&src, known))
        }
        ["self", rest @ ..] => probe_rust_module(&module_dir(importer), rest, known),
        ["super", ..] => resolve_super_path(importer, &parts, known),
        [single] => probe_rust_module(&module_dir(importer), &[*single], known),
        _ => None,
    }
}

fn resolve_super_path(importer: &str, parts: &[&str], known: &FileIndex) -> Option<String> {
    let mut dir = module_dir(importer);
    let mut rest = parts;

    while let Some((&"super", tail)) = rest.split_first() {
        if dir.is_empty() {
            return None;
        }
        dir = paths::parent_dir(&dir).to_string();
        rest = tail;
    }

    if rest.is_empty() {
        return None;
    }
    probe_rust_module(&dir, rest, known)
}

/// Longest module prefix of `parts` under `base` that exists as `<p>.rs` or `<p>/mod.rs`.
fn probe_rust_module(base: &str, parts: &[&str], known: &FileIndex) -> Option<String> {
    (1..=parts.len()).rev().find_map(|len| {
        let candidate = paths::join(base, &parts[..len].join("/"));
        let file = format!("{candidate}.rs");
        if known.contains(&file) {
            return Some(file);
        }
        let module = paths::join(&candidate, "mod.rs");
        known.contains(&module).then_some(module)
    })
}

fn crate_root(src: &str, known: &FileIndex) -> Option<String> {
    ["lib.rs", "main.rs"]
        .iter()
        .map(|root| paths::join(src, root))
        .find(|path| known.contains(path))
}

/// Nearest ancestor directory named `src`, or the repository root.
fn crate_src_dir(importer: &str) -> String {
    let dirs: Vec<&str> = paths::parent_dir(importer).split('/').collect();
    dirs.iter()
        .rposition(|d| *d == "src")
        .map_or_else(String::new, |i| dirs[..=i].join("/"))
}

/// Directory holding the child modules of the importing file.
fn module_dir(importer: &str) -> String {
    let dir = paths::parent_dir(importer);
    match paths::file_stem(importer) {
        "lib" | "main" | "mod" => dir.to_string(),
        stem => paths::join(dir, stem),
    }
}
