// src/graph/imports.rs
use crate::lang::Lang;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Extracts raw import specifiers from the given file content.
///
/// # Arguments
/// * `lang` - Language whose recognizer to run.
/// * `content` - Source code.
///
/// # Returns
/// Literal specifiers in source order, duplicates removed
/// (e.g., "./utils", "react", "crate::config::Config", "..pkg.mod").
#[must_use]
pub fn extract(lang: Lang, content: &str) -> Vec<String> {
    let found = match lang {
        Lang::EcmaScript => ecmascript(content),
        Lang::Python => python(content),
        Lang::Go => go(content),
        Lang::Rust => rust(content),
    };
    dedup_in_order(found)
}

/// Like [`extract`], detecting the language from the path's extension.
/// Unsupported extensions yield no specifiers.
#[must_use]
pub fn extract_path(path: &str, content: &str) -> Vec<String> {
    Lang::from_path(path).map_or_else(Vec::new, |lang| extract(lang, content))
}

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("Invalid import pattern: {e}"),
    }
}

// Newlines are only crossed inside a `{ ... }` specifier list.
static ES_FROM: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"\b(?:import|export)\b(?:[^'"`;{}\n]|\{[^{}'"`;]*\})*?\bfrom\s*['"]([^'"\n]+)['"]"#)
});
static ES_BARE: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?m)^[ \t]*import\s*['"]([^'"\n]+)['"]"#));
static ES_CALL: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"\b(?:require|import)\s*\(\s*['"]([^'"\n]+)['"]\s*\)"#));

static PY_FROM: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?m)^[ \t]*from[ \t]+(\.*[\w.]*)[ \t]+import[ \t]+(\([^)]*\)|[^\n#;]+)")
});
static PY_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^[ \t]*import[ \t]+([^\n#;]+)"));

static GO_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?m)^[ \t]*import[ \t]+(?:[\w.]+[ \t]+)?["`]([^"`\n]+)["`]"#));
static GO_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?ms)^[ \t]*import[ \t]*\((.*?)\)"));
static GO_SPEC: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?m)^[ \t]*(?:[\w.]+[ \t]+)?["`]([^"`\n]+)["`]"#));

static RS_USE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?m)^[ \t]*(?:pub(?:\([^)]*\))?[ \t]+)?use[ \t]+([^;]+);"));
static RS_MOD: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?m)^[ \t]*(?:#\[[^\]]*\][ \t]*)*(?:pub(?:\([^)]*\))?[ \t]+)?mod[ \t]+(\w+)[ \t]*;")
});
static RS_ALIAS: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+as\s+\w+"));

type Found = Vec<(usize, String)>;

fn ecmascript(content: &str) -> Found {
    let mut found = Found::new();
    for re in [&*ES_FROM, &*ES_BARE, &*ES_CALL] {
        for cap in re.captures_iter(content) {
            let (Some(whole), Some(spec)) = (cap.get(0), cap.get(1)) else {
                continue;
            };
            let commented = [whole.start(), spec.start()]
                .into_iter()
                .any(|offset| in_line_comment(content, offset, &["//", "/*", "*"]));
            if !commented {
                found.push((whole.start(), spec.as_str().to_string()));
            }
        }
    }
    found
}

fn python(content: &str) -> Found {
    let mut found = Found::new();

    for cap in PY_FROM.captures_iter(content) {
        let (Some(module), Some(names)) = (cap.get(1), cap.get(2)) else {
            continue;
        };
        let module_str = module.as_str();
        if module_str.is_empty() {
            continue;
        }
        // `from . import x` names sibling modules, not symbols of a package.
        if module_str.chars().all(|c| c == '.') {
            for name in python_names(names.as_str()) {
                found.push((module.start(), format!("{module_str}{name}")));
            }
        } else {
            found.push((module.start(), module_str.to_string()));
        }
    }

    for cap in PY_IMPORT.captures_iter(content) {
        let Some(list) = cap.get(1) else { continue };
        for name in python_names(list.as_str()) {
            found.push((list.start(), name.to_string()));
        }
    }

    found
}

/// Splits `a, b as c` or `(a, b)` into bare names.
fn python_names(list: &str) -> Vec<&str> {
    list.trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split(',')
        .filter_map(|item| item.split_whitespace().next())
        .filter(|name| *name != "*" && *name != "\\")
        .collect()
}

fn go(content: &str) -> Found {
    let mut found = Found::new();

    for cap in GO_SINGLE.captures_iter(content) {
        if let Some(spec) = cap.get(1) {
            found.push((spec.start(), spec.as_str().to_string()));
        }
    }

    for block in GO_BLOCK.captures_iter(content) {
        let Some(body) = block.get(1) else { continue };
        for cap in GO_SPEC.captures_iter(body.as_str()) {
            if let Some(spec) = cap.get(1) {
                found.push((body.start() + spec.start(), spec.as_str().to_string()));
            }
        }
    }

    found
}

fn rust(content: &str) -> Found {
    let mut found = Found::new();

    for cap in RS_USE.captures_iter(content) {
        let Some(tree) = cap.get(1) else { continue };
        for path in expand_use_tree(tree.as_str()) {
            found.push((tree.start(), path));
        }
    }

    for cap in RS_MOD.captures_iter(content) {
        if let Some(name) = cap.get(1) {
            found.push((name.start(), name.as_str().to_string()));
        }
    }

    found
}

/// Flattens a `use` tree such as `crate::{a, b::{c, d as e}}` into leaf paths.
fn expand_use_tree(tree: &str) -> Vec<String> {
    let without_alias = RS_ALIAS.replace_all(tree, "");
    let compact: String = without_alias.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = Vec::new();
    expand_into("", compact.trim_start_matches("::"), &mut out);
    out
}

fn expand_into(prefix: &str, tree: &str, out: &mut Vec<String>) {
    let Some(open) = tree.find('{') else {
        push_leaf(prefix, tree, out);
        return;
    };
    let Some(close) = tree.rfind('}') else {
        return;
    };
    if close < open {
        return;
    }

    let next_prefix = format!("{prefix}{}", &tree[..open]);
    for item in split_top_level(&tree[open + 1..close]) {
        expand_into(&next_prefix, item, out);
    }
}

fn push_leaf(prefix: &str, leaf: &str, out: &mut Vec<String>) {
    let full = format!("{prefix}{leaf}");
    let path = full
        .trim_end_matches("::*")
        .trim_end_matches("::self")
        .trim_end_matches("::");
    if !path.is_empty() && path != "self" {
        out.push(path.to_string());
    }
}

fn split_top_level(list: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&list[start..]);
    items.into_iter().filter(|s| !s.is_empty()).collect()
}

fn in_line_comment(content: &str, offset: usize, markers: &[&str]) -> bool {
    let line_start = content[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line = content[line_start..].trim_start();
    markers.iter().any(|m| line.starts_with(m))
}

fn dedup_in_order(mut found: Found) -> Vec<String> {
    found.sort_by_key(|(offset, _)| *offset);
    let mut seen = HashSet::new();
    found
        .into_iter()
        .filter(|(_, spec)| seen.insert(spec.clone()))
        .map(|(_, spec)| spec)
        .collect()
}
