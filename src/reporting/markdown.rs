// src/reporting/markdown.rs
//! Markdown rendering of change impact records.
//!
//! Every section is always present, even when empty, and every list is cut
//! at [`RENDER_LIMIT`] items followed by a `... and N more` line.

use super::{more_marker, truncate, RENDER_LIMIT};
use crate::types::{ChangeImpact, KeyFileSet};

const EMPTY_MARKER: &str = "_None_";

/// Renders one titled list section.
#[must_use]
pub fn render_list<S: AsRef<str>>(title: &str, items: &[S]) -> String {
    let mut out = format!("### {title}\n\n");

    if items.is_empty() {
        out.push_str(EMPTY_MARKER);
        out.push('\n');
        return out;
    }

    let (shown, omitted) = truncate(items, RENDER_LIMIT);
    for item in shown {
        out.push_str(&format!("- `{}`\n", item.as_ref()));
    }
    if omitted > 0 {
        out.push_str(&format!("- {}\n", more_marker(omitted)));
    }
    out
}

/// Renders the impact record for one file.
#[must_use]
pub fn render_impact(impact: &ChangeImpact) -> String {
    let sections = [
        ("Imports", &impact.imports),
        ("Imported by", &impact.imported_by),
        ("Affected files", &impact.affected_files),
        ("Affected tests", &impact.affected_tests),
        ("Affected docs", &impact.affected_docs),
    ];

    let mut out = format!("## Change impact: `{}`\n", impact.file);
    for (title, items) in sections {
        out.push('\n');
        out.push_str(&render_list(title, items));
    }
    out
}

/// Renders a full report: the key files followed by each impact record.
#[must_use]
pub fn render_report(keys: &KeyFileSet, impacts: &[ChangeImpact]) -> String {
    let mut out = String::from("# Change Impact\n\n");
    out.push_str(&render_list("Key files", keys.files()));

    for impact in impacts {
        out.push('\n');
        out.push_str(&render_impact(impact));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sections_are_present() {
        let out = render_impact(&ChangeImpact::empty("src/a.ts"));
        for title in ["Imports", "Imported by", "Affected files", "Affected tests", "Affected docs"] {
            assert!(out.contains(&format!("### {title}")), "missing {title}");
        }
        assert_eq!(out.matches(EMPTY_MARKER).count(), 5);
    }

    #[test]
    fn long_lists_are_truncated() {
        let items: Vec<String> = (0..20).map(|i| format!("src/f{i}.ts")).collect();
        let out = render_list("Imports", &items);
        assert_eq!(out.matches("- `").count(), 10);
        assert!(out.contains("`src/f9.ts`"));
        assert!(!out.contains("`src/f10.ts`"));
        assert!(out.ends_with("- ... and 10 more\n"));
    }

    #[test]
    fn exact_limit_has_no_marker() {
        let items: Vec<String> = (0..10).map(|i| format!("f{i}")).collect();
        assert!(!render_list("Imports", &items).contains("more"));
    }
}
