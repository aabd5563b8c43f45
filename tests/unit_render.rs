// tests/unit_render.rs
//! Tests for the markdown impact report contract.

use impactmap_core::reporting::markdown::{render_impact, render_report};
use impactmap_core::{ChangeImpact, KeyFileSet};

#[test]
fn test_twenty_imports_truncate_to_ten() {
    let impact = ChangeImpact {
        file: "src/hub.ts".into(),
        imports: (0..20).map(|i| format!("src/dep{i}.ts")).collect(),
        ..ChangeImpact::default()
    };
    let out = render_impact(&impact);

    let imports_section = out
        .split("### Imported by")
        .next()
        .unwrap();
    assert_eq!(imports_section.matches("- `src/dep").count(), 10);
    assert!(imports_section.contains("- `src/dep0.ts`"));
    assert!(imports_section.contains("- `src/dep9.ts`"));
    assert!(!imports_section.contains("src/dep10.ts"));
    assert!(imports_section.contains("... and 10 more"));
}

#[test]
fn test_order_is_preserved() {
    let impact = ChangeImpact {
        file: "a.ts".into(),
        affected_files: vec!["z.ts".into(), "b.ts".into(), "m.ts".into()],
        ..ChangeImpact::default()
    };
    let out = render_impact(&impact);
    let z = out.find("`z.ts`").unwrap();
    let b = out.find("`b.ts`").unwrap();
    let m = out.find("`m.ts`").unwrap();
    assert!(z < b && b < m);
}

#[test]
fn test_empty_report_sections_present() {
    let out = render_impact(&ChangeImpact::empty("lonely.ts"));
    assert!(out.starts_with("## Change impact: `lonely.ts`"));
    let headings: Vec<&str> = out.lines().filter(|l| l.starts_with("### ")).collect();
    assert_eq!(
        headings,
        vec![
            "### Imports",
            "### Imported by",
            "### Affected files",
            "### Affected tests",
            "### Affected docs",
        ]
    );
    assert!(!out.contains("more"));
}

#[test]
fn test_full_report_lists_keys_then_impacts() {
    let keys = KeyFileSet::new(vec!["src/index.ts".into()]);
    let impacts = vec![ChangeImpact::empty("src/index.ts")];
    let out = render_report(&keys, &impacts);
    assert!(out.starts_with("# Change Impact"));
    let keys_at = out.find("### Key files").unwrap();
    let impact_at = out.find("## Change impact: `src/index.ts`").unwrap();
    assert!(keys_at < impact_at);
}
