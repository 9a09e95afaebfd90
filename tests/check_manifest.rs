//! Integration tests for manifest checks.

use std::fs;

use storeguide::check::{run_check, CheckError, CheckOptions, Finding, Manifest, ManifestError};
use storeguide::descriptor::DescriptorKind;
use storeguide::engine::Strategy;
use tempfile::TempDir;

const TODO_APP: &str = r#"
[[state]]
name = "todos"
scope = "app-wide"
growth-expectation = true
involves-async = true
reused-across-features = false
needs-persistence = true
expect = "global-slice"

[[state]]
name = "input-draft"
scope = "single-component"
growth-expectation = false
involves-async = false
reused-across-features = false
needs-persistence = false
expect = "local-state"

[[event]]
name = "fetch-todos"
multiple-consumers = false
has-side-effects = true
reusable-across-app = false
expect = "middleware"

[[access]]
name = "completed-count"
accessed-from-multiple-components = false
requires-computation = true
shape-may-change = false
is-deeply-nested = false
expect = "selector"
"#;

#[test]
fn consistent_manifest_passes() {
    let manifest = Manifest::parse(TODO_APP).unwrap();
    let report = run_check(&manifest, CheckOptions::default()).unwrap();
    assert!(report.passed());
    assert_eq!(report.entries.len(), 4);

    let names: Vec<&str> = report.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["todos", "input-draft", "fetch-todos", "completed-count"]);
    assert_eq!(report.entries[2].kind, DescriptorKind::Event);
}

#[test]
fn wrong_expectation_is_reported() {
    let manifest = Manifest::parse(
        r#"
        [[event]]
        name = "select-tab"
        multiple-consumers = true
        has-side-effects = false
        reusable-across-app = false
        expect = "local-handling"
        "#,
    )
    .unwrap();
    let report = run_check(&manifest, CheckOptions::default()).unwrap();
    assert!(!report.passed());
    assert_eq!(
        report.findings,
        vec![Finding::Mismatch {
            kind: DescriptorKind::Event,
            name: "select-tab".to_string(),
            expected: Strategy::LocalHandling,
            actual: Strategy::SharedAction,
            rule: "event.shared",
        }]
    );
    assert_eq!(
        report.findings[0].to_string(),
        "event select-tab: expected local-handling, engine recommends shared-action (event.shared)"
    );
}

#[test]
fn unpinned_entries_reported_only_when_required() {
    let manifest = Manifest::parse(
        r#"
        [[access]]
        name = "user-name"
        accessed-from-multiple-components = false
        requires-computation = false
        shape-may-change = false
        is-deeply-nested = false
        "#,
    )
    .unwrap();

    assert!(run_check(&manifest, CheckOptions::default()).unwrap().passed());

    let strict = run_check(&manifest, CheckOptions { require_expect: true }).unwrap();
    assert_eq!(
        strict.findings,
        vec![Finding::Unpinned {
            kind: DescriptorKind::Access,
            name: "user-name".to_string(),
        }]
    );
}

#[test]
fn incomplete_entry_aborts_without_partial_report() {
    let manifest = Manifest::parse(
        r#"
        [[state]]
        name = "ok"
        scope = "few-components"
        growth-expectation = false
        involves-async = false
        reused-across-features = false
        needs-persistence = false

        [[state]]
        name = "broken"
        growth-expectation = false
        involves-async = false
        reused-across-features = false
        needs-persistence = false
        "#,
    )
    .unwrap();

    let err = run_check(&manifest, CheckOptions::default()).unwrap_err();
    let CheckError::InvalidEntry { kind, name, source } = &err;
    assert_eq!(*kind, DescriptorKind::State);
    assert_eq!(name, "broken");
    assert_eq!(source.field(), "scope");
    assert!(err.to_string().starts_with("state entry 'broken': Invalid descriptor"));
}

#[test]
fn loads_manifest_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guide.toml");
    fs::write(&path, TODO_APP).unwrap();

    let manifest = Manifest::load(&path).unwrap();
    assert_eq!(manifest.len(), 4);
}

#[test]
fn missing_manifest_is_read_error() {
    let dir = TempDir::new().unwrap();
    let err = Manifest::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ManifestError::Read { .. }));
}

#[test]
fn malformed_manifest_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[[state]\nname = ").unwrap();
    let err = Manifest::load(&path).unwrap_err();
    assert!(matches!(err, ManifestError::Parse { .. }));
}

#[test]
fn misspelled_expect_is_rejected_instead_of_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("typo.toml");
    fs::write(
        &path,
        r#"
[[access]]
name = "total"
accessed-from-multiple-components = false
requires-computation = true
shape-may-change = false
is-deeply-nested = false
expects = "direct-access"
"#,
    )
    .unwrap();

    let err = Manifest::load(&path).unwrap_err();
    assert!(matches!(err, ManifestError::Parse { .. }));
    assert!(err.to_string().contains("expects"));
}

#[test]
fn misspelled_section_is_rejected_instead_of_dropped() {
    let result = Manifest::parse(
        r#"
[[states]]
name = "cart"
scope = "app-wide"
growth-expectation = false
involves-async = false
reused-across-features = false
needs-persistence = false
"#,
    );
    assert!(result.is_err());
}

#[test]
fn snake_case_entry_keys_are_still_accepted() {
    let manifest = Manifest::parse(
        r#"
[[event]]
name = "refresh"
multiple_consumers = false
has_side_effects = true
reusable_across_app = false
expect = "middleware"
"#,
    )
    .unwrap();
    assert!(run_check(&manifest, CheckOptions::default()).unwrap().passed());
}
