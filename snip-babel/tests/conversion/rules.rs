//! Registry behavior across several rules.

use crate::common::{context, go_spec, spec};
use snip_babel::{ConvertError, RuleOutcome, RuleRegistry};
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_section_is_skipped_without_output() {
    let dest = tempdir().unwrap();
    let ctx = context(dest.path());
    let specs = [
        spec("rust", "Rust", "rust", "source.rust"),
        go_spec(),
    ];

    let summary = RuleRegistry::from_specs(&specs).unwrap().convert(&ctx);

    match summary.get("rust") {
        Some(RuleOutcome::Skipped(ConvertError::SectionNotFound(name))) => assert_eq!(name, "Rust"),
        other => panic!("expected skipped rule, got {other:?}"),
    }
    assert!(!dest.path().join("rust").exists());
    assert!(matches!(summary.get("go"), Some(RuleOutcome::Converted(_))));
    assert_eq!(summary.problem_count(), 1);
}

#[test]
fn rules_write_to_separate_folders() {
    let dest = tempdir().unwrap();
    let ctx = context(dest.path());
    let specs = [go_spec(), spec("php", "PHP", "php", "source.php")];

    let summary = RuleRegistry::from_specs(&specs).unwrap().convert(&ctx);
    assert!(summary.is_clean());

    let go = fs::read_to_string(dest.path().join("go").join("fn.sublime-snippet")).unwrap();
    let php = fs::read_to_string(dest.path().join("php").join("fn.sublime-snippet")).unwrap();
    assert!(go.contains("<scope>source.go</scope>"));
    assert!(php.contains("<scope>source.php</scope>"));
    assert!(php.contains("function ${1:content}()\n{\n\t${1:content}\n}"));
}

#[test]
fn write_failures_surface_in_summary() {
    let dest = tempdir().unwrap();
    fs::create_dir_all(dest.path().join("go").join("fn.sublime-snippet")).unwrap();
    let ctx = context(dest.path());

    let summary = RuleRegistry::from_specs(&[go_spec()]).unwrap().convert(&ctx);

    match summary.get("go") {
        Some(RuleOutcome::Converted(report)) => {
            assert_eq!(report.failures.len(), 1);
            assert_eq!(report.failures[0].trigger, "fn");
            assert!(matches!(
                report.failures[0].error,
                ConvertError::WriteFile { .. }
            ));
            assert_eq!(report.written.len(), 4);
        }
        other => panic!("expected converted rule, got {other:?}"),
    }
    assert_eq!(summary.file_failures(), 1);
}

#[test]
fn shared_folder_is_refused_before_writing() {
    let dest = tempdir().unwrap();
    let specs = [
        spec("go", "Go", "shared", "source.go"),
        spec("php", "PHP", "shared", "source.php"),
    ];

    match RuleRegistry::from_specs(&specs) {
        Err(ConvertError::DuplicateFolder { folder, .. }) => assert_eq!(folder, "shared"),
        other => panic!("expected DuplicateFolder, got {other:?}"),
    }
    assert!(!dest.path().join("shared").exists());
}
