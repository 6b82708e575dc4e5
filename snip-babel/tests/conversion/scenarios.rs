//! End-to-end Geany → Sublime conversions against the fixture files.

use crate::common::{context, file_names, fixture_path, go_spec, template};
use snip_babel::{GeanyConfig, RuleRegistry};
use std::fs;
use tempfile::tempdir;

#[test]
fn go_function_snippet() {
    let dest = tempdir().unwrap();
    let ctx = context(dest.path());

    let summary = RuleRegistry::from_specs(&[go_spec()]).unwrap().convert(&ctx);
    assert!(summary.is_clean());

    let content = fs::read_to_string(dest.path().join("go").join("fn.sublime-snippet")).unwrap();
    assert_eq!(
        content,
        template().render("func ${1:content}{\n\t${1:content}\n}\n", "fn", "source.go")
    );
    assert_eq!(
        content,
        "<snippet>\n\t<content><![CDATA[\nfunc ${1:content}{\n\t${1:content}\n}\n\n]]></content>\n\t<tabTrigger>fn</tabTrigger>\n\t<scope>source.go</scope>\n</snippet>\n"
    );
}

#[test]
fn one_file_per_trigger() {
    let dest = tempdir().unwrap();
    let ctx = context(dest.path());
    let section = GeanyConfig::load(fixture_path("snippets.conf"))
        .unwrap()
        .section("Go")
        .unwrap();

    let summary = RuleRegistry::from_specs(&[go_spec()]).unwrap().convert(&ctx);

    assert_eq!(summary.files_written(), section.len());
    let mut expected: Vec<String> = section
        .triggers()
        .map(|t| format!("{t}.sublime-snippet"))
        .collect();
    expected.sort();
    assert_eq!(file_names(&dest.path().join("go")), expected);

    for entry in section.iter() {
        let path = dest.path().join("go").join(format!("{}.sublime-snippet", entry.trigger));
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains(&format!("<tabTrigger>{}</tabTrigger>", entry.trigger)));
        assert!(content.contains("<scope>source.go</scope>"));
        assert!(!content.contains("%cursor%"));
    }
}

#[test]
fn rerun_is_byte_identical() {
    let dest = tempdir().unwrap();
    let ctx = context(dest.path());
    let registry = RuleRegistry::from_specs(&[go_spec()]).unwrap();

    registry.convert(&ctx);
    let first: Vec<_> = file_names(&dest.path().join("go"))
        .into_iter()
        .map(|name| fs::read(dest.path().join("go").join(&name)).unwrap())
        .collect();

    let summary = registry.convert(&ctx);
    assert!(summary.is_clean());
    let second: Vec<_> = file_names(&dest.path().join("go"))
        .into_iter()
        .map(|name| fs::read(dest.path().join("go").join(&name)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn existing_destination_folder_is_reused() {
    let dest = tempdir().unwrap();
    fs::create_dir(dest.path().join("go")).unwrap();
    fs::write(dest.path().join("go").join("keep.txt"), "mine").unwrap();
    let ctx = context(dest.path());

    let summary = RuleRegistry::from_specs(&[go_spec()]).unwrap().convert(&ctx);

    assert!(summary.is_clean());
    assert!(dest.path().join("go").join("fn.sublime-snippet").is_file());
    assert_eq!(
        fs::read_to_string(dest.path().join("go").join("keep.txt")).unwrap(),
        "mine"
    );
}

#[test]
fn escape_sequences_and_braces() {
    let dest = tempdir().unwrap();
    let ctx = context(dest.path());

    RuleRegistry::from_specs(&[go_spec()]).unwrap().convert(&ctx);

    let content =
        fs::read_to_string(dest.path().join("go").join("switch.sublime-snippet")).unwrap();
    assert!(content.contains("switch ${1:content} {\n\tcase :\n\t\tbreak\n}\n"));
}
