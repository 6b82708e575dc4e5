//! Shared fixtures for the conversion tests.

use snip_babel::{ConvertContext, GeanyConfig, RuleSpec, SnippetTemplate};
use std::fs;
use std::path::{Path, PathBuf};

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn template() -> SnippetTemplate {
    SnippetTemplate::load(fixture_path("sublime-snippet.sample")).expect("fixture template")
}

pub fn context(dest: &Path) -> ConvertContext {
    let source = GeanyConfig::load(fixture_path("snippets.conf")).expect("fixture source");
    ConvertContext::new(source, template(), dest).expect("context")
}

pub fn spec(name: &str, section: &str, folder: &str, scope: &str) -> RuleSpec {
    RuleSpec {
        name: name.to_string(),
        section: section.to_string(),
        folder: folder.to_string(),
        scope: scope.to_string(),
    }
}

pub fn go_spec() -> RuleSpec {
    spec("go", "Go", "go", "source.go")
}

/// File names in `dir`, sorted.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
