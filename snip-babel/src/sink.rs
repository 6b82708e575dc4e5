//! Writing Sublime Text snippet files

use crate::context::ConvertContext;
use crate::emit::{self, EmitReport};
use crate::error::ConvertError;
use crate::rule::SnippetSink;
use crate::snippet::{SnippetEntry, SnippetSet};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Writes every snippet as `<dest_root>/<folder>/<trigger>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SublimeFolder {
    pub folder: String,
    pub scope: String,
}

impl SublimeFolder {
    pub fn new(folder: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            scope: scope.into(),
        }
    }

    /// Substitute markers in the body, then fill the template.
    pub fn render(&self, ctx: &ConvertContext, entry: SnippetEntry<'_>) -> String {
        let body = ctx.substitutions.apply(entry.body);
        ctx.template.render(&body, entry.trigger, &self.scope)
    }

    fn write_entry(
        &self,
        ctx: &ConvertContext,
        dir: &Path,
        entry: SnippetEntry<'_>,
    ) -> Result<PathBuf, ConvertError> {
        let path = emit::snippet_path(dir, entry.trigger, &ctx.emit)?;
        let content = self.render(ctx, entry);
        emit::write_snippet(&path, &content, &ctx.emit)?;
        Ok(path)
    }
}

impl SnippetSink for SublimeFolder {
    fn write(
        &self,
        ctx: &ConvertContext,
        snippets: &SnippetSet,
    ) -> Result<EmitReport, ConvertError> {
        emit::validate_folder(&self.folder)?;
        let dir = ctx.dest_root.join(&self.folder);
        emit::ensure_dir(&dir, &ctx.emit)?;

        let mut report = EmitReport::default();
        for entry in snippets.iter() {
            let result = self.write_entry(ctx, &dir, entry);
            match &result {
                Ok(path) => debug!("wrote {}", path.display()),
                Err(err) => warn!("snippet '{}' skipped: {err}", entry.trigger),
            }
            report.record(entry.trigger, result);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::GeanyConfig;
    use crate::template::SnippetTemplate;
    use std::fs;
    use tempfile::tempdir;

    fn context(dest: &Path, source: &str) -> ConvertContext {
        ConvertContext::new(
            GeanyConfig::parse(source).unwrap(),
            SnippetTemplate::parse("%s|%s|%s").unwrap(),
            dest,
        )
        .unwrap()
    }

    #[test]
    fn renders_substituted_body() {
        let dest = tempdir().unwrap();
        let ctx = context(dest.path(), "");
        let sink = SublimeFolder::new("go", "source.go");
        let entry = SnippetEntry {
            trigger: "fn",
            body: "func %cursor%%block_cursor%",
        };

        assert_eq!(
            sink.render(&ctx, entry),
            "func ${1:content}{\n\t${1:content}\n}\n|fn|source.go"
        );
    }

    #[test]
    fn writes_one_file_per_entry() {
        let dest = tempdir().unwrap();
        let ctx = context(dest.path(), "");
        let snippets: SnippetSet = [("fn", "func"), ("if", "if %cursor%")].into_iter().collect();

        let report = SublimeFolder::new("go", "source.go")
            .write(&ctx, &snippets)
            .unwrap();

        assert!(report.is_complete());
        assert_eq!(
            report.written,
            vec![
                dest.path().join("go").join("fn.sublime-snippet"),
                dest.path().join("go").join("if.sublime-snippet"),
            ]
        );
        let content = fs::read_to_string(dest.path().join("go/if.sublime-snippet")).unwrap();
        assert_eq!(content, "if ${1:content}|if|source.go");
    }

    #[test]
    fn bad_trigger_does_not_stop_the_rest() {
        let dest = tempdir().unwrap();
        let ctx = context(dest.path(), "");
        let snippets: SnippetSet = [("../escape", "x"), ("ok", "y")].into_iter().collect();

        let report = SublimeFolder::new("go", "source.go")
            .write(&ctx, &snippets)
            .unwrap();

        assert_eq!(report.written.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].trigger, "../escape");
        assert!(!dest.path().join("escape.sublime-snippet").exists());
    }

    #[test]
    fn unusable_folder_fails_the_call() {
        let dest = tempdir().unwrap();
        fs::write(dest.path().join("go"), "occupied").unwrap();
        let ctx = context(dest.path(), "");
        let snippets: SnippetSet = [("fn", "func")].into_iter().collect();

        let result = SublimeFolder::new("go", "source.go").write(&ctx, &snippets);
        assert!(matches!(result, Err(ConvertError::CreateDir { .. })));
    }

    #[test]
    fn folder_outside_dest_is_refused() {
        let root = tempdir().unwrap();
        let dest = root.path().join("user");
        let ctx = context(&dest, "");
        let snippets: SnippetSet = [("fn", "func")].into_iter().collect();

        let result = SublimeFolder::new("../escape", "source.go").write(&ctx, &snippets);

        assert!(matches!(result, Err(ConvertError::InvalidFolder(_))));
        assert!(!root.path().join("escape").exists());
    }
}
