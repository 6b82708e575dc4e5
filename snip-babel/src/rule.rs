//! Conversion rule definition
//!
//! A rule pairs a [`SnippetSource`] (where snippets come from) with a
//! [`SnippetSink`] (where they go). Both receive the shared
//! [`ConvertContext`] so they never hold global state of their own.
//!
//! # Examples
//!
//! ```ignore
//! let rule = ConvertRule::new(
//!     "go",
//!     GeanySection::new("Go"),
//!     SublimeFolder::new("go", "source.go"),
//! );
//! ```

use crate::context::ConvertContext;
use crate::emit::EmitReport;
use crate::error::ConvertError;
use crate::sink::SublimeFolder;
use crate::snippet::SnippetSet;
use crate::source::GeanySection;
use serde::{Deserialize, Serialize};

/// Produces the snippets a rule converts.
pub trait SnippetSource {
    fn read(&self, ctx: &ConvertContext) -> Result<SnippetSet, ConvertError>;
}

/// Persists the snippets a rule converts.
///
/// Errors for individual entries belong in the returned [`EmitReport`];
/// `Err` is reserved for failures that stop the whole rule.
pub trait SnippetSink {
    fn write(&self, ctx: &ConvertContext, snippets: &SnippetSet)
        -> Result<EmitReport, ConvertError>;
}

impl<F> SnippetSource for F
where
    F: Fn(&ConvertContext) -> Result<SnippetSet, ConvertError>,
{
    fn read(&self, ctx: &ConvertContext) -> Result<SnippetSet, ConvertError> {
        self(ctx)
    }
}

impl<F> SnippetSink for F
where
    F: Fn(&ConvertContext, &SnippetSet) -> Result<EmitReport, ConvertError>,
{
    fn write(
        &self,
        ctx: &ConvertContext,
        snippets: &SnippetSet,
    ) -> Result<EmitReport, ConvertError> {
        self(ctx, snippets)
    }
}

/// A named reader/writer pair.
pub struct ConvertRule {
    name: String,
    source: Box<dyn SnippetSource>,
    sink: Box<dyn SnippetSink>,
}

impl ConvertRule {
    pub fn new<S, W>(name: impl Into<String>, source: S, sink: W) -> Self
    where
        S: SnippetSource + 'static,
        W: SnippetSink + 'static,
    {
        Self {
            name: name.into(),
            source: Box::new(source),
            sink: Box::new(sink),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn read(&self, ctx: &ConvertContext) -> Result<SnippetSet, ConvertError> {
        self.source.read(ctx)
    }

    pub fn write(
        &self,
        ctx: &ConvertContext,
        snippets: &SnippetSet,
    ) -> Result<EmitReport, ConvertError> {
        self.sink.write(ctx, snippets)
    }
}

impl std::fmt::Debug for ConvertRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConvertRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Declarative description of a Geany section → Sublime folder rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Rule identifier (e.g. "go").
    pub name: String,
    /// Section of the Geany configuration to read (e.g. "Go").
    pub section: String,
    /// Folder under the destination root (e.g. "go").
    pub folder: String,
    /// Sublime scope selector (e.g. "source.go").
    pub scope: String,
}

impl From<&RuleSpec> for ConvertRule {
    fn from(spec: &RuleSpec) -> Self {
        ConvertRule::new(
            spec.name.clone(),
            GeanySection::new(spec.section.clone()),
            SublimeFolder::new(spec.folder.clone(), spec.scope.clone()),
        )
    }
}
