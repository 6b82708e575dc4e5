//! Shared state for one conversion run
//!
//! Everything rules need is loaded once at startup and handed around by
//! reference: the parsed source file, the output template, the substitution
//! table, the destination root and the emit options.

use crate::emit::EmitOptions;
use crate::error::ConvertError;
use crate::source::GeanyConfig;
use crate::substitution::SubstitutionTable;
use crate::template::SnippetTemplate;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ConvertContext {
    pub source: GeanyConfig,
    pub template: SnippetTemplate,
    pub substitutions: SubstitutionTable,
    /// Root under which every rule gets its own folder.
    pub dest_root: PathBuf,
    pub emit: EmitOptions,
}

impl ConvertContext {
    /// Context with the standard substitution table and default emit options.
    pub fn new(
        source: GeanyConfig,
        template: SnippetTemplate,
        dest_root: impl AsRef<Path>,
    ) -> Result<Self, ConvertError> {
        Ok(Self {
            source,
            template,
            substitutions: SubstitutionTable::standard()?,
            dest_root: dest_root.as_ref().to_path_buf(),
            emit: EmitOptions::default(),
        })
    }

    pub fn with_emit_options(mut self, emit: EmitOptions) -> Self {
        self.emit = emit;
        self
    }

    pub fn with_substitutions(mut self, substitutions: SubstitutionTable) -> Self {
        self.substitutions = substitutions;
        self
    }
}
