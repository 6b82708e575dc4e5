//! Reading snippets from Geany's `snippets.conf`
//!
//! The file is INI-style: one section per filetype, one `trigger=body` line
//! per snippet. Escape processing is disabled: values reach the substitution
//! table exactly as written, `\n`, `\t` and `\s` included. One matching pair
//! of surrounding `"` or `'` is stripped; quotes inside a value are kept.

use crate::context::ConvertContext;
use crate::error::ConvertError;
use crate::rule::SnippetSource;
use crate::snippet::SnippetSet;
use ini::{Ini, ParseOption};
use std::path::Path;

fn parse_options() -> ParseOption {
    ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    }
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// A parsed Geany snippet configuration.
#[derive(Debug, Clone)]
pub struct GeanyConfig {
    ini: Ini,
}

impl GeanyConfig {
    /// Load and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let ini = Ini::load_from_file_opt(path, parse_options()).map_err(|err| {
            ConvertError::SourceLoad {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        Ok(Self { ini })
    }

    /// Parse configuration text held in memory.
    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        let ini =
            Ini::load_from_str_opt(text, parse_options()).map_err(|err| ConvertError::SourceLoad {
                path: "<memory>".into(),
                message: err.to_string(),
            })?;
        Ok(Self { ini })
    }

    /// Named sections in file order, without duplicates.
    pub fn section_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.ini.sections().flatten() {
            if !names.iter().any(|known| known == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.ini.section(Some(name)).is_some()
    }

    /// Every key of section `name` mapped to its value.
    ///
    /// A section that appears several times is read as one.
    pub fn section(&self, name: &str) -> Result<SnippetSet, ConvertError> {
        if !self.has_section(name) {
            return Err(ConvertError::SectionNotFound(name.to_string()));
        }

        let mut snippets = SnippetSet::new();
        for properties in self.ini.section_all(Some(name)) {
            for (trigger, body) in properties.iter() {
                snippets.insert(trigger, strip_quotes(body));
            }
        }
        Ok(snippets)
    }
}

/// Reads one section of the context's Geany configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeanySection {
    pub section: String,
}

impl GeanySection {
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
        }
    }
}

impl SnippetSource for GeanySection {
    fn read(&self, ctx: &ConvertContext) -> Result<SnippetSet, ConvertError> {
        ctx.source.section(&self.section)
    }
}
