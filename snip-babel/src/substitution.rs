//! Placeholder substitution for raw snippet bodies
//!
//!     Geany snippet bodies carry escape sequences (`\n`, `\t`, `\s`) and
//!     `%marker%` placeholders. Before a body is templated these are rewritten
//!     into Sublime Text syntax, where the cursor becomes a tab stop
//!     (`${1:content}`).
//!
//!     Matching is a single left-to-right pass. At every position the first
//!     marker in table order that matches wins, matches never overlap and
//!     replacement text is never scanned again. Markers sharing a prefix with
//!     a shorter marker must therefore come first in the table.

use crate::error::ConvertError;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// The standard Geany → Sublime marker table, in match priority order.
pub const STANDARD_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("\\n", "\n"),
    ("\\t", "\t"),
    ("\\s", " "),
    ("%brace_open%", "{\n\t"),
    ("%brace_close%", "}\n"),
    ("%cursor%", "${1:content}"),
    ("%block_cursor%", "{\n\t${1:content}\n}\n"),
    ("%block%", "\n{\n\t${1:content}\n}"),
];

/// An ordered set of literal `marker -> replacement` rewrites.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    pattern: Regex,
    replacements: HashMap<String, String>,
    markers: Vec<String>,
}

impl SubstitutionTable {
    /// Build a table from `(marker, replacement)` pairs in priority order.
    ///
    /// A marker listed twice keeps its first replacement.
    pub fn new<'a, I>(pairs: I) -> Result<Self, ConvertError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut markers = Vec::new();
        let mut replacements = HashMap::new();
        for (marker, replacement) in pairs {
            if marker.is_empty() {
                return Err(ConvertError::Pattern("empty marker".to_string()));
            }
            if !replacements.contains_key(marker) {
                replacements.insert(marker.to_string(), replacement.to_string());
                markers.push(marker.to_string());
            }
        }
        if markers.is_empty() {
            return Err(ConvertError::Pattern("no markers".to_string()));
        }

        // Regex alternation is leftmost-first, which gives table-order priority.
        let alternation = markers
            .iter()
            .map(|marker| regex::escape(marker))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation).map_err(|err| ConvertError::Pattern(err.to_string()))?;

        Ok(Self {
            pattern,
            replacements,
            markers,
        })
    }

    /// The table used for Geany snippets.
    pub fn standard() -> Result<Self, ConvertError> {
        Self::new(STANDARD_SUBSTITUTIONS.iter().copied())
    }

    /// Markers in priority order.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }

    /// Rewrite every marker in `input`.
    pub fn apply(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, |caps: &Captures<'_>| {
                let marker = &caps[0];
                self.replacements
                    .get(marker)
                    .cloned()
                    .unwrap_or_else(|| marker.to_string())
            })
            .into_owned()
    }
}
