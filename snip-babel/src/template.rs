//! Output template for rendered snippets
//!
//! The template is a plain text file with exactly three `%s` slots, filled in
//! order with the substituted body, the trigger and the scope. `%%` renders a
//! literal percent sign; any other `%` sequence is copied through unchanged.
//!
//! A typical Sublime Text template:
//!
//! ```text
//! <snippet>
//!     <content><![CDATA[%s]]></content>
//!     <tabTrigger>%s</tabTrigger>
//!     <scope>%s</scope>
//! </snippet>
//! ```

use crate::error::ConvertError;
use std::fs;
use std::path::Path;

/// Number of `%s` slots a template must provide.
pub const TEMPLATE_SLOTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot,
}

/// A parsed snippet template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetTemplate {
    segments: Vec<Segment>,
}

impl SnippetTemplate {
    /// Parse template text.
    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut slots = 0;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                literal.push(ch);
                continue;
            }
            match chars.peek() {
                Some('s') => {
                    chars.next();
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot);
                    slots += 1;
                }
                Some('%') => {
                    chars.next();
                    literal.push('%');
                }
                _ => literal.push('%'),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        if slots != TEMPLATE_SLOTS {
            return Err(ConvertError::Template(format!(
                "expected {TEMPLATE_SLOTS} '%s' placeholders (body, trigger, scope), found {slots}"
            )));
        }

        Ok(Self { segments })
    }

    /// Read and parse a template file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConvertError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Fill the slots with `body`, `trigger` and `scope`, in that order.
    pub fn render(&self, body: &str, trigger: &str, scope: &str) -> String {
        let values = [body, trigger, scope];
        let mut slot = 0;
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot => {
                    out.push_str(values[slot]);
                    slot += 1;
                }
            }
        }
        out
    }
}
