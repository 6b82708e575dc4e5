//! Snippet conversion between editors
//!
//!     This crate converts code snippets defined in Geany's `snippets.conf` into
//!     Sublime Text `.sublime-snippet` files. It is a one-shot batch pipeline:
//!     read a section, rewrite each body's placeholders, fill a template, write
//!     one file per snippet.
//!
//!     This is a pure lib, that is, it powers snip-cli but is shell agnostic: no
//!     code here reads env vars, parses arguments or prints. Diagnostics go
//!     through the `log` facade and results are returned as values.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── snippet.rs              # SnippetSet / SnippetEntry data model
//!     ├── source.rs               # Geany INI reader (SnippetSource impl)
//!     ├── substitution.rs         # ordered placeholder rewrites
//!     ├── template.rs             # three-slot output template
//!     ├── emit.rs                 # directories, file names, permissions
//!     ├── sink.rs                 # Sublime writer (SnippetSink impl)
//!     ├── rule.rs                 # SnippetSource / SnippetSink traits, ConvertRule, RuleSpec
//!     ├── registry.rs             # RuleRegistry and batch conversion
//!     └── context.rs              # ConvertContext shared by all rules
//!
//!     Control flow: the registry asks each rule's source for a SnippetSet and
//!     hands it to the rule's sink, which substitutes, renders and emits every
//!     entry. Everything shared (parsed source, template, substitution table,
//!     destination) lives in a ConvertContext built once and passed by
//!     reference.
//!
//! Failure Model
//!
//!     - A rule whose source fails (usually a missing section) is skipped, the
//!       batch continues.
//!     - A snippet that cannot be written is recorded in the rule's EmitReport,
//!       the remaining snippets are still written.
//!     - Nothing is rolled back: a partially written folder is a valid outcome,
//!       and running again overwrites it with identical content.

pub mod context;
pub mod emit;
pub mod error;
pub mod registry;
pub mod rule;
pub mod sink;
pub mod snippet;
pub mod source;
pub mod substitution;
pub mod template;

pub use context::ConvertContext;
pub use emit::{EmitOptions, EmitReport, EntryFailure};
pub use error::ConvertError;
pub use registry::{ConversionSummary, RuleOutcome, RuleRegistry, RuleResult};
pub use rule::{ConvertRule, RuleSpec, SnippetSink, SnippetSource};
pub use sink::SublimeFolder;
pub use snippet::{SnippetEntry, SnippetSet};
pub use source::{GeanyConfig, GeanySection};
pub use substitution::SubstitutionTable;
pub use template::SnippetTemplate;
