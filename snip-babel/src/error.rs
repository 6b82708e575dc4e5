//! Error types for snippet conversion

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, rendering or writing snippets
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Section not present in the source configuration
    #[error("Section '{0}' not found")]
    SectionNotFound(String),
    /// The source configuration could not be read or parsed
    #[error("Failed to load snippet source '{}': {message}", path.display())]
    SourceLoad { path: PathBuf, message: String },
    /// The template file could not be read
    #[error("Failed to read template '{}': {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The template text is malformed
    #[error("Invalid template: {0}")]
    Template(String),
    /// The substitution markers could not be compiled
    #[error("Invalid substitution table: {0}")]
    Pattern(String),
    /// An output directory could not be created
    #[error("Failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A snippet file could not be written
    #[error("Failed to write '{}': {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A trigger cannot be used as a file name
    #[error("Trigger '{0}' cannot be used as a file name")]
    InvalidTrigger(String),
    /// A rule folder is not a single directory name
    #[error("Folder '{0}' must be a single directory name")]
    InvalidFolder(String),
    /// Two rules would write into the same folder
    #[error("Rules '{first}' and '{second}' both write to folder '{folder}'")]
    DuplicateFolder {
        folder: String,
        first: String,
        second: String,
    },
    /// Rule not found in registry
    #[error("Rule '{0}' not found")]
    RuleNotFound(String),
}
