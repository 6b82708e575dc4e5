//! Snippet file emission
//!
//! Bridges rendered snippet text and the filesystem: makes sure an output
//! folder exists, derives `<dir>/<trigger>.<extension>` paths and writes files
//! with fixed permission bits. Permission bits only apply on unix.

use crate::error::ConvertError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "sublime-snippet";
pub const DEFAULT_DIR_MODE: u32 = 0o755;
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// How snippet files are named and which permissions they get.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// File extension without the leading dot.
    pub extension: String,
    pub dir_mode: u32,
    pub file_mode: u32,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            dir_mode: DEFAULT_DIR_MODE,
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}

/// A snippet that could not be written.
#[derive(Debug)]
pub struct EntryFailure {
    pub trigger: String,
    pub error: ConvertError,
}

/// Outcome of writing one snippet set.
#[derive(Debug, Default)]
pub struct EmitReport {
    /// Files written, in entry order.
    pub written: Vec<PathBuf>,
    /// Entries that failed, in entry order.
    pub failures: Vec<EntryFailure>,
}

impl EmitReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn record(&mut self, trigger: &str, result: Result<PathBuf, ConvertError>) {
        match result {
            Ok(path) => self.written.push(path),
            Err(error) => self.failures.push(EntryFailure {
                trigger: trigger.to_string(),
                error,
            }),
        }
    }
}

/// Create `path` (and missing parents) with `options.dir_mode`.
///
/// A directory that already exists is not an error.
pub fn ensure_dir(path: &Path, options: &EmitOptions) -> Result<(), ConvertError> {
    if path.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(options.dir_mode);
    }
    #[cfg(not(unix))]
    let _ = options;

    builder
        .create(path)
        .map_err(|source| ConvertError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

/// Output path for `trigger` inside `dir`.
pub fn snippet_path(dir: &Path, trigger: &str, options: &EmitOptions) -> Result<PathBuf, ConvertError> {
    validate_trigger(trigger)?;
    Ok(dir.join(format!("{trigger}.{}", options.extension)))
}

fn validate_trigger(trigger: &str) -> Result<(), ConvertError> {
    if !is_single_name(trigger) {
        return Err(ConvertError::InvalidTrigger(trigger.to_string()));
    }
    Ok(())
}

/// Check that a rule folder stays a direct child of the destination root.
pub fn validate_folder(folder: &str) -> Result<(), ConvertError> {
    if !is_single_name(folder) {
        return Err(ConvertError::InvalidFolder(folder.to_string()));
    }
    Ok(())
}

fn is_single_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    let single_normal = matches!(components.next(), Some(Component::Normal(_)))
        && components.next().is_none();
    !name.is_empty() && single_normal && !name.contains(['/', '\\'])
}

/// Create or truncate `path`, apply `options.file_mode` and write `content`.
pub fn write_snippet(path: &Path, content: &str, options: &EmitOptions) -> Result<(), ConvertError> {
    let to_error = |source| ConvertError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(to_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(options.file_mode))
            .map_err(to_error)?;
    }
    #[cfg(not(unix))]
    let _ = options;

    file.write_all(content.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)
}
