//! Shared configuration loader for the snip toolchain.
//!
//! `defaults/snip.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SnipConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use snip_babel::{EmitOptions, RuleSpec};
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/snip.default.toml");

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "snip.toml";

/// Top-level configuration consumed by snip applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SnipConfig {
    pub template: TemplateConfig,
    pub output: OutputConfig,
    pub rules: BTreeMap<String, RuleConfig>,
}

impl SnipConfig {
    /// Enabled rules as registry specs, in name order.
    pub fn rule_specs(&self) -> Vec<RuleSpec> {
        self.rules
            .iter()
            .filter(|(_, rule)| rule.enabled)
            .map(|(name, rule)| rule.to_spec(name))
            .collect()
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions::from(&self.output)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Template file name, resolved next to the executable.
    pub file: String,
}

/// Naming and permissions of generated files.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub extension: String,
    pub dir_mode: u32,
    pub file_mode: u32,
}

impl From<&OutputConfig> for EmitOptions {
    fn from(config: &OutputConfig) -> Self {
        EmitOptions {
            extension: config.extension.trim_start_matches('.').to_string(),
            dir_mode: config.dir_mode,
            file_mode: config.file_mode,
        }
    }
}

/// One Geany section → Sublime folder mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    pub section: String,
    pub folder: String,
    pub scope: String,
}

fn enabled_by_default() -> bool {
    true
}

impl RuleConfig {
    pub fn to_spec(&self, name: &str) -> RuleSpec {
        RuleSpec {
            name: name.to_string(),
            section: self.section.clone(),
            folder: self.folder.clone(),
            scope: self.scope.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SnipConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SnipConfig, ConfigError> {
    Loader::new().build()
}
