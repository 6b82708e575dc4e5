//! Rule registry and batch conversion
//!
//! This module provides the ordered set of conversion rules for a run.
//! Rules are registered by name and executed one after another by
//! [`RuleRegistry::convert`]. A rule whose source cannot be read is skipped
//! and the batch moves on; nothing is rolled back.

use crate::context::ConvertContext;
use crate::emit::{self, EmitReport};
use crate::error::ConvertError;
use crate::rule::{ConvertRule, RuleSpec, SnippetSink, SnippetSource};
use log::{error, info, warn};

/// Registry of conversion rules
///
/// Keeps registration order, which is also execution order.
///
/// # Examples
///
/// ```ignore
/// let mut registry = RuleRegistry::new();
/// registry.add_convert_rule("go", GeanySection::new("Go"), SublimeFolder::new("go", "source.go"));
///
/// let summary = registry.convert(&ctx);
/// ```
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: Vec<ConvertRule>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry of Geany → Sublime rules, in the given order
    ///
    /// Every folder must be a single directory name, and no two rules may
    /// share one. A later spec with an existing name replaces the earlier one.
    pub fn from_specs<'a, I>(specs: I) -> Result<Self, ConvertError>
    where
        I: IntoIterator<Item = &'a RuleSpec>,
    {
        let mut folders: Vec<(&str, &str)> = Vec::new();
        let mut registry = Self::new();
        for spec in specs {
            emit::validate_folder(&spec.folder)?;
            folders.retain(|(name, _)| *name != spec.name);
            if let Some((owner, _)) = folders.iter().find(|(_, folder)| *folder == spec.folder) {
                return Err(ConvertError::DuplicateFolder {
                    folder: spec.folder.clone(),
                    first: owner.to_string(),
                    second: spec.name.clone(),
                });
            }
            folders.push((&spec.name, &spec.folder));
            registry.register(ConvertRule::from(spec));
        }
        Ok(registry)
    }

    /// Register a rule
    ///
    /// If a rule with the same name already exists, it is replaced in place.
    pub fn register(&mut self, rule: ConvertRule) {
        match self.rules.iter_mut().find(|r| r.name() == rule.name()) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Register a rule from its reader and writer
    pub fn add_convert_rule<S, W>(&mut self, name: impl Into<String>, source: S, sink: W)
    where
        S: SnippetSource + 'static,
        W: SnippetSink + 'static,
    {
        self.register(ConvertRule::new(name, source, sink));
    }

    /// Get a rule by name
    pub fn get(&self, name: &str) -> Result<&ConvertRule, ConvertError> {
        self.rules
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| ConvertError::RuleNotFound(name.to_string()))
    }

    /// Check if a rule exists
    pub fn has(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name() == name)
    }

    /// Rule names in execution order
    pub fn list_rules(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Keep only the named rules
    ///
    /// Fails without modifying the registry if any name is unknown.
    pub fn retain<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), ConvertError> {
        if let Some(unknown) = names.iter().find(|n| !self.has(n.as_ref())) {
            return Err(ConvertError::RuleNotFound(unknown.as_ref().to_string()));
        }
        self.rules
            .retain(|r| names.iter().any(|n| n.as_ref() == r.name()));
        Ok(())
    }

    /// Run every rule in order
    pub fn convert(&self, ctx: &ConvertContext) -> ConversionSummary {
        let mut summary = ConversionSummary::default();
        for rule in &self.rules {
            let outcome = run_rule(rule, ctx);
            summary.rules.push(RuleResult {
                name: rule.name().to_string(),
                outcome,
            });
        }
        summary
    }
}

fn run_rule(rule: &ConvertRule, ctx: &ConvertContext) -> RuleOutcome {
    let name = rule.name();
    info!("Processing rule '{name}'");

    let snippets = match rule.read(ctx) {
        Ok(snippets) => snippets,
        Err(err) => {
            error!("Error getting snippets for rule '{name}': {err}");
            return RuleOutcome::Skipped(err);
        }
    };

    match rule.write(ctx, &snippets) {
        Ok(report) => {
            if report.is_complete() {
                info!(
                    "Rule '{name}' completed: {} snippet(s) written",
                    report.written.len()
                );
            } else {
                warn!(
                    "Rule '{name}' completed with errors: {} written, {} failed",
                    report.written.len(),
                    report.failures.len()
                );
            }
            RuleOutcome::Converted(report)
        }
        Err(err) => {
            error!("Error writing snippets for rule '{name}': {err}");
            RuleOutcome::Failed(err)
        }
    }
}

/// What happened to one rule
#[derive(Debug)]
pub enum RuleOutcome {
    /// The writer ran; individual entries may still have failed.
    Converted(EmitReport),
    /// The reader failed, the writer never ran.
    Skipped(ConvertError),
    /// The writer failed as a whole.
    Failed(ConvertError),
}

#[derive(Debug)]
pub struct RuleResult {
    pub name: String,
    pub outcome: RuleOutcome,
}

/// Per-rule outcomes of one batch, in execution order
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub rules: Vec<RuleResult>,
}

impl ConversionSummary {
    pub fn get(&self, name: &str) -> Option<&RuleOutcome> {
        self.rules
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.outcome)
    }

    pub fn files_written(&self) -> usize {
        self.reports().map(|report| report.written.len()).sum()
    }

    pub fn file_failures(&self) -> usize {
        self.reports().map(|report| report.failures.len()).sum()
    }

    /// Rules that did not convert cleanly
    pub fn problem_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|r| match &r.outcome {
                RuleOutcome::Converted(report) => !report.is_complete(),
                RuleOutcome::Skipped(_) | RuleOutcome::Failed(_) => true,
            })
            .count()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }

    fn reports(&self) -> impl Iterator<Item = &EmitReport> {
        self.rules.iter().filter_map(|r| match &r.outcome {
            RuleOutcome::Converted(report) => Some(report),
            _ => None,
        })
    }
}
