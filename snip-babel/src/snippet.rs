//! Snippet data model
//!
//! A [`SnippetSet`] is what a reader hands to a writer: the triggers of one
//! source section mapped to their raw, unsubstituted bodies.

use indexmap::IndexMap;

/// A single `(trigger, body)` pair borrowed from a [`SnippetSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetEntry<'a> {
    /// Identifier typed to expand the snippet; doubles as the output file stem.
    pub trigger: &'a str,
    /// Raw body text, still containing placeholder markers.
    pub body: &'a str,
}

/// Ordered mapping of trigger to body.
///
/// Triggers are unique. Inserting an existing trigger keeps its original
/// position and replaces the body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetSet {
    entries: IndexMap<String, String>,
}

impl SnippetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a snippet, returning the previous body if any.
    pub fn insert(&mut self, trigger: impl Into<String>, body: impl Into<String>) -> Option<String> {
        self.entries.insert(trigger.into(), body.into())
    }

    pub fn get(&self, trigger: &str) -> Option<&str> {
        self.entries.get(trigger).map(String::as_str)
    }

    pub fn contains(&self, trigger: &str) -> bool {
        self.entries.contains_key(trigger)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Triggers in insertion order.
    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = SnippetEntry<'_>> {
        self.entries.iter().map(|(trigger, body)| SnippetEntry {
            trigger: trigger.as_str(),
            body: body.as_str(),
        })
    }
}

impl<K, V> FromIterator<(K, V)> for SnippetSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = SnippetSet::new();
        for (trigger, body) in iter {
            set.insert(trigger, body);
        }
        set
    }
}
