// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered environment mapping.
//!
//! ```text
//! Environment
//! entries: Vec<EnvironmentEntry>   (source order, new keys appended)
//! lookup:  first case-insensitive match wins
//! ```

use super::types::{EnvKey, EnvironmentEntry, OverrideMethod};

/// An ordered set of environment variables.
///
/// Unlike a map, this keeps the order of the source environment so that
/// re-encoding reproduces it. Duplicate keys coming from a malformed source
/// block are kept as they are; lookups and updates always target the earliest
/// matching entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    entries: Vec<EnvironmentEntry>,
}

impl Environment {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an environment from pairs, in iteration order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| EnvironmentEntry::new(k, v))
                .collect(),
        }
    }

    /// Appends an entry without looking for an existing key.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.push(EnvironmentEntry::new(key, value));
        self
    }

    /// Gets the value of the first entry matching `key` case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|at| self.entries[at].value())
    }

    /// Sets a variable, combining with an existing value according to `method`.
    ///
    /// A missing key is always appended with `value`, whatever the method.
    pub fn set_with_method(
        &mut self,
        key: impl Into<String>,
        value: &str,
        method: OverrideMethod,
    ) -> &mut Self {
        let key = key.into();
        let Some(at) = self.position(&key) else {
            self.entries.push(EnvironmentEntry::new(key, value));
            return self;
        };

        let existing = self.entries[at].value_mut();
        match method {
            OverrideMethod::PreserveExisting => {}
            OverrideMethod::InsertBefore => existing.insert_str(0, value),
            OverrideMethod::InsertAfter => existing.push_str(value),
            OverrideMethod::Overwrite => {
                existing.clear();
                existing.push_str(value);
            }
        }

        self
    }

    /// Sets a variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: &str) -> &mut Self {
        self.set_with_method(key, value, OverrideMethod::Overwrite)
    }

    /// Index of the first entry matching `key` case-insensitively.
    fn position(&self, key: &str) -> Option<usize> {
        let key = EnvKey::new(key);
        self.entries.iter().position(|e| key.matches(e.key()))
    }

    /// Returns an iterator over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|e| (e.key(), e.value()))
    }

    #[must_use]
    pub fn entries(&self) -> &[EnvironmentEntry] {
        &self.entries
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = &'a EnvironmentEntry;
    type IntoIter = std::slice::Iter<'a, EnvironmentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
