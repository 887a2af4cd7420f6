// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! ```text
//! OverrideMethod: PreserveExisting(0) | InsertBefore(1) | InsertAfter(2) | Overwrite(3)
//! OverrideRule:   (key, value, method), applied in declaration order
//! EnvKey:         case-insensitive (PATH == Path == path), original casing kept
//! ```

use serde::Serialize;

/// How an override combines with an existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OverrideMethod {
    /// Keep the existing value (default)
    #[default]
    PreserveExisting,
    /// Prepend to the existing value
    InsertBefore,
    /// Append to the existing value
    InsertAfter,
    /// Replace the existing value
    Overwrite,
}

impl OverrideMethod {
    /// Parses a method from its numeric code or its name.
    ///
    /// Never fails: anything unrecognized is [`OverrideMethod::PreserveExisting`].
    /// Text that is a complete decimal integer, after leading whitespace, is
    /// read as a code (`0..=3`). Otherwise the untrimmed text is matched
    /// against the names ASCII case-insensitively.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if let Ok(code) = text.trim_start().parse::<i64>() {
            return Self::from_code(code).unwrap_or_default();
        }

        [Self::InsertBefore, Self::InsertAfter, Self::Overwrite]
            .into_iter()
            .find(|method| text.eq_ignore_ascii_case(method.name()))
            .unwrap_or_default()
    }

    /// Converts a numeric code, returning None if out of range.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::PreserveExisting),
            1 => Some(Self::InsertBefore),
            2 => Some(Self::InsertAfter),
            3 => Some(Self::Overwrite),
            _ => None,
        }
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::PreserveExisting => 0,
            Self::InsertBefore => 1,
            Self::InsertAfter => 2,
            Self::Overwrite => 3,
        }
    }

    /// Returns the configuration name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PreserveExisting => "PreserveExisting",
            Self::InsertBefore => "InsertBefore",
            Self::InsertAfter => "InsertAfter",
            Self::Overwrite => "Overwrite",
        }
    }
}

impl std::fmt::Display for OverrideMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for OverrideMethod {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

/// A single environment override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideRule {
    key: String,
    value: String,
    method: OverrideMethod,
}

impl OverrideRule {
    pub fn new(key: impl Into<String>, value: impl Into<String>, method: OverrideMethod) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            method,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn method(&self) -> OverrideMethod {
        self.method
    }
}

/// A case-insensitive environment variable key (Windows-compatible).
#[derive(Debug, Clone, Copy)]
pub(super) struct EnvKey<'a>(&'a str);

impl<'a> EnvKey<'a> {
    pub(super) const fn new(s: &'a str) -> Self {
        Self(s)
    }

    pub(super) fn matches(self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

/// One `KEY=VALUE` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentEntry {
    key: String,
    value: String,
}

impl EnvironmentEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the key with its original casing.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(super) const fn value_mut(&mut self) -> &mut String {
        &mut self.value
    }
}
