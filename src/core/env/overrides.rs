// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Override engine.
//!
//! ```text
//! for rule in rules (declaration order):
//!   no match          --> append (key, value)
//!   PreserveExisting  --> unchanged
//!   InsertBefore      --> value + existing
//!   InsertAfter       --> existing + value
//!   Overwrite         --> value
//! ```
//!
//! Each rule sees the result of the previous ones, so repeated
//! `InsertBefore`/`InsertAfter` rules on one key accumulate.

use tracing::trace;

use super::container::Environment;
use super::types::OverrideRule;

impl Environment {
    /// Applies a single override rule.
    pub fn apply(&mut self, rule: &OverrideRule) -> &mut Self {
        trace!(key = rule.key(), method = %rule.method(), "override");
        self.set_with_method(rule.key(), rule.value(), rule.method())
    }

    /// Applies override rules in order.
    pub fn apply_all<'a, I>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a OverrideRule>,
    {
        for rule in rules {
            self.apply(rule);
        }
        self
    }
}

/// Applies `rules` to `env` and returns the result.
#[must_use]
pub fn apply_overrides(rules: &[OverrideRule], mut env: Environment) -> Environment {
    env.apply_all(rules);
    env
}
