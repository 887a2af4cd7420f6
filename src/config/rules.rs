// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Override rule enumeration.
//!
//! ```text
//! section_names()  (declaration order)
//!   keep "EnvironmentVariable*" (case-insensitive)
//!   Key    missing/empty --> skip section
//!   Value  missing       --> ""
//!   Method               --> OverrideMethod::parse
//! ```

use tracing::{debug, trace};

use super::ConfigProvider;
use crate::core::env::{OverrideMethod, OverrideRule};

/// Prefix identifying override sections.
pub const SECTION_PREFIX: &str = "EnvironmentVariable";

/// Returns true if `section` names an override group.
#[must_use]
pub fn is_rule_section(section: &str) -> bool {
    section
        .as_bytes()
        .get(..SECTION_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(SECTION_PREFIX.as_bytes()))
}

/// Reads all override rules from `provider`, in declaration order.
pub fn read_override_rules<P: ConfigProvider + ?Sized>(provider: &P) -> Vec<OverrideRule> {
    provider
        .section_names()
        .iter()
        .filter(|section| is_rule_section(section))
        .filter_map(|section| read_rule(provider, section))
        .collect()
}

fn read_rule<P: ConfigProvider + ?Sized>(provider: &P, section: &str) -> Option<OverrideRule> {
    let Some(key) = provider
        .get_string(section, "Key")
        .filter(|k| !k.is_empty())
    else {
        trace!(section, "skipping override without key");
        return None;
    };

    let value = provider.get_string(section, "Value").unwrap_or_default();
    let method = provider
        .get_string(section, "Method")
        .as_deref()
        .map(OverrideMethod::parse)
        .unwrap_or_default();

    debug!(section, key = %key, %method, "override rule");
    Some(OverrideRule::new(key, value, method))
}
