// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `shimctl plan` and `shimctl rules` handlers.
//!
//! ```text
//! plan:  config + synthesized raw command line + current env
//!          --> plan_from_config --> report (text | JSON)
//! rules: config --> override_rules --> report (text | JSON)
//! ```

use serde::Serialize;

use super::launch::plan_from_config;
use crate::cli::plan::{PlanArgs, RulesArgs};
use crate::config::{ConfigProvider, ShimConfig, default_config_path};
use crate::core::cmdline::join_arguments;
use crate::core::env::{Environment, EnvironmentBlock, OverrideRule};
use crate::core::process::{EnvironmentSnapshotProvider, LaunchRequest};
use crate::error::Result;

/// Argument 0 used when synthesizing a command line for a preview.
const PREVIEW_ARGUMENT_ZERO: &str = "shim";

/// A variable whose value differs between the inherited and final environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvChange {
    pub key: String,
    pub before: Option<String>,
    pub after: String,
}

/// What the shim would launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub target: String,
    pub command_line: String,
    pub inherit_handles: bool,
    pub inherits_environment: bool,
    pub changes: Vec<EnvChange>,
}

impl PlanReport {
    /// Describes `request` relative to the inherited block.
    #[must_use]
    pub fn new(target: String, request: &LaunchRequest, inherited: &EnvironmentBlock) -> Self {
        let inherits_environment = request.environment().is_empty();
        let changes = if inherits_environment {
            Vec::new()
        } else {
            diff(&inherited.decode(), &request.environment().decode())
        };

        Self {
            target,
            command_line: request.command_line().to_string(),
            inherit_handles: request.inherit_handles(),
            inherits_environment,
            changes,
        }
    }

    /// Renders the report as text lines.
    #[must_use]
    pub fn format(&self) -> Vec<String> {
        let mut lines = vec![
            format!("target           = {}", self.target),
            format!("command line     = {}", self.command_line),
            format!("inherit handles  = {}", self.inherit_handles),
        ];
        if self.inherits_environment {
            lines.push("environment      = inherited unchanged".to_string());
        } else {
            lines.push(format!("environment      = {} change(s)", self.changes.len()));
            for change in &self.changes {
                let before = change.before.as_deref().unwrap_or("<unset>");
                lines.push(format!("  {}: {} -> {}", change.key, before, change.after));
            }
        }
        lines
    }
}

/// Lists variables that are new or changed in `after`.
#[must_use]
pub fn diff(before: &Environment, after: &Environment) -> Vec<EnvChange> {
    after
        .iter()
        .filter_map(|(key, value)| {
            let previous = before.get(key);
            (previous != Some(value)).then(|| EnvChange {
                key: key.to_string(),
                before: previous.map(str::to_string),
                after: value.to_string(),
            })
        })
        .collect()
}

/// Renders override rules as text lines.
#[must_use]
pub fn format_rules(rules: &[OverrideRule]) -> Vec<String> {
    if rules.is_empty() {
        return vec!["no environment overrides".to_string()];
    }
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            format!(
                "{}. {} {} {:?}",
                i + 1,
                rule.key(),
                rule.method(),
                rule.value()
            )
        })
        .collect()
}

fn load_config(path: Option<&std::path::Path>) -> Result<ShimConfig> {
    match path {
        Some(path) => ShimConfig::from_file(path),
        None => ShimConfig::builder()
            .add_toml_file_optional(default_config_path()?)
            .build(),
    }
}

/// Handles `shimctl plan`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the report
/// cannot be serialized.
pub fn run_plan_command<E>(args: &PlanArgs, snapshot: &E) -> Result<()>
where
    E: EnvironmentSnapshotProvider + ?Sized,
{
    let config = load_config(args.config.as_deref())?;
    let raw = join_arguments(
        std::iter::once(PREVIEW_ARGUMENT_ZERO).chain(args.args.iter().map(String::as_str)),
    );

    let inherited = snapshot.snapshot();
    let request = plan_from_config(&config, &FixedSnapshot(&inherited), &raw);
    let report = PlanReport::new(config.executable_path(), &request, &inherited);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.format() {
            println!("{line}");
        }
    }
    Ok(())
}

/// Handles `shimctl rules`.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the rules
/// cannot be serialized.
pub fn run_rules_command(args: &RulesArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let rules = config.override_rules();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
    } else {
        for line in format_rules(&rules) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Snapshot provider returning an already captured block.
struct FixedSnapshot<'a>(&'a EnvironmentBlock);

impl EnvironmentSnapshotProvider for FixedSnapshot<'_> {
    fn snapshot(&self) -> EnvironmentBlock {
        self.0.clone()
    }
}
