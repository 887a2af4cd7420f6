// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launch planning and execution.
//!
//! ```text
//! run_shim(config, snapshot, launcher, raw)
//!   target  = config.executable_path()
//!   rules   = config.override_rules()
//!   request = plan_launch(target, raw, snapshot.snapshot(), rules)
//!               command line: CommandLine::from_raw
//!               environment:  rules empty --> inherit
//!                             otherwise   --> decode, apply, encode
//!   launcher.launch(request) --> child exit code | OS error code
//! ```

use tracing::{debug, error, info_span, warn};

use crate::config::ConfigProvider;
use crate::core::cmdline::CommandLine;
use crate::core::env::{EnvironmentBlock, OverrideRule, apply_overrides};
use crate::core::process::{EnvironmentSnapshotProvider, LaunchRequest, ProcessLauncher};

/// Builds the launch request for `target`.
///
/// The inherited block is only decoded when there is at least one rule;
/// without rules the child inherits the environment unchanged.
#[must_use]
pub fn plan_launch(
    target: &str,
    raw_command_line: &str,
    inherited: &EnvironmentBlock,
    rules: &[OverrideRule],
    inherit_handles: bool,
) -> LaunchRequest {
    let command_line = CommandLine::from_raw(target, raw_command_line);

    let environment = if rules.is_empty() {
        EnvironmentBlock::inherit()
    } else {
        let env = apply_overrides(rules, inherited.decode());
        debug!(variables = env.len(), rules = rules.len(), "environment overridden");
        EnvironmentBlock::encode(&env)
    };

    LaunchRequest::builder()
        .with_command_line(command_line)
        .with_environment(environment)
        .with_inherit_handles(inherit_handles)
        .build()
}

/// Builds the launch request from a configuration provider.
pub fn plan_from_config<C, E>(config: &C, snapshot: &E, raw_command_line: &str) -> LaunchRequest
where
    C: ConfigProvider + ?Sized,
    E: EnvironmentSnapshotProvider + ?Sized,
{
    let target = config.executable_path();
    if target.is_empty() {
        warn!("no target executable configured ([Executable] Path)");
    }

    let rules = config.override_rules();
    let inherited = if rules.is_empty() {
        EnvironmentBlock::inherit()
    } else {
        snapshot.snapshot()
    };

    plan_launch(
        &target,
        raw_command_line,
        &inherited,
        &rules,
        config.inherit_handles(),
    )
}

/// Runs the shim once and returns the exit code to report.
///
/// This is the child's exit code, or the OS error code if the child could
/// not be started.
pub fn run_shim<C, E, L>(config: &C, snapshot: &E, launcher: &L, raw_command_line: &str) -> i32
where
    C: ConfigProvider + ?Sized,
    E: EnvironmentSnapshotProvider + ?Sized,
    L: ProcessLauncher + ?Sized,
{
    let span = info_span!("shim");
    let _enter = span.enter();

    let request = plan_from_config(config, snapshot, raw_command_line);
    match launcher.launch(request) {
        Ok(code) => {
            debug!(exit_code = code, "child exited");
            code
        }
        Err(e) => {
            error!(error = %e, "launch failed");
            e.exit_code()
        }
    }
}
