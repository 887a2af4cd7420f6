// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Portable host implementation over `std::process`.
//!
//! ```text
//! args_os --quote_argument/join--> raw command line
//! vars_os --encode--> EnvironmentBlock
//! CommandLine --split_command_line--> target (quotes stripped)
//!             + remainder --split_arguments--> argv --> Command::status()
//!   exit code | 128 + signal
//! ```
//!
//! There is no native command-line string here, so the built command line is
//! split back into argv with the same quoting rules used to synthesize it.

use std::process::{Command, ExitStatus};

use tracing::{debug, trace};

use super::{EnvironmentSnapshotProvider, LaunchRequest, ProcessLauncher, SystemHost};
use crate::core::cmdline::{join_arguments, split_arguments, split_command_line};
use crate::core::env::{EnvironmentBlock, current_env_block};
use crate::error::LaunchError;

pub(super) fn current_command_line() -> String {
    join_arguments(std::env::args_os().map(|a| a.to_string_lossy().into_owned()))
}

impl EnvironmentSnapshotProvider for SystemHost {
    fn snapshot(&self) -> EnvironmentBlock {
        current_env_block()
    }
}

impl ProcessLauncher for SystemHost {
    fn launch(&self, request: LaunchRequest) -> Result<i32, LaunchError> {
        let (command_line, environment, inherit_handles) = request.into_parts();
        let shown = command_line.to_string();
        debug!(cmd = %shown, custom_env = !environment.is_empty(), "exec");
        trace!(inherit_handles, "handle inheritance follows close-on-exec here");

        let (program, args) = to_argv(command_line.as_str());
        let mut command = Command::new(program);
        command.args(args);

        if !environment.is_empty() {
            let env = environment.decode();
            command
                .env_clear()
                .envs(env.iter().filter(|(key, _)| !key.is_empty()));
        }

        let status = command.status().map_err(|source| LaunchError::SpawnFailed {
            command: shown,
            source,
        })?;

        let code = exit_code(status);
        trace!(exit_code = code, "completed");
        Ok(code)
    }
}

/// Splits a built command line into the program and its arguments.
///
/// The target is only wrapped in quotes, never escaped, so it is taken
/// verbatim; only the remainder goes through [`split_arguments`].
pub(super) fn to_argv(command_line: &str) -> (String, Vec<String>) {
    let split = split_command_line(command_line);
    let program = split
        .first
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(split.first);
    (program.to_string(), split_arguments(split.remainder))
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt as _;
    status
        .code()
        .unwrap_or_else(|| status.signal().map_or(1, |signal| 128 + signal))
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
