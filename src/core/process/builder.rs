// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launch request.
//!
//! ```text
//! LaunchRequest::builder()
//!   .with_command_line(CommandLine)     required
//!   .with_environment(EnvironmentBlock) default: empty (inherit)
//!   .with_inherit_handles(bool)         default: true
//!   .build()
//! ```

use bon::Builder;

use crate::core::cmdline::CommandLine;
use crate::core::env::EnvironmentBlock;

/// Everything the launcher needs to start the child process.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct LaunchRequest {
    #[builder(setters(name = with_command_line))]
    command_line: CommandLine,
    #[builder(setters(name = with_environment), default)]
    environment: EnvironmentBlock,
    #[builder(setters(name = with_inherit_handles), default = true)]
    inherit_handles: bool,
}

impl LaunchRequest {
    #[must_use]
    pub const fn command_line(&self) -> &CommandLine {
        &self.command_line
    }

    /// Returns the environment block; empty means inherit.
    #[must_use]
    pub const fn environment(&self) -> &EnvironmentBlock {
        &self.environment
    }

    /// Returns whether inheritable handles pass to the child.
    #[must_use]
    pub const fn inherit_handles(&self) -> bool {
        self.inherit_handles
    }

    /// Splits the request into owned parts for the OS call.
    #[must_use]
    pub fn into_parts(self) -> (CommandLine, EnvironmentBlock, bool) {
        (self.command_line, self.environment, self.inherit_handles)
    }
}
