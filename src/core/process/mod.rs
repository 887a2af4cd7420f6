// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host collaborators: environment snapshot and child process launch.
//!
//! ```text
//! SystemHost
//!   command_line()  Windows: GetCommandLineW
//!                   other:   args_os joined with quote_argument
//!   snapshot()      Windows: GetEnvironmentStringsW
//!                   other:   vars_os encoded as a block
//!   launch(req)     Windows: CreateProcessW + WaitForSingleObject(INFINITE)
//!                   other:   std::process::Command::status()
//!       --> child exit code | LaunchError (OS error code)
//! ```
//!
//! The launch is attempted once and waited on without timeout.

pub mod builder;
#[cfg(not(windows))]
mod portable;
#[cfg(windows)]
mod windows;

pub use builder::LaunchRequest;

use crate::core::env::EnvironmentBlock;
use crate::error::LaunchError;

/// Source of the inherited environment.
pub trait EnvironmentSnapshotProvider {
    /// Captures the current environment as a block.
    fn snapshot(&self) -> EnvironmentBlock;
}

/// Starts the child process and waits for it.
pub trait ProcessLauncher {
    /// Launches the request and returns the child's exit code.
    ///
    /// # Errors
    ///
    /// Returns a `LaunchError` if the process could not be created or waited on.
    fn launch(&self, request: LaunchRequest) -> Result<i32, LaunchError>;
}

/// The running operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl SystemHost {
    /// Returns the raw command line of the current process, argument 0 included.
    #[must_use]
    pub fn command_line(&self) -> String {
        #[cfg(windows)]
        {
            windows::current_command_line()
        }
        #[cfg(not(windows))]
        {
            portable::current_command_line()
        }
    }
}
