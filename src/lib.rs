// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!      shim / shimw              shimctl
//!           |                       |
//!           |                  cli (clap)
//!           |                       |
//!           +----------+------------+
//!                      v
//!               cmd (handlers)
//!              launch / plan
//!                      |
//!        ,-------------+-------------,
//!        |           config          |
//!        |  <exe>.toml, rule reader  |
//!        '-------------+-------------'
//!                      v
//!   +-----------------------------------------+
//!   |  core   cmdline, env, process           |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;

use crate::cmd::launch::run_shim;
use crate::config::ShimConfig;
use crate::core::process::SystemHost;
use crate::logging::{LogConfig, init_logging};

/// Exit code reported when the shim cannot start at all.
pub const SHIM_FAILURE: i32 = 1;

/// Runs a shim binary against the real host and returns its exit code.
///
/// Reads `<current exe>.toml`, forwards the process command line and waits
/// for the target. Setup failures are printed to stderr and reported as
/// [`SHIM_FAILURE`].
#[must_use]
pub fn run_from_environment() -> i32 {
    let _log_guard = match init_logging(&LogConfig::from_env()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return SHIM_FAILURE;
        }
    };

    let config = match std::env::current_exe()
        .map_err(anyhow::Error::from)
        .and_then(|exe| ShimConfig::for_executable(&exe))
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("shim: {e:#}");
            return SHIM_FAILURE;
        }
    };

    let host = SystemHost;
    run_shim(&config, &host, &host, &host.command_line())
}
