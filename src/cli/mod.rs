// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI for `shimctl` using clap derive.
//!
//! The shim binaries themselves take no options of their own: every argument
//! is forwarded to the target. Only the companion tool parses arguments.
//!
//! # Command Structure
//!
//! ```text
//! shimctl [global options] <command>
//! plan [-c FILE] [--json] [-- args...]
//! rules [-c FILE] [--json]
//! version
//! ```

pub mod global;
pub mod plan;


use crate::cli::global::GlobalOptions;
use crate::cli::plan::{PlanArgs, RulesArgs};
use clap::{Parser, Subcommand};

/// Process Launch Shim companion tool
///
/// Inspects shim configuration files without launching anything.
#[derive(Debug, Parser)]
#[command(
    name = "shimctl",
    author,
    version,
    about = "Process Launch Shim companion tool",
    long_about = "shim-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Shows what a shim would launch for a given configuration.",
    after_help = "CONFIG FILES:\n\n\
                  A shim named `app.exe` reads `app.toml` next to itself. Without\n\
                  --config, shimctl reads the TOML file named after its own\n\
                  executable the same way."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Shows the command line and environment a shim would launch with.
    Plan(PlanArgs),

    /// Lists the environment override rules in application order.
    Rules(RulesArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
