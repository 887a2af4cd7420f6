// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for `plan` and `rules`.

use clap::Args;
use std::path::PathBuf;

/// Arguments for `shimctl plan`.
#[derive(Debug, Clone, Default, Args)]
pub struct PlanArgs {
    /// Configuration file to read instead of the default one.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Prints the plan as JSON.
    #[arg(long)]
    pub json: bool,

    /// Arguments the shim would be invoked with.
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Arguments for `shimctl rules`.
#[derive(Debug, Clone, Default, Args)]
pub struct RulesArgs {
    /// Configuration file to read instead of the default one.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Prints the rules as JSON.
    #[arg(long)]
    pub json: bool,
}
