// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! shim / shimw --> launch::run_shim
//! shimctl plan --> plan::run_plan_command
//! shimctl rules --> plan::run_rules_command
//! ```

pub mod launch;
pub mod plan;
