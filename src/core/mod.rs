// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for command lines, environments and process launch.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     v         v         v
//!  cmdline     env     process
//!     |         |         |
//!  tokenizer  Environment  LaunchRequest
//!  builder    Block codec  SystemHost
//!             overrides    (Win32 | std::process)
//! ```

pub mod cmdline;
pub mod env;
pub mod process;
