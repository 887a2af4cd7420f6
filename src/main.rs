// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Console shim entry point.
//!
//! ```text
//! <exe>.toml --> plan --> launch target --> wait --> exit(child code)
//! ```
//!
//! Arguments are not parsed: everything after argument 0 is forwarded.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let code = shim_rs::run_from_environment();
    std::process::exit(code);
}
