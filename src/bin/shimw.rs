// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Windowed shim entry point.
//!
//! Same behavior as `shim`, built for the GUI subsystem so no console window
//! appears when it starts a GUI target.

#![cfg_attr(windows, windows_subsystem = "windows")]

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    let code = shim_rs::run_from_environment();
    std::process::exit(code);
}
