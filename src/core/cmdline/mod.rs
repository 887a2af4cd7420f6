// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command-line tokenization and reassembly.
//!
//! ```text
//! raw command line  "C:\shim.exe"  --flag  value
//!        |
//!        v
//! split_first_argument()  --> remainder "--flag  value"
//!        |
//!        v
//! CommandLine::build(target, remainder)
//!        |
//!        v
//! "C:\real.exe" --flag  value\0   (owned, mutable, NUL-terminated)
//! ```
//!
//! Argument 0 follows the native process-creation rules: a quoted token ends
//! at the first unescaped quote, an unquoted token ends at whitespace. Only
//! argument 0 is interpreted; the remainder is forwarded byte for byte apart
//! from control-character normalization.

pub mod builder;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use builder::CommandLine;
pub use tokenizer::{
    ArgumentSplit, join_arguments, quote_argument, split_arguments, split_command_line,
    split_first_argument,
};
