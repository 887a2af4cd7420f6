// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command line builder.
//!
//! ```text
//! CommandLine::build(target, remainder)
//!   "<target>"              remainder empty
//!   "<target>" <remainder>  otherwise
//!   \t \r \n --> ' '
//!   + '\0'
//! ```

use super::tokenizer::split_first_argument;

/// A command line ready for process creation.
///
/// The buffer always ends with an embedded NUL. `CreateProcessW` may rewrite
/// the buffer in place, so callers take ownership of a mutable copy through
/// [`CommandLine::into_wide`] rather than borrowing read-only text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    buffer: String,
}

impl CommandLine {
    /// Builds `"<target>" <remainder>` followed by a NUL.
    ///
    /// The target is wrapped in quotes without any escaping, so it must not
    /// itself contain unescaped quotes.
    #[must_use]
    pub fn build(target: &str, remainder: &str) -> Self {
        let mut buffer = String::with_capacity(target.len() + remainder.len() + 4);
        buffer.push('"');
        buffer.push_str(target);
        buffer.push('"');
        if !remainder.is_empty() {
            buffer.push(' ');
            buffer.push_str(remainder);
        }

        let mut buffer: String = buffer
            .chars()
            .map(|c| if matches!(c, '\t' | '\r' | '\n') { ' ' } else { c })
            .collect();
        buffer.push('\0');

        Self { buffer }
    }

    /// Builds a command line for `target` from a raw command line whose
    /// argument 0 is replaced.
    #[must_use]
    pub fn from_raw(target: &str, raw: &str) -> Self {
        Self::build(target, split_first_argument(raw))
    }

    /// Returns the visible text without the trailing NUL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.buffer.strip_suffix('\0').unwrap_or(&self.buffer)
    }

    /// Returns the full buffer including the trailing NUL.
    #[must_use]
    pub fn as_str_with_nul(&self) -> &str {
        &self.buffer
    }

    /// Consumes the command line into a mutable, NUL-terminated UTF-16 buffer.
    #[must_use]
    pub fn into_wide(self) -> Vec<u16> {
        self.buffer.encode_utf16().collect()
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
