// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Argument tokenizer.
//!
//! ```text
//! split_command_line(raw)
//!   skip whitespace
//!   '"' ... '"'   backslash skips the next char, unterminated = whole rest
//!   otherwise     up to next whitespace
//!   skip whitespace, trim trailing whitespace
//!   --> ArgumentSplit { first, remainder }
//! ```

/// Whitespace recognized between arguments.
const SEPARATORS: [char; 4] = [' ', '\t', '\r', '\n'];

const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Argument 0 and everything after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentSplit<'a> {
    /// Argument 0 exactly as it appears, quotes included.
    pub first: &'a str,
    /// Remaining arguments with surrounding whitespace trimmed.
    pub remainder: &'a str,
}

impl<'a> ArgumentSplit<'a> {
    /// Splits `raw` into argument 0 and the remainder.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let rest = raw.trim_start_matches(SEPARATORS);

        let first_len = if let Some(quoted) = rest.strip_prefix('"') {
            // Unterminated quote: argument 0 swallows everything.
            closing_quote(quoted).map_or(rest.len(), |at| at + 2)
        } else {
            rest.find(SEPARATORS).unwrap_or(rest.len())
        };

        let (first, remainder) = rest.split_at(first_len);
        Self {
            first: first.trim_end_matches(SEPARATORS),
            remainder: remainder.trim_matches(SEPARATORS),
        }
    }

    /// Returns true if any argument follows argument 0.
    #[must_use]
    pub const fn has_remainder(&self) -> bool {
        !self.remainder.is_empty()
    }
}

/// Splits a raw command line into argument 0 and the remainder.
#[must_use]
pub fn split_command_line(raw: &str) -> ArgumentSplit<'_> {
    ArgumentSplit::parse(raw)
}

/// Strips argument 0 from a raw command line and returns the rest.
///
/// # Example
///
/// ```
/// use shim_rs::core::cmdline::split_first_argument;
///
/// assert_eq!(split_first_argument(r#""C:\app.exe" --flag value"#), "--flag value");
/// assert_eq!(split_first_argument("app.exe"), "");
/// ```
#[must_use]
pub fn split_first_argument(raw: &str) -> &str {
    split_command_line(raw).remainder
}

/// Byte offset of the first unescaped `"` in `quoted`.
fn closing_quote(quoted: &str) -> Option<usize> {
    let mut chars = quoted.char_indices();
    while let Some((at, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' => return Some(at),
            _ => {}
        }
    }
    None
}

/// Splits a command line into individual arguments.
///
/// Whitespace separates arguments. A `"` toggles quoting and is dropped;
/// inside quotes a backslash escapes the next character, outside quotes it is
/// kept literally so that bare Windows paths survive.
#[must_use]
pub fn split_arguments(text: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            '\\' if quoted => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            c if is_separator(c) && !quoted => {
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        args.push(current);
    }
    args
}

/// Quotes a single argument so that [`split_arguments`] reads it back intact.
#[must_use]
pub fn quote_argument(arg: &str) -> String {
    let needs_quotes = arg.is_empty() || arg.contains(|c: char| is_separator(c) || c == '"');
    if !needs_quotes {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for c in arg.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Joins arguments into a single command line with [`quote_argument`].
#[must_use]
pub fn join_arguments<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for arg in args {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&quote_argument(arg.as_ref()));
    }
    line
}
