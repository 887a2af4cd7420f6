// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment block codec.
//!
//! ```text
//! K1=V1\0K2=V2\0...\0    UTF-16, as CreateProcessW / GetEnvironmentStringsW
//!
//! decode: record -> (text before first '=', text after it)
//!         no '='  -> (record, "")
//!         stops at the first empty record
//! encode: empty Environment -> empty block (= inherit)
//! ```

use super::container::Environment;

const NUL: u16 = 0;
const EQUALS: u16 = b'=' as u16;

/// An encoded environment block.
///
/// An empty block is not an empty environment: it tells the launcher to let
/// the child inherit the caller's environment unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentBlock {
    units: Vec<u16>,
}

impl EnvironmentBlock {
    /// The empty block, meaning "inherit the caller's environment".
    #[must_use]
    pub const fn inherit() -> Self {
        Self { units: Vec::new() }
    }

    /// Wraps raw UTF-16 code units.
    #[must_use]
    pub const fn from_wide(units: Vec<u16>) -> Self {
        Self { units }
    }

    /// Copies a block out of a slice that may extend past the terminator.
    ///
    /// Only the records up to and including the double NUL are kept.
    #[must_use]
    pub fn from_wide_terminated(units: &[u16]) -> Self {
        let end = units
            .windows(2)
            .position(|pair| pair == [NUL, NUL])
            .map_or(units.len(), |at| at + 2);
        Self::from_wide(units[..end].to_vec())
    }

    /// Encodes an environment into a block.
    #[must_use]
    pub fn encode(env: &Environment) -> Self {
        if env.is_empty() {
            return Self::inherit();
        }

        let mut units = Vec::new();
        for (key, value) in env.iter() {
            units.extend(key.encode_utf16());
            units.push(EQUALS);
            units.extend(value.encode_utf16());
            units.push(NUL);
        }
        units.push(NUL);

        Self { units }
    }

    /// Decodes the block into an ordered environment.
    ///
    /// Malformed records never fail: a record without `=` becomes a key with
    /// an empty value, and invalid UTF-16 is replaced lossily.
    #[must_use]
    pub fn decode(&self) -> Environment {
        let mut env = Environment::new();
        for record in self.units.split(|&u| u == NUL) {
            if record.is_empty() {
                break;
            }
            let (key, value) = record
                .iter()
                .position(|&u| u == EQUALS)
                .map_or((record, &[][..]), |at| (&record[..at], &record[at + 1..]));
            env.push(
                String::from_utf16_lossy(key),
                String::from_utf16_lossy(value),
            );
        }
        env
    }

    /// Returns true for the "inherit" block.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[must_use]
    pub fn as_wide(&self) -> &[u16] {
        &self.units
    }

    #[must_use]
    pub fn into_wide(self) -> Vec<u16> {
        self.units
    }
}

impl From<&Environment> for EnvironmentBlock {
    fn from(env: &Environment) -> Self {
        Self::encode(env)
    }
}
