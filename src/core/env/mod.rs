// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! inherited EnvironmentBlock --decode--> Environment (ordered Vec)
//!                                            |
//!                                   apply_overrides(rules)
//!                                            |
//!                 final EnvironmentBlock <--encode
//! ```
//!
//! - **Case-insensitive keys**, original casing preserved
//! - **Order-preserving**: untouched entries keep their place, new ones append
//! - **UTF-8 internal**: UTF-16 only at the block boundary

pub mod block;
pub mod container;
pub mod overrides;
pub mod types;


pub use block::EnvironmentBlock;
pub use container::Environment;
pub use overrides::apply_overrides;
pub use types::{EnvironmentEntry, OverrideMethod, OverrideRule};

/// Encodes the current process environment, in `std::env::vars_os` order.
///
/// Used on hosts that do not expose a native environment block.
#[must_use]
pub fn current_env_block() -> EnvironmentBlock {
    let env = Environment::from_pairs(std::env::vars_os().map(|(k, v)| {
        (
            k.to_string_lossy().into_owned(),
            v.to_string_lossy().into_owned(),
        )
    }));
    EnvironmentBlock::encode(&env)
}
