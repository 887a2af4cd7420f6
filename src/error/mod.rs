// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!     ShimError (16 bytes)
//!           |
//!      +----+----+
//!      |         |
//!      v         v
//!    Cfg      Launch
//!    Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Config  ParseError, InvalidValue
//!   Launch  SpawnFailed, WaitFailed
//! ```
//!
//! The transformation core (tokenizer, builder, codec, override engine) is
//! total and never produces these errors. Only loading the configuration and
//! creating the child process can fail.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ShimError`].
pub type ShimResult<T> = std::result::Result<T, ShimError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum pointer-sized plus a tag.
#[derive(Debug, Error)]
pub enum ShimError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process launch error.
    #[error("launch error: {0}")]
    Launch(#[from] Box<LaunchError>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ShimError {
                fn from(err: $error) -> Self {
                    ShimError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    LaunchError => Launch,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Launch Errors ---

/// Child process creation and supervision errors.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The OS refused to create the child process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting for the child process failed.
    #[error("failed to wait for child process: {source}")]
    WaitFailed {
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Exit code the shim reports for this failure.
    ///
    /// This is the raw OS error code of the failed call, or 1 when the OS did
    /// not provide one.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        let source = match self {
            Self::SpawnFailed { source, .. } | Self::WaitFailed { source } => source,
        };
        source.raw_os_error().unwrap_or(1)
    }
}

#[cfg(test)]
mod tests;
