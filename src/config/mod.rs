// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shim configuration.
//!
//! # Location
//!
//! ```text
//! C:\Tools\app.exe  -->  C:\Tools\app.toml   (missing file = empty config)
//! ```
//!
//! # Layout
//!
//! ```toml
//! [Executable]
//! Path = 'C:\Tools\real\app.exe'
//! InheritHandles = true            # optional, default true
//!
//! [EnvironmentVariable1]           # any section starting with EnvironmentVariable
//! Key = "PATH"
//! Value = 'C:\Tools\real\bin;'
//! Method = "InsertBefore"          # or 0..3, default PreserveExisting
//! ```
//!
//! Section and field names match case-insensitively. Sections keep file
//! order, which is the order overrides are applied in.

pub mod loader;
pub mod rules;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use crate::core::env::OverrideRule;
use crate::error::{ConfigError, Result, ShimResult};

use loader::ConfigLoader;

/// Section holding the target executable settings.
pub const EXECUTABLE_SECTION: &str = "Executable";

/// Read access to persisted shim settings.
///
/// Implementations only expose raw text; interpretation (defaults, method
/// parsing, rule enumeration) lives in the provided methods.
pub trait ConfigProvider {
    /// Returns section names in declaration order.
    fn section_names(&self) -> Vec<String>;

    /// Reads a field as text, or None if the section or field is absent.
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    /// Returns `[Executable] Path`, empty when unset.
    fn executable_path(&self) -> String {
        self.get_string(EXECUTABLE_SECTION, "Path")
            .unwrap_or_default()
    }

    /// Returns `[Executable] InheritHandles`, true when unset or unreadable.
    fn inherit_handles(&self) -> bool {
        self.get_string(EXECUTABLE_SECTION, "InheritHandles")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true)
    }

    /// Returns the environment override rules in declaration order.
    fn override_rules(&self) -> Vec<OverrideRule> {
        rules::read_override_rules(self)
    }
}

/// Parses a boolean setting, returning None if unrecognized.
#[must_use]
pub fn parse_flag(text: &str) -> Option<bool> {
    let text = text.trim();
    if ["true", "yes", "1"].iter().any(|t| text.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if ["false", "no", "0"].iter().any(|t| text.eq_ignore_ascii_case(t)) {
        Some(false)
    } else {
        None
    }
}

/// One configuration section with its fields as text, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    fields: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the first field matching `key` case-insensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Loaded shim configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShimConfig {
    sections: Vec<Section>,
}

impl ShimConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shim_rs::config::ShimConfig;
    ///
    /// let config = ShimConfig::builder()
    ///     .add_toml_file_optional("app.toml")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Creates a configuration from sections, in order.
    #[must_use]
    pub const fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Load configuration from a single TOML file, which must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// holds an invalid value.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or holds an invalid value.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Loads the configuration that sits next to `exe`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn for_executable(exe: &Path) -> Result<Self> {
        Self::builder()
            .add_toml_file_optional(config_path_for(exe))
            .build()
    }

    /// Returns the first section matching `name` case-insensitively.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Checks values that have a fixed format.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `[Executable] InheritHandles`
    /// is not a boolean.
    pub fn validate(&self) -> ShimResult<()> {
        if let Some(value) = self.get_string(EXECUTABLE_SECTION, "InheritHandles")
            && parse_flag(&value).is_none()
        {
            return Err(ConfigError::InvalidValue {
                section: EXECUTABLE_SECTION.to_string(),
                key: "InheritHandles".to_string(),
                message: format!("expected a boolean, got '{value}'"),
            }
            .into());
        }
        Ok(())
    }
}

impl ConfigProvider for ShimConfig {
    fn section_names(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name().to_string()).collect()
    }

    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.section(section)
            .and_then(|s| s.get(key))
            .map(str::to_string)
    }
}

/// Returns the configuration path for an executable: same stem, `.toml`.
#[must_use]
pub fn config_path_for(exe: &Path) -> PathBuf {
    exe.with_extension("toml")
}

/// Returns the configuration path of the running executable.
///
/// # Errors
///
/// Returns an error if the path of the running executable cannot be determined.
pub fn default_config_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(config_path_for(&exe))
}
