// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .set()
//!        |
//!        v
//!    build() --> collect (ordered) --> sections --> validate --> ShimConfig
//! ```

use std::path::PathBuf;

use config::{Source as _, Value};
use tracing::{debug, trace};

use super::{Section, ShimConfig};
use crate::error::{ConfigError, Result};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        } else {
            debug!(path = %p.display(), "no config file");
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Sets a configuration override, such as `Executable.Path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// Top-level values that are not tables are ignored, as are fields that
    /// cannot be read as text (nested tables, arrays).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - A value with a fixed format is invalid.
    pub fn build(self) -> Result<ShimConfig> {
        let origin = self.origin();
        let parse_error = |e: config::ConfigError| ConfigError::ParseError {
            path: origin.clone(),
            message: e.to_string(),
        };
        let root = self
            .builder
            .build()
            .and_then(|cfg| cfg.collect())
            .map_err(parse_error)?;

        let sections = root
            .into_iter()
            .filter_map(|(name, value)| read_section(name, value))
            .collect();

        let config = ShimConfig::from_sections(sections);
        config.validate()?;
        Ok(config)
    }

    fn origin(&self) -> String {
        self.files
            .last()
            .map_or_else(|| "<none>".to_string(), |(_, p)| p.display().to_string())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn read_section(name: String, value: Value) -> Option<Section> {
    let Ok(table) = value.into_table() else {
        trace!(key = %name, "ignoring top-level value");
        return None;
    };

    let mut section = Section::new(name);
    for (key, field) in table {
        match field.into_string() {
            Ok(text) => section = section.with(key, text),
            Err(_) => trace!(section = section.name(), key = %key, "ignoring non-scalar field"),
        }
    }
    Some(section)
}
