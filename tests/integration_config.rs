// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the config module with realistic shim configuration files.

use std::path::Path;

use shim_rs::config::{ConfigProvider, ShimConfig, config_path_for};
use shim_rs::core::env::OverrideMethod;

fn rules_summary(config: &ShimConfig) -> Vec<(String, String, OverrideMethod)> {
    config
        .override_rules()
        .into_iter()
        .map(|r| (r.key().to_string(), r.value().to_string(), r.method()))
        .collect()
}

// =============================================================================
// Files next to the executable
// =============================================================================

#[test]
fn config_for_executable_reads_sibling_toml() {
    let dir = tempfile::tempdir().unwrap();
    let exe = dir.path().join("tool.exe");
    std::fs::write(
        dir.path().join("tool.toml"),
        r"
[Executable]
Path = 'C:\Program Files\Tool\tool.exe'

[EnvironmentVariable0]
Key = 'PATH'
Value = 'C:\Program Files\Tool\bin;'
Method = 'InsertBefore'
",
    )
    .unwrap();

    let config = ShimConfig::for_executable(&exe).unwrap();

    assert_eq!(config.executable_path(), r"C:\Program Files\Tool\tool.exe");
    assert_eq!(
        rules_summary(&config),
        vec![(
            "PATH".to_string(),
            r"C:\Program Files\Tool\bin;".to_string(),
            OverrideMethod::InsertBefore
        )]
    );
}

#[test]
fn config_for_executable_without_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = ShimConfig::for_executable(&dir.path().join("lonely")).unwrap();

    assert_eq!(config.executable_path(), "");
    assert!(config.override_rules().is_empty());
    assert!(config.inherit_handles());
}

#[test]
fn config_for_executable_with_broken_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.toml"), "[Executable\nPath = 1").unwrap();
    assert!(ShimConfig::for_executable(&dir.path().join("broken.exe")).is_err());
}

#[test]
fn config_from_file_requires_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ShimConfig::from_file(dir.path().join("missing.toml")).is_err());
}

#[test]
fn config_path_replaces_extension() {
    assert_eq!(
        config_path_for(Path::new("/opt/tools/app.exe")),
        Path::new("/opt/tools/app.toml")
    );
    assert_eq!(
        config_path_for(Path::new("/opt/tools/app")),
        Path::new("/opt/tools/app.toml")
    );
}

// =============================================================================
// Rule enumeration
// =============================================================================

#[test]
fn config_rules_follow_file_order() {
    let toml = r#"
[EnvironmentVariableZ]
Key = "FIRST"
Value = "1"

[Executable]
Path = "/usr/bin/env"

[environmentvariable_a]
Key = "SECOND"
Value = "2"
Method = 3

[EnvironmentVariableSkipped]
Value = "no key"

[EnvironmentVariableM]
Key = "THIRD"
Method = "insertafter"
"#;
    let config = ShimConfig::parse(toml).unwrap();

    assert_eq!(
        rules_summary(&config),
        vec![
            ("FIRST".to_string(), "1".to_string(), OverrideMethod::PreserveExisting),
            ("SECOND".to_string(), "2".to_string(), OverrideMethod::Overwrite),
            ("THIRD".to_string(), String::new(), OverrideMethod::InsertAfter),
        ]
    );
}

#[test]
fn config_inherit_handles_flag() {
    let config = ShimConfig::parse("[Executable]\nInheritHandles = false\n").unwrap();
    assert!(!config.inherit_handles());

    let err = ShimConfig::parse("[Executable]\nInheritHandles = \"sometimes\"\n").unwrap_err();
    assert!(format!("{err:#}").contains("InheritHandles"));
}
