// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::rules::{is_rule_section, read_override_rules};
use super::{ConfigProvider, Section, ShimConfig, config_path_for, parse_flag};
use crate::core::env::{OverrideMethod, OverrideRule};
use crate::error::ConfigError;

fn rule(key: &str, value: &str, method: OverrideMethod) -> OverrideRule {
    OverrideRule::new(key, value, method)
}

// =============================================================================
// Rule enumeration (in-memory provider)
// =============================================================================

#[test]
fn test_rules_follow_section_order() {
    let config = ShimConfig::from_sections(vec![
        Section::new("EnvironmentVariable2")
            .with("Key", "B")
            .with("Value", "2"),
        Section::new("Executable").with("Path", r"C:\real.exe"),
        Section::new("EnvironmentVariable1")
            .with("Key", "A")
            .with("Value", "1")
            .with("Method", "Overwrite"),
    ]);

    assert_eq!(
        config.override_rules(),
        vec![
            rule("B", "2", OverrideMethod::PreserveExisting),
            rule("A", "1", OverrideMethod::Overwrite),
        ]
    );
}

#[test]
fn test_rules_skip_sections_without_key() {
    let config = ShimConfig::from_sections(vec![
        Section::new("EnvironmentVariableNoKey").with("Value", "x"),
        Section::new("EnvironmentVariableEmptyKey")
            .with("Key", "")
            .with("Value", "y"),
        Section::new("EnvironmentVariableOk").with("Key", "OK"),
    ]);

    assert_eq!(
        read_override_rules(&config),
        vec![rule("OK", "", OverrideMethod::PreserveExisting)]
    );
}

#[test]
fn test_rule_fields_are_case_insensitive() {
    let config = ShimConfig::from_sections(vec![
        Section::new("environmentvariable_path")
            .with("key", "PATH")
            .with("VALUE", r"C:\bin;")
            .with("method", "1"),
    ]);

    assert_eq!(
        config.override_rules(),
        vec![rule("PATH", r"C:\bin;", OverrideMethod::InsertBefore)]
    );
}

#[test]
fn test_is_rule_section() {
    assert!(is_rule_section("EnvironmentVariable"));
    assert!(is_rule_section("ENVIRONMENTVARIABLE01"));
    assert!(!is_rule_section("Environment"));
    assert!(!is_rule_section("Executable"));
    assert!(!is_rule_section("XEnvironmentVariable"));
    assert!(!is_rule_section("Environmentvariablé"));
}

#[test]
fn test_executable_defaults() {
    let config = ShimConfig::default();
    assert_eq!(config.executable_path(), "");
    assert!(config.inherit_handles());
    assert!(config.override_rules().is_empty());
}

#[test]
fn test_parse_flag() {
    assert_eq!(parse_flag("true"), Some(true));
    assert_eq!(parse_flag(" YES "), Some(true));
    assert_eq!(parse_flag("0"), Some(false));
    assert_eq!(parse_flag("False"), Some(false));
    assert_eq!(parse_flag("maybe"), None);
}

#[test]
fn test_config_path_for() {
    assert_eq!(
        config_path_for(Path::new("tools/app.exe")),
        Path::new("tools/app.toml")
    );
    assert_eq!(config_path_for(Path::new("tools/app")), Path::new("tools/app.toml"));
}

// =============================================================================
// TOML loading
// =============================================================================

#[test]
fn test_config_parse() {
    let toml = r#"
[Executable]
Path = 'C:\Tools\real\app.exe'

[EnvironmentVariable1]
Key = "PATH"
Value = 'C:\Tools\real\bin;'
Method = "InsertBefore"

[EnvironmentVariable2]
Key = "APP_MODE"
Value = "portable"
Method = 3
"#;
    let config = ShimConfig::parse(toml).unwrap();

    assert_eq!(config.executable_path(), r"C:\Tools\real\app.exe");
    assert!(config.inherit_handles());
    assert_eq!(
        config.override_rules(),
        vec![
            rule("PATH", r"C:\Tools\real\bin;", OverrideMethod::InsertBefore),
            rule("APP_MODE", "portable", OverrideMethod::Overwrite),
        ]
    );
}

#[test]
fn test_config_parse_inherit_handles() {
    let config = ShimConfig::parse("[Executable]\nPath = 'a.exe'\nInheritHandles = false\n").unwrap();
    assert!(!config.inherit_handles());
}

#[test]
fn test_config_parse_rejects_bad_inherit_handles() {
    let err = ShimConfig::parse("[Executable]\nInheritHandles = 'sometimes'\n").unwrap_err();
    assert!(
        err.to_string().contains("InheritHandles"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_config_parse_invalid_toml() {
    let err = ShimConfig::parse("[Executable\nPath = ").unwrap_err();
    let Some(ConfigError::ParseError { path, .. }) = err.downcast_ref::<ConfigError>() else {
        panic!("expected a parse error, got {err:#}");
    };
    assert_eq!(path, "<string>");
}

#[test]
fn test_config_missing_required_file_names_the_file() {
    let err = ShimConfig::from_file("/nonexistent/shim.toml").unwrap_err();
    let Some(ConfigError::ParseError { path, .. }) = err.downcast_ref::<ConfigError>() else {
        panic!("expected a parse error, got {err:#}");
    };
    assert_eq!(path, "/nonexistent/shim.toml");
}

#[test]
fn test_config_ignores_top_level_values_and_nested_tables() {
    let toml = r#"
stray = 1

[Executable]
Path = "a.exe"
Nested = { inner = 1 }
"#;
    let config = ShimConfig::parse(toml).unwrap();

    assert_eq!(config.sections().len(), 1);
    assert_eq!(config.get_string("Executable", "Nested"), None);
    assert_eq!(config.executable_path(), "a.exe");
}

#[test]
fn test_loader_set_override() {
    let config = ShimConfig::builder()
        .add_toml_str("[Executable]\nPath = 'a.exe'\n")
        .set("Executable.Path", "b.exe")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.executable_path(), "b.exe");
}
