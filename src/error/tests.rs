// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, LaunchError, ShimError, ShimResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "Executable".to_string(),
        key: "InheritHandles".to_string(),
        message: "expected a boolean".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'InheritHandles' in section '[Executable]': expected a boolean"
    );
}

#[test]
fn test_launch_error_exit_code_uses_os_code() {
    let err = LaunchError::SpawnFailed {
        command: "\"C:\\missing.exe\"".to_string(),
        source: std::io::Error::from_raw_os_error(2),
    };
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_launch_error_exit_code_without_os_code() {
    let err = LaunchError::WaitFailed {
        source: std::io::Error::other("no status"),
    };
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_launch_error_boxes_into_shim_error() {
    let err: ShimError = LaunchError::WaitFailed {
        source: std::io::Error::other("gone"),
    }
    .into();
    assert!(matches!(err, ShimError::Launch(_)));
    insta::assert_snapshot!(
        err.to_string(),
        @"launch error: failed to wait for child process: gone"
    );
}

#[test]
fn test_shim_error_size() {
    let size = std::mem::size_of::<ShimError>();
    assert!(size <= 16, "ShimError is {size} bytes, expected <= 16");
}

#[test]
fn test_shim_result_size() {
    let size = std::mem::size_of::<ShimResult<()>>();
    assert!(size <= 24, "ShimResult<()> is {size} bytes, expected <= 24");
}
