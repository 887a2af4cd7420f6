// shim-rs: Process Launch Shim
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Win32 host implementation.
//!
//! ```text
//! GetCommandLineW          --> raw command line
//! GetEnvironmentStringsW   --> EnvironmentBlock (copied, then freed)
//! CreateProcessW(NULL, cmdline (mutable), ..., CREATE_UNICODE_ENVIRONMENT, env|NULL)
//!   --> ChildHandles (closed on drop)
//!   --> WaitForSingleObject(INFINITE) --> GetExitCodeProcess
//! ```

use std::ffi::c_void;

use tracing::{debug, trace, warn};
use windows::Win32::Foundation::{CloseHandle, HANDLE, WAIT_FAILED};
use windows::Win32::System::Environment::{
    FreeEnvironmentStringsW, GetCommandLineW, GetEnvironmentStringsW,
};
use windows::Win32::System::Threading::{
    CREATE_UNICODE_ENVIRONMENT, CreateProcessW, GetExitCodeProcess, INFINITE,
    PROCESS_INFORMATION, STARTUPINFOW, WaitForSingleObject,
};
use windows::core::{PCWSTR, PWSTR};

use super::{EnvironmentSnapshotProvider, LaunchRequest, ProcessLauncher, SystemHost};
use crate::core::env::EnvironmentBlock;
use crate::error::LaunchError;

/// Converts a Windows API error to a `std::io::Error` carrying the Win32 code.
fn windows_error_to_io(err: &windows::core::Error) -> std::io::Error {
    #[allow(clippy::cast_sign_loss)]
    let hresult = err.code().0 as u32;
    // HRESULT_FROM_WIN32 wraps the Win32 code as 0x8007xxxx.
    let code = if hresult & 0xFFFF_0000 == 0x8007_0000 {
        hresult & 0xFFFF
    } else {
        hresult
    };
    #[allow(clippy::cast_possible_wrap)]
    let code = code as i32;
    std::io::Error::from_raw_os_error(code)
}

pub(super) fn current_command_line() -> String {
    // SAFETY: GetCommandLineW returns a pointer owned by the process that
    // stays valid and NUL-terminated for its lifetime.
    unsafe { String::from_utf16_lossy(GetCommandLineW().as_wide()) }
}

/// Length of a double-NUL-terminated block, terminator included.
///
/// # Safety
///
/// `start` must point to a valid environment block.
unsafe fn block_len(start: *const u16) -> usize {
    let mut at = 0;
    loop {
        let mut len = 0;
        // SAFETY: every record of a valid block is NUL-terminated and the
        // block ends with an empty record.
        while unsafe { *start.add(at + len) } != 0 {
            len += 1;
        }
        if len == 0 {
            return at + 1;
        }
        at += len + 1;
    }
}

impl EnvironmentSnapshotProvider for SystemHost {
    fn snapshot(&self) -> EnvironmentBlock {
        // SAFETY: the block returned by GetEnvironmentStringsW is read only
        // up to its terminator and freed exactly once.
        unsafe {
            let block = GetEnvironmentStringsW();
            if block.is_null() {
                warn!("GetEnvironmentStringsW returned no block");
                return EnvironmentBlock::inherit();
            }

            let units = std::slice::from_raw_parts(block.0, block_len(block.0));
            let snapshot = EnvironmentBlock::from_wide_terminated(units);

            if let Err(e) = FreeEnvironmentStringsW(PCWSTR(block.0)) {
                trace!(error = %e, "FreeEnvironmentStringsW failed");
            }
            snapshot
        }
    }
}

/// Process and thread handles returned by `CreateProcessW`.
struct ChildHandles(PROCESS_INFORMATION);

impl ChildHandles {
    const fn process(&self) -> HANDLE {
        self.0.hProcess
    }
}

impl Drop for ChildHandles {
    fn drop(&mut self) {
        for handle in [self.0.hThread, self.0.hProcess] {
            if !handle.is_invalid() {
                // SAFETY: handles come from a successful CreateProcessW and are
                // closed only here.
                unsafe {
                    let _ = CloseHandle(handle);
                }
            }
        }
    }
}

impl ProcessLauncher for SystemHost {
    fn launch(&self, request: LaunchRequest) -> Result<i32, LaunchError> {
        let (command_line, environment, inherit_handles) = request.into_parts();
        let shown = command_line.to_string();
        debug!(cmd = %shown, inherit_handles, custom_env = !environment.is_empty(), "exec");

        // CreateProcessW may write into the command line buffer.
        let mut command_line = command_line.into_wide();
        let environment = environment.into_wide();
        let environment_ptr =
            (!environment.is_empty()).then(|| environment.as_ptr().cast::<c_void>());

        #[allow(clippy::cast_possible_truncation)]
        let cb = std::mem::size_of::<STARTUPINFOW>() as u32;
        let startup = STARTUPINFOW {
            cb,
            ..Default::default()
        };
        let mut info = PROCESS_INFORMATION::default();

        // SAFETY: all buffers outlive the call; the command line is mutable
        // and NUL-terminated, the environment block is double-NUL-terminated
        // UTF-16 as announced by CREATE_UNICODE_ENVIRONMENT.
        let created = unsafe {
            CreateProcessW(
                PCWSTR::null(),
                Some(PWSTR(command_line.as_mut_ptr())),
                None,
                None,
                inherit_handles,
                CREATE_UNICODE_ENVIRONMENT,
                environment_ptr,
                PCWSTR::null(),
                &raw const startup,
                &raw mut info,
            )
        };
        created.map_err(|e| LaunchError::SpawnFailed {
            command: shown,
            source: windows_error_to_io(&e),
        })?;

        let child = ChildHandles(info);
        trace!(pid = child.0.dwProcessId, "spawned");

        // SAFETY: the process handle is valid until `child` is dropped.
        let waited = unsafe { WaitForSingleObject(child.process(), INFINITE) };
        if waited == WAIT_FAILED {
            return Err(LaunchError::WaitFailed {
                source: std::io::Error::last_os_error(),
            });
        }

        let mut exit_code = 0u32;
        // SAFETY: the process handle is valid and the out pointer is live.
        if let Err(e) = unsafe { GetExitCodeProcess(child.process(), &raw mut exit_code) } {
            warn!(error = %e, "could not read child exit code");
            return Ok(0);
        }

        trace!(exit_code, "completed");
        #[allow(clippy::cast_possible_wrap)]
        let exit_code = exit_code as i32;
        Ok(exit_code)
    }
}
