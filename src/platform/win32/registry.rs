//! Miracast receiver flag in the machine-wide registry hive.
//!
//! `HKLM\SOFTWARE\Microsoft\Windows\CurrentVersion\MiracastReceiver`,
//! DWORD value `EnableMiracastReceiver`. A missing key reads as unset.
//! Writing needs administrator rights.

use std::mem;
use std::ptr;

use windows_sys::Win32::Foundation::{ERROR_ACCESS_DENIED, ERROR_FILE_NOT_FOUND, ERROR_SUCCESS};
use windows_sys::Win32::System::Registry::{
    RegCloseKey, RegCreateKeyExW, RegOpenKeyExW, RegQueryValueExW, RegSetValueExW, HKEY,
    HKEY_LOCAL_MACHINE, KEY_READ, KEY_WRITE, REG_DWORD, REG_OPTION_NON_VOLATILE,
};

use super::wide;
use crate::platform::{PlatformError, ReceiverRegistry};

const KEY_PATH: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\MiracastReceiver";
const VALUE_NAME: &str = "EnableMiracastReceiver";

pub struct MiracastRegistry;

/// Closes the wrapped registry key on drop.
struct RegKey(HKEY);

impl Drop for RegKey {
    fn drop(&mut self) {
        unsafe { RegCloseKey(self.0) };
    }
}

fn status_error(call: &'static str, status: u32) -> PlatformError {
    if status == ERROR_ACCESS_DENIED {
        PlatformError::PermissionDenied(format!(r"HKLM\{KEY_PATH}"))
    } else {
        PlatformError::Os {
            call,
            code: i64::from(status),
        }
    }
}

impl ReceiverRegistry for MiracastRegistry {
    fn read_flag(&self) -> Result<Option<u32>, PlatformError> {
        let path = wide(KEY_PATH);
        let mut raw: HKEY = ptr::null_mut();
        let status =
            unsafe { RegOpenKeyExW(HKEY_LOCAL_MACHINE, path.as_ptr(), 0, KEY_READ, &mut raw) };
        if status == ERROR_FILE_NOT_FOUND {
            return Ok(None);
        }
        if status != ERROR_SUCCESS {
            return Err(status_error("RegOpenKeyExW", status));
        }
        let key = RegKey(raw);

        let name = wide(VALUE_NAME);
        let mut value: u32 = 0;
        let mut kind = 0;
        let mut size = mem::size_of::<u32>() as u32;
        let status = unsafe {
            RegQueryValueExW(
                key.0,
                name.as_ptr(),
                ptr::null(),
                &mut kind,
                &mut value as *mut u32 as *mut u8,
                &mut size,
            )
        };
        match status {
            ERROR_SUCCESS if kind == REG_DWORD => Ok(Some(value)),
            ERROR_SUCCESS => Err(PlatformError::Other(format!(
                "{VALUE_NAME} has unexpected registry type {kind}"
            ))),
            ERROR_FILE_NOT_FOUND => Ok(None),
            other => Err(status_error("RegQueryValueExW", other)),
        }
    }

    fn write_flag(&self, value: u32) -> Result<(), PlatformError> {
        let path = wide(KEY_PATH);
        let mut raw: HKEY = ptr::null_mut();
        let status = unsafe {
            RegCreateKeyExW(
                HKEY_LOCAL_MACHINE,
                path.as_ptr(),
                0,
                ptr::null(),
                REG_OPTION_NON_VOLATILE,
                KEY_WRITE,
                ptr::null(),
                &mut raw,
                ptr::null_mut(),
            )
        };
        if status != ERROR_SUCCESS {
            return Err(status_error("RegCreateKeyExW", status));
        }
        let key = RegKey(raw);

        let name = wide(VALUE_NAME);
        let status = unsafe {
            RegSetValueExW(
                key.0,
                name.as_ptr(),
                0,
                REG_DWORD,
                &value as *const u32 as *const u8,
                mem::size_of::<u32>() as u32,
            )
        };
        if status != ERROR_SUCCESS {
            return Err(status_error("RegSetValueExW", status));
        }
        log::info!("receiver: {VALUE_NAME} set to {value}");
        Ok(())
    }
}
