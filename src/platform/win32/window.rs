//! Top-level window enumeration and focus transfer.
//!
//! `SetForegroundWindow` is refused unless the caller owns the foreground
//! input queue, so focus transfer first joins the calling thread's input
//! queue to the target window's thread with `AttachThreadInput`. The join is
//! undone through `detach_input`, which the resolver calls from a drop guard.

use std::ptr;

use windows_sys::Win32::Foundation::{CloseHandle, BOOL, FALSE, HANDLE, HWND, LPARAM, TRUE};
use windows_sys::Win32::System::Threading::{
    AttachThreadInput, GetCurrentThreadId, OpenProcess, QueryFullProcessImageNameW,
    PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
};
use windows_sys::Win32::UI::Input::KeyboardAndMouse::SetFocus;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    BringWindowToTop, EnumWindows, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsIconic, IsWindow, IsWindowVisible, SetForegroundWindow,
    ShowWindow, SW_RESTORE,
};

use crate::platform::{InputJoin, PlatformError, WindowControl, WindowHandle, WindowInfo};

/// Window control backed by user32.
pub struct Win32Windows;

fn hwnd(handle: WindowHandle) -> HWND {
    handle as HWND
}

fn last_error(call: &'static str) -> PlatformError {
    let code = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
    PlatformError::Os {
        call,
        code: i64::from(code),
    }
}

impl WindowControl for Win32Windows {
    fn list(&self) -> Result<Vec<WindowInfo>, PlatformError> {
        let mut windows: Vec<WindowInfo> = Vec::new();
        // The callback receives a raw pointer to our Vec through LPARAM.
        let ok = unsafe {
            EnumWindows(
                Some(enum_windows_callback),
                &mut windows as *mut Vec<WindowInfo> as LPARAM,
            )
        };
        if ok == FALSE {
            return Err(last_error("EnumWindows"));
        }
        log::debug!("window: enumerated {} top-level windows", windows.len());
        Ok(windows)
    }

    fn is_live(&self, handle: WindowHandle) -> Result<bool, PlatformError> {
        Ok(handle != 0 && unsafe { IsWindow(hwnd(handle)) } != FALSE)
    }

    fn is_minimized(&self, handle: WindowHandle) -> bool {
        unsafe { IsIconic(hwnd(handle)) != FALSE }
    }

    fn restore(&self, handle: WindowHandle) -> Result<(), PlatformError> {
        // ShowWindow returns the previous visibility, not success.
        unsafe { ShowWindow(hwnd(handle), SW_RESTORE) };
        Ok(())
    }

    fn raise(&self, handle: WindowHandle) -> Result<(), PlatformError> {
        if unsafe { BringWindowToTop(hwnd(handle)) } == FALSE {
            return Err(last_error("BringWindowToTop"));
        }
        Ok(())
    }

    fn attach_input(&self, handle: WindowHandle) -> Result<Option<InputJoin>, PlatformError> {
        let target_thread = unsafe { GetWindowThreadProcessId(hwnd(handle), ptr::null_mut()) };
        let caller_thread = unsafe { GetCurrentThreadId() };
        if target_thread == 0 {
            return Err(last_error("GetWindowThreadProcessId"));
        }
        if target_thread == caller_thread {
            return Ok(None);
        }
        if unsafe { AttachThreadInput(caller_thread, target_thread, TRUE) } == FALSE {
            return Err(last_error("AttachThreadInput"));
        }
        log::debug!("window: joined input of thread {caller_thread} to {target_thread}");
        Ok(Some(InputJoin {
            caller_thread,
            target_thread,
        }))
    }

    fn detach_input(&self, join: InputJoin) {
        let ok = unsafe { AttachThreadInput(join.caller_thread, join.target_thread, FALSE) };
        if ok == FALSE {
            log::warn!(
                "window: failed to detach input of thread {} from {}",
                join.caller_thread,
                join.target_thread
            );
        }
    }

    fn focus(&self, handle: WindowHandle) -> Result<(), PlatformError> {
        let h = hwnd(handle);
        if unsafe { SetForegroundWindow(h) } == FALSE {
            // Best effort: the window manager may still refuse the steal.
            log::warn!("window: SetForegroundWindow refused for {handle:#x}");
        }
        unsafe { SetFocus(h) };
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// `EnumWindows` callback: keeps visible, titled windows whose owning
/// process can be queried. Always continues enumeration.
unsafe extern "system" fn enum_windows_callback(h: HWND, lparam: LPARAM) -> BOOL {
    let windows = &mut *(lparam as *mut Vec<WindowInfo>);

    if IsWindowVisible(h) == FALSE {
        return TRUE;
    }

    let Some(title) = window_title(h) else {
        return TRUE;
    };

    let mut pid = 0u32;
    GetWindowThreadProcessId(h, &mut pid);
    let Some(process_executable_name) = process_executable(pid) else {
        log::debug!("window: skipping {title:?}, process {pid} not queryable");
        return TRUE;
    };

    windows.push(WindowInfo {
        handle: h as WindowHandle,
        title,
        process_executable_name,
    });
    TRUE
}

unsafe fn window_title(h: HWND) -> Option<String> {
    let len = GetWindowTextLengthW(h);
    if len <= 0 {
        return None;
    }
    let mut buf = vec![0u16; len as usize + 1];
    let copied = GetWindowTextW(h, buf.as_mut_ptr(), buf.len() as i32);
    if copied <= 0 {
        return None;
    }
    Some(String::from_utf16_lossy(&buf[..copied as usize]))
}

/// Closes the wrapped process handle on drop.
struct ProcessHandle(HANDLE);

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        unsafe { CloseHandle(self.0) };
    }
}

/// Executable file name (e.g. `notepad.exe`) for `pid`, or `None` when the
/// process cannot be opened with limited query rights.
fn process_executable(pid: u32) -> Option<String> {
    let raw = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, FALSE, pid) };
    if raw.is_null() {
        return None;
    }
    let process = ProcessHandle(raw);

    let mut buf = vec![0u16; 1024];
    let mut len = buf.len() as u32;
    let ok = unsafe {
        QueryFullProcessImageNameW(process.0, PROCESS_NAME_WIN32, buf.as_mut_ptr(), &mut len)
    };
    if ok == FALSE || len == 0 {
        return None;
    }

    let path = String::from_utf16_lossy(&buf[..len as usize]);
    path.rsplit('\\').next().map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
