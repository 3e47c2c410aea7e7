//! Windows key injection via SendInput.
//!
//! `WindowsExecutor` implements `InputInjector`. Injection is synchronous:
//! `SendInput` returns after the batch is queued. The whole batch goes in one
//! call so no other input interleaves with the chord.

use windows_sys::Win32::UI::Input::KeyboardAndMouse::{
    MapVirtualKeyW, SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYEVENTF_EXTENDEDKEY,
    KEYEVENTF_KEYUP, MAPVK_VK_TO_VSC,
};

use crate::keys::{KeyEvent, KeyPhase, VirtualKeyCode};
use crate::platform::{InputInjector, PlatformError};

// ---------------------------------------------------------------------------
// Public struct
// ---------------------------------------------------------------------------

/// Injects keyboard events via SendInput on Windows.
///
/// Stateless: each `send()` call builds one `INPUT` record per event and
/// calls `SendInput` once.
pub struct WindowsExecutor;

impl WindowsExecutor {
    pub fn new() -> Self {
        WindowsExecutor
    }
}

// ---------------------------------------------------------------------------
// InputInjector trait impl
// ---------------------------------------------------------------------------

impl InputInjector for WindowsExecutor {
    fn scan_code(&self, vk: VirtualKeyCode) -> u16 {
        // Scan codes fit in the low byte; 0 means no mapping in this layout.
        unsafe { MapVirtualKeyW(u32::from(vk), MAPVK_VK_TO_VSC) as u16 }
    }

    fn send(&self, batch: &[KeyEvent]) -> Result<usize, PlatformError> {
        let inputs: Vec<INPUT> = batch.iter().map(to_input).collect();

        let sent = unsafe {
            SendInput(
                inputs.len() as u32,
                inputs.as_ptr(),
                std::mem::size_of::<INPUT>() as i32,
            )
        };

        // Zero means the input was blocked outright (UIPI or another thread
        // holding BlockInput). The caller reports it as an undelivered batch.
        if sent == 0 && !inputs.is_empty() {
            log::warn!(
                "executor: SendInput accepted no events: {}",
                std::io::Error::last_os_error()
            );
        }

        Ok(sent as usize)
    }
}

fn to_input(event: &KeyEvent) -> INPUT {
    let mut flags = 0;
    if event.extended {
        flags |= KEYEVENTF_EXTENDEDKEY;
    }
    if event.phase == KeyPhase::Up {
        flags |= KEYEVENTF_KEYUP;
    }

    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: event.vk,
                wScan: event.scan,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
