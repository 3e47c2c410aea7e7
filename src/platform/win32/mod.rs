//! Windows platform backend.
//!
//! Input: `SendInput` with virtual key + scan code. Windows: `EnumWindows`
//! and the `AttachThreadInput` focus transfer. Display: `ChangeDisplaySettingsW`.
//! Receiver flag: HKLM registry. Audio: Core Audio `IAudioEndpointVolume`.
//! Media: `GlobalSystemMediaTransportControlsSessionManager`.
//!
//! Win32 calls go through `windows-sys`; COM and WinRT interfaces need the
//! projections in the `windows` crate.

mod audio;
mod com;
mod display;
mod executor;
mod media;
mod registry;
mod window;

use audio::DefaultRenderEndpoint;
use display::Win32Display;
use executor::WindowsExecutor;
use media::WinRtMediaSessions;
use registry::MiracastRegistry;
use window::Win32Windows;

use crate::platform::Backends;

pub fn backends() -> Backends {
    Backends {
        input: Box::new(WindowsExecutor::new()),
        windows: Box::new(Win32Windows),
        display: Box::new(Win32Display),
        receiver: Box::new(MiracastRegistry),
        audio: Box::new(DefaultRenderEndpoint),
        media: Box::new(WinRtMediaSessions),
    }
}

/// Encodes `s` as a NUL-terminated UTF-16 string for `PCWSTR` parameters.
pub(crate) fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
