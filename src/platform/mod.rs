//! Platform abstraction layer.
//!
//! Defines one trait per OS subsystem the crate drives (input injection,
//! window control, display mode, receiver registry, audio endpoint, media
//! sessions) and the `Backends` bundle that carries them.
//!
//! `native()` returns the Windows implementations on Windows. Every other
//! target gets the `unsupported` backend, whose operations all fail with
//! `PlatformError::Unsupported`.

mod poll;
#[cfg(not(target_os = "windows"))]
mod unsupported;
#[cfg(target_os = "windows")]
mod win32;

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::keys::{KeyEvent, VirtualKeyCode};

pub use poll::{poll_until, PollPolicy};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("this operation is only supported on Windows")]
    Unsupported,
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
    #[error("{call} failed with code {code}")]
    Os { call: &'static str, code: i64 },
    #[error("{0}")]
    Other(String),
}

impl PlatformError {
    /// OS status code carried by the error, when there is one.
    pub fn code(&self) -> Option<i64> {
        match self {
            PlatformError::Os { code, .. } => Some(*code),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Shared data types
// ---------------------------------------------------------------------------

/// Opaque OS window identifier (an `HWND` on Windows).
pub type WindowHandle = isize;

/// A visible, titled top-level window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowInfo {
    pub handle: WindowHandle,
    pub title: String,
    /// File name only, e.g. `notepad.exe`.
    pub process_executable_name: String,
}

/// A joined pair of thread input queues. Returned by
/// `WindowControl::attach_input` and handed back to `detach_input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputJoin {
    pub caller_thread: u32,
    pub target_thread: u32,
}

/// State of the system's current media session.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSnapshot {
    pub playing: bool,
    pub title: String,
    pub artist: String,
    pub duration: Duration,
    pub position: Duration,
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Submits synthesized keyboard events to the OS input queue.
pub trait InputInjector {
    /// Hardware scan code for `vk` under the active keyboard layout.
    fn scan_code(&self, vk: VirtualKeyCode) -> u16;

    /// Submits `batch` as one atomic unit. Returns how many events the OS
    /// accepted, which may be fewer than `batch.len()`.
    fn send(&self, batch: &[KeyEvent]) -> Result<usize, PlatformError>;
}

/// Top-level window queries and focus transfer.
pub trait WindowControl {
    fn list(&self) -> Result<Vec<WindowInfo>, PlatformError>;
    /// Whether `handle` still names an existing window.
    fn is_live(&self, handle: WindowHandle) -> Result<bool, PlatformError>;
    fn is_minimized(&self, handle: WindowHandle) -> bool;
    fn restore(&self, handle: WindowHandle) -> Result<(), PlatformError>;
    /// Moves the window to the top of the z-order.
    fn raise(&self, handle: WindowHandle) -> Result<(), PlatformError>;
    /// Joins the calling thread's input queue to the thread owning `handle`.
    /// `Ok(None)` when no join is needed (same thread).
    fn attach_input(&self, handle: WindowHandle) -> Result<Option<InputJoin>, PlatformError>;
    fn detach_input(&self, join: InputJoin);
    /// Makes `handle` the foreground window and gives it keyboard focus.
    fn focus(&self, handle: WindowHandle) -> Result<(), PlatformError>;
}

/// Primary display mode.
pub trait DisplayControl {
    fn set_resolution(&self, width: u32, height: u32) -> Result<(), PlatformError>;
    /// Restores the mode stored in the registry.
    fn reset(&self) -> Result<(), PlatformError>;
    fn attached_count(&self) -> Result<u32, PlatformError>;
}

/// Machine-wide Miracast receiver flag.
pub trait ReceiverRegistry {
    /// `Ok(None)` when the key or value does not exist.
    fn read_flag(&self) -> Result<Option<u32>, PlatformError>;
    /// Creates the key if needed and writes the value.
    fn write_flag(&self, value: u32) -> Result<(), PlatformError>;
}

/// Default audio render endpoint.
pub trait AudioEndpoint {
    /// Master volume as a scalar in `0.0..=1.0`.
    fn volume_scalar(&self) -> Result<f32, PlatformError>;
    fn set_volume_scalar(&self, level: f32) -> Result<(), PlatformError>;
    fn muted(&self) -> Result<bool, PlatformError>;
    fn set_muted(&self, muted: bool) -> Result<(), PlatformError>;
}

/// System media transport sessions.
pub trait MediaSessions {
    /// `Ok(None)` when no session is active.
    fn current(&self, policy: &PollPolicy) -> Result<Option<MediaSnapshot>, PlatformError>;
}

// ---------------------------------------------------------------------------
// Backend bundle
// ---------------------------------------------------------------------------

/// One boxed implementation per subsystem.
pub struct Backends {
    pub input: Box<dyn InputInjector>,
    pub windows: Box<dyn WindowControl>,
    pub display: Box<dyn DisplayControl>,
    pub receiver: Box<dyn ReceiverRegistry>,
    pub audio: Box<dyn AudioEndpoint>,
    pub media: Box<dyn MediaSessions>,
}

/// Returns the backends for the current target.
#[cfg(target_os = "windows")]
pub fn native() -> Backends {
    win32::backends()
}

/// Returns the backends for the current target.
#[cfg(not(target_os = "windows"))]
pub fn native() -> Backends {
    unsupported::backends()
}
