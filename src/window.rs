//! Window target resolver.
//!
//! Brings a window to the foreground and then runs the key synthesizer, so
//! the chord lands in that window. The focus transfer joins the calling
//! thread's input queue to the window's thread; `InputJoinGuard` undoes the
//! join on every exit path, including errors and unwinding.
//!
//! Focus stealing races with any other foreground change happening on the
//! desktop at the same time. Delivery to the intended window is best effort:
//! a failed restore, raise, join or focus is logged and the keys are sent
//! anyway. Only a malformed request or a missing input stack fails the call.

use std::thread;
use std::time::Duration;

use crate::keys::{synthesize, Delivery, InputError};
use crate::platform::{InputInjector, InputJoin, PlatformError, WindowControl, WindowHandle, WindowInfo};

/// Detaches a thread-input join when dropped.
struct InputJoinGuard<'a> {
    windows: &'a dyn WindowControl,
    join: Option<InputJoin>,
}

impl Drop for InputJoinGuard<'_> {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            self.windows.detach_input(join);
        }
    }
}

/// Focuses `handle` and synthesizes `keys` into it.
///
/// Returns `Ok(None)` without sending anything when `handle` no longer
/// names a live window. An empty `keys` list fails before the window is
/// touched.
pub fn focus_and_synthesize<S: AsRef<str>>(
    handle: WindowHandle,
    keys: &[S],
    settle: Duration,
    windows: &dyn WindowControl,
    injector: &dyn InputInjector,
) -> Result<Option<Delivery>, InputError> {
    if keys.is_empty() {
        return Err(InputError::EmptyRequest);
    }
    if !windows.is_live(handle)? {
        log::warn!("window: handle {handle:#x} is not a live window, skipping");
        return Ok(None);
    }

    if windows.is_minimized(handle) {
        if let Err(e) = windows.restore(handle) {
            log::warn!("window: restore of {handle:#x} failed: {e}");
        }
    }
    if let Err(e) = windows.raise(handle) {
        log::warn!("window: raise of {handle:#x} failed: {e}");
    }

    let join = windows.attach_input(handle).unwrap_or_else(|e| {
        log::warn!("window: input join for {handle:#x} failed, focusing without it: {e}");
        None
    });
    let _join = InputJoinGuard { windows, join };

    if let Err(e) = windows.focus(handle) {
        log::warn!("window: focus of {handle:#x} failed: {e}");
    }

    // Let the window manager finish the activation before input arrives.
    thread::sleep(settle);

    let delivery = synthesize(keys, injector)?;
    Ok(Some(delivery))
}

/// Visible, titled top-level windows whose owning process can be queried.
///
/// An enumeration failure yields an empty list. `Unsupported` is still
/// returned on targets without a window backend.
pub fn list_top_level_windows(windows: &dyn WindowControl) -> Result<Vec<WindowInfo>, PlatformError> {
    match windows.list() {
        Err(PlatformError::Unsupported) => Err(PlatformError::Unsupported),
        Err(e) => {
            log::warn!("window: enumeration failed: {e}");
            Ok(Vec::new())
        }
        Ok(list) => Ok(list),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
