//! Backend for non-Windows targets.
//!
//! Every subsystem here is Windows-specific, so each operation fails with
//! `PlatformError::Unsupported`. Queries that cannot fail (`is_minimized`,
//! `scan_code`) return neutral values.

use super::{
    AudioEndpoint, Backends, DisplayControl, InputInjector, InputJoin, MediaSessions,
    MediaSnapshot, PlatformError, PollPolicy, ReceiverRegistry, WindowControl, WindowHandle,
    WindowInfo,
};
use crate::keys::{KeyEvent, VirtualKeyCode};

/// Stand-in for every subsystem on targets without a native backend.
pub struct Unsupported;

pub fn backends() -> Backends {
    Backends {
        input: Box::new(Unsupported),
        windows: Box::new(Unsupported),
        display: Box::new(Unsupported),
        receiver: Box::new(Unsupported),
        audio: Box::new(Unsupported),
        media: Box::new(Unsupported),
    }
}

impl InputInjector for Unsupported {
    fn scan_code(&self, _vk: VirtualKeyCode) -> u16 {
        0
    }

    fn send(&self, _batch: &[KeyEvent]) -> Result<usize, PlatformError> {
        Err(PlatformError::Unsupported)
    }
}

impl WindowControl for Unsupported {
    fn list(&self) -> Result<Vec<WindowInfo>, PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn is_live(&self, _handle: WindowHandle) -> Result<bool, PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn is_minimized(&self, _handle: WindowHandle) -> bool {
        false
    }

    fn restore(&self, _handle: WindowHandle) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn raise(&self, _handle: WindowHandle) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn attach_input(&self, _handle: WindowHandle) -> Result<Option<InputJoin>, PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn detach_input(&self, _join: InputJoin) {}

    fn focus(&self, _handle: WindowHandle) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }
}

impl DisplayControl for Unsupported {
    fn set_resolution(&self, _width: u32, _height: u32) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn reset(&self) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn attached_count(&self) -> Result<u32, PlatformError> {
        Err(PlatformError::Unsupported)
    }
}

impl ReceiverRegistry for Unsupported {
    fn read_flag(&self) -> Result<Option<u32>, PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn write_flag(&self, _value: u32) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }
}

impl AudioEndpoint for Unsupported {
    fn volume_scalar(&self) -> Result<f32, PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn set_volume_scalar(&self, _level: f32) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn muted(&self) -> Result<bool, PlatformError> {
        Err(PlatformError::Unsupported)
    }

    fn set_muted(&self, _muted: bool) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }
}

impl MediaSessions for Unsupported {
    fn current(&self, _policy: &PollPolicy) -> Result<Option<MediaSnapshot>, PlatformError> {
        Err(PlatformError::Unsupported)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KeyPhase;

    #[test]
    fn every_os_operation_reports_unsupported() {
        let b = backends();
        let event = KeyEvent {
            vk: 0x41,
            scan: 0,
            phase: KeyPhase::Down,
            extended: false,
        };
        assert!(matches!(b.input.send(&[event]), Err(PlatformError::Unsupported)));
        assert!(matches!(b.windows.list(), Err(PlatformError::Unsupported)));
        assert!(matches!(b.windows.focus(1), Err(PlatformError::Unsupported)));
        assert!(matches!(b.display.reset(), Err(PlatformError::Unsupported)));
        assert!(matches!(b.display.attached_count(), Err(PlatformError::Unsupported)));
        assert!(matches!(b.receiver.read_flag(), Err(PlatformError::Unsupported)));
        assert!(matches!(b.receiver.write_flag(1), Err(PlatformError::Unsupported)));
        assert!(matches!(b.audio.volume_scalar(), Err(PlatformError::Unsupported)));
        assert!(matches!(b.audio.set_muted(true), Err(PlatformError::Unsupported)));
        assert!(matches!(
            b.media.current(&PollPolicy::default()),
            Err(PlatformError::Unsupported)
        ));
    }

    #[test]
    fn liveness_check_reports_unsupported() {
        assert!(matches!(Unsupported.is_live(0x1234), Err(PlatformError::Unsupported)));
        assert!(!Unsupported.is_minimized(0x1234));
    }
}
