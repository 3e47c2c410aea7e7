//! In-memory platform fakes for unit tests.
//!
//! Each fake shares its state through `Rc`, so a test can box one clone
//! into `Backends` and keep another to inspect what was called.

use std::cell::RefCell;
use std::rc::Rc;

use crate::keys::{KeyEvent, VirtualKeyCode};
use crate::platform::{
    AudioEndpoint, Backends, DisplayControl, InputInjector, InputJoin, MediaSessions,
    MediaSnapshot, PlatformError, PollPolicy, ReceiverRegistry, WindowControl, WindowHandle,
    WindowInfo,
};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct RecordingInjector {
    batches: Rc<RefCell<Vec<Vec<KeyEvent>>>>,
    /// Caps how many events the fake OS accepts per batch.
    accept_limit: Option<usize>,
    fail: bool,
}

impl RecordingInjector {
    pub fn accepting(limit: usize) -> Self {
        RecordingInjector {
            accept_limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        RecordingInjector {
            fail: true,
            ..Default::default()
        }
    }

    pub fn batches(&self) -> Vec<Vec<KeyEvent>> {
        self.batches.borrow().clone()
    }
}

impl InputInjector for RecordingInjector {
    fn scan_code(&self, vk: VirtualKeyCode) -> u16 {
        vk & 0xFF
    }

    fn send(&self, batch: &[KeyEvent]) -> Result<usize, PlatformError> {
        if self.fail {
            return Err(PlatformError::Unsupported);
        }
        self.batches.borrow_mut().push(batch.to_vec());
        Ok(self.accept_limit.map_or(batch.len(), |n| n.min(batch.len())))
    }
}

// ---------------------------------------------------------------------------
// Windows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCall {
    Restore,
    Raise,
    Attach,
    Focus,
    Detach,
}

#[derive(Clone)]
pub struct FakeWindows {
    handle: WindowHandle,
    minimized: bool,
    refuse_focus: bool,
    refuse_attach: bool,
    refuse_raise: bool,
    fail_list: bool,
    same_thread: bool,
    calls: Rc<RefCell<Vec<WindowCall>>>,
}

impl FakeWindows {
    pub fn with_window(handle: WindowHandle, minimized: bool) -> Self {
        FakeWindows {
            handle,
            minimized,
            refuse_focus: false,
            refuse_attach: false,
            refuse_raise: false,
            fail_list: false,
            same_thread: false,
            calls: Rc::default(),
        }
    }

    pub fn refusing_focus(mut self) -> Self {
        self.refuse_focus = true;
        self
    }

    pub fn refusing_attach(mut self) -> Self {
        self.refuse_attach = true;
        self
    }

    /// Refuses both restore and raise.
    pub fn refusing_raise(mut self) -> Self {
        self.refuse_raise = true;
        self
    }

    pub fn failing_enumeration(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn same_thread(mut self) -> Self {
        self.same_thread = true;
        self
    }

    pub fn calls(&self) -> Vec<WindowCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: WindowCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl WindowControl for FakeWindows {
    fn list(&self) -> Result<Vec<WindowInfo>, PlatformError> {
        if self.fail_list {
            return Err(PlatformError::Os {
                call: "EnumWindows",
                code: 5,
            });
        }
        Ok(vec![WindowInfo {
            handle: self.handle,
            title: "Untitled - Notepad".into(),
            process_executable_name: "notepad.exe".into(),
        }])
    }

    fn is_live(&self, handle: WindowHandle) -> Result<bool, PlatformError> {
        Ok(handle == self.handle)
    }

    fn is_minimized(&self, _handle: WindowHandle) -> bool {
        self.minimized
    }

    fn restore(&self, _handle: WindowHandle) -> Result<(), PlatformError> {
        self.record(WindowCall::Restore);
        if self.refuse_raise {
            return Err(PlatformError::Other("restore refused".into()));
        }
        Ok(())
    }

    fn raise(&self, _handle: WindowHandle) -> Result<(), PlatformError> {
        self.record(WindowCall::Raise);
        if self.refuse_raise {
            return Err(PlatformError::Os {
                call: "BringWindowToTop",
                code: 5,
            });
        }
        Ok(())
    }

    fn attach_input(&self, _handle: WindowHandle) -> Result<Option<InputJoin>, PlatformError> {
        self.record(WindowCall::Attach);
        if self.refuse_attach {
            return Err(PlatformError::Os {
                call: "AttachThreadInput",
                code: 5,
            });
        }
        if self.same_thread {
            return Ok(None);
        }
        Ok(Some(InputJoin {
            caller_thread: 1,
            target_thread: 2,
        }))
    }

    fn detach_input(&self, _join: InputJoin) {
        self.record(WindowCall::Detach);
    }

    fn focus(&self, _handle: WindowHandle) -> Result<(), PlatformError> {
        self.record(WindowCall::Focus);
        if self.refuse_focus {
            return Err(PlatformError::Other("focus refused".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct FakeDisplay {
    reject_code: Option<i64>,
    modes: Rc<RefCell<Vec<(u32, u32)>>>,
    resets: Rc<RefCell<u32>>,
}

impl FakeDisplay {
    pub fn rejecting(code: i64) -> Self {
        FakeDisplay {
            reject_code: Some(code),
            ..Default::default()
        }
    }

    pub fn modes(&self) -> Vec<(u32, u32)> {
        self.modes.borrow().clone()
    }

    pub fn resets(&self) -> u32 {
        *self.resets.borrow()
    }

    fn check(&self) -> Result<(), PlatformError> {
        match self.reject_code {
            Some(code) => Err(PlatformError::Os {
                call: "ChangeDisplaySettingsW",
                code,
            }),
            None => Ok(()),
        }
    }
}

impl DisplayControl for FakeDisplay {
    fn set_resolution(&self, width: u32, height: u32) -> Result<(), PlatformError> {
        self.check()?;
        self.modes.borrow_mut().push((width, height));
        Ok(())
    }

    fn reset(&self) -> Result<(), PlatformError> {
        self.check()?;
        *self.resets.borrow_mut() += 1;
        Ok(())
    }

    fn attached_count(&self) -> Result<u32, PlatformError> {
        self.check()?;
        Ok(2)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct FakeRegistry {
    flag: Rc<RefCell<Option<u32>>>,
    read_only: bool,
}

impl FakeRegistry {
    pub fn with_flag(value: u32) -> Self {
        FakeRegistry {
            flag: Rc::new(RefCell::new(Some(value))),
            read_only: false,
        }
    }

    pub fn read_only() -> Self {
        FakeRegistry {
            read_only: true,
            ..Default::default()
        }
    }

    pub fn flag(&self) -> Option<u32> {
        *self.flag.borrow()
    }
}

impl ReceiverRegistry for FakeRegistry {
    fn read_flag(&self) -> Result<Option<u32>, PlatformError> {
        Ok(self.flag())
    }

    fn write_flag(&self, value: u32) -> Result<(), PlatformError> {
        if self.read_only {
            return Err(PlatformError::PermissionDenied(
                r"HKLM\SOFTWARE\Microsoft\Windows\CurrentVersion\MiracastReceiver".into(),
            ));
        }
        *self.flag.borrow_mut() = Some(value);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Audio
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct FakeAudio {
    level: Rc<RefCell<f32>>,
    muted: Rc<RefCell<bool>>,
    broken: bool,
}

impl Default for FakeAudio {
    fn default() -> Self {
        FakeAudio {
            level: Rc::new(RefCell::new(0.5)),
            muted: Rc::default(),
            broken: false,
        }
    }
}

impl FakeAudio {
    pub fn broken() -> Self {
        FakeAudio {
            broken: true,
            ..Default::default()
        }
    }

    pub fn level(&self) -> f32 {
        *self.level.borrow()
    }

    fn check(&self) -> Result<(), PlatformError> {
        if self.broken {
            return Err(PlatformError::Unavailable("no render endpoint".into()));
        }
        Ok(())
    }
}

impl AudioEndpoint for FakeAudio {
    fn volume_scalar(&self) -> Result<f32, PlatformError> {
        self.check()?;
        Ok(self.level())
    }

    fn set_volume_scalar(&self, level: f32) -> Result<(), PlatformError> {
        self.check()?;
        *self.level.borrow_mut() = level;
        Ok(())
    }

    fn muted(&self) -> Result<bool, PlatformError> {
        self.check()?;
        Ok(*self.muted.borrow())
    }

    fn set_muted(&self, muted: bool) -> Result<(), PlatformError> {
        self.check()?;
        *self.muted.borrow_mut() = muted;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub enum FakeMedia {
    Playing(MediaSnapshot),
    Idle,
    Broken,
}

impl FakeMedia {
    pub fn playing(snapshot: MediaSnapshot) -> Self {
        FakeMedia::Playing(snapshot)
    }

    pub fn idle() -> Self {
        FakeMedia::Idle
    }

    pub fn broken() -> Self {
        FakeMedia::Broken
    }
}

impl MediaSessions for FakeMedia {
    fn current(&self, _policy: &PollPolicy) -> Result<Option<MediaSnapshot>, PlatformError> {
        match self {
            FakeMedia::Playing(s) => Ok(Some(s.clone())),
            FakeMedia::Idle => Ok(None),
            FakeMedia::Broken => Err(PlatformError::Other("session manager failed".into())),
        }
    }
}

// ---------------------------------------------------------------------------
// Bundle
// ---------------------------------------------------------------------------

/// Handles onto every fake inside a `Backends` bundle.
#[derive(Clone)]
pub struct Fakes {
    pub input: RecordingInjector,
    pub windows: FakeWindows,
    pub display: FakeDisplay,
    pub receiver: FakeRegistry,
    pub audio: FakeAudio,
}

impl Fakes {
    pub const WINDOW: WindowHandle = 0x2002;

    pub fn new() -> Self {
        Fakes {
            input: RecordingInjector::default(),
            windows: FakeWindows::with_window(Self::WINDOW, false),
            display: FakeDisplay::default(),
            receiver: FakeRegistry::default(),
            audio: FakeAudio::default(),
        }
    }

    pub fn backends(&self) -> Backends {
        Backends {
            input: Box::new(self.input.clone()),
            windows: Box::new(self.windows.clone()),
            display: Box::new(self.display.clone()),
            receiver: Box::new(self.receiver.clone()),
            audio: Box::new(self.audio.clone()),
            media: Box::new(FakeMedia::idle()),
        }
    }
}
