//! Host-facing facade.
//!
//! `DeskControl` owns the configuration and one backend per subsystem and
//! exposes every operation as a plain call returning a serializable value.
//! Only the key synthesis calls return `Result`, and only for malformed
//! requests or an unusable input stack.

use crate::config::Config;
use crate::keys::{self, InputError};
use crate::platform::{self, Backends, PlatformError, WindowHandle, WindowInfo};
use crate::services::audio::{self, MuteReading, VolumeReading};
use crate::services::media::{self, NowPlaying};
use crate::services::miracast::{self, ReceiverStatus};
use crate::services::{display, Ack, OpResult};
use crate::window;

pub struct DeskControl {
    config: Config,
    backends: Backends,
}

impl DeskControl {
    /// Uses the native backends for the current target.
    pub fn new(config: Config) -> Self {
        Self::with_backends(config, platform::native())
    }

    pub fn with_backends(config: Config, backends: Backends) -> Self {
        DeskControl { config, backends }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // -- keyboard -----------------------------------------------------------

    /// Presses `keys` as one chord into whatever window has focus.
    ///
    /// `Ok(true)` once the call completes, including when no name resolved.
    /// A partially accepted batch still counts as completed.
    pub fn synthesize_keys<S: AsRef<str>>(&self, keys: &[S]) -> Result<bool, InputError> {
        keys::synthesize(keys, self.backends.input.as_ref())?;
        Ok(true)
    }

    /// Focuses `handle` and presses `keys` into it.
    ///
    /// `Ok(false)` when the handle is stale and nothing was sent.
    pub fn synthesize_keys_to_window<S: AsRef<str>>(
        &self,
        handle: WindowHandle,
        keys: &[S],
    ) -> Result<bool, InputError> {
        let delivery = window::focus_and_synthesize(
            handle,
            keys,
            self.config.settle_delay(),
            self.backends.windows.as_ref(),
            self.backends.input.as_ref(),
        )?;
        Ok(delivery.is_some())
    }

    /// Canonical key names accepted by the synthesis calls.
    pub fn key_symbols(&self) -> Vec<&'static str> {
        keys::symbols()
    }

    // -- windows ------------------------------------------------------------

    pub fn list_top_level_windows(&self) -> Result<Vec<WindowInfo>, PlatformError> {
        window::list_top_level_windows(self.backends.windows.as_ref())
    }

    // -- display ------------------------------------------------------------

    pub fn set_display_resolution(&self, width: i64, height: i64) -> OpResult {
        display::set_display_resolution(self.backends.display.as_ref(), width, height)
    }

    pub fn reset_display(&self) -> OpResult {
        display::reset_display(self.backends.display.as_ref())
    }

    pub fn count_attached_displays(&self) -> u32 {
        display::count_attached_displays(self.backends.display.as_ref())
    }

    // -- miracast -----------------------------------------------------------

    pub fn enable_receiver(&self) -> OpResult {
        miracast::enable_receiver(self.backends.receiver.as_ref())
    }

    pub fn is_receiver_enabled(&self) -> ReceiverStatus {
        miracast::is_receiver_enabled(self.backends.receiver.as_ref())
    }

    // -- media --------------------------------------------------------------

    pub fn get_now_playing(&self) -> NowPlaying {
        media::get_now_playing(self.backends.media.as_ref(), &self.config.media_poll())
    }

    // -- audio --------------------------------------------------------------

    pub fn get_volume(&self) -> VolumeReading {
        audio::get_volume(self.backends.audio.as_ref())
    }

    pub fn set_volume(&self, percent: f64) -> Ack {
        audio::set_volume(self.backends.audio.as_ref(), percent)
    }

    pub fn get_mute(&self) -> MuteReading {
        audio::get_mute(self.backends.audio.as_ref())
    }

    pub fn set_mute(&self, muted: bool) -> Ack {
        audio::set_mute(self.backends.audio.as_ref(), muted)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
