//! Current media session through the system media transport controls.
//!
//! The Windows Runtime calls here are asynchronous. Instead of blocking on
//! them, each operation's status is polled under the caller's `PollPolicy`;
//! a timeout reads as "no session".

use std::time::Duration;

use windows::Foundation::{AsyncStatus, IAsyncOperation, TimeSpan};
use windows::Media::Control::{
    GlobalSystemMediaTransportControlsSessionManager as SessionManager,
    GlobalSystemMediaTransportControlsSessionPlaybackStatus as PlaybackStatus,
};
use windows::Win32::System::Com::COINIT_MULTITHREADED;

use super::com::ComApartment;
use crate::platform::{poll_until, MediaSessions, MediaSnapshot, PlatformError, PollPolicy};

pub struct WinRtMediaSessions;

/// Polls `op` until it completes. `Ok(None)` on timeout.
fn wait<T: windows::core::RuntimeType + 'static>(
    op: &IAsyncOperation<T>,
    policy: &PollPolicy,
) -> Result<Option<T>, PlatformError> {
    poll_until(policy, || -> Result<Option<T>, PlatformError> {
        match op.Status()? {
            AsyncStatus::Completed => Ok(Some(op.GetResults()?)),
            AsyncStatus::Started => Ok(None),
            status => Err(PlatformError::Other(format!(
                "async operation ended with status {}",
                status.0
            ))),
        }
    })
}

fn to_duration(span: TimeSpan) -> Duration {
    // TimeSpan counts 100ns ticks.
    Duration::from_nanos(u64::try_from(span.Duration).unwrap_or(0) * 100)
}

impl MediaSessions for WinRtMediaSessions {
    fn current(&self, policy: &PollPolicy) -> Result<Option<MediaSnapshot>, PlatformError> {
        let _apartment = ComApartment::enter(COINIT_MULTITHREADED)?;

        let Some(manager) = wait(&SessionManager::RequestAsync()?, policy)? else {
            log::debug!("media: session manager request timed out");
            return Ok(None);
        };
        // Fails when no application currently owns a session.
        let Ok(session) = manager.GetCurrentSession() else {
            return Ok(None);
        };

        let Some(properties) = wait(&session.TryGetMediaPropertiesAsync()?, policy)? else {
            log::debug!("media: media properties request timed out");
            return Ok(None);
        };
        let timeline = session.GetTimelineProperties()?;
        let playback = session.GetPlaybackInfo()?;

        Ok(Some(MediaSnapshot {
            playing: playback.PlaybackStatus()? == PlaybackStatus::Playing,
            title: properties.Title()?.to_string_lossy(),
            artist: properties.Artist()?.to_string_lossy(),
            duration: to_duration(timeline.EndTime()?),
            position: to_duration(timeline.Position()?),
        }))
    }
}
