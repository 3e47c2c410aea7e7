//! "Now playing" query.
//!
//! Best effort: any failure, timeout, or missing session yields the
//! not-found sentinel rather than an error.

use serde::Serialize;

use crate::platform::{MediaSessions, MediaSnapshot, PollPolicy};

const NOT_FOUND_TITLE: &str = "No media session";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub is_playing: bool,
    pub title: String,
    pub artist: String,
    pub duration_seconds: f64,
    pub position_seconds: f64,
    pub success: bool,
}

impl NowPlaying {
    pub fn not_found() -> Self {
        NowPlaying {
            is_playing: false,
            title: NOT_FOUND_TITLE.into(),
            artist: String::new(),
            duration_seconds: 0.0,
            position_seconds: 0.0,
            success: false,
        }
    }
}

impl From<MediaSnapshot> for NowPlaying {
    fn from(s: MediaSnapshot) -> Self {
        NowPlaying {
            is_playing: s.playing,
            title: s.title,
            artist: s.artist,
            duration_seconds: s.duration.as_secs_f64(),
            position_seconds: s.position.as_secs_f64(),
            success: true,
        }
    }
}

pub fn get_now_playing(sessions: &dyn MediaSessions, policy: &PollPolicy) -> NowPlaying {
    match sessions.current(policy) {
        Ok(Some(snapshot)) => snapshot.into(),
        Ok(None) => NowPlaying::not_found(),
        Err(e) => {
            log::debug!("media: session query failed: {e}");
            NowPlaying::not_found()
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
