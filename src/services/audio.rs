//! Master volume and mute on the default render device.

use serde::Serialize;

use crate::platform::AudioEndpoint;

use super::Ack;

/// Reported when the endpoint cannot be read.
const FALLBACK_VOLUME_PERCENT: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeReading {
    pub volume_percent: f32,
    pub success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MuteReading {
    pub muted: bool,
    pub success: bool,
}

/// Clamps a requested percentage into `0.0..=100.0`. NaN maps to 0.
pub fn clamp_percent(percent: f64) -> f32 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0) as f32
}

pub fn get_volume(endpoint: &dyn AudioEndpoint) -> VolumeReading {
    match endpoint.volume_scalar() {
        Ok(scalar) => VolumeReading {
            volume_percent: (scalar * 100.0).clamp(0.0, 100.0),
            success: true,
        },
        Err(e) => {
            log::warn!("audio: volume read failed: {e}");
            VolumeReading {
                volume_percent: FALLBACK_VOLUME_PERCENT,
                success: false,
            }
        }
    }
}

/// Sets the master volume. Out-of-range requests are clamped, not rejected.
pub fn set_volume(endpoint: &dyn AudioEndpoint, percent: f64) -> Ack {
    let level = clamp_percent(percent) / 100.0;
    let result = endpoint.set_volume_scalar(level);
    if let Err(e) = &result {
        log::warn!("audio: volume write failed: {e}");
    }
    Ack::from(&result)
}

pub fn get_mute(endpoint: &dyn AudioEndpoint) -> MuteReading {
    match endpoint.muted() {
        Ok(muted) => MuteReading {
            muted,
            success: true,
        },
        Err(e) => {
            log::warn!("audio: mute read failed: {e}");
            MuteReading {
                muted: false,
                success: false,
            }
        }
    }
}

pub fn set_mute(endpoint: &dyn AudioEndpoint, muted: bool) -> Ack {
    let result = endpoint.set_muted(muted);
    if let Err(e) = &result {
        log::warn!("audio: mute write failed: {e}");
    }
    Ack::from(&result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
