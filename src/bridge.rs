//! JSON-lines bridge between a host scripting process and `DeskControl`.
//!
//! One request object per line, tagged by `op`:
//!
//! ```json
//! {"op": "sendKeys", "keys": ["CONTROL", "C"]}
//! {"op": "setVolume", "percent": 40}
//! ```
//!
//! One response object per line: `{"ok": true, "result": ...}` or
//! `{"ok": false, "error": "..."}`. Malformed requests are answered with an
//! error and never reach the OS.

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::api::DeskControl;
use crate::keys::InputError;
use crate::platform::{PlatformError, WindowHandle};

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Request {
    SendKeys {
        keys: Vec<Value>,
    },
    SendKeysToWindow {
        handle: WindowHandle,
        keys: Vec<Value>,
    },
    ListWindows,
    SetDisplayResolution {
        width: i64,
        height: i64,
    },
    ResetDisplay,
    CountDisplays,
    EnableReceiver,
    IsReceiverEnabled,
    GetNowPlaying,
    GetVolume,
    SetVolume {
        percent: f64,
    },
    GetMute,
    SetMute {
        muted: bool,
    },
    ListKeys,
}

/// Keeps the string entries of a host-supplied key list; other values are
/// dropped before synthesis sees the request.
fn string_keys(values: &[Value]) -> Vec<&str> {
    values.iter().filter_map(Value::as_str).collect()
}

pub fn dispatch(ctl: &DeskControl, request: Request) -> Result<Value, BridgeError> {
    let result = match request {
        Request::SendKeys { keys } => {
            let keys = string_keys(&keys);
            json!(ctl.synthesize_keys(&keys[..])?)
        }
        Request::SendKeysToWindow { handle, keys } => {
            let keys = string_keys(&keys);
            json!(ctl.synthesize_keys_to_window(handle, &keys[..])?)
        }
        Request::ListWindows => serde_json::to_value(ctl.list_top_level_windows()?)?,
        Request::SetDisplayResolution { width, height } => {
            serde_json::to_value(ctl.set_display_resolution(width, height))?
        }
        Request::ResetDisplay => serde_json::to_value(ctl.reset_display())?,
        Request::CountDisplays => json!(ctl.count_attached_displays()),
        Request::EnableReceiver => serde_json::to_value(ctl.enable_receiver())?,
        Request::IsReceiverEnabled => serde_json::to_value(ctl.is_receiver_enabled())?,
        Request::GetNowPlaying => serde_json::to_value(ctl.get_now_playing())?,
        Request::GetVolume => serde_json::to_value(ctl.get_volume())?,
        Request::SetVolume { percent } => serde_json::to_value(ctl.set_volume(percent))?,
        Request::GetMute => serde_json::to_value(ctl.get_mute())?,
        Request::SetMute { muted } => serde_json::to_value(ctl.set_mute(muted))?,
        Request::ListKeys => json!(ctl.key_symbols()),
    };
    Ok(result)
}

/// Parses one request line, runs it, and renders the response line.
pub fn handle_line(ctl: &DeskControl, line: &str) -> String {
    let outcome = serde_json::from_str::<Request>(line)
        .map_err(BridgeError::from)
        .and_then(|request| {
            log::debug!("bridge: {request:?}");
            dispatch(ctl, request)
        });

    let response = match outcome {
        Ok(result) => json!({ "ok": true, "result": result }),
        Err(e) => {
            log::debug!("bridge: request failed: {e}");
            json!({ "ok": false, "error": e.to_string() })
        }
    };
    response.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
