//! Single-call desktop services built on the platform traits.
//!
//! None of these surface `Err` to the caller. OS failures are folded into
//! plain result objects with `success: false` and a readable message, which
//! the host checks instead of catching exceptions.

pub mod audio;
pub mod display;
pub mod media;
pub mod miracast;

use serde::Serialize;

use crate::platform::PlatformError;

/// Outcome of an operation that changes system state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
}

impl OpResult {
    pub fn ok(message: impl Into<String>) -> Self {
        OpResult {
            success: true,
            message: message.into(),
            error_code: None,
        }
    }

    pub fn failed(message: impl Into<String>, error_code: Option<i64>) -> Self {
        OpResult {
            success: false,
            message: message.into(),
            error_code,
        }
    }

    /// Failure carrying `context` plus the error text and its OS code.
    pub fn from_error(context: &str, err: &PlatformError) -> Self {
        Self::failed(format!("{context}: {err}"), err.code())
    }
}

/// Bare success flag for setters with nothing else to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ack {
    pub success: bool,
}

impl<T> From<&Result<T, PlatformError>> for Ack {
    fn from(result: &Result<T, PlatformError>) -> Self {
        Ack {
            success: result.is_ok(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
