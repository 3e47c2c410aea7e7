//! Bounded polling for OS operations that complete asynchronously.
//!
//! Used in place of blocking on Windows Runtime async operations: the caller
//! checks the operation's status at a fixed interval and gives up after a
//! fixed number of checks.

use std::thread;
use std::time::Duration;

/// How often and how many times to check an in-flight operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_polls: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        PollPolicy {
            interval: Duration::from_millis(10),
            max_polls: 100,
        }
    }
}

/// Calls `check` until it yields `Some`, fails, or `policy.max_polls` checks
/// have been made. Sleeps `policy.interval` between checks.
///
/// Returns `Ok(None)` on timeout.
pub fn poll_until<T, E, F>(policy: &PollPolicy, mut check: F) -> Result<Option<T>, E>
where
    F: FnMut() -> Result<Option<T>, E>,
{
    for attempt in 0..policy.max_polls {
        if let Some(value) = check()? {
            return Ok(Some(value));
        }
        if attempt + 1 < policy.max_polls {
            thread::sleep(policy.interval);
        }
    }
    log::debug!("poll: gave up after {} checks", policy.max_polls);
    Ok(None)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
