//! Ordered key-chord synthesis.
//!
//! A request is a list of key names. Resolvable names are pressed in request
//! order and released in reverse order, so `["CONTROL", "C"]` becomes
//! Ctrl-down, C-down, C-up, Ctrl-up. Unknown names are skipped without
//! aborting the chord.
//!
//! A request that resolves to exactly one media or browser key takes the
//! single-key path: one extended down/up pair for that key alone.
//!
//! The whole batch is handed to the injector in one call so the OS queues it
//! without interleaving other input. When the OS accepts fewer events than
//! submitted the shortfall is logged and reported in `Delivery`. The batch
//! is never resent.

use super::classify::{is_extended, is_media_or_browser};
use super::table::{lookup, normalize_symbol};
use super::{InputError, VirtualKeyCode};
use crate::platform::InputInjector;

/// Press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPhase {
    Down,
    Up,
}

/// One synthesized keyboard event, ready for submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub vk: VirtualKeyCode,
    /// Hardware scan code for `vk` under the active keyboard layout.
    pub scan: u16,
    pub phase: KeyPhase,
    pub extended: bool,
}

/// Outcome of a submitted batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delivery {
    pub submitted: usize,
    pub accepted: usize,
}

impl Delivery {
    /// True when the OS dropped part of the batch.
    pub fn is_partial(&self) -> bool {
        self.accepted < self.submitted
    }
}

/// Builds the event batch for `keys` without touching the OS input queue.
///
/// `scan_code` maps a virtual key code to its hardware scan code.
/// Returns `InputError::EmptyRequest` only when `keys` itself is empty; a
/// request whose names are all unknown yields an empty batch.
pub fn build_batch<S, F>(keys: &[S], scan_code: F) -> Result<Vec<KeyEvent>, InputError>
where
    S: AsRef<str>,
    F: Fn(VirtualKeyCode) -> u16,
{
    if keys.is_empty() {
        return Err(InputError::EmptyRequest);
    }

    let resolved: Vec<VirtualKeyCode> = keys
        .iter()
        .filter_map(|raw| {
            let symbol = normalize_symbol(raw.as_ref());
            let vk = lookup(&symbol);
            if vk.is_none() {
                log::debug!("synth: unknown key {:?}, skipping", raw.as_ref());
            }
            vk
        })
        .collect();

    let event = |vk: VirtualKeyCode, phase: KeyPhase, extended: bool| KeyEvent {
        vk,
        scan: scan_code(vk),
        phase,
        extended,
    };

    if let &[vk] = resolved.as_slice() {
        if is_media_or_browser(vk) {
            return Ok(vec![
                event(vk, KeyPhase::Down, true),
                event(vk, KeyPhase::Up, true),
            ]);
        }
    }

    let mut batch = Vec::with_capacity(resolved.len() * 2);
    for &vk in &resolved {
        batch.push(event(vk, KeyPhase::Down, needs_extended_flag(vk)));
    }
    for &vk in resolved.iter().rev() {
        batch.push(event(vk, KeyPhase::Up, needs_extended_flag(vk)));
    }
    Ok(batch)
}

/// Builds the batch for `keys` and submits it through `injector`.
///
/// An empty resolved batch is a successful no-op: nothing is submitted.
pub fn synthesize<S: AsRef<str>>(
    keys: &[S],
    injector: &dyn InputInjector,
) -> Result<Delivery, InputError> {
    let batch = build_batch(keys, |vk| injector.scan_code(vk))?;
    if batch.is_empty() {
        log::debug!("synth: no resolvable keys in request, nothing to send");
        return Ok(Delivery::default());
    }

    let started = std::time::Instant::now();
    let accepted = injector.send(&batch)?;
    let delivery = Delivery {
        submitted: batch.len(),
        accepted,
    };

    if delivery.is_partial() {
        log::warn!(
            "synth: OS accepted {} of {} key events; not retrying",
            delivery.accepted,
            delivery.submitted
        );
    } else {
        log::debug!(
            "synth: injected {} events in {:.2}ms",
            delivery.submitted,
            started.elapsed().as_secs_f64() * 1000.0
        );
    }

    Ok(delivery)
}

fn needs_extended_flag(vk: VirtualKeyCode) -> bool {
    is_extended(vk) || is_media_or_browser(vk)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
