//! Keyboard synthesis: symbol table, key classification, and ordered batch
//! construction.
//!
//! Everything in this module is platform-neutral. OS submission happens
//! through the `InputInjector` trait in `crate::platform`.

pub mod classify;
pub mod codes;
pub mod synth;
pub mod table;

use thiserror::Error;

use crate::platform::PlatformError;

pub use classify::{classify, is_extended, is_media_or_browser, KeyClass};
pub use synth::{build_batch, synthesize, Delivery, KeyEvent, KeyPhase};
pub use table::{lookup, normalize_symbol, symbols};

/// Platform virtual-key code (Windows `VK_*` namespace).
pub type VirtualKeyCode = u16;

/// Errors reported by the key synthesis entry points.
#[derive(Debug, Error)]
pub enum InputError {
    /// The request carried no key names at all. Raised before any lookup or
    /// OS call; a request whose names are all unknown is not this error.
    #[error("at least one key is required")]
    EmptyRequest,
    #[error(transparent)]
    Platform(#[from] PlatformError),
}
