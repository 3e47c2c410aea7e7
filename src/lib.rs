//! deskctl -- Windows desktop-control primitives for host scripting
//! environments.
//!
//! The core is ordered key-chord synthesis (`keys`) and the window focus
//! resolver in front of it (`window`). The remaining services (display mode,
//! Miracast receiver flag, media session, audio endpoint) are single-call
//! wrappers in `services`. `api::DeskControl` is the host-facing surface and
//! `bridge` speaks it over JSON lines.

pub mod api;
pub mod bridge;
pub mod config;
pub mod keys;
pub mod platform;
pub mod services;
pub mod window;

#[cfg(test)]
mod test_support;

pub use api::DeskControl;
pub use config::Config;
