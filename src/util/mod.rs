//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, scrolling,
//! window listeners) from rendering and request logic so the latter stays
//! testable without a DOM.

pub mod cancel;
pub mod clock;
pub mod format;
#[cfg(feature = "csr")]
pub mod scroll;
pub mod typing;
#[cfg(feature = "csr")]
pub mod window_events;
