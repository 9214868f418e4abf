//! Widget state models.
//!
//! DESIGN
//! ======
//! `session` holds conversation/request bookkeeping owned by the controller;
//! `chrome` holds panel presentation state (visibility, position, drag) that
//! the component keeps in a signal. Both are plain values so they can be
//! tested without a reactive runtime.

pub mod chrome;
pub mod session;
