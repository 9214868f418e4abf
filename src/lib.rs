//! # quoteplan-widget
//!
//! Leptos + WASM floating chat widget for the QuotePlan assistant.
//!
//! The widget collects a question, posts it to the assistant endpoint and
//! types the structured answer into the conversation log. Browser glue is
//! gated behind the `csr` feature; everything else (formatting, typing,
//! the request state machine, drag geometry) builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod render;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: mounts the widget into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::mount();
}
