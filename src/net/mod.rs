//! Networking for the assistant endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON request/response contract and `api` performs the
//! single `POST` behind the `AskApi` seam.

pub mod api;
pub mod types;
