//! HTTP client for the assistant endpoint.
//!
//! Client-side (csr): a real `fetch` via `gloo-net`, abortable through the
//! request's `CancelToken`. Native builds return `ApiError::Unavailable`
//! since the endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, non-2xx statuses and undecodable bodies all surface as
//! `ApiError`; the controller renders them uniformly as a connection error and
//! keeps the detail for the console log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{AskRequest, AskResponse};
use crate::util::cancel::CancelToken;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("API error: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request aborted")]
    Aborted,
    #[error("not available outside the browser")]
    Unavailable,
}

/// One question in, one structured reply out.
pub trait AskApi {
    fn ask(&self, request: &AskRequest, cancel: &CancelToken) -> impl Future<Output = Result<AskResponse, ApiError>>;
}

/// `fetch`-backed [`AskApi`] posting JSON to a fixed endpoint.
#[derive(Clone, Debug)]
pub struct HttpAskApi {
    endpoint: String,
}

impl HttpAskApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AskApi for HttpAskApi {
    async fn ask(&self, request: &AskRequest, cancel: &CancelToken) -> Result<AskResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let abort = web_sys::AbortController::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
            let signal = abort.signal();
            cancel.on_cancel(move || abort.abort());

            let resp = gloo_net::http::Request::post(&self.endpoint)
                .abort_signal(Some(&signal))
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| {
                    if cancel.is_cancelled() {
                        ApiError::Aborted
                    } else {
                        ApiError::Transport(e.to_string())
                    }
                })?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<AskResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, cancel);
            Err(ApiError::Unavailable)
        }
    }
}
