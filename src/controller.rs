//! Submit flow for the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatController` owns the session state and the current request's
//! `CancelToken`, and coordinates the view, the endpoint and the renderers.
//! The component shares it behind an `Rc` and drives it from spawned tasks.
//!
//! STATE MACHINE
//! =============
//! `Idle -> AwaitingResponse -> Rendering -> Idle`. A submit while not idle is
//! rejected, so two replies never type into the log at the same time. Every
//! path back to `Idle` clears the loading block, re-enables send and returns
//! focus to the input.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;

use crate::config::WidgetConfig;
use crate::net::api::{ApiError, AskApi};
use crate::net::types::AskRequest;
use crate::render::RenderCtx;
use crate::render::messages::{add_message, remove_loading, show_loading};
use crate::render::structured::render_structured;
use crate::render::view::{ChatView, Role};
use crate::state::session::SessionState;
use crate::util::cancel::CancelToken;
use crate::util::clock::Clock;
use crate::util::typing::TypingOutcome;

/// Shown for transport failures, bad statuses and unreadable bodies.
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please check your connection and try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing happened.
    Ignored,
    /// A request was already in flight; nothing happened.
    Busy,
    /// Structured reply rendered.
    Answered,
    /// `success: false` reply rendered as a message.
    Declined,
    ConnectionError,
    /// Widget closed while the request or its rendering was running.
    Cancelled,
}

pub struct ChatController<V, A, C> {
    view: V,
    api: A,
    clock: C,
    config: WidgetConfig,
    session: RefCell<SessionState>,
    cancel: RefCell<CancelToken>,
}

impl<V: ChatView, A: AskApi, C: Clock> ChatController<V, A, C> {
    pub fn new(view: V, api: A, clock: C, config: WidgetConfig) -> Self {
        Self {
            view,
            api,
            clock,
            config,
            session: RefCell::new(SessionState::default()),
            cancel: RefCell::new(CancelToken::new()),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn session(&self) -> SessionState {
        self.session.borrow().clone()
    }

    /// Page-load setup: focus the input and pin the log to the bottom.
    pub fn ready(&self) {
        self.view.focus_input();
        self.view.scroll_to_bottom();
    }

    /// Called after the panel opens: focus now, scroll once layout settles.
    pub async fn settle_after_open(&self) {
        self.view.focus_input();
        self.clock.sleep(self.config.open_scroll_delay_ms).await;
        self.view.scroll_to_bottom();
    }

    /// Abort the in-flight request and stop any typing it started.
    pub fn cancel_pending(&self) {
        self.cancel.borrow().cancel();
    }

    /// Put a quick-prompt label in the input and submit it.
    pub async fn submit_prompt(&self, label: &str) -> SubmitOutcome {
        self.view.set_input_value(label.trim());
        self.view.focus_input();
        self.submit().await
    }

    /// Send the input's question and render the reply.
    pub async fn submit(&self) -> SubmitOutcome {
        let question = self.view.input_value().trim().to_owned();
        if question.is_empty() {
            return SubmitOutcome::Ignored;
        }
        if !self.session.borrow_mut().begin_request(&question) {
            log::debug!("submit ignored: request already in flight");
            return SubmitOutcome::Busy;
        }

        let cancel = CancelToken::new();
        self.cancel.replace(cancel.clone());
        let ctx = RenderCtx { view: &self.view, clock: &self.clock, cancel: &cancel, config: &self.config };

        add_message(&ctx, &self.session, &question, Role::User, false).await;
        self.view.set_input_value("");
        let loading = show_loading(&self.view);
        self.view.set_send_enabled(false);

        let request = AskRequest { question, top_k: self.config.top_k };
        let result = self.api.ask(&request, &cancel).await;
        remove_loading(&self.view, &loading);

        let outcome = if cancel.is_cancelled() {
            log::info!("request cancelled before reply was shown");
            SubmitOutcome::Cancelled
        } else {
            match result {
                Ok(reply) if reply.succeeded() => {
                    self.session.borrow_mut().begin_rendering();
                    match render_structured(&ctx, &reply).await {
                        TypingOutcome::Completed => SubmitOutcome::Answered,
                        TypingOutcome::Cancelled => SubmitOutcome::Cancelled,
                    }
                }
                Ok(reply) => {
                    self.session.borrow_mut().begin_rendering();
                    add_message(&ctx, &self.session, reply.failure_message(), Role::Bot, true).await;
                    SubmitOutcome::Declined
                }
                Err(ApiError::Aborted) => SubmitOutcome::Cancelled,
                Err(e) => {
                    log::error!("ask request failed: {e}");
                    add_message(&ctx, &self.session, CONNECTION_ERROR_MESSAGE, Role::Bot, true).await;
                    SubmitOutcome::ConnectionError
                }
            }
        };

        remove_loading(&self.view, &loading);
        self.view.set_send_enabled(true);
        self.view.focus_input();
        self.session.borrow_mut().finish_request();
        outcome
    }
}
