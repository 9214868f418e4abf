//! In-memory doubles for the DOM, timers and the assistant endpoint.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::net::api::{ApiError, AskApi};
use crate::net::types::{AskRequest, AskResponse};
use crate::render::view::{ChatView, Role, SectionKind};
use crate::util::cancel::CancelToken;
use crate::util::clock::Clock;
use crate::util::typing::Surface;

// =============================================================
// Clock
// =============================================================

/// Clock that never waits but remembers every requested delay.
#[derive(Debug, Default)]
pub struct InstantClock {
    pub sleeps: RefCell<Vec<u32>>,
}

impl Clock for InstantClock {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        self.sleeps.borrow_mut().push(ms);
        std::future::ready(())
    }
}

/// Future that is pending exactly once, giving other joined futures a turn.
#[derive(Debug, Default)]
pub struct YieldOnce {
    yielded: bool,
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

// =============================================================
// Surface
// =============================================================

/// Surface that keeps every rendered frame. Optionally cancels `token`
/// once `cancel_after` frames have been rendered.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub frames: RefCell<Vec<String>>,
    pub scrolls: Cell<u32>,
    pub cancel_after: Option<(usize, CancelToken)>,
}

impl RecordingSurface {
    pub fn last(&self) -> String {
        self.frames.borrow().last().cloned().unwrap_or_default()
    }
}

impl Surface for RecordingSurface {
    fn render(&self, html: &str) {
        let mut frames = self.frames.borrow_mut();
        frames.push(html.to_owned());
        if let Some((after, token)) = &self.cancel_after {
            if frames.len() >= *after {
                token.cancel();
            }
        }
    }

    fn nudge_scroll(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

// =============================================================
// View
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemKind {
    Message(Role),
    MessageContent,
    Loading,
    Reply,
    Section(SectionKind),
    StepList { copy_text: String },
    StepItem,
}

#[derive(Clone, Debug)]
pub struct MemNode {
    pub kind: MemKind,
    pub parent: Option<usize>,
    pub html: String,
    pub removed: bool,
}

/// DOM stand-in that records the conversation log as a flat node arena.
#[derive(Debug)]
pub struct MemoryView {
    pub nodes: RefCell<Vec<MemNode>>,
    pub greeting_present: Cell<bool>,
    pub input: RefCell<String>,
    pub send_enabled: Cell<bool>,
    pub focus_count: Cell<u32>,
    pub scroll_count: Cell<u32>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self {
            nodes: RefCell::new(Vec::new()),
            greeting_present: Cell::new(true),
            input: RefCell::new(String::new()),
            send_enabled: Cell::new(true),
            focus_count: Cell::new(0),
            scroll_count: Cell::new(0),
        }
    }
}

impl MemoryView {
    pub fn with_input(text: &str) -> Self {
        let view = Self::default();
        view.input.replace(text.to_owned());
        view
    }

    fn push(&self, kind: MemKind, parent: Option<usize>) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(MemNode { kind, parent, html: String::new(), removed: false });
        nodes.len() - 1
    }

    fn children(&self, parent: usize) -> Vec<MemNode> {
        self.nodes
            .borrow()
            .iter()
            .filter(|n| n.parent == Some(parent) && !n.removed)
            .cloned()
            .collect()
    }

    /// Top-level blocks still in the log, in insertion order.
    pub fn blocks(&self) -> Vec<(usize, MemKind)> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none() && !n.removed)
            .map(|(idx, n)| (idx, n.kind.clone()))
            .collect()
    }

    /// `(role, html)` for every plain message block.
    pub fn messages(&self) -> Vec<(Role, String)> {
        self.blocks()
            .into_iter()
            .filter_map(|(idx, kind)| match kind {
                MemKind::Message(role) => {
                    let html = self.children(idx).first().map(|c| c.html.clone()).unwrap_or_default();
                    Some((role, html))
                }
                _ => None,
            })
            .collect()
    }

    pub fn loading_count(&self) -> usize {
        self.blocks().iter().filter(|(_, kind)| *kind == MemKind::Loading).count()
    }

    pub fn replies(&self) -> Vec<usize> {
        self.blocks()
            .into_iter()
            .filter(|(_, kind)| *kind == MemKind::Reply)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Sections of a reply block as `(kind, html)`; the steps section's html
    /// is its list items joined with `|`.
    pub fn sections(&self, reply: usize) -> Vec<(SectionKind, String)> {
        let nodes = self.nodes.borrow();
        nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent == Some(reply) && !n.removed)
            .filter_map(|(idx, n)| match &n.kind {
                MemKind::Section(kind) => Some((*kind, n.html.clone())),
                MemKind::StepList { .. } => {
                    let items = nodes
                        .iter()
                        .filter(|c| c.parent == Some(idx) && c.kind == MemKind::StepItem)
                        .map(|c| c.html.clone())
                        .collect::<Vec<_>>();
                    Some((SectionKind::Steps, items.join("|")))
                }
                _ => None,
            })
            .collect()
    }

    pub fn step_items(&self, reply: usize) -> Vec<String> {
        let nodes = self.nodes.borrow();
        let Some(list) = nodes
            .iter()
            .position(|n| n.parent == Some(reply) && matches!(n.kind, MemKind::StepList { .. }))
        else {
            return Vec::new();
        };
        nodes
            .iter()
            .filter(|n| n.parent == Some(list))
            .map(|n| n.html.clone())
            .collect()
    }

    pub fn copy_text(&self, reply: usize) -> Option<String> {
        self.nodes.borrow().iter().find_map(|n| match &n.kind {
            MemKind::StepList { copy_text } if n.parent == Some(reply) => Some(copy_text.clone()),
            _ => None,
        })
    }
}

impl ChatView for MemoryView {
    type Node = usize;

    fn remove_greeting(&self) {
        self.greeting_present.set(false);
    }

    fn append_message(&self, role: Role) -> usize {
        let block = self.push(MemKind::Message(role), None);
        self.push(MemKind::MessageContent, Some(block))
    }

    fn append_loading(&self) -> usize {
        self.push(MemKind::Loading, None)
    }

    fn append_reply(&self) -> usize {
        self.push(MemKind::Reply, None)
    }

    fn append_section(&self, reply: &usize, kind: SectionKind) -> usize {
        self.push(MemKind::Section(kind), Some(*reply))
    }

    fn append_steps(&self, reply: &usize, copy_text: &str) -> usize {
        self.push(MemKind::StepList { copy_text: copy_text.to_owned() }, Some(*reply))
    }

    fn append_step(&self, list: &usize) -> usize {
        self.push(MemKind::StepItem, Some(*list))
    }

    fn set_html(&self, node: &usize, html: &str) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(*node) {
            n.html = html.to_owned();
        }
    }

    fn remove(&self, node: &usize) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(*node) {
            n.removed = true;
        }
    }

    fn scroll_to_bottom(&self) {
        self.scroll_count.set(self.scroll_count.get() + 1);
    }

    fn input_value(&self) -> String {
        self.input.borrow().clone()
    }

    fn set_input_value(&self, value: &str) {
        self.input.replace(value.to_owned());
    }

    fn focus_input(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
    }

    fn set_send_enabled(&self, enabled: bool) {
        self.send_enabled.set(enabled);
    }
}

// =============================================================
// Api
// =============================================================

/// Endpoint double returning a canned result after yielding once.
#[derive(Debug)]
pub struct StubApi {
    pub reply: Result<AskResponse, ApiError>,
    pub requests: RefCell<Vec<AskRequest>>,
    /// Cancel the request's token while it is in flight.
    pub cancel_in_flight: bool,
}

impl StubApi {
    pub fn replying(reply: AskResponse) -> Self {
        Self::with_result(Ok(reply))
    }

    pub fn failing(err: ApiError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(reply: Result<AskResponse, ApiError>) -> Self {
        Self {
            reply,
            requests: RefCell::new(Vec::new()),
            cancel_in_flight: false,
        }
    }
}

impl AskApi for StubApi {
    async fn ask(&self, request: &AskRequest, cancel: &CancelToken) -> Result<AskResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        YieldOnce::default().await;
        if self.cancel_in_flight {
            cancel.cancel();
            return Err(ApiError::Aborted);
        }
        self.reply.clone()
    }
}
