//! The `ChatView` seam between render logic and the page.

use crate::util::typing::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn block_class(self) -> &'static str {
        match self {
            Self::User => "message user-message",
            Self::Bot => "message bot-message",
        }
    }
}

/// Sections of a structured reply, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Steps,
    Answer,
    FollowUp,
}

impl SectionKind {
    pub fn title(self) -> Option<&'static str> {
        match self {
            Self::Summary => Some("📋 Summary"),
            Self::Steps => Some("📌 Steps"),
            Self::Answer => None,
            Self::FollowUp => Some("✨ Tip"),
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Summary => "answer-section summary-box",
            Self::Steps => "answer-section steps-box",
            Self::Answer => "answer-section answer-box",
            Self::FollowUp => "answer-section followup-box",
        }
    }
}

/// Operations on the message log and input row.
///
/// Every `append_*` call inserts immediately and returns a handle to the node
/// that receives content. Handles stay valid for the page lifetime.
pub trait ChatView {
    type Node: Clone;

    /// Drop the greeting and quick-prompt placeholders, if still present.
    fn remove_greeting(&self);
    /// Append an empty message block; returns its content node.
    fn append_message(&self, role: Role) -> Self::Node;
    /// Append the three-dot loading block; returns the block itself.
    fn append_loading(&self) -> Self::Node;
    /// Append an empty composite reply block; returns its section container.
    fn append_reply(&self) -> Self::Node;
    /// Append a titled text section to a reply; returns its content node.
    fn append_section(&self, reply: &Self::Node, kind: SectionKind) -> Self::Node;
    /// Append the steps section with a Copy control for `copy_text`; returns
    /// the ordered list.
    fn append_steps(&self, reply: &Self::Node, copy_text: &str) -> Self::Node;
    /// Append an empty item to a steps list.
    fn append_step(&self, list: &Self::Node) -> Self::Node;
    fn set_html(&self, node: &Self::Node, html: &str);
    /// Detach `node`; removing twice is a no-op.
    fn remove(&self, node: &Self::Node);
    fn scroll_to_bottom(&self);

    fn input_value(&self) -> String;
    fn set_input_value(&self, value: &str);
    fn focus_input(&self);
    fn set_send_enabled(&self, enabled: bool);
}

/// Typing target backed by one node of a `ChatView`.
pub struct NodeSurface<'a, V: ChatView> {
    view: &'a V,
    node: V::Node,
}

impl<'a, V: ChatView> NodeSurface<'a, V> {
    pub fn new(view: &'a V, node: V::Node) -> Self {
        Self { view, node }
    }
}

impl<V: ChatView> Surface for NodeSurface<'_, V> {
    fn render(&self, html: &str) {
        self.view.set_html(&self.node, html);
    }

    fn nudge_scroll(&self) {
        self.view.scroll_to_bottom();
    }
}
