//! Conversation log rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! `view` defines the `ChatView` seam over the message log and input row;
//! `dom` implements it against the real DOM. `messages` and `structured`
//! build blocks through that seam and drive the typing animation, so the same
//! code renders into the browser and into the in-memory view used by tests.

pub mod dom;
pub mod messages;
pub mod structured;
pub mod view;

use crate::config::WidgetConfig;
use crate::util::cancel::CancelToken;
use crate::util::clock::Clock;
use crate::util::typing::{TypingOutcome, type_text, type_text_then};
use view::{ChatView, NodeSurface};

/// Everything a render pass needs, borrowed for the duration of one request.
pub struct RenderCtx<'a, V, C> {
    pub view: &'a V,
    pub clock: &'a C,
    pub cancel: &'a CancelToken,
    pub config: &'a WidgetConfig,
}

impl<V: ChatView, C: Clock> RenderCtx<'_, V, C> {
    /// Type `text` into `node`, awaiting completion.
    pub async fn type_into(&self, node: V::Node, text: &str, speed_ms: u32) -> TypingOutcome {
        let surface = NodeSurface::new(self.view, node);
        type_text(&surface, text, speed_ms, self.clock, self.cancel).await
    }

    /// Type `text` into `node` and scroll once it finishes.
    pub async fn type_into_then_scroll(&self, node: V::Node, text: &str, speed_ms: u32) -> TypingOutcome {
        let surface = NodeSurface::new(self.view, node);
        let mut result = TypingOutcome::Completed;
        type_text_then(&surface, text, speed_ms, self.clock, self.cancel, |outcome| {
            result = outcome;
            self.view.scroll_to_bottom();
        })
        .await;
        result
    }
}
