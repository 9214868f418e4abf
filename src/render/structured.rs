//! Composite rendering of a successful assistant reply.
//!
//! One reply block is inserted up front, then sections are appended and typed
//! strictly one after another: summary, steps (or the full answer when there
//! are no steps), follow-up tip. A missing field skips its section entirely.

#[cfg(test)]
#[path = "structured_test.rs"]
mod structured_test;

use super::RenderCtx;
use super::view::{ChatView, SectionKind};
use crate::net::types::AskResponse;
use crate::util::clock::Clock;
use crate::util::typing::TypingOutcome;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// Clipboard text for the steps Copy control.
pub fn steps_copy_text(steps: &[String]) -> String {
    steps.join("\n")
}

/// Render `reply` into a new composite block. Stops after the section being
/// typed when the context's token is cancelled.
pub async fn render_structured<V: ChatView, C: Clock>(ctx: &RenderCtx<'_, V, C>, reply: &AskResponse) -> TypingOutcome {
    let view = ctx.view;
    let config = ctx.config;

    let block = view.append_reply();
    view.scroll_to_bottom();

    if let Some(summary) = reply.summary() {
        let node = view.append_section(&block, SectionKind::Summary);
        view.scroll_to_bottom();
        if ctx.type_into(node, summary, config.summary_speed_ms).await == TypingOutcome::Cancelled {
            return TypingOutcome::Cancelled;
        }
    }

    if let Some(steps) = reply.step_list() {
        let list = view.append_steps(&block, &steps_copy_text(steps));
        view.scroll_to_bottom();
        for step in steps {
            let item = view.append_step(&list);
            view.scroll_to_bottom();
            if ctx.type_into(item, step, config.step_speed_ms).await == TypingOutcome::Cancelled {
                return TypingOutcome::Cancelled;
            }
        }
    } else if let Some(answer) = reply.full_answer() {
        let node = view.append_section(&block, SectionKind::Answer);
        view.scroll_to_bottom();
        if ctx.type_into(node, answer, config.answer_speed_ms).await == TypingOutcome::Cancelled {
            return TypingOutcome::Cancelled;
        }
    }

    if let Some(tip) = reply.tip() {
        let node = view.append_section(&block, SectionKind::FollowUp);
        view.scroll_to_bottom();
        if ctx.type_into(node, tip, config.follow_up_speed_ms).await == TypingOutcome::Cancelled {
            return TypingOutcome::Cancelled;
        }
    }

    view.scroll_to_bottom();
    TypingOutcome::Completed
}
