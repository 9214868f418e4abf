//! Single message blocks and the loading indicator.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::cell::RefCell;

use super::RenderCtx;
use super::view::{ChatView, Role};
use crate::state::session::SessionState;
use crate::util::clock::Clock;
use crate::util::format::format_message;
use crate::util::typing::{CARET_HTML, TypingOutcome};

/// Handle to a shown loading block; pass it back to [`remove_loading`].
#[derive(Clone, Debug)]
pub struct LoadingHandle<N> {
    node: N,
}

/// Append the three-dot "working" block.
pub fn show_loading<V: ChatView>(view: &V) -> LoadingHandle<V::Node> {
    let node = view.append_loading();
    view.scroll_to_bottom();
    LoadingHandle { node }
}

/// Remove a loading block; safe to call more than once.
pub fn remove_loading<V: ChatView>(view: &V, handle: &LoadingHandle<V::Node>) {
    view.remove(&handle.node);
}

/// Append one message to the log.
///
/// The first bot message before any user message clears the greeting. Bot
/// messages with `use_typing` are inserted empty and then typed; everything
/// else renders at once. User messages bump the conversation counter.
pub async fn add_message<V: ChatView, C: Clock>(
    ctx: &RenderCtx<'_, V, C>,
    session: &RefCell<SessionState>,
    text: &str,
    role: Role,
    use_typing: bool,
) -> TypingOutcome {
    let view = ctx.view;
    if role == Role::Bot && session.borrow().conversation_count() == 0 {
        view.remove_greeting();
    }

    let content = view.append_message(role);

    if role == Role::Bot && use_typing {
        view.set_html(&content, CARET_HTML);
        view.scroll_to_bottom();
        return ctx
            .type_into_then_scroll(content, text, ctx.config.message_speed_ms)
            .await;
    }

    view.set_html(&content, &format_message(text));
    view.scroll_to_bottom();
    if role == Role::User {
        session.borrow_mut().record_user_message();
    }
    TypingOutcome::Completed
}
