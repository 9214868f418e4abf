//! `ChatView` over the live DOM.
//!
//! The widget component owns the element refs; this view builds message
//! blocks imperatively beneath the messages container so typing can rewrite a
//! single node per frame without re-rendering the log. Requires a browser
//! environment; native builds get an inert view.

use leptos::html;
use leptos::prelude::*;

use super::view::{ChatView, Role, SectionKind};

/// Handle to an element created by [`DomView`].
#[derive(Clone, Debug, Default)]
pub struct DomNode {
    #[cfg(feature = "csr")]
    el: Option<web_sys::Element>,
}

#[derive(Clone, Copy)]
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub struct DomView {
    messages: NodeRef<html::Div>,
    wrapper: NodeRef<html::Div>,
    input: NodeRef<html::Textarea>,
    send: NodeRef<html::Button>,
    copy_reset_ms: u32,
}

impl DomView {
    pub fn new(
        messages: NodeRef<html::Div>,
        wrapper: NodeRef<html::Div>,
        input: NodeRef<html::Textarea>,
        send: NodeRef<html::Button>,
        copy_reset_ms: u32,
    ) -> Self {
        Self { messages, wrapper, input, send, copy_reset_ms }
    }
}

#[cfg(feature = "csr")]
mod imp {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::render::structured::{COPIED_LABEL, COPY_LABEL};

    pub(super) fn element(tag: &str, class: &str) -> Option<web_sys::Element> {
        let doc = web_sys::window()?.document()?;
        let el = doc.create_element(tag).ok()?;
        if !class.is_empty() {
            el.set_class_name(class);
        }
        Some(el)
    }

    pub(super) fn append(parent: &web_sys::Element, child: &web_sys::Element) {
        let _ = parent.append_child(child);
    }

    /// `div.message.<role>` > `div.message-body` > `div.<inner_class>`;
    /// returns `(block, inner)`.
    pub(super) fn message_shell(
        container: &web_sys::Element,
        block_class: &str,
        inner_class: &str,
    ) -> Option<(web_sys::Element, web_sys::Element)> {
        let block = element("div", block_class)?;
        let body = element("div", "message-body")?;
        let inner = element("div", inner_class)?;
        append(&body, &inner);
        append(&block, &body);
        append(container, &block);
        Some((block, inner))
    }

    /// Copy control for the steps header: writes `text` to the clipboard and
    /// reads "Copied!" for `reset_ms`.
    pub(super) fn copy_button(text: String, reset_ms: u32) -> Option<web_sys::Element> {
        let button = element("button", "copy-btn")?;
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("style", "font-size: 11px; padding: 4px 8px;");
        button.set_text_content(Some(COPY_LABEL));

        let label_target = button.clone();
        let on_click = Closure::<dyn Fn()>::new(move || {
            if let Some(clipboard) = web_sys::window().map(|w| w.navigator().clipboard()) {
                let _ = clipboard.write_text(&text);
            }
            label_target.set_text_content(Some(COPIED_LABEL));
            let reset_target = label_target.clone();
            gloo_timers::callback::Timeout::new(reset_ms, move || {
                reset_target.set_text_content(Some(COPY_LABEL));
            })
            .forget();
        });
        let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
        Some(button)
    }
}

#[cfg(feature = "csr")]
impl DomView {
    fn container(&self) -> Option<web_sys::Element> {
        self.messages.get_untracked().map(Into::into)
    }

    fn try_append_section(&self, reply: &DomNode, kind: SectionKind) -> Option<web_sys::Element> {
        let parent = reply.el.as_ref()?;
        let section = imp::element("div", kind.class())?;
        if let Some(title) = kind.title() {
            let heading = imp::element("h3", "")?;
            heading.set_text_content(Some(title));
            imp::append(&section, &heading);
        }
        let content = imp::element("div", "typing-content")?;
        imp::append(&section, &content);
        imp::append(parent, &section);
        Some(content)
    }

    fn try_append_steps(&self, reply: &DomNode, copy_text: &str) -> Option<web_sys::Element> {
        let parent = reply.el.as_ref()?;
        let section = imp::element("div", SectionKind::Steps.class())?;

        let header = imp::element("div", "steps-header")?;
        let _ = header.set_attribute(
            "style",
            "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
        );
        let heading = imp::element("h3", "")?;
        heading.set_text_content(SectionKind::Steps.title());
        let _ = heading.set_attribute("style", "margin: 0;");
        imp::append(&header, &heading);
        if let Some(button) = imp::copy_button(copy_text.to_owned(), self.copy_reset_ms) {
            imp::append(&header, &button);
        }
        imp::append(&section, &header);

        let list = imp::element("ol", "typing-content")?;
        let _ = list.set_attribute("style", "margin-top: 8px;");
        imp::append(&section, &list);
        imp::append(parent, &section);
        Some(list)
    }
}

impl ChatView for DomView {
    type Node = DomNode;

    fn remove_greeting(&self) {
        #[cfg(feature = "csr")]
        {
            let Some(container) = self.container() else {
                return;
            };
            for selector in [".message-greeting", ".quick-prompts"] {
                if let Ok(Some(el)) = container.query_selector(selector) {
                    el.remove();
                }
            }
        }
    }

    fn append_message(&self, role: Role) -> DomNode {
        #[cfg(feature = "csr")]
        {
            let el = self
                .container()
                .and_then(|c| imp::message_shell(&c, role.block_class(), "message-content"))
                .map(|(_, content)| content);
            DomNode { el }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = role;
            DomNode::default()
        }
    }

    fn append_loading(&self) -> DomNode {
        #[cfg(feature = "csr")]
        {
            let el = self.container().and_then(|c| {
                let (block, dots) = imp::message_shell(&c, Role::Bot.block_class(), "loading")?;
                let _ = block.set_attribute("id", &format!("loading-indicator-{}", uuid::Uuid::new_v4()));
                for _ in 0..3 {
                    let dot = imp::element("div", "loading-dot")?;
                    imp::append(&dots, &dot);
                }
                Some(block)
            });
            DomNode { el }
        }
        #[cfg(not(feature = "csr"))]
        {
            DomNode::default()
        }
    }

    fn append_reply(&self) -> DomNode {
        #[cfg(feature = "csr")]
        {
            let el = self
                .container()
                .and_then(|c| imp::message_shell(&c, Role::Bot.block_class(), "enhanced-reply"))
                .map(|(_, content)| content);
            DomNode { el }
        }
        #[cfg(not(feature = "csr"))]
        {
            DomNode::default()
        }
    }

    fn append_section(&self, reply: &DomNode, kind: SectionKind) -> DomNode {
        #[cfg(feature = "csr")]
        {
            DomNode { el: self.try_append_section(reply, kind) }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (reply, kind);
            DomNode::default()
        }
    }

    fn append_steps(&self, reply: &DomNode, copy_text: &str) -> DomNode {
        #[cfg(feature = "csr")]
        {
            DomNode { el: self.try_append_steps(reply, copy_text) }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (reply, copy_text);
            DomNode::default()
        }
    }

    fn append_step(&self, list: &DomNode) -> DomNode {
        #[cfg(feature = "csr")]
        {
            let el = list.el.as_ref().and_then(|parent| {
                let item = imp::element("li", "typing-step")?;
                imp::append(parent, &item);
                Some(item)
            });
            DomNode { el }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = list;
            DomNode::default()
        }
    }

    fn set_html(&self, node: &DomNode, html: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = &node.el {
                el.set_inner_html(html);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (node, html);
        }
    }

    fn remove(&self, node: &DomNode) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = &node.el {
                el.remove();
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = node;
        }
    }

    fn scroll_to_bottom(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(wrapper) = self.wrapper.get_untracked() {
                crate::util::scroll::scroll_to_bottom(&wrapper);
            }
        }
    }

    fn input_value(&self) -> String {
        #[cfg(feature = "csr")]
        {
            self.input.get_untracked().map(|el| el.value()).unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn set_input_value(&self, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = self.input.get_untracked() {
                el.set_value(value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = value;
        }
    }

    fn focus_input(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = self.input.get_untracked() {
                let _ = el.focus();
            }
        }
    }

    fn set_send_enabled(&self, enabled: bool) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = self.send.get_untracked() {
                el.set_disabled(!enabled);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = enabled;
        }
    }
}
