//! Floating chat panel: toggle button, draggable header, message log and
//! input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chrome state (open/closed, position, drag) is a `ChromeState` signal that
//! drives classes and inline styles reactively. The message log is written
//! imperatively by `ChatController` through `DomView`, which reads the
//! element refs declared here.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use std::future::Future;
use std::rc::Rc;

use leptos::html;
use leptos::prelude::*;

use super::quick_prompts::QuickPrompts;
use crate::config::WidgetConfig;
use crate::controller::ChatController;
use crate::net::api::HttpAskApi;
use crate::render::dom::DomView;
use crate::state::chrome::{ChromeState, DragSource, Pointer};
#[cfg(feature = "csr")]
use crate::state::chrome::{PointerKind, Rect, Size};
use crate::util::clock::BrowserClock;

type WidgetController = ChatController<DomView, HttpAskApi, BrowserClock>;
type ControllerHandle = StoredValue<Rc<WidgetController>, LocalStorage>;

/// Enter submits; Shift+Enter inserts a newline.
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

/// Inline `display` for an element shown as `shown_as` when `visible`.
pub fn display_style(visible: bool, shown_as: &'static str) -> &'static str {
    if visible { shown_as } else { "none" }
}

/// Touch pointer from a gesture's touch count and its first touch position.
pub fn touch_pointer(count: u32, first: Option<(f64, f64)>) -> Option<Pointer> {
    first.map(|(x, y)| Pointer::touch(count, x, y))
}

fn touch_event_pointer(ev: &leptos::ev::TouchEvent) -> Option<Pointer> {
    #[cfg(feature = "csr")]
    {
        let touches = ev.touches();
        let first = touches.get(0).map(|t| (f64::from(t.client_x()), f64::from(t.client_y())));
        touch_pointer(touches.length(), first)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}

/// Run a controller task on the browser's microtask queue.
fn spawn_task<F, Fut>(controller: ControllerHandle, task: F)
where
    F: FnOnce(Rc<WidgetController>) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(task(controller.get_value()));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (controller, task);
    }
}

/// Floating assistant widget.
#[component]
pub fn ChatWidget(config: WidgetConfig) -> impl IntoView {
    let chrome = RwSignal::new(ChromeState::default());

    let panel_ref = NodeRef::<html::Div>::new();
    let wrapper_ref = NodeRef::<html::Div>::new();
    let messages_ref = NodeRef::<html::Div>::new();
    let input_ref = NodeRef::<html::Textarea>::new();
    let send_ref = NodeRef::<html::Button>::new();

    let title = config.title.clone();
    let greeting = config.greeting.clone();
    let prompts = config.quick_prompts.clone();
    let placeholder = config.input_placeholder.clone();

    let view = DomView::new(messages_ref, wrapper_ref, input_ref, send_ref, config.copy_reset_ms);
    let api = HttpAskApi::new(config.endpoint.clone());
    let controller: ControllerHandle =
        StoredValue::new_local(Rc::new(ChatController::new(view, api, BrowserClock, config)));

    #[cfg(feature = "csr")]
    install_drag_listeners(chrome, panel_ref);

    Effect::new(move || {
        controller.with_value(|c| c.ready());
    });

    let submit = move || {
        spawn_task(controller, |ctrl| async move {
            let _ = ctrl.submit().await;
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key()) {
            ev.prevent_default();
            submit();
        }
    };

    let on_pick = Callback::new(move |label: String| {
        spawn_task(controller, move |ctrl| async move {
            let _ = ctrl.submit_prompt(&label).await;
        });
    });

    let on_open = move |_: leptos::ev::MouseEvent| {
        let mut opened = false;
        chrome.update(|c| opened = c.open());
        if opened {
            spawn_task(controller, |ctrl| async move {
                ctrl.settle_after_open().await;
            });
        }
    };

    let on_close = move |_: leptos::ev::MouseEvent| {
        end_drag(chrome);
        chrome.update(|c| {
            c.close();
        });
        controller.with_value(|c| c.cancel_pending());
    };

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        let pointer = Pointer::mouse(ev.button(), f64::from(ev.client_x()), f64::from(ev.client_y()));
        begin_drag(chrome, panel_ref, pointer);
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some(pointer) = touch_event_pointer(&ev) {
            begin_drag(chrome, panel_ref, pointer);
        }
    };

    let dragging = move || chrome.with(ChromeState::is_dragging);

    view! {
        <div class="chat-widget-root">
            <button
                class="chat-toggle-btn"
                id="chatToggleBtn"
                type="button"
                title="Open assistant"
                style:display=move || display_style(chrome.with(ChromeState::toggle_visible), "flex")
                on:click=on_open
            >
                "💬"
                <span
                    class="unread-badge"
                    id="unreadBadge"
                    style:display=move || display_style(chrome.with(ChromeState::badge_visible), "")
                >
                    "1"
                </span>
            </button>

            <div
                class="chat-widget"
                id="chatWidget"
                node_ref=panel_ref
                class:visible=move || chrome.with(ChromeState::is_open)
                style:left=move || chrome.with(|c| c.position().css_left())
                style:top=move || chrome.with(|c| c.position().css_top())
                style:right=move || chrome.with(|c| c.position().css_right_bottom())
                style:bottom=move || chrome.with(|c| c.position().css_right_bottom())
                style:transition=move || if dragging() { "none" } else { "" }
                style:cursor=move || if dragging() { "grabbing" } else { "" }
            >
                <div class="chat-header" on:mousedown=on_mouse_down on:touchstart=on_touch_start>
                    <span class="chat-title">{title}</span>
                    <button class="chat-close-btn" id="chatCloseBtn" type="button" title="Close" on:click=on_close>
                        "×"
                    </button>
                </div>

                <div class="chat-messages-wrapper" node_ref=wrapper_ref>
                    <div class="messages-container" id="messagesContainer" node_ref=messages_ref>
                        <QuickPrompts greeting=greeting prompts=prompts on_pick=on_pick/>
                    </div>
                </div>

                <form class="chat-form" id="chatForm" on:submit=on_submit>
                    <textarea
                        class="question-input"
                        id="questionInput"
                        rows="1"
                        placeholder=placeholder
                        node_ref=input_ref
                        on:keydown=on_keydown
                    ></textarea>
                    <button class="send-btn" id="sendBtn" type="submit" node_ref=send_ref>
                        "Send"
                    </button>
                </form>
            </div>
        </div>
    }
}

fn begin_drag(chrome: RwSignal<ChromeState>, panel_ref: NodeRef<html::Div>, pointer: Pointer) {
    #[cfg(feature = "csr")]
    {
        let Some(panel) = panel_ref.get_untracked() else {
            return;
        };
        let rect = panel.get_bounding_client_rect();
        let start = Rect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() };
        let mut started = false;
        chrome.update(|c| started = c.begin_drag(pointer, start));
        if started && matches!(pointer.kind, PointerKind::Mouse { .. }) {
            set_page_selection(false);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (chrome, panel_ref, pointer);
    }
}

#[cfg(feature = "csr")]
fn drag_to(chrome: RwSignal<ChromeState>, panel_ref: NodeRef<html::Div>, pointer: Pointer) {
    if !chrome.with_untracked(ChromeState::is_dragging) {
        return;
    }
    let Some(panel) = panel_ref.get_untracked() else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    let viewport = Size { width: dimension(window.inner_width()), height: dimension(window.inner_height()) };
    let size = Size { width: f64::from(panel.offset_width()), height: f64::from(panel.offset_height()) };
    chrome.update(|c| {
        c.drag_to(pointer, size, viewport);
    });
}

fn end_drag(chrome: RwSignal<ChromeState>) {
    if !chrome.with_untracked(ChromeState::is_dragging) {
        return;
    }
    let mut ended = None;
    chrome.update(|c| ended = c.end_drag());
    if ended == Some(DragSource::Mouse) {
        set_page_selection(true);
    }
}

#[cfg(feature = "csr")]
fn install_drag_listeners(chrome: RwSignal<ChromeState>, panel_ref: NodeRef<html::Div>) {
    use crate::util::window_events::listen;

    listen("mousemove", true, move |ev: web_sys::MouseEvent| {
        let pointer = Pointer::mouse(ev.button(), f64::from(ev.client_x()), f64::from(ev.client_y()));
        drag_to(chrome, panel_ref, pointer);
    });
    listen("mouseup", true, move |_: web_sys::MouseEvent| end_drag(chrome));
    listen("touchmove", false, move |ev: web_sys::TouchEvent| {
        if !chrome.with_untracked(ChromeState::is_dragging) {
            return;
        }
        if ev.touches().length() != 1 {
            return;
        }
        // Keep the page from scrolling under the finger.
        ev.prevent_default();
        if let Some(pointer) = touch_event_pointer(&ev) {
            drag_to(chrome, panel_ref, pointer);
        }
    });
    listen("touchend", true, move |_: web_sys::TouchEvent| end_drag(chrome));
}

fn set_page_selection(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("user-select", if enabled { "" } else { "none" });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}
