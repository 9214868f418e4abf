//! Page-lifetime `window` listeners for drag gestures.
//!
//! Touch moves must be registered non-passive so the handler can cancel page
//! scrolling while the panel is dragged.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Attach `handler` to `window` for `event` until the page unloads.
pub fn listen<E, F>(event: &str, passive: bool, handler: F)
where
    E: JsCast + 'static,
    F: Fn(E) + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::<dyn Fn(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    });
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(passive);
    if window
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            cb.as_ref().unchecked_ref(),
            &options,
        )
        .is_ok()
    {
        cb.forget();
    } else {
        log::warn!("failed to attach window listener for {event}");
    }
}
