//! Keep the message list pinned to its newest content.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Smooth-scroll `wrapper` to its bottom on the next animation frame.
///
/// Safe to call after every mutation; redundant calls collapse into scrolls
/// to the same offset.
pub fn scroll_to_bottom(wrapper: &web_sys::Element) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let target = wrapper.clone();
    let cb = Closure::once_into_js(move || {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(f64::from(target.scroll_height()));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_to_with_scroll_to_options(&options);
    });
    if window.request_animation_frame(cb.unchecked_ref()).is_err() {
        log::debug!("requestAnimationFrame unavailable; skipping scroll");
    }
}
