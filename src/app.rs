//! Application entry: logging, panic hook, config load and mount.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::config::WidgetConfig;

/// Root component. Owns nothing but the resolved configuration.
#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    view! { <ChatWidget config=config/> }
}

/// Install browser logging and mount [`App`] into `<body>`.
pub fn mount() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
        let _ = console_log::init_with_level(level);

        let config = crate::config::load();
        log::info!("chat widget mounting: endpoint={}", config.endpoint);
        leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
    }
}
