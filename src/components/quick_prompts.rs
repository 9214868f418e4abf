//! Greeting block and quick-prompt buttons shown before the first exchange.
//!
//! Both live inside the messages container and are removed imperatively by
//! the view when the first bot message arrives before any user message.

use leptos::prelude::*;

/// Greeting bubble followed by one button per prompt.
#[component]
pub fn QuickPrompts(greeting: String, prompts: Vec<String>, on_pick: Callback<String>) -> impl IntoView {
    view! {
        <div class="message bot-message message-greeting">
            <div class="message-body">
                <div class="message-content">{greeting}</div>
            </div>
        </div>
        <div class="quick-prompts">
            {prompts
                .into_iter()
                .map(|prompt| {
                    let label = prompt.clone();
                    view! {
                        <button
                            class="quick-prompt-btn"
                            type="button"
                            on:click=move |_| on_pick.run(label.clone())
                        >
                            {prompt}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
