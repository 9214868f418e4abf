//! Leptos components for the widget shell.

pub mod chat_widget;
pub mod quick_prompts;
