//! Widget configuration.
//!
//! Every field has a default, so the embedding page only lists overrides in
//! an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="chat-widget-config">
//!   { "endpoint": "/api", "top_k": 5 }
//! </script>
//! ```
//!
//! A missing block yields defaults; an unreadable one is logged and also
//! yields defaults so the widget always mounts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Id of the inline JSON element read by [`load`].
pub const CONFIG_ELEMENT_ID: &str = "chat-widget-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid widget config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Assistant endpoint receiving `POST {"question": ...}`.
    pub endpoint: String,
    pub title: String,
    pub greeting: String,
    pub quick_prompts: Vec<String>,
    pub input_placeholder: String,
    /// Forwarded as `top_k` when set.
    pub top_k: Option<u32>,
    pub message_speed_ms: u32,
    pub summary_speed_ms: u32,
    pub step_speed_ms: u32,
    pub answer_speed_ms: u32,
    pub follow_up_speed_ms: u32,
    /// Settle time between opening the panel and pinning the scroll.
    pub open_scroll_delay_ms: u32,
    /// How long the steps Copy control reads "Copied!".
    pub copy_reset_ms: u32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api".to_owned(),
            title: "QuotePlan Assistant".to_owned(),
            greeting: "Hi! Ask me anything about creating and managing quotes.".to_owned(),
            quick_prompts: vec![
                "How do I create a new quote?".to_owned(),
                "How do I add line items?".to_owned(),
                "How do I send a quote to a customer?".to_owned(),
            ],
            input_placeholder: "Type your question...".to_owned(),
            top_k: None,
            message_speed_ms: 15,
            summary_speed_ms: 12,
            step_speed_ms: 10,
            answer_speed_ms: 12,
            follow_up_speed_ms: 12,
            open_scroll_delay_ms: 100,
            copy_reset_ms: 1500,
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON override block; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when `raw` is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

/// Read the page's config block, falling back to defaults.
pub fn load() -> WidgetConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return WidgetConfig::default();
        };
        match WidgetConfig::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                WidgetConfig::default()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        WidgetConfig::default()
    }
}
