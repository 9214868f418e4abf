//! Wire schema for the assistant endpoint.
//!
//! Response fields are all optional on the wire. Empty strings are treated
//! the same as missing fields, so a blank `short` never renders an empty
//! summary section.
//!
//! Decoding never fails on an off-shape field: a non-boolean `success` reads
//! as not successful, a non-array `steps` as absent, and scalar numbers or
//! booleans in text positions are stringified. Anything else is dropped.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Shown when a `success: false` reply carries neither `error` nor `answer`.
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to fetch response. Please try again.";

/// Body of `POST /api`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

/// Structured assistant reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AskResponse {
    #[serde(deserialize_with = "lenient_flag")]
    pub success: Option<bool>,
    #[serde(deserialize_with = "lenient_text")]
    pub short: Option<String>,
    #[serde(deserialize_with = "lenient_steps")]
    pub steps: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_text")]
    pub answer: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub follow_up: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub error: Option<String>,
}

impl AskResponse {
    pub fn succeeded(&self) -> bool {
        self.success == Some(true)
    }

    pub fn summary(&self) -> Option<&str> {
        non_empty(self.short.as_ref())
    }

    /// Steps, when there is at least one.
    pub fn step_list(&self) -> Option<&[String]> {
        self.steps.as_deref().filter(|steps| !steps.is_empty())
    }

    pub fn full_answer(&self) -> Option<&str> {
        non_empty(self.answer.as_ref())
    }

    pub fn tip(&self) -> Option<&str> {
        non_empty(self.follow_up.as_ref())
    }

    /// Best explanation for a `success: false` reply: `error`, then `answer`,
    /// then a generic message.
    pub fn failure_message(&self) -> &str {
        non_empty(self.error.as_ref())
            .or_else(|| self.full_answer())
            .unwrap_or(GENERIC_FAILURE_MESSAGE)
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::Bool(flag) => Some(flag),
        _ => Some(false),
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_steps<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items.into_iter().filter_map(scalar_text).collect()),
        _ => None,
    })
}
