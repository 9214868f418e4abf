//! HTML escaping and the two-style inline markup used in chat messages.
//!
//! `format_message` is the only path from untrusted text to `innerHTML`:
//! input is escaped first, so the `<strong>`, `<em>` and `<br>` tags it emits
//! are the only markup that can appear in the output.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::fmt::{Display, Write as _};

/// Replace `& " ' < >` with their entity references.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape `text`, then apply `**bold**`, `__italic__` and line breaks, in that order.
pub fn format_message(text: &str) -> String {
    let escaped = escape_html(text);
    let with_bold = wrap_delimited(&escaped, "**", "strong");
    let with_italic = wrap_delimited(&with_bold, "__", "em");
    with_italic.replace('\n', "<br>")
}

/// `format_message` over any displayable value.
pub fn format_display(value: &impl Display) -> String {
    format_message(&value.to_string())
}

/// Wrap every `delim X delim` span in `<tag>`. `X` is the shortest run of at
/// least one character that does not cross a line break; spans never nest.
fn wrap_delimited(text: &str, delim: &str, tag: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(delim) {
        let inner = &rest[start + delim.len()..];
        if let Some(end) = closing_offset(inner, delim) {
            out.push_str(&rest[..start]);
            let _ = write!(out, "<{tag}>{}</{tag}>", &inner[..end]);
            rest = &inner[end + delim.len()..];
        } else {
            // No span opens here; resume one character later.
            let step = rest[start..].chars().next().map_or(1, char::len_utf8);
            out.push_str(&rest[..start + step]);
            rest = &rest[start + step..];
        }
    }

    out.push_str(rest);
    out
}

fn closing_offset(text: &str, delim: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    let (_, first) = chars.next()?;
    if is_line_terminator(first) {
        return None;
    }
    for (idx, ch) in chars {
        if text[idx..].starts_with(delim) {
            return Some(idx);
        }
        if is_line_terminator(ch) {
            return None;
        }
    }
    None
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
