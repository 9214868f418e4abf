//! Character-by-character "live typing" reveal.
//!
//! DESIGN
//! ======
//! `type_text` is the one timing implementation; `type_text_then` adapts it
//! to a completion callback. Each step re-renders the whole formatted prefix
//! so partially typed markup (an unclosed `**`) shows as literal text until
//! its closing delimiter arrives, and the final frame is exactly
//! `format_message(text)`, identical to the non-animated path.
//!
//! Animations are cooperative: one step runs, then the task sleeps. Two
//! animations into different surfaces interleave safely; callers serialize
//! animations into the same surface.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use super::cancel::CancelToken;
use super::clock::Clock;
use super::format::format_message;

/// Caret appended to the partially typed text.
pub const CARET_HTML: &str = r#"<span class="typing-cursor">|</span>"#;

/// Display target for a typing animation.
pub trait Surface {
    fn render(&self, html: &str);

    /// Keep the surrounding scroll container pinned after a frame.
    fn nudge_scroll(&self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingOutcome {
    Completed,
    Cancelled,
}

/// Delay after typing `ch`: half-speed pause after spaces, double after
/// sentence punctuation. Delays are whole milliseconds; halves round up.
pub fn char_delay_ms(ch: char, speed_ms: u32) -> u32 {
    match ch {
        ' ' => speed_ms.div_ceil(2),
        '.' | '!' | '?' => speed_ms.saturating_mul(2),
        _ => speed_ms,
    }
}

/// Reveal `text` into `surface`, one character per step.
///
/// When `cancel` fires the surface keeps the text typed so far, without the
/// caret, and `TypingOutcome::Cancelled` is returned.
pub async fn type_text<S: Surface, C: Clock>(
    surface: &S,
    text: &str,
    speed_ms: u32,
    clock: &C,
    cancel: &CancelToken,
) -> TypingOutcome {
    let mut shown = String::with_capacity(text.len());

    for ch in text.chars() {
        if cancel.is_cancelled() {
            surface.render(&format_message(&shown));
            return TypingOutcome::Cancelled;
        }
        shown.push(ch);
        surface.render(&format!("{}{CARET_HTML}", format_message(&shown)));
        surface.nudge_scroll();
        clock.sleep(char_delay_ms(ch, speed_ms)).await;
    }

    surface.render(&format_message(text));
    TypingOutcome::Completed
}

/// Callback form of [`type_text`]: `on_done` runs once the animation ends.
pub async fn type_text_then<S, C, F>(
    surface: &S,
    text: &str,
    speed_ms: u32,
    clock: &C,
    cancel: &CancelToken,
    on_done: F,
) where
    S: Surface,
    C: Clock,
    F: FnOnce(TypingOutcome),
{
    let outcome = type_text(surface, text, speed_ms, clock, cancel).await;
    on_done(outcome);
}
