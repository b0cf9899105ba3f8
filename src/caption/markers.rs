//! Control-token grammar.
//!
//! ```text
//! line-break := "[newline]"
//! pause      := "[wait(" DIGIT+ ")]"
//! DIGIT      := "0" ..= "9"
//! ```
//!
//! A token containing the line-break literal anywhere is a line break. A pause must match the
//! whole token. Every other token, the empty string included, is drawable.

use std::sync::LazyLock;

use regex::Regex;

/// Literal text of the line-break marker.
pub const LINE_BREAK_MARKER: &str = "[newline]";

static PAUSE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[wait\(([0-9]+)\)\]$").expect("valid pause marker regex"));

/// A recognized control token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    /// Starts a new line for the cells that follow it.
    LineBreak,
    /// Pause request. The duration is carried along but nothing consumes it yet.
    Pause {
        /// Parsed duration, `None` when the digits overflow `u32`.
        frames: Option<u32>,
    },
}

/// Classify a token. `None` means the token is drawable.
pub fn classify_token(text: &str) -> Option<Marker> {
    if text.contains(LINE_BREAK_MARKER) {
        return Some(Marker::LineBreak);
    }
    let caps = PAUSE_MARKER.captures(text)?;
    let frames = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
    Some(Marker::Pause { frames })
}

/// Exact comparison used by line counting and reveal scheduling.
pub fn is_line_break(text: &str) -> bool {
    text == LINE_BREAK_MARKER
}

#[cfg(test)]
#[path = "../../tests/unit/caption/markers.rs"]
mod tests;
