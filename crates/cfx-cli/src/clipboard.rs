//! Terminal clipboard access through the OSC 52 escape sequence.
//!
//! Terminals that support OSC 52 place the base64 payload on the system
//! clipboard; others ignore the sequence.

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// The escape sequence that sets the clipboard to `text`.
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\u{1b}]52;c;{}\u{7}", STANDARD.encode(text))
}

/// Write the OSC 52 sequence for `text` to `out`.
///
/// # Errors
///
/// Returns the underlying I/O error if writing or flushing fails.
pub fn copy_to<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}
