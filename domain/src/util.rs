//! Shared utility functions.

use std::borrow::Cow;

/// Shorten a string for log output.
///
/// Returns the string unchanged when it fits in `max_bytes`; otherwise
/// cuts at the last character boundary within the limit and appends an
/// ellipsis. Instructions and endpoint diagnostics can be arbitrarily
/// long, so log lines go through this before being emitted.
pub fn log_preview(s: &str, max_bytes: usize) -> Cow<'_, str> {
    if s.len() <= max_bytes {
        return Cow::Borrowed(s);
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= max_bytes)
        .last()
        .unwrap_or(0);
    Cow::Owned(format!("{}…", &s[..cut]))
}
