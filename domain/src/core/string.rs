//! String utilities for the domain layer.
//!
//! Draft limits count characters (Unicode scalar values), not bytes, so a
//! title of 100 Japanese characters is exactly at the limit.

/// Number of characters in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Clip `s` to at most `max_chars` characters.
///
/// Returns a sub-slice of the original string, always ending on a character
/// boundary.
pub fn clip_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Truncate a string to a maximum number of characters with ellipsis
///
/// Used for log previews of user text.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if char_len(s) <= max_chars {
        s.to_string()
    } else {
        let head = clip_chars(s, max_chars.saturating_sub(3));
        format!("{}...", head)
    }
}
