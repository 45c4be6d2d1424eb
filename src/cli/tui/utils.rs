//! Text fitting helpers for TUI views

/// Truncate a string to max_len characters, adding "..." if truncated
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncate_at = max_len.saturating_sub(3);
        let truncated: String = s.chars().take(truncate_at).collect();
        format!("{}...", truncated)
    }
}

/// Keeps the end of a buffer being typed visible in `width` columns
///
/// One column is reserved for the cursor.
pub fn tail_for_cursor(s: &str, width: usize) -> &str {
    let visible = width.saturating_sub(1);
    let count = s.chars().count();
    if count <= visible {
        return s;
    }
    let skip = count - visible;
    match s.char_indices().nth(skip) {
        Some((offset, _)) => &s[offset..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string() {
        assert_eq!(truncate_str("milk", 10), "milk");
    }

    #[test]
    fn truncate_long_string() {
        assert_eq!(truncate_str("Walk the dog twice", 10), "Walk th...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_str("café au lait", 7), "café...");
    }

    #[test]
    fn tail_fits() {
        assert_eq!(tail_for_cursor("abc", 10), "abc");
    }

    #[test]
    fn tail_keeps_end_visible() {
        assert_eq!(tail_for_cursor("abcdefgh", 5), "efgh");
    }

    #[test]
    fn tail_zero_width() {
        assert_eq!(tail_for_cursor("abc", 0), "");
    }
}
