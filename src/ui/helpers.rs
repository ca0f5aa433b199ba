//! UI helper functions

/// Truncate text to `max_width` characters, ending with "..." when cut
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_width {
        return text.to_string();
    }
    // Safely truncate using character boundaries
    let take_chars = max_width.saturating_sub(3);
    let truncated: String = text.chars().take(take_chars).collect();
    format!("{}...", truncated)
}

/// First index to show so that `selected` stays inside a window of
/// `capacity` rows over `len` items
pub fn scroll_offset(selected: usize, len: usize, capacity: usize) -> usize {
    if capacity == 0 || len <= capacity {
        return 0;
    }
    let max_offset = len - capacity;
    selected.saturating_sub(capacity - 1).min(max_offset)
}
