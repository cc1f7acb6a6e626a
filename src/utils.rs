use unicode_width::UnicodeWidthChar;

/// Byte offset of the `char_index`-th character, clamped to the end of the
/// string. Entry-field editing tracks the cursor in characters; `String`
/// insert/remove want bytes.
pub fn char_to_byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Terminal column of the cursor within a single-line entry field,
/// accounting for double-width characters.
pub fn cursor_display_column(s: &str, char_index: usize) -> usize {
    s.chars()
        .take(char_index)
        .map(|c| c.width().unwrap_or(1))
        .sum()
}

pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
