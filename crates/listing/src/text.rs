//! Text shaping helpers for table cells.

/// Clip `text` to at most `max_len` characters.
///
/// Absent in, absent out. Text that already fits passes through unchanged;
/// longer text keeps its first `max_len - 1` characters followed by a single
/// `…` marker, so clipped output still fits the column. Counts characters,
/// not bytes, so multi-byte titles never split mid code point. `max_len <= 1`
/// degenerates to the bare marker.
pub fn truncate(text: Option<&str>, max_len: usize) -> Option<String> {
    let text = text?;
    if text.chars().count() <= max_len {
        return Some(text.to_string());
    }
    let mut clipped: String = text.chars().take(max_len.saturating_sub(1)).collect();
    clipped.push('…');
    Some(clipped)
}
