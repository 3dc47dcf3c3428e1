/// Blunt prefix cut to at most `max_chars` characters.
///
/// Counts `char`s rather than bytes so the cut never lands inside a UTF-8
/// sequence; the result is always a prefix of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
