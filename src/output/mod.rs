// Output helpers and renderers.
//
// Length limits are counted in characters, not bytes, so every cut lands
// on a character boundary. The renderers adapt a `DisplayPayload` to a
// concrete client: Discord embed JSON or a colored terminal.

pub mod discord;
pub mod terminal;

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Hard-truncate `text` to at most `max_chars` characters, with no marker.
///
/// Unlike byte slicing (`&text[..100]`), this respects UTF-8 character
/// boundaries and will never panic on multi-byte characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Render a 0-1 similarity as a percentage rounded to one decimal ("92.0").
///
/// Rounds the exact value of `similarity * 100`, so 0.0125 gives "1.2".
pub fn format_relevance(similarity: f64) -> String {
    format!("{:.1}", similarity * 100.0)
}

/// Wrap text in a code block.
pub fn code_block(text: &str) -> String {
    format!("```{text}```")
}
