/// Marker appended to shortened text.
pub const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `limit` characters without splitting a word.
///
/// Text that already fits is returned unchanged. Otherwise the cut falls on the
/// last whitespace inside the window and [`ELLIPSIS`] is appended. When the first
/// word alone is longer than `limit` only the ellipsis remains.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let cut = match text.char_indices().nth(limit) {
        Some((idx, _)) => idx,
        None => return text.to_string(),
    };

    let (head, rest) = text.split_at(cut);
    let on_boundary = rest.chars().next().is_some_and(char::is_whitespace);
    let kept = if on_boundary {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(pos) => &head[..pos],
            None => return ELLIPSIS.to_string(),
        }
    };

    format!("{}{}", kept.trim_end(), ELLIPSIS)
}
