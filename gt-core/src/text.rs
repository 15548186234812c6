//! Plain-text helpers shared by usecases and views.

/// Character-based preview of an entry text: at most `max_chars`
/// characters, an ellipsis marker when the text was cut, and a
/// placeholder when there is nothing to show.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.is_empty() {
        return "(no text)".into();
    }
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
