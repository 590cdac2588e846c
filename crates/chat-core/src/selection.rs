//! Page selection rules.

/// What a pointer-release / touch-end should do to the active selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionUpdate {
    /// Adopt this (trimmed) text as the active selection
    Set(String),
    /// Drop the active selection; the new one was too long
    Clear,
    /// Nothing selected; keep whatever was active
    Unchanged,
}

/// Classify a raw selection.
///
/// Lengths are counted in Unicode scalar values after trimming. Over-long
/// selections are discarded whole, never clipped.
pub fn evaluate_selection(raw: &str, max_chars: usize) -> SelectionUpdate {
    let text = raw.trim();
    let len = text.chars().count();
    if len == 0 {
        SelectionUpdate::Unchanged
    } else if len <= max_chars {
        SelectionUpdate::Set(text.to_string())
    } else {
        SelectionUpdate::Clear
    }
}

/// Short form of a selection for the banner: the first `max_chars`
/// characters followed by `...` when anything was cut.
pub fn selection_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
