//! Footer delimiter detection.

/// True if the line is a thematic break: only `*`, `-`, and `_` characters
/// plus whitespace, with at least three marker characters in total. The
/// markers may be mixed. The first such line switches the parse into footer
/// mode for the rest of the document.
pub(crate) fn is_thematic_break(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }

    let mut markers = 0;
    for ch in trimmed.chars() {
        match ch {
            '*' | '-' | '_' => markers += 1,
            c if c.is_whitespace() => continue,
            _ => return false,
        }
    }

    markers >= 3
}
