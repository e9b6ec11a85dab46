//! Heading detection helpers for both heading styles.
//!
//! The title accepts any first line (permissively, with or without `#`
//! markers); section headings require either an ATX `##` prefix or a Setext
//! `-` underline. There is deliberately no permissive fallback at the
//! section level: an unmarked body line is instruction text.

/// True if the line is a Setext title underline: one or more `=` and
/// nothing else.
pub(crate) fn is_title_underline(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '=')
}

/// True if the line is a Setext section underline: one or more `-` and
/// nothing else.
pub(crate) fn is_section_underline(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '-')
}

/// Strip a leading run of `#` characters and any whitespace after it.
/// Lines without a `#` prefix come back unchanged (the permissive title
/// path).
pub(crate) fn strip_title_marker(line: &str) -> &str {
    line.trim_start_matches('#').trim_start()
}

/// Strip an ATX section marker: exactly `##` plus following whitespace.
/// Returns `None` when the line does not start with `##`. Hashes beyond
/// the first two are part of the heading text.
pub(crate) fn strip_section_marker(line: &str) -> Option<&str> {
    line.strip_prefix("##").map(str::trim_start)
}
