//! Body-line classification.
//!
//! Runs after the title and subtitle have been consumed. Each line is
//! classified with at most one line of lookahead (for Setext underlines).

use super::headings;
use super::thematic_breaks::is_thematic_break;

/// What a single body line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// Whitespace-only line.
    Blank,
    /// Footer delimiter; everything after it is footer content.
    Rule,
    /// Section heading. `underlined` means the following `-` underline
    /// belongs to the heading and must be consumed as well.
    Heading { text: String, underlined: bool },
    /// Ingredient list item, bullet marker still attached.
    Bullet(&'a str),
    /// Instruction prose.
    Text(&'a str),
}

/// Classify one trimmed body line, peeking at the raw next line for Setext
/// underlines.
///
/// Order matters: a `---` line is a footer delimiter, never an underline
/// check target; bullet lines are never promoted to headings even when the
/// next line is an underline.
pub(crate) fn classify<'a>(line: &'a str, next: Option<&str>) -> LineKind<'a> {
    if line.is_empty() {
        return LineKind::Blank;
    }

    if is_thematic_break(line) {
        return LineKind::Rule;
    }

    let is_bullet = line.starts_with('*') || line.starts_with('-');

    if !is_bullet {
        if next.is_some_and(|n| headings::is_section_underline(n.trim())) {
            return LineKind::Heading {
                text: line.to_string(),
                underlined: true,
            };
        }
        if let Some(text) = headings::strip_section_marker(line) {
            return LineKind::Heading {
                text: text.to_string(),
                underlined: false,
            };
        }
    }

    if is_bullet {
        return LineKind::Bullet(line);
    }

    LineKind::Text(line)
}
