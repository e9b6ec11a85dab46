//! Ingredient line decomposition.

use crate::document::Ingredient;

/// Split one bullet line into name, quantity, and prep note.
///
/// The bullet marker and its whitespace are stripped first. The line is
/// then split once on the first `:` (the right side, trimmed, is the prep
/// note) and the remaining main part once on the first `,` (left side is
/// the name, right side the quantity). The colon split runs on the whole
/// line before the comma split, so a colon ahead of the comma moves the
/// prep-note boundary without affecting the name/quantity split.
///
/// This is total: any text yields an ingredient, with `name` carrying the
/// whole line when no delimiter is present. A delimiter with nothing after
/// it still produces the field, as an empty string.
pub(crate) fn parse_ingredient(line: &str) -> Ingredient {
    let rest = line.strip_prefix(['*', '-']).unwrap_or(line).trim_start();

    let (main, prep_note) = match rest.split_once(':') {
        Some((main, note)) => (main, Some(note.trim().to_string())),
        None => (rest, None),
    };

    let (name, quantity) = match main.split_once(',') {
        Some((name, qty)) => (name.trim().to_string(), Some(qty.trim().to_string())),
        None => (main.trim().to_string(), None),
    };

    Ingredient {
        name,
        quantity,
        prep_note,
    }
}
