//! The recipe document model.
//!
//! Everything here is an immutable value object built once per parse. A
//! [`Recipe`] owns its sections and each section owns its ingredients; there
//! is no shared state between documents.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// A fully parsed recipe document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Recipe {
    /// Identifier derived from the source filename, used for output paths
    /// and links. Independent of the document content.
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Section>,
    /// Trailing content below the closing horizontal rule, if any.
    pub footer: Option<String>,
}

/// One step of a recipe: a heading, an optional ingredient list, and
/// free-text instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section {
    pub title: String,
    /// `None` when the section has no bullet list at all, as opposed to an
    /// empty one.
    pub ingredients: Option<Vec<Ingredient>>,
    /// Instruction paragraphs, joined by blank lines.
    pub instructions: String,
}

/// A single ingredient line, decomposed into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ingredient {
    pub name: String,
    pub quantity: Option<String>,
    pub prep_note: Option<String>,
}

static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").unwrap());

/// Derives a recipe id from a source filename: the extension is stripped,
/// the rest lowercased, and every run of hyphens and whitespace collapsed
/// into a single hyphen.
///
/// ```
/// use hearth_parser::recipe_id;
///
/// assert_eq!(recipe_id("Grandma's  Apple Pie.txt"), "grandma's-apple-pie");
/// ```
pub fn recipe_id(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    SEPARATOR_RUNS
        .replace_all(&stem.to_lowercase(), "-")
        .into_owned()
}
