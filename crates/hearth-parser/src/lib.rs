//! Parser and document model for the hearth recipe dialect.
//!
//! Recipes are plain text in a small markdown-like dialect: a title heading
//! (ATX `#` or Setext `=` underline, or simply the first line), a subtitle,
//! then sections introduced by `##` headings or `-` underlines. Inside a
//! section, bullet lines (`-` / `*`) are ingredients and everything else is
//! instruction prose. A horizontal rule ends the body; whatever follows it
//! is the footer.
//!
//! Parsing is synchronous, deterministic, and all-or-nothing per document:
//! it either produces a [`Recipe`] or a structured [`ParseError`] naming
//! the offending file. Documents share no state, so callers are free to
//! parse many of them in parallel.
//!
//! ```
//! let source = "\
//! ## Toasted Bread
//!
//! The crunchiest breakfast there is.
//!
//! ### Toast
//!
//! - Bread, 2 slices
//! - Butter: softened
//!
//! Toast the bread, then butter it while hot.
//! ";
//!
//! let recipe = hearth_parser::parse(source, "Toasted Bread.txt").unwrap();
//! assert_eq!(recipe.id, "toasted-bread");
//! assert_eq!(recipe.title, "Toasted Bread");
//! assert_eq!(recipe.sections[0].ingredients.as_ref().unwrap().len(), 2);
//! ```

mod document;
mod error;
mod parser;

pub use document::{Ingredient, Recipe, Section, recipe_id};
pub use error::ParseError;

/// Parses one recipe document.
///
/// `filename` is the name of the source file; it supplies the recipe id and
/// error diagnostics and has no influence on how the content is parsed.
pub fn parse(source: &str, filename: &str) -> Result<Recipe, ParseError> {
    parser::RecipeParser::new(source, filename).parse()
}
