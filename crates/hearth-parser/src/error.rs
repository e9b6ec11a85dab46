//! Structured parse failures.

use thiserror::Error;

/// Why a document was rejected. Parsing is all-or-nothing per file; every
/// variant carries the source filename so batch processing can report which
/// document failed and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No non-blank line exists before end of input.
    #[error("missing title: the document has no non-blank lines")]
    MissingTitle { file: String },

    /// No non-blank line follows the title line.
    #[error("missing subtitle: no non-blank line follows the title")]
    MissingSubtitle { file: String },

    /// A bullet line appeared before the first section heading.
    #[error("ingredient list found before any section heading")]
    IngredientsBeforeSection { file: String },

    /// Instruction text appeared before the first section heading.
    #[error("instruction text found before any section heading")]
    InstructionsBeforeSection { file: String },

    /// The document contains a title and subtitle but no sections.
    #[error("document has no sections")]
    EmptyDocument { file: String },
}

impl ParseError {
    /// The source filename the error refers to.
    pub fn file(&self) -> &str {
        match self {
            Self::MissingTitle { file }
            | Self::MissingSubtitle { file }
            | Self::IngredientsBeforeSection { file }
            | Self::InstructionsBeforeSection { file }
            | Self::EmptyDocument { file } => file,
        }
    }
}
