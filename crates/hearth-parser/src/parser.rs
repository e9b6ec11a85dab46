//! Recipe document parsing.
//!
//! A classifier walks a random-access line sequence with an explicit cursor
//! and one line of lookahead; a single-pass builder reduces the classified
//! stream into a [`Recipe`]. The builder keeps at most one section in
//! progress and finalizes it on every heading, footer delimiter, or
//! end-of-input transition; finalized sections are never touched again.

mod classify;
mod headings;
mod ingredients;
mod thematic_breaks;

use crate::document::{Ingredient, Recipe, Section, recipe_id};
use crate::error::ParseError;
use classify::LineKind;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The section currently being accumulated.
struct OpenSection {
    title: String,
    ingredients: Vec<Ingredient>,
    /// One entry per instruction line; joined with blank-line separators
    /// when the section is finalized.
    instructions: Vec<String>,
}

impl OpenSection {
    fn new(title: String) -> Self {
        Self {
            title,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    fn finish(self) -> Section {
        Section {
            title: self.title,
            ingredients: if self.ingredients.is_empty() {
                None
            } else {
                Some(self.ingredients)
            },
            instructions: self.instructions.join("\n\n"),
        }
    }
}

pub(crate) struct RecipeParser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    file: &'a str,
    sections: Vec<Section>,
    current: Option<OpenSection>,
    in_footer: bool,
    footer: Vec<String>,
}

impl<'a> RecipeParser<'a> {
    pub(crate) fn new(source: &'a str, filename: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            pos: 0,
            file: filename,
            sections: Vec::new(),
            current: None,
            in_footer: false,
            footer: Vec::new(),
        }
    }

    pub(crate) fn parse(mut self) -> Result<Recipe, ParseError> {
        #[cfg(debug_assertions)]
        {
            init_logger();
        }

        let title = self.parse_title()?;
        let subtitle = self.parse_subtitle()?;
        log::debug!("{}: title {:?}, subtitle {:?}", self.file, title, subtitle);

        while self.pos < self.lines.len() {
            self.step()?;
        }
        self.finish_section();

        if self.sections.is_empty() {
            return Err(ParseError::EmptyDocument {
                file: self.file.to_string(),
            });
        }

        Ok(Recipe {
            id: recipe_id(self.file),
            title,
            subtitle,
            sections: self.sections,
            footer: if self.footer.is_empty() {
                None
            } else {
                Some(self.footer.join("\n\n"))
            },
        })
    }

    /// The first non-blank line. A `=` underline on the immediately
    /// following line makes it a Setext title taken verbatim; otherwise any
    /// leading `#` run is stripped and a markerless line is accepted as-is.
    fn parse_title(&mut self) -> Result<String, ParseError> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos].trim();
            if line.is_empty() {
                self.pos += 1;
                continue;
            }

            if let Some(next) = self.lines.get(self.pos + 1)
                && headings::is_title_underline(next.trim())
            {
                self.pos += 2;
                return Ok(line.to_string());
            }

            self.pos += 1;
            return Ok(headings::strip_title_marker(line).to_string());
        }

        Err(ParseError::MissingTitle {
            file: self.file.to_string(),
        })
    }

    /// The next non-blank line after the title, verbatim.
    fn parse_subtitle(&mut self) -> Result<String, ParseError> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos].trim();
            self.pos += 1;
            if !line.is_empty() {
                return Ok(line.to_string());
            }
        }

        Err(ParseError::MissingSubtitle {
            file: self.file.to_string(),
        })
    }

    fn step(&mut self) -> Result<(), ParseError> {
        let line = self.lines[self.pos].trim();
        let next = self.lines.get(self.pos + 1).copied();
        self.pos += 1;

        if self.in_footer {
            // Blank lines neither end nor pad the footer; everything else
            // is footer content, headings and delimiters included.
            if !line.is_empty() {
                self.footer.push(line.to_string());
            }
            return Ok(());
        }

        match classify::classify(line, next) {
            LineKind::Blank => {}
            LineKind::Rule => {
                log::debug!("{}: footer delimiter at line {}", self.file, self.pos);
                self.finish_section();
                self.in_footer = true;
            }
            LineKind::Heading { text, underlined } => {
                if underlined {
                    // The `-` underline belongs to the heading.
                    self.pos += 1;
                }
                self.finish_section();
                self.current = Some(OpenSection::new(text));
            }
            LineKind::Bullet(item) => match self.current.as_mut() {
                Some(open) => open.ingredients.push(ingredients::parse_ingredient(item)),
                None => {
                    return Err(ParseError::IngredientsBeforeSection {
                        file: self.file.to_string(),
                    });
                }
            },
            LineKind::Text(text) => match self.current.as_mut() {
                Some(open) => open.instructions.push(text.to_string()),
                None => {
                    return Err(ParseError::InstructionsBeforeSection {
                        file: self.file.to_string(),
                    });
                }
            },
        }

        Ok(())
    }

    fn finish_section(&mut self) {
        if let Some(open) = self.current.take() {
            self.sections.push(open.finish());
        }
    }
}
