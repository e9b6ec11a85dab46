//! HTML rendering of parsed recipes.
//!
//! Pages are mustache templates compiled once when the [`Renderer`] is
//! built. The templates are logic-less, so the view structs precompute the
//! presence flags they branch on. Instruction and footer text go through
//! the template engine's inline markdown rendering; every other
//! interpolation is HTML-escaped.

use hearth_parser::{Ingredient, Recipe, Section};
use ramhorns::{Content, Error, Template};

const RECIPE_TEMPLATE: &str = include_str!("../templates/recipe.html");
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const ALL_TEMPLATE: &str = include_str!("../templates/all.html");

pub struct Renderer {
    site_title: String,
    recipe: Template<'static>,
    index: Template<'static>,
    all: Template<'static>,
}

#[derive(Content)]
struct RecipeView<'a> {
    site_title: &'a str,
    id: &'a str,
    title: &'a str,
    subtitle: &'a str,
    sections: Vec<SectionView<'a>>,
    has_footer: bool,
    #[ramhorns(md)]
    footer: &'a str,
}

#[derive(Content)]
struct SectionView<'a> {
    title: &'a str,
    has_ingredients: bool,
    ingredients: Vec<IngredientView<'a>>,
    has_instructions: bool,
    #[ramhorns(md)]
    instructions: &'a str,
}

#[derive(Content)]
struct IngredientView<'a> {
    name: &'a str,
    has_quantity: bool,
    quantity: &'a str,
    has_prep_note: bool,
    prep_note: &'a str,
}

#[derive(Content)]
struct IndexView<'a> {
    site_title: &'a str,
    recipes: Vec<IndexEntry<'a>>,
}

#[derive(Content)]
struct IndexEntry<'a> {
    id: &'a str,
    title: &'a str,
}

#[derive(Content)]
struct AllView<'a> {
    site_title: &'a str,
    recipes: Vec<RecipeView<'a>>,
}

fn ingredient_view(ingredient: &Ingredient) -> IngredientView<'_> {
    IngredientView {
        name: &ingredient.name,
        has_quantity: ingredient.quantity.is_some(),
        quantity: ingredient.quantity.as_deref().unwrap_or_default(),
        has_prep_note: ingredient.prep_note.is_some(),
        prep_note: ingredient.prep_note.as_deref().unwrap_or_default(),
    }
}

fn section_view(section: &Section) -> SectionView<'_> {
    let ingredients = section
        .ingredients
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(ingredient_view)
        .collect::<Vec<_>>();
    SectionView {
        title: &section.title,
        has_ingredients: !ingredients.is_empty(),
        ingredients,
        has_instructions: !section.instructions.is_empty(),
        instructions: &section.instructions,
    }
}

fn recipe_view<'a>(site_title: &'a str, recipe: &'a Recipe) -> RecipeView<'a> {
    RecipeView {
        site_title,
        id: &recipe.id,
        title: &recipe.title,
        subtitle: &recipe.subtitle,
        sections: recipe.sections.iter().map(section_view).collect(),
        has_footer: recipe.footer.is_some(),
        footer: recipe.footer.as_deref().unwrap_or_default(),
    }
}

impl Renderer {
    pub fn new(site_title: &str) -> Result<Self, Error> {
        Ok(Self {
            site_title: site_title.to_string(),
            recipe: Template::new(RECIPE_TEMPLATE)?,
            index: Template::new(INDEX_TEMPLATE)?,
            all: Template::new(ALL_TEMPLATE)?,
        })
    }

    /// One standalone page for a single recipe.
    pub fn recipe_page(&self, recipe: &Recipe) -> String {
        self.recipe.render(&recipe_view(&self.site_title, recipe))
    }

    /// The index: one link per recipe, in the order given.
    pub fn index_page(&self, recipes: &[&Recipe]) -> String {
        self.index.render(&IndexView {
            site_title: &self.site_title,
            recipes: recipes
                .iter()
                .map(|r| IndexEntry {
                    id: &r.id,
                    title: &r.title,
                })
                .collect(),
        })
    }

    /// Every recipe in full on a single page, in the order given.
    pub fn all_page(&self, recipes: &[&Recipe]) -> String {
        self.all.render(&AllView {
            site_title: &self.site_title,
            recipes: recipes
                .iter()
                .map(|r| recipe_view(&self.site_title, r))
                .collect(),
        })
    }
}
