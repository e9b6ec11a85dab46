//! Recipe collection and site generation.
//!
//! Every source document is parsed independently, so the batch runs the
//! parses in parallel. A document that fails to read or parse is recorded
//! and reported; it contributes nothing to any output page and never
//! aborts the rest of the batch.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::Glob;
use rayon::prelude::*;

use hearth_parser::Recipe;

use crate::config::Config;
use crate::render::Renderer;

/// A successfully parsed recipe together with its original source text.
pub struct LoadedRecipe {
    pub path: PathBuf,
    pub source: String,
    pub recipe: Recipe,
}

/// A document that failed to load or parse.
pub struct Failure {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Outcome of a full site build.
pub struct BuildSummary {
    pub generated: usize,
    pub failures: Vec<Failure>,
    pub output_dir: PathBuf,
}

fn load_one(path: &Path) -> Result<LoadedRecipe, Failure> {
    let failure = |message: String| Failure {
        path: path.to_path_buf(),
        message,
    };

    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let source = fs::read_to_string(path).map_err(|e| failure(e.to_string()))?;

    match hearth_parser::parse(&source, name) {
        Ok(recipe) => Ok(LoadedRecipe {
            path: path.to_path_buf(),
            source,
            recipe,
        }),
        Err(e) => Err(failure(e.to_string())),
    }
}

/// Enumerates, reads, and parses every document under `dir` whose file name
/// matches `pattern`.
///
/// Recipes come back sorted case-insensitively by title; failures are
/// returned alongside rather than raised.
pub fn load_recipes(dir: &Path, pattern: &str) -> io::Result<(Vec<LoadedRecipe>, Vec<Failure>)> {
    let matcher = Glob::new(pattern)
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid recipe pattern {pattern:?}: {e}"),
            )
        })?
        .compile_matcher();

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.file_name().is_some_and(|name| matcher.is_match(name)) {
            paths.push(path);
        }
    }
    paths.sort();

    log::debug!("Found {} document(s) in {}", paths.len(), dir.display());

    let results: Vec<Result<LoadedRecipe, Failure>> =
        paths.par_iter().map(|path| load_one(path)).collect();

    let mut recipes = Vec::new();
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(loaded) => recipes.push(loaded),
            Err(failure) => failures.push(failure),
        }
    }
    recipes.sort_by_key(|loaded| loaded.recipe.title.to_lowercase());

    Ok((recipes, failures))
}

/// Generates the complete site: one HTML page and one verbatim text copy
/// per recipe, the index, the all-recipes page, and the static resources.
pub fn build(cfg: &Config) -> io::Result<BuildSummary> {
    let renderer = Renderer::new(&cfg.site_title)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("template error: {e}")))?;

    let (recipes, failures) = load_recipes(&cfg.recipes_dir, &cfg.recipe_glob)?;
    for failure in &failures {
        log::error!("skipping {failure}");
    }
    if recipes.is_empty() && failures.is_empty() {
        log::warn!(
            "no documents matching {:?} in {}",
            cfg.recipe_glob,
            cfg.recipes_dir.display()
        );
    }

    fs::create_dir_all(&cfg.output_dir)?;

    for loaded in &recipes {
        let html = renderer.recipe_page(&loaded.recipe);
        fs::write(cfg.output_dir.join(format!("{}.html", loaded.recipe.id)), html)?;
        fs::write(
            cfg.output_dir.join(format!("{}.txt", loaded.recipe.id)),
            &loaded.source,
        )?;
    }

    let docs: Vec<&Recipe> = recipes.iter().map(|loaded| &loaded.recipe).collect();
    fs::write(cfg.output_dir.join("index.html"), renderer.index_page(&docs))?;
    fs::write(cfg.output_dir.join("all.html"), renderer.all_page(&docs))?;

    copy_resources(&cfg.resources_dir, &cfg.output_dir)?;

    log::info!(
        "Generated {} page(s) in {}",
        recipes.len(),
        cfg.output_dir.display()
    );

    Ok(BuildSummary {
        generated: recipes.len(),
        failures,
        output_dir: cfg.output_dir.clone(),
    })
}

fn copy_resources(src: &Path, dst: &Path) -> io::Result<()> {
    if !src.is_dir() {
        log::warn!("resources directory {} not found, skipping copy", src.display());
        return Ok(());
    }
    copy_dir_recursive(src, dst)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
