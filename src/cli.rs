use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hearth")]
#[command(author, version)]
#[command(about = "A static site generator for family recipe collections")]
#[command(
    long_about = "Hearth turns a directory of plain-text recipes, written in a small \
    markdown-like dialect, into a static website: one page per recipe, an index, and an \
    all-recipes page. Recipes that fail to parse are reported and skipped; they never \
    break the rest of the build."
)]
#[command(after_help = "\
EXAMPLES:

    # Build the site from ./recipes into ./output/web
    hearth build

    # Build with explicit directories
    hearth build --recipes ~/recipes --output /srv/www/recipes

    # Validate every recipe without writing anything (exit code 1 on failure)
    hearth check

    # Inspect how one document parses
    hearth parse recipes/apple-pie.txt
    hearth parse --json recipes/apple-pie.txt

CONFIGURATION:

Hearth looks for configuration files in this order:
  1. Explicit --config path
  2. .hearth.toml or hearth.toml in the current/parent directories
  3. hearth/config.toml in the user configuration directory
  4. Built-in defaults

Example hearth.toml:

    recipes_dir = \"recipes\"
    recipe_glob = \"*.txt\"
    output_dir = \"output/web\"
    resources_dir = \"resources/web\"
    site_title = \"Family Recipes\"")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true, env = "HEARTH_CONFIG")]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, hearth will \
        search for .hearth.toml or hearth.toml in the current directory and its parents, \
        then fall back to hearth/config.toml in the user configuration directory."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the site
    #[command(
        long_about = "Parse every matching document in the recipes directory and write the \
        full site to the output directory: a page and a plain-text copy per recipe, the \
        index, the all-recipes page, and the static resources. Documents that fail to \
        parse are reported on stderr and skipped."
    )]
    Build {
        /// Recipes directory (overrides config)
        #[arg(long)]
        recipes: Option<PathBuf>,

        /// Output directory (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Static resources directory (overrides config)
        #[arg(long)]
        resources: Option<PathBuf>,
    },
    /// Validate every recipe without writing output
    #[command(
        long_about = "Parse every matching document in the recipes directory and report \
        failures without generating anything. Exits with code 1 when any document fails, \
        which makes it suitable for CI."
    )]
    Check {
        /// Recipes directory (overrides config)
        #[arg(long)]
        recipes: Option<PathBuf>,
    },
    /// Parse a single document and print the structured result
    #[command(
        long_about = "Parse one recipe document and print the structured result for \
        debugging: the derived id, title, subtitle, sections with their ingredient lists \
        and instructions, and the footer."
    )]
    Parse {
        /// Input file
        file: PathBuf,

        /// Print the document as JSON
        #[arg(long)]
        json: bool,
    },
}
