//! hearth — a static site generator for family recipe collections.
//!
//! The parsing core lives in the [`hearth_parser`] crate; this crate layers
//! configuration, batch collection, HTML rendering, and the CLI on top.
//! The generated site is one page per recipe plus a plain-text copy, an
//! index, an all-recipes page, and whatever static resources the project
//! ships.

pub mod config;
pub mod render;
pub mod site;

pub use config::Config;
pub use render::Renderer;
pub use site::{BuildSummary, build, load_recipes};
