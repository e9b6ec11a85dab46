use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Site build configuration.
///
/// Every field has a default, so a missing or empty config file is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the plain-text recipe sources.
    pub recipes_dir: PathBuf,
    /// Filename pattern selecting recipe sources inside `recipes_dir`.
    pub recipe_glob: String,
    /// Directory the generated site is written to.
    pub output_dir: PathBuf,
    /// Static assets copied verbatim into `output_dir`.
    pub resources_dir: PathBuf,
    /// Site name used in page titles and the index header.
    pub site_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipes_dir: PathBuf::from("recipes"),
            recipe_glob: "*.txt".to_string(),
            output_dir: PathBuf::from("output/web"),
            resources_dir: PathBuf::from("resources/web"),
            site_title: "Family Recipes".to_string(),
        }
    }
}

const CANDIDATE_NAMES: &[&str] = &[".hearth.toml", "hearth.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn user_config_path() -> Option<PathBuf> {
    let p = dirs::config_dir()?.join("hearth").join("config.toml");
    if p.is_file() { Some(p) } else { None }
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .hearth.toml, hearth.toml
/// 3) user config dir: hearth/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir)
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    if let Some(p) = user_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
