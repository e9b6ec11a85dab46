use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::process;

use clap::Parser;

use hearth::{config, site};

mod cli;
use cli::{Cli, Commands};

fn load_config(explicit: Option<&Path>) -> io::Result<config::Config> {
    let start_dir = env::current_dir()?;
    let (cfg, cfg_path) = config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(cfg)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            recipes,
            output,
            resources,
        } => {
            let mut cfg = load_config(cli.config.as_deref())?;
            if let Some(dir) = recipes {
                cfg.recipes_dir = dir;
            }
            if let Some(dir) = output {
                cfg.output_dir = dir;
            }
            if let Some(dir) = resources {
                cfg.resources_dir = dir;
            }

            let summary = site::build(&cfg)?;
            for failure in &summary.failures {
                eprintln!("error: {failure}");
            }

            println!(
                "Generated {} recipe page(s) in {}",
                summary.generated,
                summary.output_dir.display()
            );
            if !summary.failures.is_empty() {
                println!(
                    "Skipped {} document(s) that failed to parse",
                    summary.failures.len()
                );
            }

            Ok(())
        }
        Commands::Check { recipes } => {
            let mut cfg = load_config(cli.config.as_deref())?;
            if let Some(dir) = recipes {
                cfg.recipes_dir = dir;
            }

            let (parsed, failures) = site::load_recipes(&cfg.recipes_dir, &cfg.recipe_glob)?;
            for failure in &failures {
                eprintln!("error: {failure}");
            }

            if failures.is_empty() {
                println!("All {} document(s) parsed cleanly", parsed.len());
                Ok(())
            } else {
                println!(
                    "{} of {} document(s) failed to parse",
                    failures.len(),
                    parsed.len() + failures.len()
                );
                process::exit(1);
            }
        }
        Commands::Parse { file, json } => {
            let source = fs::read_to_string(&file)?;
            let name = file.file_name().and_then(|n| n.to_str()).unwrap_or_default();

            match hearth_parser::parse(&source, name) {
                Ok(recipe) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&recipe)?);
                    } else {
                        println!("{recipe:#?}");
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("error: {}: {e}", file.display());
                    process::exit(1);
                }
            }
        }
    }
}
