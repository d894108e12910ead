// CLI module - command-line argument parsing and handlers
//
// Provides:
// - (no subcommand): run the catalog editor TUI
// - config --show: Display effective configuration
// - config --path: Print the config file path
// - config --reset: Regenerate config file with defaults
// - apply [FILE]: Dispatch a JSON Lines action script headlessly

use crate::apply;
use crate::config::{Config, VERSION};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

/// Terminal product catalog editor
#[derive(Parser)]
#[command(name = "catalog")]
#[command(version = VERSION)]
#[command(about = "Terminal product catalog editor", long_about = None)]
pub struct Cli {
    /// Start with sample products (same as CATALOG_DEMO=1)
    #[arg(long)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Dispatch actions from a JSON Lines script and print the catalog
    Apply {
        /// Script to read (stdin when omitted or "-")
        file: Option<PathBuf>,
    },
}

pub fn handle_config(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else {
        // No flag provided, show help
        println!("Usage: catalog config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn config_path() -> Result<PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    println!();
    println!("# demo_mode = {} (CATALOG_DEMO / --demo)", config.demo_mode);

    let path = config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::default().write_to(&path)?;
    println!("Config reset: {}", path.display());
    Ok(())
}

/// Run a script through a fresh store and print the final catalog
pub fn handle_apply(file: Option<&Path>) -> Result<()> {
    let catalog = match file {
        Some(path) if path != Path::new("-") => {
            let handle = std::fs::File::open(path)
                .with_context(|| format!("Cannot open {}", path.display()))?;
            apply::apply_script(BufReader::new(handle))
                .with_context(|| format!("Failed to apply {}", path.display()))?
        }
        _ => apply::apply_script(std::io::stdin().lock())?,
    };

    let json = serde_json::to_string_pretty(&catalog).context("Failed to serialize catalog")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["catalog", "--demo"]).unwrap();
        assert!(cli.demo);
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["catalog", "apply", "script.jsonl"]).unwrap();
        match cli.command {
            Some(Commands::Apply { file }) => {
                assert_eq!(file, Some(PathBuf::from("script.jsonl")))
            }
            _ => panic!("expected apply"),
        }

        let cli = Cli::try_parse_from(["catalog", "config", "--show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { show: true, .. })
        ));
    }
}
