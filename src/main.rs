// Catalog - terminal product catalog editor
//
// A single predictable store holds the product list; every change is an
// action run through a pure reducer.
//
// Architecture:
// - Catalog: products, actions, reducer, store, id generation
// - TUI (ratatui): list, create and edit panels that emit intents
// - Apply: headless dispatch of JSON Lines action scripts
// - Config / logging / theme: ambient plumbing shared by both modes

mod apply;
mod catalog;
mod cli;
mod config;
mod demo;
mod logging;
mod theme;
mod tui;

use anyhow::Result;
use catalog::{SequentialIds, Store};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { show, reset, path }) => return cli::handle_config(show, reset, path),
        Some(Commands::Apply { file }) => {
            let config = Config::from_env()?;
            // Logs go to stderr so stdout stays pure JSON
            let _file_guard = logging::init(&config.logging, LogSink::Stderr)?;
            return cli::handle_apply(file.as_deref());
        }
        None => {}
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    theme::ensure_themes_extracted();

    let mut config = Config::from_env()?;
    config.demo_mode |= cli.demo;

    // Captured for the logs panel so nothing writes over the alternate screen.
    // The guard must outlive the TUI so file logs flush.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, LogSink::Tui(log_buffer.clone()))?;

    tracing::info!(version = config::VERSION, theme = %config.theme, "starting catalog");

    let mut store = Store::new();
    let mut ids = SequentialIds::new();
    if config.demo_mode {
        demo::seed(&mut store, &mut ids, &config.placeholder_thumbnail);
    }

    tui::run_tui(store, ids, &config, log_buffer).await
}
