//! tictactoe_timeline - terminal tic-tac-toe with a rewindable move history.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_timeline::cli::{Cli, Command, ReplayAction};
use tictactoe_timeline::{AppConfig, GameView, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, announce_draw } => run_play(config, announce_draw),
        Command::Replay { actions, json } => run_replay(&actions, json),
    }
}

/// Run the terminal UI, logging to the configured file.
fn run_play(config: Option<std::path::PathBuf>, announce_draw: bool) -> Result<()> {
    let config = AppConfig::load(config.as_deref())?;
    let config = if announce_draw {
        config.with_announce_draw(true)
    } else {
        config
    };

    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tui::run_tui(&config)
}

/// Apply actions headlessly and print the result.
fn run_replay(actions: &[ReplayAction], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let actions: Vec<_> = actions.iter().map(|a| a.0).collect();
    let (game, transitions) = replay(&actions);
    for transition in transitions.iter().filter(|t| !t.is_applied()) {
        info!(%transition, "Action had no effect");
    }

    let view = GameView::of(&game);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.render(&game));
    }

    Ok(())
}
