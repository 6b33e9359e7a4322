//! tripfinder - RCdeRC trip location finder
//!
//! Entry point for the tripfinder CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tripfinder::cli::{Cli, Commands};
use tripfinder::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        tripfinder::cli::completions::print(shell);
        return Ok(());
    }

    // Only commands that use the config file may fail on a broken one.
    let settings = if cli.command.needs_settings() {
        Settings::load()?
    } else {
        Settings::default()
    };

    // The TUI owns the terminal; keep log lines off the alternate screen.
    let default_level = if matches!(cli.command, Commands::Tui) {
        "off"
    } else if cli.verbose {
        "debug"
    } else {
        settings.general.log_level.as_str()
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Execute command
    match cli.command {
        Commands::Find {
            trip,
            location,
            raw,
            json,
        } => {
            tripfinder::cli::commands::find_destination(&settings, &trip, &location, raw, json)
                .await?;
        }
        Commands::Prompt { trip, location } => {
            tripfinder::cli::commands::show_prompt(&settings, &trip, &location).await?;
        }
        Commands::Render { file, json } => {
            tripfinder::cli::commands::render_file(file, json)?;
        }
        Commands::Tui => {
            tripfinder::tui::run(&settings).await?;
        }
        Commands::Config(config_cmd) => {
            tripfinder::cli::commands::config_command(&settings, config_cmd)?;
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
