//! CLI command implementations

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;

use crate::cli::args::{ConfigCommand, LocationArgs, TripArgs};
use crate::config::Settings;
use crate::finder::{intelligence_note, FindOutcome, TripFinder, SERVICE_UNREACHABLE_MESSAGE};
use crate::geo::{build_locator, resolve_geo_hint, GeoHint};
use crate::llm::{build_trip_prompt, GroundingLink};
use crate::render::{render_response, to_terminal_text, RenderedLine};

/// Run one destination search and print the answer.
pub async fn find_destination(
    settings: &Settings,
    trip: &TripArgs,
    location: &LocationArgs,
    raw: bool,
    json: bool,
) -> Result<()> {
    let params = trip.apply(settings.form.initial_parameters());

    let finder = match TripFinder::from_settings(settings, location.hint()) {
        Ok(finder) => finder,
        Err(e) => {
            tracing::error!("Could not set up the destination search: {:#}", e);
            anyhow::bail!(SERVICE_UNREACHABLE_MESSAGE);
        }
    };

    let outcome = match finder.find(params).await {
        Ok(outcome) => outcome,
        Err(e) => anyhow::bail!("{}", e.user_message()),
    };

    if json {
        println!("{}", outcome_as_json(&outcome)?);
    } else if raw {
        println!("{}", outcome.text);
    } else {
        print!("{}", to_terminal_text(&outcome.blocks));
        print_links(&outcome.links);
        println!();
        println!("{}", intelligence_note(settings));
    }

    Ok(())
}

/// Print the prompt for the given parameters without calling the API.
pub async fn show_prompt(
    settings: &Settings,
    trip: &TripArgs,
    location: &LocationArgs,
) -> Result<()> {
    let params = trip.apply(settings.form.initial_parameters());

    let geo = match location.hint() {
        Some(hint) => hint,
        None => {
            let locator = build_locator(settings)?;
            resolve_geo_hint(locator.as_ref()).await
        }
    };

    println!("{}", build_trip_prompt(&params, &geo));
    Ok(())
}

/// Render a markdown answer from a file or stdin.
pub fn render_file(file: Option<PathBuf>, json: bool) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    let blocks = render_response(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else {
        print!("{}", to_terminal_text(&blocks));
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

fn print_links(links: &[GroundingLink]) {
    if links.is_empty() {
        return;
    }

    println!();
    println!("Map links:");
    for link in links {
        println!("  - {}: {}", link.title, link.uri);
    }
}

fn outcome_as_json(outcome: &FindOutcome) -> Result<String> {
    #[derive(Serialize)]
    struct ExportData<'a> {
        geo: &'a GeoHint,
        text: &'a str,
        blocks: &'a [RenderedLine],
        links: &'a [GroundingLink],
    }

    let data = ExportData {
        geo: &outcome.geo,
        text: &outcome.text,
        blocks: &outcome.blocks,
        links: &outcome.links,
    };
    Ok(serde_json::to_string_pretty(&data)?)
}
