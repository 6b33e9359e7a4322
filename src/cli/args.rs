//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::geo::GeoHint;
use crate::trip::TripParameters;

/// tripfinder - Find the next RCdeRC cycling trip destination
#[derive(Parser, Debug)]
#[command(name = "tripfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask Gemini for the best destination
    Find {
        #[command(flatten)]
        trip: TripArgs,

        #[command(flatten)]
        location: LocationArgs,

        /// Print the model's markdown as-is
        #[arg(long, conflicts_with = "json")]
        raw: bool,

        /// Print rendered blocks and links as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt that would be sent, without calling the API
    Prompt {
        #[command(flatten)]
        trip: TripArgs,

        #[command(flatten)]
        location: LocationArgs,
    },

    /// Render a markdown answer from a file (or stdin)
    Render {
        /// Markdown file (defaults to stdin)
        file: Option<PathBuf>,

        /// Print rendered blocks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Launch the interactive form
    Tui,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command reads the config file.
    pub fn needs_settings(&self) -> bool {
        match self {
            Commands::Find { .. } | Commands::Prompt { .. } | Commands::Tui => true,
            Commands::Config(cmd) => matches!(cmd, ConfigCommand::Show),
            Commands::Render { .. } | Commands::Completions { .. } => false,
        }
    }
}

/// Trip preferences; unset values come from the `[form]` config section.
#[derive(Args, Debug, Clone, Default)]
pub struct TripArgs {
    /// Approximate distance from Rotterdam in km (50-3000)
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(50..=3000))]
    pub distance: Option<i64>,

    /// Terrain, 0 = flat to 10 = mountains
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(0..=10))]
    pub terrain: Option<i64>,

    /// Big Mac index, 0 = budget to 20 = luxury
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(0..=20))]
    pub big_mac: Option<i64>,

    /// Minimum chance of sunny weather in percent (0-100)
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(0..=100))]
    pub sun: Option<i64>,

    /// Extra vibes (gravel, beer, no wind, ...)
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl TripArgs {
    /// Overlay the given flags on a base snapshot.
    pub fn apply(&self, base: TripParameters) -> TripParameters {
        TripParameters {
            distance_to_rotterdam: self.distance.unwrap_or(base.distance_to_rotterdam),
            terrain: self.terrain.unwrap_or(base.terrain),
            big_mac_index: self.big_mac.unwrap_or(base.big_mac_index),
            sunny_weather_chance: self.sun.unwrap_or(base.sunny_weather_chance),
            additional_input: self.notes.clone().unwrap_or(base.additional_input),
        }
    }
}

/// Explicit coordinates; skips the location lookup.
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    /// Latitude to plan from
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude to plan from
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

impl LocationArgs {
    pub fn hint(&self) -> Option<GeoHint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoHint::new(lat, lon)),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
