//! tripfinder - The RCdeRC trip location finder
//!
//! Turns five trip preferences into a Gemini prompt with Google Maps grounding
//! and renders the answer for the terminal.

pub mod cli;
pub mod config;
pub mod finder;
pub mod geo;
pub mod llm;
pub mod render;
pub mod trip;
pub mod tui;

#[cfg(test)]
mod testing;

use thiserror::Error;

/// Main error type for tripfinder
#[derive(Error, Debug)]
pub enum TripFinderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Geolocation error: {0}")]
    Geolocation(String),

    #[error("API error: {0}")]
    Api(String),
}

/// Application name
pub const APP_NAME: &str = "tripfinder";
