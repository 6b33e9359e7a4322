//! Configuration module for tripfinder
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{FormSettings, GeoSettings, LlmSettings, Settings};
