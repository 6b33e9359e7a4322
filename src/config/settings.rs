//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::trip::{ParameterField, TripParameters};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "TRIPFINDER_GEMINI_API_KEY";

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// LLM settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Geolocation settings
    #[serde(default)]
    pub geo: GeoSettings,

    /// Initial form values
    #[serde(default)]
    pub form: FormSettings,

    /// TUI settings
    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key (for cloud providers)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (empty = Gemini public endpoint)
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoSettings {
    /// Location source (ip, fixed, none)
    #[serde(default = "default_geo_provider")]
    pub provider: String,

    /// IP geolocation endpoint (empty = ip-api.com)
    #[serde(default)]
    pub endpoint: String,

    /// Latitude for the fixed provider
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude for the fixed provider
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Lookup timeout in seconds
    #[serde(default = "default_geo_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSettings {
    #[serde(default = "default_distance")]
    pub distance_to_rotterdam: i64,

    #[serde(default = "default_terrain")]
    pub terrain: i64,

    #[serde(default = "default_big_mac_index")]
    pub big_mac_index: i64,

    #[serde(default = "default_sunny_weather_chance")]
    pub sunny_weather_chance: i64,

    #[serde(default)]
    pub additional_input: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    /// Show grounding links under the result
    #[serde(default = "default_true")]
    pub show_links: bool,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_llm_timeout() -> u64 {
    45
}

fn default_geo_provider() -> String {
    "ip".to_string()
}

fn default_geo_timeout() -> u64 {
    5
}

fn default_distance() -> i64 {
    TripParameters::default().distance_to_rotterdam
}

fn default_terrain() -> i64 {
    TripParameters::default().terrain
}

fn default_big_mac_index() -> i64 {
    TripParameters::default().big_mac_index
}

fn default_sunny_weather_chance() -> i64 {
    TripParameters::default().sunny_weather_chance
}

fn default_true() -> bool {
    true
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            timeout_secs: default_llm_timeout(),
        }
    }
}

impl Default for GeoSettings {
    fn default() -> Self {
        Self {
            provider: default_geo_provider(),
            endpoint: String::new(),
            latitude: None,
            longitude: None,
            timeout_secs: default_geo_timeout(),
        }
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            distance_to_rotterdam: default_distance(),
            terrain: default_terrain(),
            big_mac_index: default_big_mac_index(),
            sunny_weather_chance: default_sunny_weather_chance(),
            additional_input: String::new(),
        }
    }
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self { show_links: true }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            llm: LlmSettings::default(),
            geo: GeoSettings::default(),
            form: FormSettings::default(),
            tui: TuiSettings::default(),
        }
    }
}

impl FormSettings {
    /// Initial parameter snapshot, snapped into the slider ranges.
    pub fn initial_parameters(&self) -> TripParameters {
        let raw = TripParameters {
            distance_to_rotterdam: self.distance_to_rotterdam,
            terrain: self.terrain,
            big_mac_index: self.big_mac_index,
            sunny_weather_chance: self.sunny_weather_chance,
            additional_input: self.additional_input.clone(),
        };

        ParameterField::ALL.iter().fold(raw, |params, field| {
            let value = params.get(*field);
            let range = field.range();
            if range.contains(value) {
                params
            } else {
                tracing::warn!(
                    "form.{:?} = {} is outside {}..={}, snapping",
                    field,
                    value,
                    range.min,
                    range.max
                );
                params.with(*field, range.snap(value))
            }
        })
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse settings from TOML text; missing sections fall back to defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.llm.api_key.trim().is_empty() {
            if let Some(key) = lookup(API_KEY_ENV) {
                if !key.trim().is_empty() {
                    self.llm.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", crate::APP_NAME, crate::APP_NAME)
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
