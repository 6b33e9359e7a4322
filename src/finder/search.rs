use anyhow::Result;
use thiserror::Error;

use crate::config::Settings;
use crate::geo::{build_locator, resolve_geo_hint, FixedLocator, GeoHint, GeoLocator};
use crate::llm::{build_provider, GroundingLink, LlmProvider, TripRequest};
use crate::render::{render_response, RenderedLine};
use crate::trip::TripParameters;

/// The only failure message users ever see.
pub const SERVICE_UNREACHABLE_MESSAGE: &str = "The grid is offline! (API Error)";

/// Any provider failure. The cause is logged, never shown.
#[derive(Error, Debug)]
pub enum FindError {
    #[error("The grid is offline! (API Error)")]
    Unreachable(#[source] anyhow::Error),
}

impl FindError {
    pub fn user_message(&self) -> &'static str {
        SERVICE_UNREACHABLE_MESSAGE
    }
}

/// Footer shown under every answer.
pub fn intelligence_note(settings: &Settings) -> String {
    format!(
        "RCdeRC Intelligence Note: results are synthesized using {} with real-time grounding. \
Please verify route viability before departure.",
        settings.llm.model
    )
}

/// Result of a successful search.
#[derive(Debug, Clone)]
pub struct FindOutcome {
    pub geo: GeoHint,
    pub text: String,
    pub blocks: Vec<RenderedLine>,
    pub links: Vec<GroundingLink>,
}

pub struct TripFinder {
    provider: Box<dyn LlmProvider>,
    locator: Box<dyn GeoLocator>,
}

impl TripFinder {
    pub fn new(provider: Box<dyn LlmProvider>, locator: Box<dyn GeoLocator>) -> Self {
        Self { provider, locator }
    }

    /// Build a finder from settings, optionally pinning the location.
    pub fn from_settings(settings: &Settings, location: Option<GeoHint>) -> Result<Self> {
        let provider = build_provider(settings)?;
        let locator: Box<dyn GeoLocator> = match location {
            Some(hint) => Box::new(FixedLocator::new(hint)),
            None => build_locator(settings)?,
        };
        Ok(Self::new(provider, locator))
    }

    /// Run one search for a parameter snapshot.
    pub async fn find(&self, params: TripParameters) -> Result<FindOutcome, FindError> {
        let geo = resolve_geo_hint(self.locator.as_ref()).await;

        tracing::info!(
            distance = params.distance_to_rotterdam,
            terrain = params.terrain,
            big_mac_index = params.big_mac_index,
            sun = params.sunny_weather_chance,
            "Searching for a destination"
        );

        let suggestion = self
            .provider
            .suggest(TripRequest {
                params: &params,
                geo,
            })
            .await
            .map_err(|e| {
                tracing::error!("Destination search failed: {:#}", e);
                FindError::Unreachable(e)
            })?;

        let blocks = render_response(&suggestion.text);
        tracing::debug!(
            "Rendered {} blocks, {} grounding links",
            blocks.len(),
            suggestion.links.len()
        );

        Ok(FindOutcome {
            geo,
            text: suggestion.text,
            blocks,
            links: suggestion.links,
        })
    }
}
