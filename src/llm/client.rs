use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::config::Settings;
use crate::geo::GeoHint;
use crate::llm::gemini::GeminiClient;
use crate::trip::TripParameters;
use crate::TripFinderError;

/// Destination request payload.
pub struct TripRequest<'a> {
    pub params: &'a TripParameters,
    pub geo: GeoHint,
}

/// A map link attached to the answer by grounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroundingLink {
    pub title: String,
    pub uri: String,
}

/// What the model came back with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripSuggestion {
    pub text: String,
    pub links: Vec<GroundingLink>,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn suggest(&self, request: TripRequest<'_>) -> Result<TripSuggestion>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => Err(TripFinderError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ))
        .into()),
    }
}
