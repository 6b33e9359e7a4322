use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Settings;
use crate::geo::GeoHint;
use crate::llm::client::{GroundingLink, LlmProvider, TripRequest, TripSuggestion};
use crate::llm::prompts::build_trip_prompt;
use crate::TripFinderError;

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shown in place of the answer when the model returns no text.
pub const NO_SUGGESTION_TEXT: &str = "No suggestion found.";

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "Gemini API key is missing. Set llm.api_key in config or TRIPFINDER_GEMINI_API_KEY."
            );
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_GEMINI_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_GEMINI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(settings.llm.timeout_secs))
                .build()
                .context("Failed to build Gemini HTTP client")?,
            api_key,
            model,
            endpoint,
        })
    }

    /// The key travels in a header so transport errors never carry it.
    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn suggest(&self, request: TripRequest<'_>) -> Result<TripSuggestion> {
        let prompt = build_trip_prompt(request.params, &request.geo);
        let body = build_request_body(prompt, request.geo);

        tracing::debug!("Requesting destination from {}", self.model);

        let response = self
            .http
            .post(self.request_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .context("Gemini request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(
                TripFinderError::Api(format!("Gemini returned {}: {}", status, body)).into(),
            );
        }

        let payload: Value = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        parse_suggestion(payload)
    }
}

fn build_request_body(prompt: String, geo: GeoHint) -> GeminiGenerateContentRequest {
    GeminiGenerateContentRequest {
        contents: vec![GeminiContent {
            parts: vec![GeminiPart { text: prompt }],
        }],
        tools: vec![GeminiTool {
            google_maps: GoogleMapsTool {},
        }],
        tool_config: GeminiToolConfig {
            retrieval_config: GeminiRetrievalConfig {
                lat_lng: GeminiLatLng {
                    latitude: geo.latitude,
                    longitude: geo.longitude,
                },
            },
        },
    }
}

/// Turn a decoded response into a suggestion; missing text is not an error.
fn parse_suggestion(payload: Value) -> Result<TripSuggestion> {
    let links = extract_grounding_links(&payload);

    let response: GeminiGenerateContentResponse =
        serde_json::from_value(payload).context("Unexpected Gemini response shape")?;

    let text = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<String>()
        })
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| {
            tracing::debug!("Gemini response carried no text");
            NO_SUGGESTION_TEXT.to_string()
        });

    Ok(TripSuggestion { text, links })
}

/// Grounding links of the first candidate.
///
/// Absent and malformed metadata both give an empty list.
pub fn extract_grounding_links(response: &Value) -> Vec<GroundingLink> {
    response
        .pointer("/candidates/0/groundingMetadata/groundingChunks")
        .and_then(Value::as_array)
        .map(|chunks| chunks.iter().filter_map(grounding_link).collect())
        .unwrap_or_default()
}

fn grounding_link(chunk: &Value) -> Option<GroundingLink> {
    let source = chunk.get("maps").or_else(|| chunk.get("web"))?;
    let uri = source.get("uri")?.as_str()?.to_string();
    let title = source
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or(uri.as_str())
        .to_string();
    Some(GroundingLink { title, uri })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerateContentRequest {
    contents: Vec<GeminiContent>,
    tools: Vec<GeminiTool>,
    tool_config: GeminiToolConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiTool {
    google_maps: GoogleMapsTool,
}

#[derive(Debug, Serialize)]
struct GoogleMapsTool {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiToolConfig {
    retrieval_config: GeminiRetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRetrievalConfig {
    lat_lng: GeminiLatLng,
}

#[derive(Debug, Serialize)]
struct GeminiLatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct GeminiGenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}
