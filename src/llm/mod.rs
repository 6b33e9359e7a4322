//! LLM module for tripfinder
//!
//! Builds the destination prompt and talks to the Gemini API.

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, GroundingLink, LlmProvider, TripRequest, TripSuggestion};
pub use gemini::{extract_grounding_links, GeminiClient, NO_SUGGESTION_TEXT};
pub use prompts::build_trip_prompt;
