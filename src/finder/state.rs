//! Submit state machine shared by the interactive surfaces

use crate::finder::{FindError, FindOutcome};
use crate::llm::GroundingLink;
use crate::render::RenderedLine;

/// What the result panel shows.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub blocks: Vec<RenderedLine>,
    pub links: Vec<GroundingLink>,
}

impl From<FindOutcome> for SearchResult {
    fn from(outcome: FindOutcome) -> Self {
        Self {
            blocks: outcome.blocks,
            links: outcome.links,
        }
    }
}

/// Idle → Loading on submit; Loading → Result or Error when the call settles.
#[derive(Debug, Clone, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Result(SearchResult),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Start a search. Returns false (and stays put) while one is in flight.
    pub fn submit(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = Self::Loading;
        true
    }

    pub fn succeed(&mut self, result: SearchResult) {
        if self.is_loading() {
            *self = Self::Result(result);
        } else {
            tracing::debug!("Ignoring result outside of Loading");
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        if self.is_loading() {
            *self = Self::Error(message.into());
        } else {
            tracing::debug!("Ignoring failure outside of Loading");
        }
    }

    /// Settle a finished search.
    pub fn settle(&mut self, outcome: Result<FindOutcome, FindError>) {
        match outcome {
            Ok(outcome) => self.succeed(outcome.into()),
            Err(e) => self.fail(e.user_message()),
        }
    }
}
