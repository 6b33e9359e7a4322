//! Trip finder
//!
//! One submit: resolve the geo hint, ask the provider, render the answer.

mod search;
mod state;

pub use search::{
    intelligence_note, FindError, FindOutcome, TripFinder, SERVICE_UNREACHABLE_MESSAGE,
};
pub use state::{SearchResult, SearchState};
