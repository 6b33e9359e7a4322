//! TUI screens

mod form;
mod results;

pub use form::FormScreen;
pub use results::{styled_line, ResultsScreen};
