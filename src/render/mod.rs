//! Response rendering
//!
//! Classifies the model's markdown-subset answer line by line and lays the
//! result out for plain terminal output.

mod lines;
mod terminal;

pub use lines::{render_response, RenderedLine};
pub use terminal::to_terminal_text;
