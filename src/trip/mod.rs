//! Trip preference model
//!
//! The parameter snapshot handed to the prompt builder and the slider
//! metadata the form surfaces use to edit it.

mod params;

pub use params::{ParameterField, SliderRange, TripParameters};
