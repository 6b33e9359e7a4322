//! Geolocation module for tripfinder
//!
//! Resolves the coordinate hint sent with each request. Lookups are best
//! effort: any failure falls back to Rotterdam.

mod hint;
mod locator;

pub use hint::GeoHint;
pub use locator::{
    build_locator, resolve_geo_hint, DisabledLocator, FixedLocator, GeoLocator, IpLocator,
};
