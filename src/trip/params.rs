//! Trip parameters and slider ranges

use serde::{Deserialize, Serialize};

/// Immutable snapshot of the five trip preferences for a single request.
///
/// Numeric fields are signed and unbounded on purpose of the type: the form
/// surfaces keep them inside [`SliderRange`], the prompt builder does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripParameters {
    /// Approximate distance from Rotterdam in km
    pub distance_to_rotterdam: i64,

    /// 0 = flat, 10 = high mountains
    pub terrain: i64,

    /// 0 = budget, 20 = luxury
    pub big_mac_index: i64,

    /// Minimum chance of sunny weather in percent
    pub sunny_weather_chance: i64,

    /// Free-form notes (gravel, beer, no wind, ...)
    pub additional_input: String,
}

impl Default for TripParameters {
    fn default() -> Self {
        Self {
            distance_to_rotterdam: 1100,
            terrain: 10,
            big_mac_index: 2,
            sunny_weather_chance: 85,
            additional_input: String::new(),
        }
    }
}

impl TripParameters {
    /// Read a numeric field.
    pub fn get(&self, field: ParameterField) -> i64 {
        match field {
            ParameterField::Distance => self.distance_to_rotterdam,
            ParameterField::Terrain => self.terrain,
            ParameterField::BigMacIndex => self.big_mac_index,
            ParameterField::SunnyWeatherChance => self.sunny_weather_chance,
        }
    }

    /// Return a copy with one numeric field replaced.
    pub fn with(mut self, field: ParameterField, value: i64) -> Self {
        match field {
            ParameterField::Distance => self.distance_to_rotterdam = value,
            ParameterField::Terrain => self.terrain = value,
            ParameterField::BigMacIndex => self.big_mac_index = value,
            ParameterField::SunnyWeatherChance => self.sunny_weather_chance = value,
        }
        self
    }
}

/// The four numeric trip parameters, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterField {
    Distance,
    Terrain,
    BigMacIndex,
    SunnyWeatherChance,
}

impl ParameterField {
    pub const ALL: [ParameterField; 4] = [
        ParameterField::Distance,
        ParameterField::Terrain,
        ParameterField::BigMacIndex,
        ParameterField::SunnyWeatherChance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Distance => "Distance from R'dam",
            Self::Terrain => "Flat to Mountains",
            Self::BigMacIndex => "Big Mac Index",
            Self::SunnyWeatherChance => "Sun Chance",
        }
    }

    pub fn range(&self) -> SliderRange {
        match self {
            Self::Distance => SliderRange::new(50, 3000, 50),
            Self::Terrain => SliderRange::new(0, 10, 1),
            Self::BigMacIndex => SliderRange::new(0, 20, 1),
            Self::SunnyWeatherChance => SliderRange::new(0, 100, 1),
        }
    }

    /// Value as shown next to the slider (`1100 km`, `10/10`, `85%`).
    pub fn display(&self, value: i64) -> String {
        match self {
            Self::Distance => format!("{} km", value),
            Self::Terrain => format!("{}/10", value),
            Self::BigMacIndex => format!("{}/20", value),
            Self::SunnyWeatherChance => format!("{}%", value),
        }
    }
}

/// Inclusive slider bounds with a step size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl SliderRange {
    pub const fn new(min: i64, max: i64, step: i64) -> Self {
        Self { min, max, step }
    }

    /// Clamp into bounds and snap to the nearest step above `min`.
    pub fn snap(&self, value: i64) -> i64 {
        let clamped = value.clamp(self.min, self.max);
        let offset = clamped - self.min;
        let steps = (offset + self.step / 2) / self.step;
        (self.min + steps * self.step).min(self.max)
    }

    /// Move `value` by `steps` slider steps (negative moves down).
    pub fn adjust(&self, value: i64, steps: i64) -> i64 {
        self.snap(value.saturating_add(steps.saturating_mul(self.step)))
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Position of `value` within the range as 0.0..=1.0.
    pub fn ratio(&self, value: i64) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        let clamped = value.clamp(self.min, self.max);
        (clamped - self.min) as f64 / (self.max - self.min) as f64
    }
}
