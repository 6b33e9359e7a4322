use crate::geo::GeoHint;
use crate::trip::TripParameters;

/// Build the destination prompt for one parameter snapshot.
///
/// Values are interpolated as-is; ranges are the form's business.
pub fn build_trip_prompt(params: &TripParameters, geo: &GeoHint) -> String {
    format!(
        "You are the official trip planner for RCdeRC (Rotterdamse Club de Retro Cyclisme), a cycling club based in Rotterdam.\n\
Find the absolute best 1-week cycling trip destination based on these parameters:\n\
- Distance from Rotterdam: {distance} km (Approximate)\n\
- Terrain Type (0=Flat, 10=Mountains): {terrain}\n\
- Budget Level (0=Budget/Low Big Mac Index, 20=Luxury/High Index): {big_mac}\n\
- Sunny Weather Preference: {sun}% chance minimum.\n\
- Additional Notes: \"{notes}\"\n\
\n\
The club is planning from approximately latitude {lat}, longitude {lon}.\n\
\n\
Please provide:\n\
1. A single specific destination (Region or Town).\n\
2. A detailed explanation of why it fits the club RCdeRC's needs.\n\
3. Suggested routes or climbs in that area.\n\
4. Use Google Maps grounding to provide a link to the destination.\n\
\n\
Format the response in Markdown with a clear, enthusiastic tone.",
        distance = params.distance_to_rotterdam,
        terrain = params.terrain,
        big_mac = params.big_mac_index,
        sun = params.sunny_weather_chance,
        notes = params.additional_input,
        lat = geo.latitude,
        lon = geo.longitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TripParameters {
        TripParameters {
            distance_to_rotterdam: 1100,
            terrain: 10,
            big_mac_index: 2,
            sunny_weather_chance: 85,
            additional_input: "no wind".to_string(),
        }
    }

    #[test]
    fn embeds_every_parameter() {
        let prompt = build_trip_prompt(&sample(), &GeoHint::ROTTERDAM);
        assert!(prompt.contains("Distance from Rotterdam: 1100 km"));
        assert!(prompt.contains("(0=Flat, 10=Mountains): 10"));
        assert!(prompt.contains("20=Luxury/High Index): 2"));
        assert!(prompt.contains("85% chance minimum"));
        assert!(prompt.contains("\"no wind\""));
    }

    #[test]
    fn embeds_the_geo_hint() {
        let prompt = build_trip_prompt(&sample(), &GeoHint::new(43.5, -1.25));
        assert!(prompt.contains("latitude 43.5, longitude -1.25"));
    }

    #[test]
    fn free_text_is_not_escaped_or_truncated() {
        let notes = "Craft beer \"IPA\", <paved> only & {no} wind\nsecond line ".repeat(20);
        let params = TripParameters {
            additional_input: notes.clone(),
            ..sample()
        };
        let prompt = build_trip_prompt(&params, &GeoHint::ROTTERDAM);
        assert!(prompt.contains(&notes));
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let params = TripParameters {
            distance_to_rotterdam: -250,
            terrain: 42,
            ..sample()
        };
        let prompt = build_trip_prompt(&params, &GeoHint::ROTTERDAM);
        assert!(prompt.contains("Distance from Rotterdam: -250 km"));
        assert!(prompt.contains("(0=Flat, 10=Mountains): 42"));
    }

    #[test]
    fn asks_for_destination_reasons_routes_and_link() {
        let prompt = build_trip_prompt(&TripParameters::default(), &GeoHint::ROTTERDAM);
        assert!(prompt.contains("A single specific destination"));
        assert!(prompt.contains("why it fits"));
        assert!(prompt.contains("Suggested routes or climbs"));
        assert!(prompt.contains("Google Maps grounding"));
    }
}
