//! Text rendering for the two-line reading and the help screen.

use crate::error::AppError;
use crate::models::{SeverityTier, StationData};
use colored::*;

pub const USAGE: &str = "\
Fetch air quality data from IQAir API and format it nicely.

Usage:
    aqi <city> <country> [state]
    aqi --lat <lat> --lon <lon>
    aqi --nearest

Examples:
    aqi Riga Latvia
    aqi Austin USA Texas
    aqi --lat 56.9496 --lon 24.1052
    aqi --nearest

Requires IQAIR_API_KEY environment variable.
Get your free key from: https://dashboard.iqair.com/personal/api-keys";

/// `city[, state][, country]`. The state is left out when empty or equal to the city.
pub fn format_location(city: &str, state: &str, country: &str) -> String {
    let mut location = city.to_string();
    if !state.is_empty() && state != city {
        location.push_str(", ");
        location.push_str(state);
    }
    if !country.is_empty() {
        location.push_str(", ");
        location.push_str(country);
    }
    location
}

/// Renders `"{emoji} {aqi} - {label}\n{location}"`.
pub fn format_reading(station: &StationData) -> String {
    let aqi = station.aqi();
    let tier = SeverityTier::from_aqi(aqi);
    let location = format_location(
        station.city_name(),
        station.state_name(),
        station.country_name(),
    );
    format!("{} {} - {}\n{}", tier.emoji(), aqi, tier, location)
}

/// Renders what goes to stderr for a failed run: `Error: <message>` and, when the
/// error carries one, a hint on the next line.
pub fn render_error(err: &AppError) -> String {
    let mut out = format!("{} {}", "Error:".red().bold(), err);
    if let Some(hint) = err.hint() {
        out.push('\n');
        out.push_str(&hint);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn state_is_hidden_when_equal_to_city() {
        assert_eq!(format_location("Riga", "Riga", "Latvia"), "Riga, Latvia");
    }

    #[test]
    fn distinct_state_is_shown() {
        assert_eq!(
            format_location("Austin", "Texas", "USA"),
            "Austin, Texas, USA"
        );
    }

    #[test]
    fn empty_parts_are_skipped() {
        assert_eq!(format_location("Singapore", "", ""), "Singapore");
        assert_eq!(format_location("Oslo", "", "Norway"), "Oslo, Norway");
        assert_eq!(format_location("Bern", "Bern", ""), "Bern");
    }

    #[test]
    fn renders_riga_reading() {
        let station: StationData = serde_json::from_value(json!({
            "city": "Riga",
            "state": "Riga",
            "country": "Latvia",
            "current": { "pollution": { "aqius": 42 } }
        }))
        .unwrap();
        assert_eq!(format_reading(&station), "🟢 42 - Good\nRiga, Latvia");
    }

    #[test]
    fn renders_defaults_for_empty_data() {
        let station = StationData::default();
        assert_eq!(format_reading(&station), "🟢 0 - Good\nUnknown");
    }

    #[test]
    fn usage_error_renders_message_and_usage_line() {
        colored::control::set_override(false);
        let err = crate::cli::interpret(&["Riga"]).unwrap_err();
        assert_eq!(
            render_error(&err),
            "Error: Provide city and country (and optionally state)\nUsage: aqi <city> <country> [state]"
        );
    }

    #[test]
    fn missing_key_renders_signup_hint() {
        colored::control::set_override(false);
        assert_eq!(
            render_error(&AppError::MissingApiKey),
            "Error: IQAIR_API_KEY environment variable not set\n\
             Get your free key from: https://dashboard.iqair.com/personal/api-keys"
        );
    }

    #[test]
    fn errors_without_hint_render_one_line() {
        colored::control::set_override(false);
        assert_eq!(render_error(&AppError::NotFound), "Error: Location not found");
    }

    #[test]
    fn renders_hazardous_with_state() {
        let station: StationData = serde_json::from_value(json!({
            "city": "Delhi",
            "state": "Delhi",
            "country": "India",
            "current": { "pollution": { "aqius": 412 } }
        }))
        .unwrap();
        assert_eq!(format_reading(&station), "🟤 412 - Hazardous\nDelhi, India");
    }
}
