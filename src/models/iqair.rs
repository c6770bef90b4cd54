//! Data structures for deserializing IQAir (AirVisual) API v2 responses.
//!
//! Every field the tool reads is optional on the wire. Missing values fall back to
//! the defaults used when printing: `Unknown` city, empty state and country, AQI 0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// The outer `{ "status": ..., "data": ... }` wrapper returned by every endpoint.
///
/// `data` is kept as raw JSON because its shape depends on `status`: a station
/// object on success, `{ "message": ... }` on failure.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ApiEnvelope {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// The provider's failure message, e.g. `city_not_found`.
    pub fn error_message(&self) -> String {
        match self.data.get("message") {
            Some(serde_json::Value::String(msg)) => msg.clone(),
            Some(other) if !other.is_null() => other.to_string(),
            _ => "Unknown error".to_string(),
        }
    }
}

/// The `data` object of a successful `city` or `nearest_city` response.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StationData {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub current: Option<Current>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Current {
    #[serde(default)]
    pub pollution: Option<Pollution>,
}

/// Latest pollution sample for the station.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Pollution {
    /// AQI on the US EPA scale.
    #[serde(default)]
    pub aqius: Option<u32>,
    /// Main pollutant for the US AQI (`p2`, `p1`, `o3`, ...).
    #[serde(default, deserialize_with = "lenient_string")]
    pub mainus: Option<String>,
    /// Time the sample was taken. `None` when absent or not RFC 3339.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub ts: Option<DateTime<Utc>>,
}

// `mainus` and `ts` are informational only; a surprising value must not fail the reading.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.as_str().map(str::to_string)))
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient_string(deserializer)?;
    Ok(raw
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}

impl StationData {
    pub fn city_name(&self) -> &str {
        self.city.as_deref().unwrap_or("Unknown")
    }

    pub fn state_name(&self) -> &str {
        self.state.as_deref().unwrap_or("")
    }

    pub fn country_name(&self) -> &str {
        self.country.as_deref().unwrap_or("")
    }

    pub fn pollution(&self) -> Option<&Pollution> {
        self.current.as_ref().and_then(|c| c.pollution.as_ref())
    }

    /// US AQI, or 0 when the response carries none.
    pub fn aqi(&self) -> u32 {
        self.pollution().and_then(|p| p.aqius).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn parses_full_station_payload() {
        let body = json!({
            "status": "success",
            "data": {
                "city": "Riga",
                "state": "Riga",
                "country": "Latvia",
                "location": { "type": "Point", "coordinates": [24.1052, 56.9496] },
                "current": {
                    "pollution": {
                        "ts": "2024-03-10T12:00:00.000Z",
                        "aqius": 42,
                        "mainus": "p2",
                        "aqicn": 15,
                        "maincn": "p2"
                    },
                    "weather": { "tp": 4, "hu": 80 }
                }
            }
        });

        let envelope: ApiEnvelope = serde_json::from_value(body).unwrap();
        assert!(envelope.is_success());

        let station: StationData = serde_json::from_value(envelope.data).unwrap();
        assert_eq!(station.city_name(), "Riga");
        assert_eq!(station.state_name(), "Riga");
        assert_eq!(station.country_name(), "Latvia");
        assert_eq!(station.aqi(), 42);

        let pollution = station.pollution().unwrap();
        assert_eq!(pollution.mainus.as_deref(), Some("p2"));
        assert_eq!(
            pollution.ts,
            Some(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn unparseable_extras_do_not_fail_the_reading() {
        let station: StationData = serde_json::from_value(json!({
            "city": "Riga",
            "current": { "pollution": { "ts": "2024-03-10T12:00:00", "aqius": 42, "mainus": 7 } }
        }))
        .unwrap();
        assert_eq!(station.aqi(), 42);

        let pollution = station.pollution().unwrap();
        assert!(pollution.ts.is_none());
        assert!(pollution.mainus.is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let station: StationData = serde_json::from_value(json!({})).unwrap();
        assert_eq!(station.city_name(), "Unknown");
        assert_eq!(station.state_name(), "");
        assert_eq!(station.country_name(), "");
        assert_eq!(station.aqi(), 0);
    }

    #[test]
    fn failure_envelope_exposes_message() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({
            "status": "fail",
            "data": { "message": "city_not_found" }
        }))
        .unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.error_message(), "city_not_found");
    }

    #[test]
    fn failure_without_message_is_unknown_error() {
        let envelope: ApiEnvelope = serde_json::from_value(json!({ "status": "fail" })).unwrap();
        assert!(!envelope.is_success());
        assert_eq!(envelope.error_message(), "Unknown error");

        let no_status: ApiEnvelope = serde_json::from_value(json!({ "data": {} })).unwrap();
        assert!(!no_status.is_success());
    }
}
