use serde::{Deserialize, Serialize};

/// One normalized current-weather observation.
///
/// Produced only by a successful lookup and immutable afterwards. The
/// temperature is truncated toward negative infinity (floor, not round) so
/// repeated lookups of the same raw value always agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReading {
    /// Provider-canonical location name, which may differ from the query.
    pub location: String,
    pub temperature_c: i32,
    pub humidity_pct: u8,
    pub wind_speed_kmh: f64,
    /// Resolved icon image URL; `None` when the provider sent a code the
    /// icon table does not know.
    pub icon_url: Option<String>,
}

/// One remembered past lookup.
///
/// `city` is the identity key: exact, case-sensitive string match. A missing
/// icon is not serialized at all, so stored lists round-trip cleanly for
/// lookups that resolved no icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub temperature: i32,
}
