//! TfL API response DTOs.
//!
//! These types map directly to the TfL Unified API JSON responses, keeping
//! only the fields we read. Every arrival field is an `Option` because the
//! API omits fields freely, and the shape of a record differs between modes.

use serde::Deserialize;

/// Response from `GET /StopPoint/Search/{query}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Matching stops, best first.
    #[serde(default)]
    pub matches: Vec<StopMatch>,
}

/// A single stop search match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StopMatch {
    /// Stop identifier (NaPTAN or hub code).
    pub id: String,
}

impl StopMatch {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One record from `GET /StopPoint/{id}/Arrivals`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalDto {
    /// Line identifier (e.g. "25", "jubilee").
    pub line_id: Option<String>,

    /// Line display name (e.g. "25", "Jubilee").
    pub line_name: Option<String>,

    /// Platform or stop letter.
    pub platform_name: Option<String>,

    /// Destination stop name. Often absent for buses.
    pub destination_name: Option<String>,

    /// Free-text direction of travel, used when there is no destination name.
    pub towards: Option<String>,

    /// Seconds until arrival.
    pub time_to_station: Option<i64>,

    /// Predicted arrival time (RFC 3339).
    pub expected_arrival: Option<String>,

    /// Mode name (e.g. "bus", "tube").
    pub mode_name: Option<String>,
}
