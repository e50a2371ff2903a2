//! Journey-planning API response DTOs.
//!
//! These types map directly to the `transport.rest` (HAFAS) JSON responses.
//! They use `Option` liberally because the API omits fields rather than
//! sending null values in many cases, and sends null in many others.

use serde::Deserialize;

/// One entry of the `GET /locations` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationDto {
    /// Stop or station id. Absent for plain addresses.
    pub id: Option<String>,

    /// Location kind: "stop", "station", "location".
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Human-readable name.
    pub name: Option<String>,
}

/// Response from `GET /journeys`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneysResponse {
    /// Found journeys. Missing when nothing matched.
    pub journeys: Option<Vec<JourneyDto>>,

    /// Cursor for fetching earlier journeys.
    pub earlier_ref: Option<String>,

    /// Cursor for fetching later journeys.
    pub later_ref: Option<String>,
}

/// A single journey.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDto {
    /// Legs in travel order.
    pub legs: Vec<LegDto>,

    /// Journey-level remarks (warnings, hints).
    pub remarks: Option<Vec<RemarkDto>>,
}

/// One leg of a journey.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    /// Where the leg starts.
    pub origin: PlaceDto,

    /// Where the leg ends.
    pub destination: PlaceDto,

    /// Realtime departure (ISO 8601). Null for cancelled legs.
    pub departure: Option<String>,

    /// Timetabled departure (ISO 8601).
    pub planned_departure: Option<String>,

    /// Realtime arrival (ISO 8601). Null for cancelled legs.
    pub arrival: Option<String>,

    /// Timetabled arrival (ISO 8601).
    pub planned_arrival: Option<String>,

    /// Line serving this leg. Absent on walking legs.
    pub line: Option<LineDto>,

    /// Transport mode, e.g. "bus" or "walking".
    pub mode: Option<String>,

    /// Set on walking legs.
    pub walking: Option<bool>,

    /// Set when the leg is cancelled.
    pub cancelled: Option<bool>,
}

/// A stop, station or address.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDto {
    /// Stop id, if this is a stop.
    pub id: Option<String>,

    /// Human-readable name.
    pub name: Option<String>,
}

/// Line information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDto {
    /// Line name, e.g. "Bus 1".
    pub name: Option<String>,

    /// Product name, e.g. "Bus".
    pub product_name: Option<String>,

    /// Product id, e.g. "bus".
    pub product: Option<String>,

    /// Line mode, e.g. "bus".
    pub mode: Option<String>,
}

/// A remark attached to a journey.
#[derive(Debug, Clone, Deserialize)]
pub struct RemarkDto {
    /// Remark kind: "hint", "warning", "status".
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Short code.
    pub code: Option<String>,

    /// Display text.
    pub text: Option<String>,
}
