//! Conversion from API DTOs to domain types.
//!
//! Malformed journeys are errors, not skipped: a journey list we can only
//! partly read would produce misleading ferry suggestions. Cancelled
//! journeys are dropped, since no ferry can be caught from a bus that does
//! not run.

use tracing::warn;

use crate::domain::{DomainError, Journey, Leg, LineInfo, StopId, TimeError, parse_instant};

use super::types::{JourneyDto, JourneysResponse, LegDto, LocationDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse a timestamp
    #[error(transparent)]
    InvalidTime(#[from] TimeError),

    /// Data violates a domain invariant
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Pick the stop id of the first location, if it has one.
pub fn first_stop_id(locations: &[LocationDto]) -> Option<StopId> {
    locations
        .first()
        .and_then(|location| location.id.as_deref())
        .and_then(|id| StopId::parse(id).ok())
}

/// Convert a journeys response. A missing `journeys` key means no journeys.
///
/// Journeys with a cancelled leg are left out.
pub fn convert_journeys(response: &JourneysResponse) -> Result<Vec<Journey>, ConversionError> {
    response
        .journeys
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter(|dto| !skip_cancelled(dto))
        .map(convert_journey)
        .collect()
}

/// Returns true (and logs) when any leg of the journey is cancelled.
fn skip_cancelled(dto: &JourneyDto) -> bool {
    let Some(leg) = dto.legs.iter().find(|leg| leg.cancelled == Some(true)) else {
        return false;
    };

    warn!(
        origin = leg.origin.name.as_deref().unwrap_or("?"),
        planned_departure = leg.planned_departure.as_deref().unwrap_or("?"),
        "skipping cancelled journey"
    );
    true
}

/// Convert a single journey.
pub fn convert_journey(dto: &JourneyDto) -> Result<Journey, ConversionError> {
    let legs = dto
        .legs
        .iter()
        .map(convert_leg)
        .collect::<Result<Vec<_>, _>>()?;

    let remarks = dto
        .remarks
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|remark| remark.text.clone())
        .collect();

    let journey = Journey::new(legs)?.with_remarks(remarks);

    if journey.is_out_of_order() {
        warn!(
            departure = %journey.departure(),
            arrival = %journey.arrival(),
            "journey arrives before it departs"
        );
    }

    Ok(journey)
}

/// Convert a single leg, falling back to planned times when realtime
/// times are null. Cancelled legs never get here.
fn convert_leg(dto: &LegDto) -> Result<Leg, ConversionError> {
    let origin = dto
        .origin
        .name
        .as_deref()
        .ok_or(ConversionError::MissingField("origin.name"))?;
    let destination = dto
        .destination
        .name
        .as_deref()
        .ok_or(ConversionError::MissingField("destination.name"))?;

    let departure = dto
        .departure
        .as_deref()
        .or(dto.planned_departure.as_deref())
        .ok_or(ConversionError::MissingField("departure"))?;
    let arrival = dto
        .arrival
        .as_deref()
        .or(dto.planned_arrival.as_deref())
        .ok_or(ConversionError::MissingField("arrival"))?;

    let mut leg = Leg::new(
        origin,
        destination,
        parse_instant(departure)?,
        parse_instant(arrival)?,
    )?;

    if let Some(line) = &dto.line {
        leg = leg.with_line(LineInfo {
            name: line.name.clone(),
            product_name: line.product_name.clone(),
        });
    }
    if let Some(mode) = &dto.mode {
        leg = leg.with_mode(mode.clone());
    }

    Ok(leg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::format_hhmm;

    fn response(json: &str) -> JourneysResponse {
        serde_json::from_str(json).unwrap()
    }

    const TWO_LEG: &str = r#"{
        "journeys": [{
            "legs": [
                {
                    "origin": {"id": "1", "name": "Konstanz Allmannsdorf"},
                    "destination": {"id": "2", "name": "Staad Fähre"},
                    "departure": "2024-03-15T09:12:00+01:00",
                    "arrival": "2024-03-15T09:19:00+01:00",
                    "line": {"name": "Bus 4", "productName": "Bus", "mode": "bus"},
                    "mode": "bus"
                },
                {
                    "origin": {"id": "2", "name": "Staad Fähre"},
                    "destination": {"id": "3", "name": "Meersburg Kirche"},
                    "departure": "2024-03-15T09:19:00+01:00",
                    "arrival": "2024-03-15T09:25:00+01:00",
                    "walking": true
                }
            ],
            "remarks": [
                {"type": "hint", "code": "bf"},
                {"type": "warning", "text": "Roadworks in Staad"}
            ]
        }]
    }"#;

    #[test]
    fn convert_two_leg_journey() {
        let journeys = convert_journeys(&response(TWO_LEG)).unwrap();
        assert_eq!(journeys.len(), 1);

        let journey = &journeys[0];
        assert_eq!(journey.legs().len(), 2);
        assert_eq!(journey.origin(), "Konstanz Allmannsdorf");
        assert_eq!(journey.destination(), "Meersburg Kirche");
        assert_eq!(format_hhmm(&journey.departure()), "09:12");
        assert_eq!(format_hhmm(&journey.arrival()), "09:25");
        assert_eq!(journey.name(), "Bus 4");

        assert_eq!(journey.legs()[0].product_label(), "Bus");
        assert_eq!(journey.legs()[1].product_label(), "Walk");

        // Remarks without text are dropped
        assert_eq!(journey.remarks(), ["Roadworks in Staad".to_string()]);
    }

    #[test]
    fn planned_times_used_when_realtime_missing() {
        let json = r#"{"journeys": [{"legs": [{
            "origin": {"name": "A"},
            "destination": {"name": "B"},
            "departure": null,
            "plannedDeparture": "2024-03-15T10:05:00Z",
            "plannedArrival": "2024-03-15T10:45:00Z"
        }]}]}"#;

        let journeys = convert_journeys(&response(json)).unwrap();
        assert_eq!(format_hhmm(&journeys[0].departure()), "10:05");
        assert_eq!(format_hhmm(&journeys[0].arrival()), "10:45");
    }

    #[test]
    fn cancelled_journeys_are_dropped() {
        let json = r#"{"journeys": [
            {"legs": [{
                "origin": {"name": "Allmannsdorf, Konstanz"},
                "destination": {"name": "Kirche, Meersburg"},
                "departure": null,
                "plannedDeparture": "2024-03-15T08:42:00+01:00",
                "arrival": null,
                "plannedArrival": "2024-03-15T09:20:00+01:00",
                "line": {"name": "Bus 13/4", "productName": "Bus"},
                "cancelled": true
            }]},
            {"legs": [{
                "origin": {"name": "Allmannsdorf, Konstanz"},
                "destination": {"name": "Kirche, Meersburg"},
                "departure": "2024-03-15T09:12:00+01:00",
                "arrival": "2024-03-15T09:55:00+01:00",
                "line": {"name": "Bus 1", "productName": "Bus"},
                "cancelled": false
            }]}
        ]}"#;

        let journeys = convert_journeys(&response(json)).unwrap();
        assert_eq!(journeys.len(), 1);
        assert_eq!(journeys[0].name(), "Bus 1");
        assert_eq!(format_hhmm(&journeys[0].departure()), "09:12");
    }

    #[test]
    fn cancelled_leg_drops_whole_journey() {
        let json = r#"{"journeys": [{"legs": [
            {
                "origin": {"name": "A"},
                "destination": {"name": "B"},
                "departure": "2024-03-15T09:12:00+01:00",
                "arrival": "2024-03-15T09:19:00+01:00"
            },
            {
                "origin": {"name": "B"},
                "destination": {"name": "C"},
                "plannedDeparture": "2024-03-15T09:25:00+01:00",
                "plannedArrival": "2024-03-15T09:40:00+01:00",
                "cancelled": true
            }
        ]}]}"#;

        assert!(convert_journeys(&response(json)).unwrap().is_empty());
    }

    #[test]
    fn line_mode_is_not_a_leg_mode() {
        let json = r#"{"journeys": [{"legs": [{
            "origin": {"name": "A"},
            "destination": {"name": "B"},
            "departure": "2024-03-15T09:12:00+01:00",
            "arrival": "2024-03-15T09:19:00+01:00",
            "line": {"mode": "bus"}
        }]}]}"#;

        let journeys = convert_journeys(&response(json)).unwrap();
        assert!(journeys[0].legs()[0].mode().is_none());
        assert_eq!(journeys[0].legs()[0].product_label(), "Walk");
    }

    #[test]
    fn missing_journeys_is_empty() {
        assert!(convert_journeys(&response("{}")).unwrap().is_empty());
        assert!(
            convert_journeys(&response(r#"{"journeys": []}"#))
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn missing_times_fail() {
        let json = r#"{"journeys": [{"legs": [{
            "origin": {"name": "A"},
            "destination": {"name": "B"},
            "arrival": "2024-03-15T10:45:00Z"
        }]}]}"#;

        assert_eq!(
            convert_journeys(&response(json)),
            Err(ConversionError::MissingField("departure"))
        );
    }

    #[test]
    fn missing_names_fail() {
        let json = r#"{"journeys": [{"legs": [{
            "origin": {"id": "1"},
            "destination": {"name": "B"},
            "departure": "2024-03-15T10:05:00Z",
            "arrival": "2024-03-15T10:45:00Z"
        }]}]}"#;

        assert_eq!(
            convert_journeys(&response(json)),
            Err(ConversionError::MissingField("origin.name"))
        );
    }

    #[test]
    fn bad_timestamp_fails() {
        let json = r#"{"journeys": [{"legs": [{
            "origin": {"name": "A"},
            "destination": {"name": "B"},
            "departure": "10:05",
            "arrival": "2024-03-15T10:45:00Z"
        }]}]}"#;

        let err = convert_journeys(&response(json)).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidTime(_)));
        assert!(err.to_string().contains("10:05"));
    }

    #[test]
    fn journey_without_legs_fails() {
        let json = r#"{"journeys": [{"legs": []}]}"#;
        assert_eq!(
            convert_journeys(&response(json)),
            Err(ConversionError::Domain(DomainError::EmptyJourney))
        );
    }

    #[test]
    fn first_stop_id_picks_first_entry() {
        let locations: Vec<LocationDto> = serde_json::from_str(
            r#"[{"id": "8003482", "name": "Konstanz"}, {"id": "999", "name": "Other"}]"#,
        )
        .unwrap();
        assert_eq!(first_stop_id(&locations).unwrap().as_str(), "8003482");
    }

    #[test]
    fn first_stop_id_none_for_empty_or_idless() {
        assert!(first_stop_id(&[]).is_none());

        let locations: Vec<LocationDto> =
            serde_json::from_str(r#"[{"type": "location", "name": "An address"}]"#).unwrap();
        assert!(first_stop_id(&locations).is_none());
    }
}
