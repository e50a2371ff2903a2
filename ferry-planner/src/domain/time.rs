//! Instant handling for journey legs and ferry departures.
//!
//! The journey-planning service returns ISO-8601 timestamps that always carry
//! an explicit offset (`Z` or `+02:00`). We keep that offset rather than
//! converting to UTC, so that "HH:MM" display and calendar-day anchoring both
//! happen in the local time the upstream reported.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};

/// A timezone-aware point in time, as reported by the upstream service.
pub type Instant = DateTime<FixedOffset>;

/// Error returned when parsing an invalid timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimeError {
    input: String,
    reason: String,
}

impl TimeError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse an RFC 3339 timestamp such as `2024-03-15T09:12:00+01:00`.
///
/// # Examples
///
/// ```
/// use ferry_planner::domain::{format_hhmm, parse_instant};
///
/// let utc = parse_instant("2024-03-15T08:12:00Z").unwrap();
/// assert_eq!(format_hhmm(&utc), "08:12");
///
/// let local = parse_instant("2024-03-15T09:12:00+01:00").unwrap();
/// assert_eq!(format_hhmm(&local), "09:12");
/// assert_eq!(utc, local);
/// ```
pub fn parse_instant(s: &str) -> Result<Instant, TimeError> {
    DateTime::parse_from_rfc3339(s.trim()).map_err(|e| TimeError::new(s, e.to_string()))
}

/// Format an instant as "HH:MM" in its own offset.
pub fn format_hhmm(instant: &Instant) -> String {
    instant.format("%H:%M").to_string()
}

/// Format the time between two instants as `"{h}h {mm}m"`.
///
/// Whole minutes are floor-divided into hours and minutes; the minutes are
/// zero-padded. The caller guarantees `arrival >= departure`.
///
/// # Examples
///
/// ```
/// use ferry_planner::domain::{format_duration, parse_instant};
///
/// let dep = parse_instant("2024-03-15T09:00:00+01:00").unwrap();
/// let arr = parse_instant("2024-03-15T11:35:00+01:00").unwrap();
/// assert_eq!(format_duration(&dep, &arr), "2h 35m");
/// ```
pub fn format_duration(departure: &Instant, arrival: &Instant) -> String {
    let minutes = arrival.signed_duration_since(*departure).num_minutes();
    format_minutes(minutes)
}

fn format_minutes(minutes: i64) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    format!("{hours}h {mins:02}m")
}

/// Build the instant at `hour:minute` on the reference's calendar day.
///
/// Only the date of `reference` (in its own offset) is used; its time of day
/// is discarded. The result carries the reference's offset. Returns `None`
/// when `hour`/`minute` is not a valid time of day.
///
/// # Examples
///
/// ```
/// use ferry_planner::domain::{anchor_at, format_hhmm, parse_instant};
///
/// let bus = parse_instant("2024-03-15T09:12:00+01:00").unwrap();
/// let ferry = anchor_at(&bus, 9, 20).unwrap();
/// assert_eq!(ferry.to_rfc3339(), "2024-03-15T09:20:00+01:00");
///
/// assert!(anchor_at(&bus, 24, 0).is_none());
/// ```
pub fn anchor_at(reference: &Instant, hour: u32, minute: u32) -> Option<Instant> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    let local = reference.date_naive().and_time(time);
    reference.offset().from_local_datetime(&local).single()
}

/// The calendar day an instant falls on, together with the offset that day
/// is expressed in.
///
/// Two instants with the same `DayKey` anchor identical ferry schedules.
pub type DayKey = (NaiveDate, FixedOffset);

/// Returns the [`DayKey`] of an instant.
pub fn day_key(instant: &Instant) -> DayKey {
    (instant.date_naive(), *instant.offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn at(s: &str) -> Instant {
        parse_instant(s).unwrap()
    }

    #[test]
    fn parse_zulu_and_offset() {
        let z = at("2024-03-15T08:00:00Z");
        assert_eq!(z.offset().local_minus_utc(), 0);

        let cet = at("2024-03-15T09:00:00+01:00");
        assert_eq!(cet.offset().local_minus_utc(), 3600);
        assert_eq!(z, cet);
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_instant("09:12").unwrap_err();
        assert_eq!(err.input(), "09:12");
        assert!(err.to_string().contains("invalid timestamp"));

        assert!(parse_instant("").is_err());
        assert!(parse_instant("2024-03-15 09:12").is_err());
    }

    #[test]
    fn hhmm_uses_own_offset() {
        assert_eq!(format_hhmm(&at("2024-03-15T23:05:00+02:00")), "23:05");
        assert_eq!(format_hhmm(&at("2024-03-15T21:05:00Z")), "21:05");
        assert_eq!(format_hhmm(&at("2024-03-15T00:00:00+01:00")), "00:00");
    }

    #[test]
    fn duration_formatting() {
        let nine = at("2024-03-15T09:00:00+01:00");
        assert_eq!(format_duration(&nine, &at("2024-03-15T11:35:00+01:00")), "2h 35m");
        assert_eq!(format_duration(&nine, &at("2024-03-15T09:05:00+01:00")), "0h 05m");
        assert_eq!(format_duration(&nine, &nine), "0h 00m");
    }

    #[test]
    fn duration_drops_partial_minutes() {
        let dep = at("2024-03-15T09:00:00+01:00");
        let arr = at("2024-03-15T10:00:59+01:00");
        assert_eq!(format_duration(&dep, &arr), "1h 00m");
    }

    #[test]
    fn duration_across_offsets() {
        // Same instant expressed in two offsets: 08:00Z == 09:00+01:00
        let dep = at("2024-03-15T08:00:00Z");
        let arr = at("2024-03-15T09:30:00+01:00");
        assert_eq!(format_duration(&dep, &arr), "0h 30m");
    }

    #[test]
    fn anchor_discards_time_of_day() {
        let late = at("2024-03-15T23:59:00+01:00");
        let anchored = anchor_at(&late, 5, 20).unwrap();

        assert_eq!(anchored.day(), 15);
        assert_eq!(anchored.hour(), 5);
        assert_eq!(anchored.minute(), 20);
        assert_eq!(anchored.second(), 0);
        assert_eq!(anchored.offset(), late.offset());
    }

    #[test]
    fn anchor_uses_local_calendar_day() {
        // 23:30Z on the 14th is already the 15th at +02:00
        let reference = at("2024-03-15T01:30:00+02:00");
        let anchored = anchor_at(&reference, 12, 0).unwrap();
        assert_eq!(anchored.to_rfc3339(), "2024-03-15T12:00:00+02:00");
    }

    #[test]
    fn anchor_rejects_out_of_range() {
        let reference = at("2024-03-15T09:00:00Z");
        assert!(anchor_at(&reference, 24, 0).is_none());
        assert!(anchor_at(&reference, 0, 60).is_none());
    }

    #[test]
    fn day_key_separates_offsets() {
        let a = at("2024-03-15T09:00:00+01:00");
        let b = at("2024-03-15T10:00:00+01:00");
        let c = at("2024-03-15T09:00:00+02:00");

        assert_eq!(day_key(&a), day_key(&b));
        assert_ne!(day_key(&a), day_key(&c));
    }
}
