//! Journey leg type.
//!
//! A `Leg` is one vehicle (or walking) segment of a journey, from boarding
//! at its origin to alighting at its destination.

use chrono::Duration;

use super::{DomainError, Instant, format_hhmm};

/// Label used when a leg carries no product name and no mode.
const DEFAULT_PRODUCT_LABEL: &str = "Walk";

/// Label used when a leg carries no line name and no mode.
const DEFAULT_LINE_LABEL: &str = "Bus";

/// Line information attached to a leg.
///
/// The upstream service omits the line entirely on walking legs, and
/// individual fields are frequently missing, so everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInfo {
    /// Line name, e.g. "Bus 1" or "RE 5"
    pub name: Option<String>,
    /// Product name, e.g. "Bus" or "RE"
    pub product_name: Option<String>,
}

/// A leg of a journey.
///
/// # Invariants
///
/// - Origin and destination names are non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    origin: String,
    destination: String,
    departure: Instant,
    arrival: Instant,
    line: LineInfo,
    mode: Option<String>,
}

impl Leg {
    /// Construct a leg between two named stops.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either stop name is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferry_planner::domain::{Leg, parse_instant};
    ///
    /// let leg = Leg::new(
    ///     "Konstanz Allmannsdorf",
    ///     "Staad Fähre",
    ///     parse_instant("2024-03-15T09:12:00+01:00").unwrap(),
    ///     parse_instant("2024-03-15T09:20:00+01:00").unwrap(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(leg.product_label(), "Walk");
    /// assert_eq!(leg.duration().num_minutes(), 8);
    /// ```
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure: Instant,
        arrival: Instant,
    ) -> Result<Self, DomainError> {
        let origin = origin.into();
        let destination = destination.into();

        if origin.trim().is_empty() {
            return Err(DomainError::InvalidLeg("origin name is empty"));
        }
        if destination.trim().is_empty() {
            return Err(DomainError::InvalidLeg("destination name is empty"));
        }

        Ok(Leg {
            origin,
            destination,
            departure,
            arrival,
            line: LineInfo::default(),
            mode: None,
        })
    }

    /// Attach line information.
    pub fn with_line(mut self, line: LineInfo) -> Self {
        self.line = line;
        self
    }

    /// Attach the transport mode (e.g. "bus", "walking").
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Returns the origin stop name.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the destination stop name.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the departure instant.
    pub fn departure(&self) -> Instant {
        self.departure
    }

    /// Returns the arrival instant.
    pub fn arrival(&self) -> Instant {
        self.arrival
    }

    /// Returns the line information.
    pub fn line(&self) -> &LineInfo {
        &self.line
    }

    /// Returns the transport mode, if known.
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// Label for per-leg display: product name, else mode, else "Walk".
    /// Empty strings count as missing.
    pub fn product_label(&self) -> &str {
        non_empty(self.line.product_name.as_deref())
            .or(non_empty(self.mode.as_deref()))
            .unwrap_or(DEFAULT_PRODUCT_LABEL)
    }

    /// Label naming the vehicle: line name, else mode, else "Bus".
    /// Empty strings count as missing.
    pub fn line_label(&self) -> &str {
        non_empty(self.line.name.as_deref())
            .or(non_empty(self.mode.as_deref()))
            .unwrap_or(DEFAULT_LINE_LABEL)
    }

    /// Returns the departure time as "HH:MM".
    pub fn departure_hhmm(&self) -> String {
        format_hhmm(&self.departure)
    }

    /// Returns the arrival time as "HH:MM".
    pub fn arrival_hhmm(&self) -> String {
        format_hhmm(&self.arrival)
    }

    /// Returns the time spent on this leg.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }
}

fn non_empty(label: Option<&str>) -> Option<&str> {
    label.filter(|label| !label.is_empty())
}
