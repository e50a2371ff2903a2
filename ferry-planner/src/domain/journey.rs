//! Journey types.
//!
//! A `Journey` is a complete trip from origin to destination, made of one
//! or more legs plus any free-text remarks the upstream service attached.

use chrono::Duration;

use super::{DomainError, Instant, Leg, format_duration};

/// A complete journey from origin to destination.
///
/// # Invariants
///
/// - At least one leg
///
/// Legs are expected in chronological order. The upstream service does not
/// promise this, so it is not enforced; an out-of-order journey simply
/// reports a negative [`Journey::duration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    legs: Vec<Leg>,
    remarks: Vec<String>,
}

impl Journey {
    /// Constructs a journey from its legs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `legs` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferry_planner::domain::{Journey, Leg, parse_instant};
    ///
    /// let leg = Leg::new(
    ///     "Konstanz Allmannsdorf",
    ///     "Meersburg Kirche",
    ///     parse_instant("2024-03-15T09:00:00+01:00").unwrap(),
    ///     parse_instant("2024-03-15T11:35:00+01:00").unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let journey = Journey::new(vec![leg]).unwrap();
    /// assert_eq!(journey.duration_text(), "2h 35m");
    /// ```
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyJourney);
        }

        Ok(Journey {
            legs,
            remarks: Vec::new(),
        })
    }

    /// Attach remark texts (disruption notices, accessibility hints, ...).
    pub fn with_remarks(mut self, remarks: Vec<String>) -> Self {
        self.remarks = remarks;
        self
    }

    /// Returns all legs in order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the remark texts.
    pub fn remarks(&self) -> &[String] {
        &self.remarks
    }

    /// Returns the first leg.
    pub fn first_leg(&self) -> &Leg {
        // Non-empty by construction
        &self.legs[0]
    }

    /// Returns the last leg.
    pub fn last_leg(&self) -> &Leg {
        &self.legs[self.legs.len() - 1]
    }

    /// Returns the departure instant (from the first leg).
    pub fn departure(&self) -> Instant {
        self.first_leg().departure()
    }

    /// Returns the arrival instant (at the last leg).
    pub fn arrival(&self) -> Instant {
        self.last_leg().arrival()
    }

    /// Returns the origin stop name.
    pub fn origin(&self) -> &str {
        self.first_leg().origin()
    }

    /// Returns the destination stop name.
    pub fn destination(&self) -> &str {
        self.last_leg().destination()
    }

    /// Name of the vehicle the journey starts on.
    pub fn name(&self) -> &str {
        self.first_leg().line_label()
    }

    /// Returns the total journey duration.
    pub fn duration(&self) -> Duration {
        self.arrival().signed_duration_since(self.departure())
    }

    /// Returns the total duration as `"{h}h {mm}m"`.
    pub fn duration_text(&self) -> String {
        format_duration(&self.departure(), &self.arrival())
    }

    /// Returns true when the last leg arrives before the first departs.
    pub fn is_out_of_order(&self) -> bool {
        self.arrival() < self.departure()
    }
}
