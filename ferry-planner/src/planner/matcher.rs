//! Journey-centric ferry matching.
//!
//! For each bus journey, find every ferry that leaves at or after the bus
//! departs on the same calendar day, and single out the earliest one as the
//! ferry the traveler will most likely catch.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{DayKey, Instant, Journey, day_key, format_hhmm};

use super::schedule::{FerrySchedule, ScheduleProvider};

/// A bus journey paired with its eligible ferries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FerryMatch<'a> {
    journey: &'a Journey,
    eligible: Vec<Instant>,
}

impl<'a> FerryMatch<'a> {
    /// Returns the matched journey.
    pub fn journey(&self) -> &'a Journey {
        self.journey
    }

    /// Ferries at or after the journey's departure, ascending.
    pub fn eligible(&self) -> &[Instant] {
        &self.eligible
    }

    /// The earliest eligible ferry, if any.
    pub fn most_likely(&self) -> Option<Instant> {
        self.eligible.first().copied()
    }

    /// Returns true if `ferry` is the most likely ferry for this journey.
    pub fn is_most_likely(&self, ferry: &Instant) -> bool {
        self.eligible.first() == Some(ferry)
    }
}

/// Pair each journey with the ferries it can make.
///
/// The schedule is requested once per distinct calendar day among the
/// journeys' departures. There is no rollover: a bus leaving after the last
/// ferry of its day gets no eligible ferries.
///
/// Matches are returned in the same order as `journeys`.
///
/// # Examples
///
/// ```
/// use ferry_planner::domain::{Journey, Leg, format_hhmm, parse_instant};
/// use ferry_planner::planner::{SchedulePolicy, match_journeys};
///
/// let leg = Leg::new(
///     "Konstanz Allmannsdorf",
///     "Meersburg Kirche",
///     parse_instant("2024-03-15T09:12:00+01:00").unwrap(),
///     parse_instant("2024-03-15T09:55:00+01:00").unwrap(),
/// )
/// .unwrap();
/// let journeys = vec![Journey::new(vec![leg]).unwrap()];
///
/// let policy = SchedulePolicy::fixed([(8, 50), (9, 20)]).unwrap();
/// let matches = match_journeys(&journeys, &policy);
///
/// assert_eq!(matches[0].eligible().len(), 1);
/// assert_eq!(format_hhmm(&matches[0].most_likely().unwrap()), "09:20");
/// ```
pub fn match_journeys<'a, P>(journeys: &'a [Journey], provider: &P) -> Vec<FerryMatch<'a>>
where
    P: ScheduleProvider + ?Sized,
{
    let mut schedules: HashMap<DayKey, FerrySchedule> = HashMap::new();

    journeys
        .iter()
        .map(|journey| {
            let departure = journey.departure();
            let schedule = schedules
                .entry(day_key(&departure))
                .or_insert_with(|| provider.schedule(&departure));

            let eligible = schedule.departures_from(&departure).to_vec();
            if eligible.is_empty() {
                debug!(
                    departure = %format_hhmm(&departure),
                    "no ferry left today after this bus"
                );
            }

            FerryMatch { journey, eligible }
        })
        .collect()
}
