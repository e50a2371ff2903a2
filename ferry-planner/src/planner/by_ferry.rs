//! Ferry-centric pairing.
//!
//! The dual of [`match_journeys`](super::match_journeys): for every ferry of
//! the day, list the buses that have already left by the time the ferry
//! sails. The earliest-departing bus in each list is flagged most likely.
//!
//! This is its own pass over the journeys rather than an inversion of the
//! journey-centric matches: one bus can be the most likely bus for many
//! ferries, while each ferry has exactly one most likely bus.

use crate::domain::{Instant, Journey};

use super::schedule::ScheduleProvider;

/// A bus that can make a given ferry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusBoarding<'a> {
    /// The bus journey
    pub journey: &'a Journey,
    /// Whether this is the earliest-departing bus for the ferry
    pub most_likely: bool,
}

/// One ferry departure and the buses that reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FerryDeparture<'a> {
    departure: Instant,
    buses: Vec<BusBoarding<'a>>,
}

impl<'a> FerryDeparture<'a> {
    /// Returns the ferry departure instant.
    pub fn departure(&self) -> Instant {
        self.departure
    }

    /// Buses departing at or before the ferry, ascending by departure.
    pub fn buses(&self) -> &[BusBoarding<'a>] {
        &self.buses
    }

    /// The most likely bus for this ferry, if any bus qualifies.
    pub fn most_likely(&self) -> Option<&'a Journey> {
        self.buses
            .iter()
            .find(|bus| bus.most_likely)
            .map(|bus| bus.journey)
    }
}

/// Build the ferry-centric table for the day of the first journey.
///
/// Every ferry of that day appears in the result, in schedule order, even
/// when no bus qualifies for it. An empty `journeys` slice yields an empty
/// table.
///
/// # Examples
///
/// ```
/// use ferry_planner::domain::{Journey, Leg, parse_instant};
/// use ferry_planner::planner::{SchedulePolicy, pair_by_ferry};
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
/// let table = pair_by_ferry(&journeys, &policy);
///
/// assert_eq!(table.len(), 2);
/// assert!(table[0].buses().is_empty());
/// assert!(table[1].buses()[0].most_likely);
/// ```
pub fn pair_by_ferry<'a, P>(journeys: &'a [Journey], provider: &P) -> Vec<FerryDeparture<'a>>
where
    P: ScheduleProvider + ?Sized,
{
    let Some(first) = journeys.first() else {
        return Vec::new();
    };
    let schedule = provider.schedule(&first.departure());

    schedule
        .iter()
        .map(|&ferry| {
            let mut reaching: Vec<&Journey> = journeys
                .iter()
                .filter(|journey| journey.departure() <= ferry)
                .collect();
            reaching.sort_by_key(|journey| journey.departure());

            let buses = reaching
                .into_iter()
                .enumerate()
                .map(|(i, journey)| BusBoarding {
                    journey,
                    most_likely: i == 0,
                })
                .collect();

            FerryDeparture {
                departure: ferry,
                buses,
            }
        })
        .collect()
}
