//! Ferry departure schedules.
//!
//! A [`SchedulePolicy`] describes the ferry timetable as times of day; it is
//! turned into a concrete [`FerrySchedule`] by anchoring every time to the
//! calendar day of a reference instant.

use crate::domain::{Instant, anchor_at};

/// Known ferry departures, Konstanz-Staad → Meersburg, as (hour, minute).
#[rustfmt::skip]
pub const SAMPLE_FERRY_TABLE: [(u32, u32); 30] = [
    (5, 20), (5, 50), (6, 20), (6, 50), (7, 20), (7, 50),
    (8, 20), (8, 50), (9, 20), (9, 50), (10, 20), (10, 50),
    (11, 20), (11, 50), (12, 20), (12, 50), (13, 20), (13, 50),
    (14, 20), (14, 50), (15, 20), (15, 50), (16, 20), (16, 50),
    (17, 20), (17, 50), (18, 20), (18, 50), (19, 20), (19, 50),
];

/// Minutes past every hour at which the generated grid has a departure.
pub const DEFAULT_GRID_MINUTES: [u32; 4] = [5, 20, 35, 50];

/// Error returned when a schedule policy is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// An entry is not a valid time of day
    #[error("ferry time {hour:02}:{minute:02} is not a valid time of day")]
    OutOfRange { hour: u32, minute: u32 },

    /// The policy would never produce a departure
    #[error("ferry schedule has no departures")]
    Empty,
}

/// How the day's ferry departures are produced.
///
/// Policies are validated at construction, so producing a schedule from one
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulePolicy {
    kind: PolicyKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PolicyKind {
    /// Explicit list of (hour, minute) departures.
    Fixed(Vec<(u32, u32)>),
    /// Every hour of the day at each of these minutes.
    Grid(Vec<u32>),
}

impl SchedulePolicy {
    /// A fixed table of (hour, minute) departures.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the table is empty or an entry is not a valid time.
    pub fn fixed(table: impl IntoIterator<Item = (u32, u32)>) -> Result<Self, ScheduleError> {
        let table: Vec<_> = table.into_iter().collect();
        if table.is_empty() {
            return Err(ScheduleError::Empty);
        }
        if let Some(&(hour, minute)) = table.iter().find(|&&(h, m)| h >= 24 || m >= 60) {
            return Err(ScheduleError::OutOfRange { hour, minute });
        }

        Ok(Self {
            kind: PolicyKind::Fixed(table),
        })
    }

    /// A departure every hour, 00 to 23, at each of `minutes`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `minutes` is empty or contains a value ≥ 60.
    pub fn grid(minutes: impl IntoIterator<Item = u32>) -> Result<Self, ScheduleError> {
        let minutes: Vec<_> = minutes.into_iter().collect();
        if minutes.is_empty() {
            return Err(ScheduleError::Empty);
        }
        if let Some(&minute) = minutes.iter().find(|&&m| m >= 60) {
            return Err(ScheduleError::OutOfRange { hour: 0, minute });
        }

        Ok(Self {
            kind: PolicyKind::Grid(minutes),
        })
    }

    /// The known Konstanz–Meersburg table ([`SAMPLE_FERRY_TABLE`]).
    pub fn sample_table() -> Self {
        Self {
            kind: PolicyKind::Fixed(SAMPLE_FERRY_TABLE.to_vec()),
        }
    }

    /// The generated grid at [`DEFAULT_GRID_MINUTES`].
    pub fn quarter_hourly() -> Self {
        Self {
            kind: PolicyKind::Grid(DEFAULT_GRID_MINUTES.to_vec()),
        }
    }

    /// Returns true for a fixed-table policy.
    pub fn is_fixed(&self) -> bool {
        matches!(self.kind, PolicyKind::Fixed(_))
    }

    /// Build the schedule for the calendar day of `reference`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferry_planner::domain::{format_hhmm, parse_instant};
    /// use ferry_planner::planner::SchedulePolicy;
    ///
    /// let bus = parse_instant("2024-03-15T09:12:00+01:00").unwrap();
    /// let schedule = SchedulePolicy::quarter_hourly().schedule_for(&bus);
    ///
    /// assert_eq!(schedule.len(), 96);
    /// assert_eq!(format_hhmm(&schedule.departures()[0]), "00:05");
    /// ```
    pub fn schedule_for(&self, reference: &Instant) -> FerrySchedule {
        match &self.kind {
            PolicyKind::Fixed(table) => FerrySchedule::new(
                table
                    .iter()
                    .filter_map(|&(hour, minute)| anchor_at(reference, hour, minute)),
            ),
            PolicyKind::Grid(minutes) => FerrySchedule::new((0..24).flat_map(|hour| {
                minutes
                    .iter()
                    .filter_map(move |&minute| anchor_at(reference, hour, minute))
            })),
        }
    }
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self::sample_table()
    }
}

/// Source of ferry schedules.
///
/// This abstraction lets the matcher be driven by a policy value or by a
/// hand-built schedule in tests.
pub trait ScheduleProvider {
    /// The ferry schedule for the calendar day of `reference`.
    fn schedule(&self, reference: &Instant) -> FerrySchedule;
}

impl ScheduleProvider for SchedulePolicy {
    fn schedule(&self, reference: &Instant) -> FerrySchedule {
        self.schedule_for(reference)
    }
}

/// One day's ferry departures.
///
/// # Invariants
///
/// - Strictly ascending (no duplicates)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FerrySchedule {
    departures: Vec<Instant>,
}

impl FerrySchedule {
    /// Build a schedule, sorting and collapsing duplicate departures.
    pub fn new(departures: impl IntoIterator<Item = Instant>) -> Self {
        let mut departures: Vec<_> = departures.into_iter().collect();
        departures.sort();
        departures.dedup();
        Self { departures }
    }

    /// Returns all departures in ascending order.
    pub fn departures(&self) -> &[Instant] {
        &self.departures
    }

    /// Iterate departures in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Instant> {
        self.departures.iter()
    }

    /// Number of departures.
    pub fn len(&self) -> usize {
        self.departures.len()
    }

    /// Returns true when there are no departures.
    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }

    /// Departures at or after `instant`.
    ///
    /// Always a suffix of [`FerrySchedule::departures`]; empty when `instant`
    /// is after the last departure of the day.
    pub fn departures_from(&self, instant: &Instant) -> &[Instant] {
        let start = self.departures.partition_point(|ferry| ferry < instant);
        &self.departures[start..]
    }
}
