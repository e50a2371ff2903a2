//! Bus to ferry matching.
//!
//! This module answers: "I'm taking this bus - which ferry should I aim
//! for?"
//!
//! The ferry timetable is a [`SchedulePolicy`]: either a fixed table of
//! departure times or a grid of minutes repeated every hour. Journeys are
//! matched against it in two directions: each journey with the ferries it
//! can still make ([`match_journeys`]), and each ferry with the buses that
//! reach it ([`pair_by_ferry`]).

mod by_ferry;
mod config;
mod matcher;
mod pipeline;
mod schedule;

pub use by_ferry::{BusBoarding, FerryDeparture, pair_by_ferry};
pub use config::{KONSTANZ_ALLMANNSDORF, MEERSBURG_KIRCHE, PlannerConfig};
pub use matcher::{FerryMatch, match_journeys};
pub use pipeline::{NO_JOURNEYS_MESSAGE, OutputMode, PlanError, Planner, TransportApi};
pub use schedule::{
    DEFAULT_GRID_MINUTES, FerrySchedule, SAMPLE_FERRY_TABLE, ScheduleError, SchedulePolicy,
    ScheduleProvider,
};
