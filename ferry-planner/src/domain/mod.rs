//! Domain types for the ferry connection planner.
//!
//! This module contains the core domain model: stops, instants, legs and
//! journeys. Types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod error;
mod journey;
mod leg;
mod stop;
mod time;

pub use error::DomainError;
pub use journey::Journey;
pub use leg::{Leg, LineInfo};
pub use stop::{InvalidStopId, StopId};
pub use time::{
    DayKey, Instant, TimeError, anchor_at, day_key, format_duration, format_hhmm, parse_instant,
};
