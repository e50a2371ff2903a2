//! Bus to ferry connection planner.
//!
//! Answers: "I'm taking the bus from Konstanz to the Meersburg ferry -
//! which ferry will I most likely catch?"
//!
//! Live bus journeys come from a `transport.rest` journey-planning API; the
//! ferry timetable is configured locally. Results are printed as text or
//! JSON by the command-line tools, or served as an HTML table.

pub mod domain;
pub mod logging;
pub mod planner;
pub mod render;
pub mod transport;
pub mod web;
