//! Presentation of matched journeys.
//!
//! Plain-text reports for the console and a JSON ferry table. Both are
//! built from the planner's output and never reach back into the network.

mod table;
mod text;

pub use table::{BusEntry, FerryTableEntry, ferry_table, ferry_table_json};
pub use text::{JourneyListing, JourneyReport};
