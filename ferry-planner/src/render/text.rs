//! Console text reports.

use std::fmt;

use crate::domain::{Journey, format_hhmm};
use crate::planner::FerryMatch;

/// Bus journeys annotated with the ferries each can make.
///
/// The earliest eligible ferry is marked `<-- most likely`. A journey with
/// no eligible ferry gets an empty ferry list and no marker.
#[derive(Debug, Clone, Copy)]
pub struct JourneyReport<'m, 'a> {
    matches: &'m [FerryMatch<'a>],
}

impl<'m, 'a> JourneyReport<'m, 'a> {
    pub fn new(matches: &'m [FerryMatch<'a>]) -> Self {
        Self { matches }
    }
}

impl fmt::Display for JourneyReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in self.matches {
            write_summary(f, m.journey())?;
            writeln!(f, "Ferry departures after bus start:")?;
            for ferry in m.eligible() {
                let marker = if m.is_most_likely(ferry) {
                    " <-- most likely"
                } else {
                    ""
                };
                writeln!(f, "  {}{marker}", format_hhmm(ferry))?;
            }
            write_details(f, m.journey())?;
        }
        Ok(())
    }
}

/// Bus journeys without ferry information.
#[derive(Debug, Clone, Copy)]
pub struct JourneyListing<'a> {
    journeys: &'a [Journey],
}

impl<'a> JourneyListing<'a> {
    pub fn new(journeys: &'a [Journey]) -> Self {
        Self { journeys }
    }
}

impl fmt::Display for JourneyListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for journey in self.journeys {
            write_summary(f, journey)?;
            write_details(f, journey)?;
        }
        Ok(())
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, journey: &Journey) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "=== Bus Journey ===")?;
    writeln!(
        f,
        "Departure: {}  Arrival: {}  Duration: {}",
        format_hhmm(&journey.departure()),
        format_hhmm(&journey.arrival()),
        journey.duration_text()
    )
}

/// One line per leg, then one per remark.
fn write_details(f: &mut fmt::Formatter<'_>, journey: &Journey) -> fmt::Result {
    for leg in journey.legs() {
        writeln!(
            f,
            "  {}: {} ({}) → {} ({})",
            leg.product_label(),
            leg.origin(),
            leg.departure_hhmm(),
            leg.destination(),
            leg.arrival_hhmm()
        )?;
    }
    for remark in journey.remarks() {
        writeln!(f, "  ⚠ {remark}")?;
    }
    Ok(())
}
