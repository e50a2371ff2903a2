//! Ferry-centric JSON table.

use serde::{Deserialize, Serialize};

use crate::domain::format_hhmm;
use crate::planner::{BusBoarding, FerryDeparture};

/// One ferry departure and the buses that reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FerryTableEntry {
    /// Ferry departure time (HH:MM)
    pub ferry_dep: String,

    /// Buses leaving at or before the ferry, earliest first
    pub buses: Vec<BusEntry>,
}

/// A bus in the ferry table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusEntry {
    /// Line name of the first leg, e.g. "Bus 1"
    pub name: String,

    /// Departure time (HH:MM)
    pub dep: String,

    /// Arrival time (HH:MM)
    pub arr: String,

    /// Where the first leg starts
    pub origin: String,

    /// Where the last leg ends
    pub destination: String,

    /// Whether this is the earliest bus for the ferry
    pub most_likely: bool,
}

impl BusEntry {
    /// Create from a bus boarding.
    pub fn from_boarding(boarding: &BusBoarding<'_>) -> Self {
        let journey = boarding.journey;
        Self {
            name: journey.name().to_string(),
            dep: format_hhmm(&journey.departure()),
            arr: format_hhmm(&journey.arrival()),
            origin: journey.origin().to_string(),
            destination: journey.destination().to_string(),
            most_likely: boarding.most_likely,
        }
    }
}

impl FerryTableEntry {
    /// Create from a ferry departure.
    pub fn from_departure(departure: &FerryDeparture<'_>) -> Self {
        Self {
            ferry_dep: format_hhmm(&departure.departure()),
            buses: departure.buses().iter().map(BusEntry::from_boarding).collect(),
        }
    }
}

/// Convert the ferry-centric pairing into table rows.
pub fn ferry_table(departures: &[FerryDeparture<'_>]) -> Vec<FerryTableEntry> {
    departures.iter().map(FerryTableEntry::from_departure).collect()
}

/// Serialize the table as pretty-printed JSON.
pub fn ferry_table_json(table: &[FerryTableEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Instant, Journey, Leg, LineInfo, parse_instant};
    use crate::planner::{SchedulePolicy, pair_by_ferry};

    fn at(s: &str) -> Instant {
        parse_instant(&format!("2024-03-15T{s}:00+01:00")).unwrap()
    }

    fn journey(line: Option<&str>, dep: &str, arr: &str) -> Journey {
        let mut leg = Leg::new("Konstanz Allmannsdorf", "Meersburg Kirche", at(dep), at(arr)).unwrap();
        if let Some(name) = line {
            leg = leg.with_line(LineInfo {
                name: Some(name.to_string()),
                product_name: None,
            });
        }
        Journey::new(vec![leg]).unwrap()
    }

    #[test]
    fn table_rows_follow_schedule() {
        let journeys = vec![
            journey(Some("Bus 1"), "09:12", "09:55"),
            journey(None, "08:40", "09:20"),
        ];
        let policy = SchedulePolicy::fixed([(8, 50), (9, 20), (7, 0)]).unwrap();

        let table = ferry_table(&pair_by_ferry(&journeys, &policy));

        let ferries: Vec<&str> = table.iter().map(|e| e.ferry_dep.as_str()).collect();
        assert_eq!(ferries, ["07:00", "08:50", "09:20"]);

        assert!(table[0].buses.is_empty());

        assert_eq!(table[1].buses.len(), 1);
        assert_eq!(table[1].buses[0].name, "Bus");
        assert!(table[1].buses[0].most_likely);

        assert_eq!(
            table[2].buses[1],
            BusEntry {
                name: "Bus 1".to_string(),
                dep: "09:12".to_string(),
                arr: "09:55".to_string(),
                origin: "Konstanz Allmannsdorf".to_string(),
                destination: "Meersburg Kirche".to_string(),
                most_likely: false,
            }
        );
    }

    #[test]
    fn json_field_names() {
        let table = vec![FerryTableEntry {
            ferry_dep: "09:20".to_string(),
            buses: vec![BusEntry {
                name: "Bus 1".to_string(),
                dep: "09:12".to_string(),
                arr: "09:55".to_string(),
                origin: "A".to_string(),
                destination: "B".to_string(),
                most_likely: true,
            }],
        }];

        let json = ferry_table_json(&table).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["ferry_dep"], "09:20");
        assert_eq!(value[0]["buses"][0]["name"], "Bus 1");
        assert_eq!(value[0]["buses"][0]["most_likely"], true);
        assert!(json.contains('\n'));
    }

    #[test]
    fn empty_table_is_empty_array() {
        assert_eq!(ferry_table_json(&[]).unwrap(), "[]");
    }
}
