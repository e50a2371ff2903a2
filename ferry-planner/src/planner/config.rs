//! Planner configuration.
//!
//! Each entry point runs the same pipeline with a fixed configuration: which
//! two stops to query, how many journeys to ask for, and which ferry
//! timetable to match against.

use super::schedule::SchedulePolicy;

/// Origin stop of the Konstanz → Meersburg ferry connection.
pub const KONSTANZ_ALLMANNSDORF: &str = "Konstanz Allmannsdorf";

/// Destination stop of the Konstanz → Meersburg ferry connection.
pub const MEERSBURG_KIRCHE: &str = "Meersburg Kirche";

/// Default number of journeys requested.
const DEFAULT_RESULTS: u8 = 5;

/// Number of journeys requested when building a whole-day ferry table.
const TABLE_RESULTS: u8 = 50;

/// Configuration parameters for one planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Name of the stop the bus leaves from.
    pub from: String,

    /// Name of the stop the bus goes to.
    pub to: String,

    /// Maximum number of journeys to request.
    pub results: u8,

    /// Ferry timetable to match against.
    pub policy: SchedulePolicy,
}

impl PlannerConfig {
    /// Create a configuration between two stops, with default result count
    /// and the sample ferry table.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            results: DEFAULT_RESULTS,
            policy: SchedulePolicy::default(),
        }
    }

    /// Set the number of journeys to request.
    pub fn with_results(mut self, results: u8) -> Self {
        self.results = results;
        self
    }

    /// Set the ferry timetable.
    pub fn with_policy(mut self, policy: SchedulePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Next few buses, each annotated with the ferries after it.
    pub fn ferry_report() -> Self {
        Self::new(KONSTANZ_ALLMANNSDORF, MEERSBURG_KIRCHE)
    }

    /// Whole-day table of ferries against the generated quarter-hourly grid.
    pub fn ferry_table() -> Self {
        Self::new(KONSTANZ_ALLMANNSDORF, MEERSBURG_KIRCHE)
            .with_results(TABLE_RESULTS)
            .with_policy(SchedulePolicy::quarter_hourly())
    }

    /// Plain bus journeys between the town centres, no ferries.
    pub fn bus_journeys() -> Self {
        Self::new("Konstanz", "Meersburg (Bodensee)")
    }

    /// The ferry table served over HTTP.
    pub fn web_table() -> Self {
        Self::new("Allmannsdorf, Konstanz", "Kirche, Meersburg")
            .with_results(TABLE_RESULTS)
            .with_policy(SchedulePolicy::quarter_hourly())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::ferry_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.from, "Konstanz Allmannsdorf");
        assert_eq!(config.to, "Meersburg Kirche");
        assert_eq!(config.results, 5);
        assert!(config.policy.is_fixed());
    }

    #[test]
    fn table_config() {
        let config = PlannerConfig::ferry_table();

        assert_eq!(config.results, 50);
        assert_eq!(config.policy, SchedulePolicy::quarter_hourly());
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new("A", "B")
            .with_results(12)
            .with_policy(SchedulePolicy::grid([0, 30]).unwrap());

        assert_eq!(config.from, "A");
        assert_eq!(config.to, "B");
        assert_eq!(config.results, 12);
        assert!(!config.policy.is_fixed());
    }

    #[test]
    fn entry_point_presets() {
        assert_eq!(PlannerConfig::bus_journeys().to, "Meersburg (Bodensee)");
        assert_eq!(PlannerConfig::web_table().from, "Allmannsdorf, Konstanz");
        assert_eq!(PlannerConfig::web_table().results, 50);
    }
}
