//! End-to-end planning run.
//!
//! Resolve both stops, fetch bus journeys, match them against the ferry
//! timetable and render the result. Calls are made strictly in sequence;
//! any failure aborts the run before anything is rendered.

use std::future::Future;

use tracing::info;

use crate::domain::{Instant, Journey, StopId};
use crate::render::{JourneyListing, JourneyReport, ferry_table, ferry_table_json};
use crate::transport::{JourneyQuery, TransportError};

use super::by_ferry::pair_by_ferry;
use super::config::PlannerConfig;
use super::matcher::match_journeys;

/// Message shown instead of a report when no bus journeys were found.
pub const NO_JOURNEYS_MESSAGE: &str = "No bus journeys found.";

/// Error from a planning run.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// Stop lookup or journey fetch failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The JSON table could not be serialized
    #[error("failed to render ferry table: {0}")]
    Render(#[from] serde_json::Error),
}

/// Access to the journey-planning service.
///
/// Implemented by the HTTP client; tests substitute an in-memory fake.
pub trait TransportApi {
    /// Resolve a stop name to its id.
    fn resolve_stop(&self, name: &str)
    -> impl Future<Output = Result<StopId, TransportError>> + Send;

    /// Fetch bus journeys for a query. An empty list is not an error.
    fn fetch_journeys(
        &self,
        query: &JourneyQuery,
    ) -> impl Future<Output = Result<Vec<Journey>, TransportError>> + Send;
}

/// How a run presents its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Each journey with the ferries it can make.
    Report,

    /// Every ferry of the day with the buses that reach it, as JSON.
    Table,

    /// Bus journeys only.
    Listing,
}

/// Runs the planning pipeline for one configuration.
pub struct Planner<'a, T> {
    transport: &'a T,
    config: &'a PlannerConfig,
}

impl<'a, T: TransportApi> Planner<'a, T> {
    /// Create a planner over a transport and configuration.
    pub fn new(transport: &'a T, config: &'a PlannerConfig) -> Self {
        Self { transport, config }
    }

    /// Resolve both stops and fetch journeys leaving at or after `departure`.
    pub async fn fetch(&self, departure: Instant) -> Result<Vec<Journey>, PlanError> {
        let from = self.transport.resolve_stop(&self.config.from).await?;
        let to = self.transport.resolve_stop(&self.config.to).await?;

        let query = JourneyQuery {
            from,
            to,
            departure,
            results: self.config.results,
        };
        let journeys = self.transport.fetch_journeys(&query).await?;

        info!(
            from = %self.config.from,
            to = %self.config.to,
            count = journeys.len(),
            "planning run fetched journeys"
        );
        Ok(journeys)
    }

    /// Fetch journeys departing from `now` and render them.
    pub async fn run(&self, mode: OutputMode, now: Instant) -> Result<String, PlanError> {
        let journeys = self.fetch(now).await?;
        self.render(mode, &journeys)
    }

    /// Render already-fetched journeys.
    pub fn render(&self, mode: OutputMode, journeys: &[Journey]) -> Result<String, PlanError> {
        if journeys.is_empty() {
            return Ok(NO_JOURNEYS_MESSAGE.to_string());
        }

        let policy = &self.config.policy;
        let output = match mode {
            OutputMode::Report => JourneyReport::new(&match_journeys(journeys, policy)).to_string(),
            OutputMode::Table => ferry_table_json(&ferry_table(&pair_by_ferry(journeys, policy)))?,
            OutputMode::Listing => JourneyListing::new(journeys).to_string(),
        };
        Ok(output)
    }
}
