//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::PlannerConfig;
use crate::transport::TransportClient;

/// Shared application state.
///
/// Nothing mutable lives here: each request runs the pipeline afresh.
#[derive(Clone)]
pub struct AppState {
    /// Journey-planning API client
    pub transport: Arc<TransportClient>,

    /// Stops, result count and ferry timetable
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(transport: TransportClient, config: PlannerConfig) -> Self {
        Self {
            transport: Arc::new(transport),
            config: Arc::new(config),
        }
    }
}
