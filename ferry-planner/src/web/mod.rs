//! Web layer for the ferry planner.
//!
//! Serves the ferry table as an HTML page and as JSON.

mod routes;
mod state;
pub mod templates;

pub use routes::{AppError, ErrorResponse, create_router};
pub use state::AppState;
pub use templates::*;
