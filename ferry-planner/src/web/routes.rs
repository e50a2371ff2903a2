//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use serde::Serialize;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::domain::{Instant, format_hhmm};
use crate::planner::{PlanError, Planner, pair_by_ferry};
use crate::render::{FerryTableEntry, ferry_table};

use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(ferry_page))
        .route("/health", get(health))
        .route("/api/ferries", get(ferry_json))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Ferry table page.
async fn ferry_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let now = Local::now().fixed_offset();

    let table = match build_table(&state, now).await {
        Ok(table) => table,
        Err(e) => {
            let err = AppError::from(e);
            let page = ErrorTemplate {
                title: "Could not load bus journeys".to_string(),
                message: err.message().to_string(),
            };
            let html = page.render().map_err(|e| AppError::Internal {
                message: format!("Template error: {}", e),
            })?;
            warn!(status = %err.status(), message = err.message(), "ferry page failed");
            return Ok((err.status(), Html(html)).into_response());
        }
    };

    let page = FerryTableTemplate::new(
        state.config.from.as_str(),
        state.config.to.as_str(),
        format_hhmm(&now),
        table,
    );
    let html = page.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Ferry table as JSON, every ferry of the day included.
async fn ferry_json(
    State(state): State<AppState>,
) -> Result<Json<Vec<FerryTableEntry>>, AppError> {
    let now = Local::now().fixed_offset();
    let table = build_table(&state, now).await?;
    Ok(Json(table))
}

/// Run the pipeline for one request.
async fn build_table(state: &AppState, now: Instant) -> Result<Vec<FerryTableEntry>, PlanError> {
    let planner = Planner::new(state.transport.as_ref(), state.config.as_ref());
    let journeys = planner.fetch(now).await?;
    let table = ferry_table(&pair_by_ferry(&journeys, &state.config.policy));

    info!(
        journeys = journeys.len(),
        ferries = table.len(),
        "built ferry table"
    );
    Ok(table)
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The journey-planning service failed or returned unusable data
    Upstream { message: String },
    Internal { message: String },
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Upstream { message } | AppError::Internal { message } => message,
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::Transport(_) => AppError::Upstream {
                message: e.to_string(),
            },
            PlanError::Render(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(%status, message = self.message(), "request failed");

        let body = Json(ErrorResponse {
            error: self.message().to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;

    #[test]
    fn transport_errors_are_bad_gateway() {
        let err = AppError::from(PlanError::from(TransportError::StopNotFound {
            query: "Kirche, Meersburg".to_string(),
        }));

        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.message(), "no stop found for \"Kirche, Meersburg\"");
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn internal_errors_are_500() {
        let err = AppError::Internal {
            message: "Template error".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }
}
