use axum::{Router, routing::get};
use get::status_chart;
use util::state::AppState;

pub mod get;

/// Builds the `/chart` route group: `GET /chart/{assignmentId}`.
pub fn chart_routes() -> Router<AppState> {
    Router::new().route("/{assignment_id}", get(status_chart))
}
