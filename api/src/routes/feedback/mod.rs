use axum::{Router, routing::put};
use put::give_feedback;
use util::state::AppState;

pub mod put;

/// Builds the `/feedback` route group: `PUT /feedback/{id}`.
pub fn feedback_routes() -> Router<AppState> {
    Router::new().route("/{id}", put(give_feedback))
}
