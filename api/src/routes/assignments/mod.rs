use axum::{Router, routing::get};
use get::{get_assignment, list_assignments};
use post::create_assignment;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

/// Builds the `/assignments` route group.
///
/// - `GET  /assignments` → every assignment
/// - `POST /assignments` → create one
/// - `GET  /assignments/{id}` → one by document id
pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments).post(create_assignment))
        .route("/{id}", get(get_assignment))
}
