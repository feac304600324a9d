//! Submission routes: ingestion, three listings and JSON grading.

use axum::{
    Router,
    routing::{get, post},
};
use get::{list_submissions, list_submissions_by_student, list_submissions_with_detail};
use post::submit;
use put::grade_submission;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

/// Builds the submission route group.
///
/// - `POST /submit`
/// - `GET  /submissions`
/// - `GET  /submissions/{id}` → by raw student id
/// - `PUT  /submissions/{id}` → grade by submission id
/// - `GET  /submissions/student/{id}` → joined rows for one student
pub fn submission_routes() -> Router<AppState> {
    Router::new().route("/submit", post(submit)).nest(
        "/submissions",
        Router::new()
            .route("/", get(list_submissions))
            .route(
                "/{id}",
                get(list_submissions_by_student).put(grade_submission),
            )
            .route("/student/{id}", get(list_submissions_with_detail)),
    )
}
