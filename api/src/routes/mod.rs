//! HTTP route entry point.
//!
//! Routes are organized by domain, one module per resource, each exposing a
//! `*_routes()` builder:
//! - `/` → Root banner
//! - `/register`, `/login` → Account creation and credential check (plain-text errors)
//! - `/assignments` → Assignment listing, creation and lookup
//! - `/submit`, `/submissions` → Submission ingestion, listings and grading
//! - `/feedback` → Grading with a plain-text acknowledgement
//! - `/chart` → Per-assignment status histogram
//!
//! No route is guarded: any caller may hit any endpoint.

use crate::routes::{
    assignments::assignment_routes, auth::auth_routes, chart::chart_routes,
    feedback::feedback_routes, root::root_routes, submissions::submission_routes,
};
use axum::Router;
use util::state::AppState;

pub mod assignments;
pub mod auth;
pub mod chart;
pub mod common;
pub mod feedback;
pub mod root;
pub mod submissions;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router already carries `app_state`, so callers only add
/// middleware layers on top of it.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .merge(root_routes())
        .merge(auth_routes())
        .merge(submission_routes())
        .nest("/assignments", assignment_routes())
        .nest("/feedback", feedback_routes())
        .nest("/chart", chart_routes())
        .with_state(app_state)
}
