//! Account routes: `/register` and `/login`.
//!
//! Both answer errors as plain text. There is no session or token layer: a
//! successful login simply returns the caller's identity.

use axum::{Router, routing::post};
use post::{login, register};
use util::state::AppState;

pub mod post;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
