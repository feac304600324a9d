use axum::{Router, routing::get};
use util::state::AppState;

pub const BANNER: &str = "Assignment Arena Server is Running ✅";

pub fn root_routes() -> Router<AppState> {
    Router::new().route("/", get(banner))
}

/// GET /
///
/// Liveness banner.
///
/// ### Response
/// - `200 OK` (`text/plain`): `Assignment Arena Server is Running ✅`
async fn banner() -> &'static str {
    BANNER
}
