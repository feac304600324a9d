//! Application state container shared across Axum route handlers.
//!
//! The state is built once at startup and handed to the router, which clones it
//! into each handler via Axum's `State<T>` extractor.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
///
/// Holds the pooled SeaORM `DatabaseConnection` used by every route. Cloning is
/// cheap; all clones share the same underlying pool.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an open database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
