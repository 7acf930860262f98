//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and then cloned (cheaply, as the
/// database connection is a pooled handle) for each incoming request via
/// Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
