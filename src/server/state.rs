//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool
//! and the file storage used for client images.

use sea_orm::DatabaseConnection;

use super::service::file::FileStorage;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and `FileStorage` only holds its root directory.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Storage for uploaded client images.
    pub file_storage: FileStorage,
}

impl AppState {
    pub fn new(db: DatabaseConnection, file_storage: FileStorage) -> Self {
        Self { db, file_storage }
    }
}
