use sea_orm::DatabaseConnection;

/// State shared by every request handler
///
/// Holds the pooled database connection, handlers receive it through axum's `State`
/// extractor instead of reaching for a global handle.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
