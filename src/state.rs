use sea_orm::DatabaseConnection;

/// Shared handle to the store, created at startup and cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
}

impl AppState {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }
}
