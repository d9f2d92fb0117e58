use sea_orm::DatabaseConnection;
use services::SessionKeys;

/// Shared by every worker; cloned per worker by `web::Data`.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub sessions: SessionKeys,
    /// Marks every cookie we set as `Secure`.
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, sessions: SessionKeys, secure_cookies: bool) -> Self {
        Self {
            db,
            sessions,
            secure_cookies,
        }
    }
}
