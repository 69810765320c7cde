use std::sync::Arc;

use crate::auth::AuthService;
use crate::db::Database;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL pool wrapper
    pub db: Arc<Database>,
    /// Registration/login and per-request principal resolution
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth: Arc<AuthService>) -> Self {
        Self { db, auth }
    }
}
