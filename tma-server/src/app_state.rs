use std::sync::Arc;

use sqlx::SqlitePool;
use tma_auth::InitDataValidator;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub init_data: Arc<InitDataValidator>,
}
