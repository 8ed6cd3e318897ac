use std::sync::Arc;

use hireboard_config::{Catalog, CorsConfig, DatabaseConfig, JwtConfig};
use hireboard_db::{JobBoardStore, MemoryStore, PgStore, init_db_pool};
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JobBoardStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// State over an arbitrary store with configuration from the environment.
    pub fn with_store(store: Arc<dyn JobBoardStore>) -> Self {
        Self {
            store,
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
            catalog: Arc::new(Catalog::from_env()),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("jwt_config", &self.jwt_config)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

/// Picks PostgreSQL when `DATABASE_URL` is set and runs its migrations,
/// otherwise falls back to the in-memory store.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db_config = DatabaseConfig::from_env();

    let store: Arc<dyn JobBoardStore> = match &db_config.url {
        Some(url) => {
            let pool = init_db_pool(url, db_config.max_connections).await?;
            let store = PgStore::new(pool);
            store.migrate().await?;
            info!("Connected to PostgreSQL and applied migrations");
            Arc::new(store)
        }
        None => {
            warn!("DATABASE_URL is not set, using the in-memory store. Data is lost on restart");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(AppState::with_store(store))
}
