//! Database connection settings.
//!
//! `DATABASE_URL` is optional. Without it the server runs on an in-memory
//! store, which is what tests and quick local runs use.

use std::env;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").ok().filter(|s| !s.trim().is_empty()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }
}
