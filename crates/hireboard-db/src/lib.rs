//! # Hireboard DB
//!
//! The record store behind the Hireboard API.
//!
//! - [`JobBoardStore`]: the storage contract every service talks to
//! - [`PgStore`]: PostgreSQL implementation (sqlx, embedded migrations)
//! - [`MemoryStore`]: in-memory implementation for tests and local runs
//!
//! Uniqueness rules (one company per creator, one application per job and
//! profile, unique e-mail) and the soft-delete transition are enforced inside
//! the store in a single atomic step. Callers never check-then-write.
//!
//! # Example
//!
//! ```ignore
//! use hireboard_db::{PgStore, init_db_pool};
//!
//! let pool = init_db_pool(&url, 10).await?;
//! let store = PgStore::new(pool);
//! store.migrate().await?;
//! ```

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryStore;
pub use postgres::{PgStore, init_db_pool};
pub use store::{DUPLICATE_EMAIL_MESSAGE, JobBoardStore};

// Re-export PgPool for convenience
pub use sqlx::PgPool;
