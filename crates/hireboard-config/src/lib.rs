//! # Hireboard Config
//!
//! Configuration types for the Hireboard API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: JWT authentication configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listener addresses
//! - [`database`]: Optional PostgreSQL connection settings
//! - [`catalog`]: Static choice tables and trending keywords
//!
//! # Example
//!
//! ```ignore
//! use hireboard_config::{Catalog, CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let catalog = Catalog::from_env();
//! ```

pub mod catalog;
pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use catalog::{Catalog, Choice};
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
