//! # Hireboard Auth
//!
//! Authentication utilities for the Hireboard API.
//!
//! - [`claims`]: JWT claim structure for access tokens
//! - [`jwt`]: Token creation and verification
//! - [`password`]: bcrypt password hashing
//!
//! Tokens only carry the identity. Role and profile state are loaded from
//! the store on every request so a moderator flag or a completed profile
//! takes effect without re-issuing tokens.
//!
//! # Example
//!
//! ```ignore
//! use hireboard_auth::{create_access_token, verify_token};
//! use hireboard_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "user@example.com", &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

pub mod claims;
pub mod jwt;
pub mod password;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
pub use password::{DEFAULT_COST, hash_password, hash_password_with_cost, verify_password};
