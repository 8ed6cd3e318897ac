//! # Hireboard CLI
//!
//! Administration and seeding utilities for Hireboard.
//!
//! Everything here goes through [`JobBoardStore`](hireboard_db::JobBoardStore),
//! so the same code seeds PostgreSQL from the binary and the in-memory
//! store from tests.
//!
//! ## Usage
//!
//! ```ignore
//! use hireboard_cli::seeder::{seed_all, SeedConfig};
//!
//! let summary = seed_all(&store, SeedConfig::new(10)).await?;
//! ```

pub mod moderator;
pub mod seeder;
