//! # Hireboard Core
//!
//! Core types, errors, and the authorization rules of the Hireboard API.
//!
//! This crate has no I/O. Everything in it is a pure decision over data the
//! caller already fetched:
//!
//! - [`errors`]: Application error types with HTTP response conversion
//! - [`pagination`]: Pagination utilities for API responses
//! - [`roles`]: Role classification of an authenticated identity
//! - [`permissions`]: The permission gate (`authorize`)
//! - [`lifecycle`]: Soft-delete lifecycle of jobs and companies
//! - [`serde`]: Query-string deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use hireboard_core::permissions::{Action, Resource, authorize};
//! use hireboard_core::roles::{Actor, Role};
//!
//! let actor = Actor::new(user_id, Role::Employer, true);
//! authorize(&actor, Action::Create, Resource::Job { employer: None }).into_result()?;
//! ```

pub mod errors;
pub mod lifecycle;
pub mod pagination;
pub mod permissions;
pub mod roles;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, StoreError, StoreResult};
pub use lifecycle::{AuditParams, LifecycleState};
pub use pagination::{Page, PaginationMeta, PaginationParams};
pub use permissions::{Action, Decision, Resource, authorize};
pub use roles::{Actor, Role, UserType};
