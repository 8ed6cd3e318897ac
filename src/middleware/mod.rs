//! Request extractors for authentication and authorization.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` validates the JWT and loads the identity from the store
//! 3. The handler asks `AuthUser::authorize` for the action it is about to
//!    take; a deny becomes a 403 with the gate's reason
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//! use hireboard_core::{Action, Resource};
//!
//! async fn delete_job(auth_user: AuthUser) -> Result<impl IntoResponse, AppError> {
//!     auth_user.authorize(Action::Delete, Resource::Job { employer: Some(owner) })?;
//!     // ...
//! }
//! ```

pub mod auth;
