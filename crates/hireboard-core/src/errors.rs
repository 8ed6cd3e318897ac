//! Application error types.
//!
//! [`AppError`] is what handlers and services return. It carries an HTTP
//! status and an [`anyhow::Error`] and renders as `{"error": "<message>"}`.
//!
//! [`StoreError`] is what the persistence layer returns. It converts into
//! [`AppError`] so services can use `?` across the boundary.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Message shown to clients for any 5xx response. The real cause is logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error, try again later.";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::CONFLICT, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    /// The message the client will see.
    pub fn public_message(&self) -> String {
        if self.status.is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.error.to_string()
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = ?self.error, "Request failed");
        }

        let body = Json(json!({
            "error": self.public_message()
        }));

        (self.status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::internal(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::unprocessable(anyhow::anyhow!(err))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(message) => AppError::conflict(anyhow::anyhow!(message)),
            StoreError::Backend(error) => AppError::internal(error),
        }
    }
}

/// Errors raised by a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("{0}")]
    Conflict(String),
    /// The backing store failed.
    #[error("storage backend failure: {0}")]
    Backend(#[source] anyhow::Error),
}

impl StoreError {
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        StoreError::Backend(err.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let err: AppError = StoreError::Conflict("taken".into()).into();
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.public_message(), "taken");
    }

    #[test]
    fn test_backend_error_hides_detail() {
        let err: AppError = StoreError::backend(anyhow::anyhow!("connection reset")).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_validation_errors_map_to_422() {
        let err: AppError = validator::ValidationErrors::new().into();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_forbidden_body() {
        let (status, body) =
            body_json(AppError::forbidden(anyhow::anyhow!("You don't have permissions"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "You don't have permissions");
    }

    #[tokio::test]
    async fn test_internal_body_is_generic() {
        let (status, body) = body_json(AppError::internal(anyhow::anyhow!("boom"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
    }
}
