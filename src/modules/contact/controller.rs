use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use tracing::instrument;

use hireboard_core::{AppError, PaginationParams};
use hireboard_models::{ContactMessage, CreateContactMessageDto, PaginatedContactMessagesResponse};

use super::service::ContactService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Send a message through the public contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactMessageDto,
    responses(
        (status = 201, description = "Message stored", body = ContactMessage),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Contact"
)]
#[instrument(skip(state, dto))]
pub async fn create_contact_message(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateContactMessageDto>,
) -> Result<(StatusCode, Json<ContactMessage>), AppError> {
    let message = ContactService::create_message(state.store.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    params(PaginationParams),
    responses(
        (status = 200, description = "Contact messages, newest first", body = PaginatedContactMessagesResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Moderators only", body = ErrorResponse)
    ),
    tag = "Contact",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_contact_messages(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedContactMessagesResponse>, AppError> {
    let messages =
        ContactService::list_messages(state.store.as_ref(), &auth_user, pagination).await?;
    Ok(Json(messages))
}
