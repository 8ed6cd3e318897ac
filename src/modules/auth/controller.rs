use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;
use utoipa::ToSchema;

use hireboard_core::AppError;
use hireboard_models::{AuthResponse, LoginDto, RegisterDto, UserResponse};

use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new Employer or Job Seeker
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = AuthResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterDto>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let response = AuthService::register(state.store.as_ref(), dto, &state.jwt_config).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login and receive an access token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = AuthService::login(state.store.as_ref(), dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// The authenticated identity
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(user_id = %auth_user.id()))]
pub async fn get_me(auth_user: AuthUser) -> Result<Json<UserResponse>, AppError> {
    Ok(Json(UserResponse::from(auth_user.user)))
}
