use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use hireboard_core::{Action, AppError};
use hireboard_models::{
    PaginatedProfilesResponse, ProfileFilterParams, ProfileResponse, UpdateDocumentsDto,
    UpsertProfileDto,
};

use super::service::ProfileService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/profiles",
    request_body = UpsertProfileDto,
    responses(
        (status = 201, description = "Profile created or overwritten", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a Job Seeker"),
        (status = 422, description = "Validation error")
    ),
    tag = "Profiles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<UpsertProfileDto>,
) -> Result<(StatusCode, Json<ProfileResponse>), AppError> {
    let profile =
        ProfileService::upsert_profile(state.store.as_ref(), &auth_user, Action::Create, dto)
            .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

#[utoipa::path(
    put,
    path = "/api/profiles/me",
    request_body = UpsertProfileDto,
    responses(
        (status = 200, description = "Profile overwritten", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a Job Seeker"),
        (status = 422, description = "Validation error")
    ),
    tag = "Profiles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_my_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<UpsertProfileDto>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile =
        ProfileService::upsert_profile(state.store.as_ref(), &auth_user, Action::Update, dto)
            .await?;
    Ok(Json(profile))
}

#[utoipa::path(
    get,
    path = "/api/profiles",
    params(ProfileFilterParams),
    responses(
        (status = 200, description = "Profiles, newest first", body = PaginatedProfilesResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Job Seekers cannot browse profiles")
    ),
    tag = "Profiles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_profiles(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(filters): Query<ProfileFilterParams>,
) -> Result<Json<PaginatedProfilesResponse>, AppError> {
    let profiles = ProfileService::list_profiles(state.store.as_ref(), &auth_user, filters).await?;
    Ok(Json(profiles))
}

#[utoipa::path(
    get,
    path = "/api/profiles/me",
    responses(
        (status = 200, description = "The caller's profile", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No profile")
    ),
    tag = "Profiles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_my_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = ProfileService::my_profile(state.store.as_ref(), &auth_user).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    put,
    path = "/api/profiles/me/documents",
    request_body = UpdateDocumentsDto,
    responses(
        (status = 200, description = "Documents attached", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a Job Seeker"),
        (status = 422, description = "No document given or invalid URL")
    ),
    tag = "Profiles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_my_documents(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<UpdateDocumentsDto>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = ProfileService::update_documents(state.store.as_ref(), &auth_user, dto).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    params(("id" = Uuid, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Profile details", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Another seeker's profile"),
        (status = 404, description = "Profile not found")
    ),
    tag = "Profiles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = ProfileService::get_profile(state.store.as_ref(), &auth_user, id).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    delete,
    path = "/api/profiles/{id}",
    params(("id" = Uuid, Path, description = "Profile ID")),
    responses(
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Profiles cannot be deleted")
    ),
    tag = "Profiles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user))]
pub async fn delete_profile(
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ProfileService::delete_profile(&auth_user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/profiles/{id}/favorite",
    params(("id" = Uuid, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Profile added to favorites", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an Employer"),
        (status = 404, description = "Profile not found")
    ),
    tag = "Profiles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn favorite_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = ProfileService::set_favorite(state.store.as_ref(), &auth_user, id, true).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    delete,
    path = "/api/profiles/{id}/favorite",
    params(("id" = Uuid, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Profile removed from favorites", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an Employer"),
        (status = 404, description = "Profile not found")
    ),
    tag = "Profiles",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn unfavorite_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile =
        ProfileService::set_favorite(state.store.as_ref(), &auth_user, id, false).await?;
    Ok(Json(profile))
}
