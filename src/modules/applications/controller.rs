use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use hireboard_core::{AppError, PaginationParams};
use hireboard_models::{
    Application, ApplicationDetails, ApplicationFilterParams, ApplicationStats, ApplyDto,
    PaginatedApplicationsResponse, UpdateApplicationStatusDto,
};

use super::service::ApplicationService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = ApplyDto,
    responses(
        (status = 201, description = "Application submitted", body = Application),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not a Job Seeker with a completed profile"),
        (status = 404, description = "Job not found"),
        (status = 409, description = "Already applied to this job"),
        (status = 422, description = "Job not accepting applications")
    ),
    tag = "Applications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn apply_to_job(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<ApplyDto>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    let application = ApplicationService::apply(state.store.as_ref(), &auth_user, dto).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

#[utoipa::path(
    get,
    path = "/api/applications",
    params(ApplicationFilterParams),
    responses(
        (status = 200, description = "Applications to the caller's jobs", body = PaginatedApplicationsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an Employer with a completed profile")
    ),
    tag = "Applications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_applications(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<ApplicationFilterParams>,
) -> Result<Json<PaginatedApplicationsResponse>, AppError> {
    let applications =
        ApplicationService::list_for_employer(state.store.as_ref(), &auth_user, params).await?;
    Ok(Json(applications))
}

#[utoipa::path(
    patch,
    path = "/api/applications/{id}/status",
    params(("id" = Uuid, Path, description = "Application ID")),
    request_body = UpdateApplicationStatusDto,
    responses(
        (status = 200, description = "Status updated", body = Application),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the job's employer"),
        (status = 404, description = "Application not found")
    ),
    tag = "Applications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_application_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateApplicationStatusDto>,
) -> Result<Json<Application>, AppError> {
    let application =
        ApplicationService::update_status(state.store.as_ref(), &auth_user, id, dto).await?;
    Ok(Json(application))
}

#[utoipa::path(
    get,
    path = "/api/applications/applied",
    params(PaginationParams),
    responses(
        (status = 200, description = "The caller's applications, newest first", body = PaginatedApplicationsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "The caller has no profile")
    ),
    tag = "Applications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_applied_jobs(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedApplicationsResponse>, AppError> {
    let applications =
        ApplicationService::applied_jobs(state.store.as_ref(), &auth_user, pagination).await?;
    Ok(Json(applications))
}

#[utoipa::path(
    get,
    path = "/api/applications/applied/{job_id}",
    params(("job_id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 200, description = "The caller's application to the job", body = ApplicationDetails),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No application to this job")
    ),
    tag = "Applications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_applied_job(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApplicationDetails>, AppError> {
    let application =
        ApplicationService::applied_job(state.store.as_ref(), &auth_user, job_id).await?;
    Ok(Json(application))
}

#[utoipa::path(
    get,
    path = "/api/applications/stats",
    responses(
        (status = 200, description = "Application counters of the caller", body = ApplicationStats),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "The caller has no profile")
    ),
    tag = "Applications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_application_stats(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<ApplicationStats>, AppError> {
    let stats = ApplicationService::stats(state.store.as_ref(), &auth_user).await?;
    Ok(Json(stats))
}
