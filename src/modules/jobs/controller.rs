use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

use hireboard_core::{AppError, AuditParams};
use hireboard_models::{
    CreateJobDto, JobCategory, JobFilterParams, JobResponse, PaginatedJobsResponse, UpdateJobDto,
};

use super::service::JobService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct TrendingKeywordsResponse {
    pub trending_keywords: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Job created", body = JobResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an Employer with a completed profile, or not the caller's company"),
        (status = 404, description = "The caller has no company"),
        (status = 422, description = "Validation error")
    ),
    tag = "Jobs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_job(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<CreateJobDto>,
) -> Result<(StatusCode, Json<JobResponse>), AppError> {
    let job = JobService::create_job(state.store.as_ref(), &auth_user, dto).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(JobFilterParams),
    responses(
        (status = 200, description = "Visible jobs, newest first", body = PaginatedJobsResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Jobs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_jobs(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(filters): Query<JobFilterParams>,
) -> Result<Json<PaginatedJobsResponse>, AppError> {
    let jobs = JobService::list_jobs(state.store.as_ref(), &auth_user, filters).await?;
    Ok(Json(jobs))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID"),
        AuditParams
    ),
    responses(
        (status = 200, description = "Job details", body = JobResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Job not found or deleted")
    ),
    tag = "Jobs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_job(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Query(audit): Query<AuditParams>,
) -> Result<Json<JobResponse>, AppError> {
    let include_deleted = audit.include_deleted(auth_user.is_moderator());
    let job = JobService::get_job(state.store.as_ref(), &auth_user, id, include_deleted).await?;
    Ok(Json(job))
}

#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job ID")),
    request_body = UpdateJobDto,
    responses(
        (status = 200, description = "Job updated", body = JobResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Neither the job's employer nor a moderator"),
        (status = 404, description = "Job not found or deleted"),
        (status = 422, description = "Validation error")
    ),
    tag = "Jobs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_job(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateJobDto>,
) -> Result<Json<JobResponse>, AppError> {
    let job = JobService::update_job(state.store.as_ref(), &auth_user, id, dto).await?;
    Ok(Json(job))
}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    params(("id" = Uuid, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job soft-deleted", body = JobResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Neither the job's employer nor a moderator"),
        (status = 404, description = "Job not found or already deleted")
    ),
    tag = "Jobs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_job(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<JobResponse>, AppError> {
    let job = JobService::delete_job(state.store.as_ref(), &auth_user, id).await?;
    Ok(Json(job))
}

/// Open positions per category
#[utoipa::path(
    get,
    path = "/api/jobs/categories",
    responses(
        (status = 200, description = "Open positions per category", body = [JobCategory])
    ),
    tag = "Jobs"
)]
#[instrument(skip(state))]
pub async fn get_job_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobCategory>>, AppError> {
    let categories = JobService::categories(state.store.as_ref()).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/jobs/trending-keywords",
    responses(
        (status = 200, description = "Trending search keywords", body = TrendingKeywordsResponse)
    ),
    tag = "Jobs"
)]
pub async fn get_trending_keywords(State(state): State<AppState>) -> Json<TrendingKeywordsResponse> {
    Json(TrendingKeywordsResponse {
        trending_keywords: state.catalog.trending_keywords.clone(),
    })
}
