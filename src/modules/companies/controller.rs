use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use hireboard_core::{AppError, AuditParams, PaginationParams};
use hireboard_models::{
    Company, CompanyFilterParams, CompanyWithStats, CreateCompanyDto, PaginatedCompaniesResponse,
    PaginatedJobsResponse, UpdateCompanyDto,
};

use super::service::CompanyService;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/companies",
    request_body = CreateCompanyDto,
    responses(
        (status = 201, description = "Company created", body = Company),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not an Employer"),
        (status = 409, description = "The caller already has a company"),
        (status = 422, description = "Validation error")
    ),
    tag = "Companies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_company(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(dto): Json<CreateCompanyDto>,
) -> Result<(StatusCode, Json<Company>), AppError> {
    let company = CompanyService::create_company(state.store.as_ref(), &auth_user, dto).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

#[utoipa::path(
    get,
    path = "/api/companies",
    params(CompanyFilterParams),
    responses(
        (status = 200, description = "Visible companies, newest first", body = PaginatedCompaniesResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Companies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_companies(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(filters): Query<CompanyFilterParams>,
) -> Result<Json<PaginatedCompaniesResponse>, AppError> {
    let companies = CompanyService::list_companies(state.store.as_ref(), &auth_user, filters).await?;
    Ok(Json(companies))
}

#[utoipa::path(
    get,
    path = "/api/companies/me",
    responses(
        (status = 200, description = "The caller's company", body = CompanyWithStats),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Profile not completed"),
        (status = 404, description = "No company")
    ),
    tag = "Companies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_my_company(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<CompanyWithStats>, AppError> {
    let company = CompanyService::my_company(state.store.as_ref(), &auth_user).await?;
    Ok(Json(company))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    params(
        ("id" = Uuid, Path, description = "Company ID"),
        AuditParams
    ),
    responses(
        (status = 200, description = "Company details", body = CompanyWithStats),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Company not found or deleted")
    ),
    tag = "Companies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_company(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Query(audit): Query<AuditParams>,
) -> Result<Json<CompanyWithStats>, AppError> {
    let include_deleted = audit.include_deleted(auth_user.is_moderator());
    let company =
        CompanyService::get_company(state.store.as_ref(), &auth_user, id, include_deleted).await?;
    Ok(Json(company))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}/jobs",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Visible jobs of the company", body = PaginatedJobsResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Company not found or deleted")
    ),
    tag = "Companies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_company_jobs(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedJobsResponse>, AppError> {
    let jobs =
        CompanyService::company_jobs(state.store.as_ref(), &auth_user, id, pagination).await?;
    Ok(Json(jobs))
}

#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    params(("id" = Uuid, Path, description = "Company ID")),
    request_body = UpdateCompanyDto,
    responses(
        (status = 200, description = "Company updated", body = Company),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Neither the creator nor a moderator"),
        (status = 404, description = "Company not found or deleted"),
        (status = 422, description = "Validation error")
    ),
    tag = "Companies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn update_company(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateCompanyDto>,
) -> Result<Json<Company>, AppError> {
    let company = CompanyService::update_company(state.store.as_ref(), &auth_user, id, dto).await?;
    Ok(Json(company))
}

#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    params(("id" = Uuid, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company soft-deleted", body = Company),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Neither the creator nor a moderator"),
        (status = 404, description = "Company not found or already deleted")
    ),
    tag = "Companies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_company(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Company>, AppError> {
    let company = CompanyService::delete_company(state.store.as_ref(), &auth_user, id).await?;
    Ok(Json(company))
}
