use anyhow::anyhow;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use hireboard_core::{Action, AppError, PaginationMeta, PaginationParams, Resource};
use hireboard_db::JobBoardStore;
use hireboard_models::{
    Company, CompanyChanges, CompanyFilterParams, CompanyWithStats, CreateCompanyDto, JobFilter,
    JobResponse, PaginatedCompaniesResponse, PaginatedJobsResponse, UpdateCompanyDto,
};

use crate::metrics::{track_record_created, track_soft_delete};
use crate::middleware::auth::AuthUser;

pub struct CompanyService;

fn company_not_found() -> AppError {
    AppError::not_found(anyhow!("Company not found"))
}

impl CompanyService {
    async fn find_visible(
        store: &dyn JobBoardStore,
        id: Uuid,
    ) -> Result<CompanyWithStats, AppError> {
        store
            .find_company(id, false)
            .await?
            .ok_or_else(company_not_found)
    }

    /// Registers the caller's company. The store rejects a second company
    /// for the same creator and marks the creator's profile completed.
    #[instrument(skip(store, auth_user, dto), fields(user_id = %auth_user.id()))]
    pub async fn create_company(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        dto: CreateCompanyDto,
    ) -> Result<Company, AppError> {
        auth_user.authorize(Action::Create, Resource::Company { creator: None })?;
        dto.validate()?;

        let company = store.insert_company(dto.into_new(auth_user.id())).await?;

        info!(company_id = %company.id, "Company created");
        track_record_created("company");

        Ok(company)
    }

    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn get_company(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        id: Uuid,
        include_deleted: bool,
    ) -> Result<CompanyWithStats, AppError> {
        auth_user.authorize(Action::View, Resource::Company { creator: None })?;

        store
            .find_company(id, include_deleted)
            .await?
            .ok_or_else(company_not_found)
    }

    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn list_companies(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        filters: CompanyFilterParams,
    ) -> Result<PaginatedCompaniesResponse, AppError> {
        auth_user.authorize(Action::View, Resource::Company { creator: None })?;

        let filter = filters.into_filter(auth_user.is_moderator());
        let page = store.list_companies(&filter).await?;

        Ok(PaginatedCompaniesResponse {
            meta: PaginationMeta::new(&filter.pagination, page.total),
            data: page.items,
        })
    }

    /// The caller's own company.
    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn my_company(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
    ) -> Result<CompanyWithStats, AppError> {
        if !auth_user.actor.profile_completed {
            return Err(AppError::forbidden(anyhow!(
                "Complete your profile before accessing your company"
            )));
        }

        let company = store
            .find_company_by_creator(auth_user.id())
            .await?
            .ok_or_else(company_not_found)?;

        Self::find_visible(store, company.id).await
    }

    /// Visible jobs of a visible company.
    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn company_jobs(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        id: Uuid,
        pagination: PaginationParams,
    ) -> Result<PaginatedJobsResponse, AppError> {
        auth_user.authorize(Action::View, Resource::Company { creator: None })?;
        let company = Self::find_visible(store, id).await?;

        let filter = JobFilter {
            company_id: Some(company.company.id),
            pagination,
            ..Default::default()
        };
        let page = store.list_jobs(&filter).await?;

        Ok(PaginatedJobsResponse {
            meta: PaginationMeta::new(&filter.pagination, page.total),
            data: page.items.into_iter().map(JobResponse::from).collect(),
        })
    }

    #[instrument(skip(store, auth_user, dto), fields(user_id = %auth_user.id()))]
    pub async fn update_company(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        id: Uuid,
        dto: UpdateCompanyDto,
    ) -> Result<Company, AppError> {
        let current = Self::find_visible(store, id).await?;
        auth_user.authorize(
            Action::Update,
            Resource::Company {
                creator: Some(current.company.creator_id),
            },
        )?;
        dto.validate()?;

        store
            .update_company(id, &CompanyChanges::from(dto))
            .await?
            .ok_or_else(company_not_found)
    }

    /// Soft-deletes a company and returns the deleted record. Its jobs drop
    /// out of every non-audit listing with it.
    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn delete_company(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        id: Uuid,
    ) -> Result<Company, AppError> {
        let current = Self::find_visible(store, id).await?;
        auth_user.authorize(
            Action::Delete,
            Resource::Company {
                creator: Some(current.company.creator_id),
            },
        )?;

        let company = store
            .soft_delete_company(id)
            .await?
            .ok_or_else(company_not_found)?;

        info!(company_id = %id, moderator = auth_user.is_moderator(), "Company deleted");
        track_soft_delete("company", auth_user.is_moderator());

        Ok(company)
    }
}
