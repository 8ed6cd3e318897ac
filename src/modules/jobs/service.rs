use anyhow::anyhow;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use hireboard_core::permissions::deny_reason;
use hireboard_core::{Action, AppError, PaginationMeta, Resource};
use hireboard_db::JobBoardStore;
use hireboard_models::{
    CreateJobDto, JobCategory, JobChanges, JobFilterParams, JobResponse, JobWithStats,
    PaginatedJobsResponse, UpdateJobDto,
};

use crate::metrics::{track_record_created, track_soft_delete};
use crate::middleware::auth::AuthUser;

pub struct JobService;

fn job_not_found() -> AppError {
    AppError::not_found(anyhow!("Job not found"))
}

impl JobService {
    /// Fetches a job that is visible to normal callers.
    async fn find_visible(store: &dyn JobBoardStore, id: Uuid) -> Result<JobWithStats, AppError> {
        store.find_job(id, false).await?.ok_or_else(job_not_found)
    }

    /// Posts a job under the caller's own company.
    #[instrument(skip(store, auth_user, dto), fields(user_id = %auth_user.id()))]
    pub async fn create_job(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        dto: CreateJobDto,
    ) -> Result<JobResponse, AppError> {
        auth_user.authorize(Action::Create, Resource::Job { employer: None })?;
        dto.validate()?;

        let company = store
            .find_company_by_creator(auth_user.id())
            .await?
            .filter(|c| c.lifecycle().is_visible())
            .ok_or_else(|| {
                AppError::not_found(anyhow!("Company not found. Register a company first"))
            })?;

        if let Some(company_id) = dto.company_id
            && company_id != company.id
        {
            return Err(AppError::forbidden(anyhow!(deny_reason(
                Action::Create,
                &Resource::Job { employer: None }
            ))));
        }

        let job = store
            .insert_job(dto.into_new(company.id, auth_user.id()))
            .await?;

        info!(job_id = %job.id, company_id = %company.id, "Job created");
        track_record_created("job");

        Ok(JobResponse::from(JobWithStats {
            job,
            company_name: company.name,
            total_applicants: 0,
        }))
    }

    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn get_job(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        id: Uuid,
        include_deleted: bool,
    ) -> Result<JobResponse, AppError> {
        auth_user.authorize(Action::View, Resource::Job { employer: None })?;

        let job = store
            .find_job(id, include_deleted)
            .await?
            .ok_or_else(job_not_found)?;

        Ok(JobResponse::from(job))
    }

    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn list_jobs(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        filters: JobFilterParams,
    ) -> Result<PaginatedJobsResponse, AppError> {
        auth_user.authorize(Action::View, Resource::Job { employer: None })?;

        let filter = filters.into_filter(auth_user.is_moderator());
        let page = store.list_jobs(&filter).await?;

        Ok(PaginatedJobsResponse {
            meta: PaginationMeta::new(&filter.pagination, page.total),
            data: page.items.into_iter().map(JobResponse::from).collect(),
        })
    }

    #[instrument(skip(store, auth_user, dto), fields(user_id = %auth_user.id()))]
    pub async fn update_job(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        id: Uuid,
        dto: UpdateJobDto,
    ) -> Result<JobResponse, AppError> {
        let current = Self::find_visible(store, id).await?;
        auth_user.authorize(
            Action::Update,
            Resource::Job {
                employer: Some(current.job.employer_id),
            },
        )?;
        dto.validate()?;

        let job = store
            .update_job(id, &JobChanges::from(dto))
            .await?
            .ok_or_else(job_not_found)?;

        Ok(JobResponse::from(JobWithStats { job, ..current }))
    }

    /// Soft-deletes a job and returns the deleted record.
    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn delete_job(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        id: Uuid,
    ) -> Result<JobResponse, AppError> {
        let current = Self::find_visible(store, id).await?;
        auth_user.authorize(
            Action::Delete,
            Resource::Job {
                employer: Some(current.job.employer_id),
            },
        )?;

        // A concurrent delete may have won since the lookup.
        let job = store.soft_delete_job(id).await?.ok_or_else(job_not_found)?;

        info!(job_id = %id, moderator = auth_user.is_moderator(), "Job deleted");
        track_soft_delete("job", auth_user.is_moderator());

        Ok(JobResponse::from(JobWithStats { job, ..current }))
    }

    pub async fn categories(store: &dyn JobBoardStore) -> Result<Vec<JobCategory>, AppError> {
        Ok(store.job_categories().await?)
    }
}
