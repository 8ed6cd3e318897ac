use anyhow::anyhow;
use tracing::{info, instrument};
use uuid::Uuid;

use hireboard_core::{Action, AppError, PaginationMeta, PaginationParams, Resource};
use hireboard_db::JobBoardStore;
use hireboard_models::{
    Application, ApplicationDetails, ApplicationFilter, ApplicationFilterParams,
    ApplicationStats, ApplyDto, PaginatedApplicationsResponse, ProfileView,
    UpdateApplicationStatusDto,
};

use crate::metrics::track_application_submitted;
use crate::middleware::auth::AuthUser;

pub struct ApplicationService;

fn application_not_found() -> AppError {
    AppError::not_found(anyhow!("Application not found"))
}

impl ApplicationService {
    async fn own_profile(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
    ) -> Result<ProfileView, AppError> {
        store
            .find_profile_by_user(auth_user.id())
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Profile not found")))
    }

    /// Applies the caller's profile to a visible, active job.
    #[instrument(skip(store, auth_user, dto), fields(user_id = %auth_user.id()))]
    pub async fn apply(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        dto: ApplyDto,
    ) -> Result<Application, AppError> {
        auth_user.authorize(
            Action::Create,
            Resource::Application {
                employer: None,
                applicant: Some(auth_user.id()),
            },
        )?;

        let job = store
            .find_job(dto.job_id, false)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Job not found")))?;
        if !job.job.is_active {
            return Err(AppError::unprocessable(anyhow!(
                "This job is not accepting applications"
            )));
        }

        let profile = Self::own_profile(store, auth_user).await?;
        let application = store
            .insert_application(job.job.id, profile.profile.id)
            .await?;

        info!(application_id = %application.id, job_id = %job.job.id, "Application submitted");
        track_application_submitted();

        Ok(application)
    }

    /// Applications to the caller's jobs. Moderators see every application.
    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn list_for_employer(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        params: ApplicationFilterParams,
    ) -> Result<PaginatedApplicationsResponse, AppError> {
        auth_user.authorize(
            Action::View,
            Resource::Application {
                employer: Some(auth_user.id()),
                applicant: None,
            },
        )?;

        let filter = ApplicationFilter {
            employer_id: (!auth_user.is_moderator()).then(|| auth_user.id()),
            job_id: params.job_id,
            pagination: params.pagination,
            ..Default::default()
        };
        let page = store.list_applications(&filter).await?;

        Ok(PaginatedApplicationsResponse {
            meta: PaginationMeta::new(&filter.pagination, page.total),
            data: page.items,
        })
    }

    #[instrument(skip(store, auth_user, dto), fields(user_id = %auth_user.id()))]
    pub async fn update_status(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        id: Uuid,
        dto: UpdateApplicationStatusDto,
    ) -> Result<Application, AppError> {
        let current = store
            .find_application(id)
            .await?
            .ok_or_else(application_not_found)?;

        auth_user.authorize(
            Action::Update,
            Resource::Application {
                employer: Some(current.employer_id),
                applicant: Some(current.applicant_id),
            },
        )?;

        let application = store
            .update_application_status(id, dto.status)
            .await?
            .ok_or_else(application_not_found)?;

        info!(application_id = %id, status = %dto.status, "Application status updated");

        Ok(application)
    }

    /// The caller's own applications, newest first.
    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn applied_jobs(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        pagination: PaginationParams,
    ) -> Result<PaginatedApplicationsResponse, AppError> {
        auth_user.authorize(
            Action::View,
            Resource::Application {
                employer: None,
                applicant: Some(auth_user.id()),
            },
        )?;
        let profile = Self::own_profile(store, auth_user).await?;

        let filter = ApplicationFilter {
            profile_id: Some(profile.profile.id),
            pagination,
            ..Default::default()
        };
        let page = store.list_applications(&filter).await?;

        Ok(PaginatedApplicationsResponse {
            meta: PaginationMeta::new(&filter.pagination, page.total),
            data: page.items,
        })
    }

    /// The caller's application to one job.
    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn applied_job(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
        job_id: Uuid,
    ) -> Result<ApplicationDetails, AppError> {
        auth_user.authorize(
            Action::View,
            Resource::Application {
                employer: None,
                applicant: Some(auth_user.id()),
            },
        )?;
        let profile = Self::own_profile(store, auth_user).await?;

        let filter = ApplicationFilter {
            profile_id: Some(profile.profile.id),
            job_id: Some(job_id),
            ..Default::default()
        };

        store
            .list_applications(&filter)
            .await?
            .items
            .into_iter()
            .next()
            .ok_or_else(application_not_found)
    }

    #[instrument(skip(store, auth_user), fields(user_id = %auth_user.id()))]
    pub async fn stats(
        store: &dyn JobBoardStore,
        auth_user: &AuthUser,
    ) -> Result<ApplicationStats, AppError> {
        auth_user.authorize(
            Action::View,
            Resource::ApplicationStats {
                applicant: Some(auth_user.id()),
            },
        )?;

        let profile = Self::own_profile(store, auth_user).await?;
        Ok(store.application_stats(profile.profile.id).await?)
    }
}
