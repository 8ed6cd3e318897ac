use async_trait::async_trait;
use uuid::Uuid;

use hireboard_core::{Page, PaginationParams, StoreResult};
use hireboard_models::{
    Application, ApplicationDetails, ApplicationFilter, ApplicationStats, ApplicationStatus,
    Company, CompanyChanges, CompanyFilter, CompanyWithStats, ContactMessage, Job, JobCategory,
    JobChanges, JobFilter, JobWithStats, NewCompany, NewContactMessage, NewJob, NewUser,
    ProfileDocuments, ProfileFields, ProfileFilter, ProfileView, User,
};

pub const DUPLICATE_EMAIL_MESSAGE: &str = "A user with this email already exists";

/// Storage contract for every record the API serves.
///
/// Lookups return `Ok(None)` for missing rows; the caller decides whether
/// that is a 404. Conditional writes (`update_*`, `soft_delete_*`) also
/// return `Ok(None)` when the row is missing or already deleted.
///
/// A job is visible when it and its company are both in the `Created`
/// state. `include_deleted` lifts that filter.
#[async_trait]
pub trait JobBoardStore: Send + Sync {
    // Users

    /// Inserts an identity. Job Seekers get an empty profile in the same
    /// write. A taken e-mail is a [`StoreError::Conflict`](hireboard_core::StoreError).
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    // Companies

    /// Inserts a company and marks its creator's profile completed. A second
    /// company for the same creator is a conflict and changes nothing.
    async fn insert_company(&self, company: NewCompany) -> StoreResult<Company>;
    async fn find_company(
        &self,
        id: Uuid,
        include_deleted: bool,
    ) -> StoreResult<Option<CompanyWithStats>>;
    /// The creator's company in whatever state it is in.
    async fn find_company_by_creator(&self, creator_id: Uuid) -> StoreResult<Option<Company>>;
    async fn list_companies(&self, filter: &CompanyFilter) -> StoreResult<Page<CompanyWithStats>>;
    async fn update_company(
        &self,
        id: Uuid,
        changes: &CompanyChanges,
    ) -> StoreResult<Option<Company>>;
    /// `Created -> Deleted`. Of two concurrent calls exactly one gets the row.
    async fn soft_delete_company(&self, id: Uuid) -> StoreResult<Option<Company>>;

    // Jobs

    async fn insert_job(&self, job: NewJob) -> StoreResult<Job>;
    async fn find_job(&self, id: Uuid, include_deleted: bool) -> StoreResult<Option<JobWithStats>>;
    async fn list_jobs(&self, filter: &JobFilter) -> StoreResult<Page<JobWithStats>>;
    async fn update_job(&self, id: Uuid, changes: &JobChanges) -> StoreResult<Option<Job>>;
    /// `Created -> Deleted`, also clearing `is_active`.
    async fn soft_delete_job(&self, id: Uuid) -> StoreResult<Option<Job>>;
    /// Visible jobs counted per trimmed, lower-cased category.
    async fn job_categories(&self) -> StoreResult<Vec<JobCategory>>;

    // Profiles

    /// Creates or overwrites the profile of `user_id`, renaming the identity
    /// when `name` is given and differs.
    async fn upsert_profile(
        &self,
        user_id: Uuid,
        name: Option<String>,
        fields: ProfileFields,
    ) -> StoreResult<ProfileView>;
    async fn find_profile(&self, id: Uuid, viewer: Option<Uuid>)
    -> StoreResult<Option<ProfileView>>;
    async fn find_profile_by_user(&self, user_id: Uuid) -> StoreResult<Option<ProfileView>>;
    async fn list_profiles(&self, filter: &ProfileFilter) -> StoreResult<Page<ProfileView>>;
    /// Sets the given document references. A resume completes the owner's
    /// profile.
    async fn set_profile_documents(
        &self,
        user_id: Uuid,
        documents: &ProfileDocuments,
    ) -> StoreResult<Option<ProfileView>>;
    /// Adds or removes `profile_id` from the employer's favorites. Both
    /// directions are idempotent.
    async fn set_favorite(
        &self,
        employer_id: Uuid,
        profile_id: Uuid,
        favorite: bool,
    ) -> StoreResult<()>;

    // Applications

    /// One application per (job, profile); a repeat is a conflict.
    async fn insert_application(&self, job_id: Uuid, profile_id: Uuid)
    -> StoreResult<Application>;
    async fn find_application(&self, id: Uuid) -> StoreResult<Option<ApplicationDetails>>;
    async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> StoreResult<Page<ApplicationDetails>>;
    async fn update_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> StoreResult<Option<Application>>;
    async fn application_stats(&self, profile_id: Uuid) -> StoreResult<ApplicationStats>;

    // Contact messages

    async fn insert_contact_message(
        &self,
        message: NewContactMessage,
    ) -> StoreResult<ContactMessage>;
    async fn list_contact_messages(
        &self,
        pagination: &PaginationParams,
    ) -> StoreResult<Page<ContactMessage>>;
}
