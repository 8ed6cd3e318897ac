//! In-memory store for tests and local development.
//!
//! All tables live behind one `parking_lot::RwLock`, so every write,
//! including the uniqueness checks that precede it, happens under a single
//! write lock. Lists come back newest first.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use hireboard_core::{LifecycleState, Page, PaginationParams, StoreError, StoreResult, UserType};
use hireboard_models::applications::ALREADY_APPLIED_MESSAGE;
use hireboard_models::companies::COMPANY_EXISTS_MESSAGE;
use hireboard_models::{
    Application, ApplicationDetails, ApplicationFilter, ApplicationStats, ApplicationStatus,
    Company, CompanyChanges, CompanyFilter, CompanyWithStats, ContactMessage, Job, JobCategory,
    JobChanges, JobFilter, JobWithStats, NewCompany, NewContactMessage, NewJob, NewUser,
    ProfileDocuments, ProfileFields, ProfileFilter, ProfileView, User, UserProfile,
};

use crate::store::{DUPLICATE_EMAIL_MESSAGE, JobBoardStore};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    companies: Vec<Company>,
    jobs: Vec<Job>,
    profiles: Vec<UserProfile>,
    /// (employer_id, profile_id)
    favorites: Vec<(Uuid, Uuid)>,
    applications: Vec<Application>,
    contact_messages: Vec<ContactMessage>,
}

fn contains_ci(haystack: &str, needle: &Option<String>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

fn paginate<T: Clone>(rows: Vec<T>, pagination: &PaginationParams) -> Page<T> {
    let total = rows.len() as i64;
    Page::new(pagination.apply(&rows), total)
}

impl Tables {
    fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn company(&self, id: Uuid) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    fn job_visible(&self, job: &Job, include_deleted: bool) -> bool {
        if include_deleted {
            return true;
        }
        job.lifecycle().is_visible()
            && self
                .company(job.company_id)
                .is_some_and(|c| c.lifecycle().is_visible())
    }

    fn applicant_count(&self, job_id: Uuid) -> i64 {
        self.applications
            .iter()
            .filter(|a| a.job_id == job_id && !a.is_deleted)
            .count() as i64
    }

    fn job_with_stats(&self, job: &Job) -> JobWithStats {
        JobWithStats {
            job: job.clone(),
            company_name: self
                .company(job.company_id)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            total_applicants: self.applicant_count(job.id),
        }
    }

    fn company_with_stats(&self, company: &Company) -> CompanyWithStats {
        let active_jobs = self
            .jobs
            .iter()
            .filter(|j| j.company_id == company.id && j.is_active && !j.is_deleted)
            .count() as i64;
        CompanyWithStats {
            company: company.clone(),
            active_jobs,
        }
    }

    fn profile_view(&self, profile: &UserProfile, viewer: Option<Uuid>) -> Option<ProfileView> {
        let user = self.user(profile.user_id)?;
        let is_favorite = viewer.is_some_and(|viewer| {
            self.favorites
                .iter()
                .any(|(employer, p)| *employer == viewer && *p == profile.id)
        });
        Some(ProfileView {
            profile: profile.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            is_favorite,
        })
    }

    fn application_details(&self, application: &Application) -> Option<ApplicationDetails> {
        let job = self.jobs.iter().find(|j| j.id == application.job_id)?;
        let profile = self
            .profiles
            .iter()
            .find(|p| p.id == application.profile_id)?;
        let user = self.user(profile.user_id)?;
        Some(ApplicationDetails {
            application: application.clone(),
            job_role: job.job_role.clone(),
            company_id: job.company_id,
            employer_id: job.employer_id,
            applicant_id: user.id,
            applicant_name: user.name.clone(),
            applicant_email: user.email.clone(),
        })
    }

    fn mark_profile_completed(&mut self, user_id: Uuid) {
        if let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) {
            user.is_profile_completed = true;
            user.updated_at = Utc::now();
        }
    }
}

/// In-memory [`JobBoardStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobBoardStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut tables = self.tables.write();
        let email = user.email.trim().to_lowercase();
        if tables.users.iter().any(|u| u.email == email) {
            return Err(StoreError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }

        let now = Utc::now();
        let record = User {
            id: Uuid::new_v4(),
            email,
            name: user.name,
            password_hash: user.password_hash,
            user_type: user.user_type,
            is_moderator: user.is_moderator,
            is_profile_completed: false,
            created_at: now,
            updated_at: now,
        };
        if record.user_type == UserType::JobSeeker {
            tables.profiles.push(UserProfile::empty(record.id, now));
        }
        tables.users.push(record.clone());
        Ok(record)
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.tables.read().user(id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let email = email.trim().to_lowercase();
        Ok(self
            .tables
            .read()
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert_company(&self, company: NewCompany) -> StoreResult<Company> {
        let mut tables = self.tables.write();
        if tables
            .companies
            .iter()
            .any(|c| c.creator_id == company.creator_id)
        {
            return Err(StoreError::Conflict(COMPANY_EXISTS_MESSAGE.to_string()));
        }

        let now = Utc::now();
        let (is_created, is_deleted) = LifecycleState::Created.flags();
        let record = Company {
            id: Uuid::new_v4(),
            creator_id: company.creator_id,
            name: company.name,
            location: company.location,
            about: company.about,
            team_members: company.team_members,
            social_profiles: company.social_profiles,
            founded_year: company.founded_year,
            is_created,
            is_deleted,
            created_at: now,
            updated_at: now,
        };
        tables.companies.push(record.clone());
        tables.mark_profile_completed(record.creator_id);
        Ok(record)
    }

    async fn find_company(
        &self,
        id: Uuid,
        include_deleted: bool,
    ) -> StoreResult<Option<CompanyWithStats>> {
        let tables = self.tables.read();
        Ok(tables
            .company(id)
            .filter(|c| c.lifecycle().visible_to(include_deleted))
            .map(|c| tables.company_with_stats(c)))
    }

    async fn find_company_by_creator(&self, creator_id: Uuid) -> StoreResult<Option<Company>> {
        Ok(self
            .tables
            .read()
            .companies
            .iter()
            .find(|c| c.creator_id == creator_id)
            .cloned())
    }

    async fn list_companies(&self, filter: &CompanyFilter) -> StoreResult<Page<CompanyWithStats>> {
        let tables = self.tables.read();
        let rows: Vec<CompanyWithStats> = tables
            .companies
            .iter()
            .rev()
            .filter(|c| c.lifecycle().visible_to(filter.include_deleted))
            .filter(|c| contains_ci(&c.name, &filter.name))
            .filter(|c| contains_ci(&c.location, &filter.location))
            .map(|c| tables.company_with_stats(c))
            .collect();
        Ok(paginate(rows, &filter.pagination))
    }

    async fn update_company(
        &self,
        id: Uuid,
        changes: &CompanyChanges,
    ) -> StoreResult<Option<Company>> {
        let mut tables = self.tables.write();
        let Some(company) = tables
            .companies
            .iter_mut()
            .find(|c| c.id == id && c.lifecycle().is_visible())
        else {
            return Ok(None);
        };
        changes.apply(company);
        company.updated_at = Utc::now();
        Ok(Some(company.clone()))
    }

    async fn soft_delete_company(&self, id: Uuid) -> StoreResult<Option<Company>> {
        let mut tables = self.tables.write();
        let Some(company) = tables.companies.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        match company.lifecycle().soft_delete() {
            Ok(next) => {
                company.set_lifecycle(next);
                company.updated_at = Utc::now();
                Ok(Some(company.clone()))
            }
            Err(_) => {
                debug!(company_id = %id, "Company already deleted");
                Ok(None)
            }
        }
    }

    async fn insert_job(&self, job: NewJob) -> StoreResult<Job> {
        let mut tables = self.tables.write();
        let now = Utc::now();
        let (is_created, is_deleted) = LifecycleState::Created.flags();
        let record = Job {
            id: Uuid::new_v4(),
            company_id: job.company_id,
            employer_id: job.employer_id,
            job_role: job.job_role,
            location: job.location,
            experience: job.experience,
            job_type: job.job_type,
            vacancy_position: job.vacancy_position,
            industry: job.industry,
            category: job.category,
            about: job.about,
            job_responsibilities: job.job_responsibilities,
            skills_required: job.skills_required,
            education_or_certifications: job.education_or_certifications,
            is_active: true,
            is_created,
            is_deleted,
            created_at: now,
            updated_at: now,
        };
        tables.jobs.push(record.clone());
        Ok(record)
    }

    async fn find_job(&self, id: Uuid, include_deleted: bool) -> StoreResult<Option<JobWithStats>> {
        let tables = self.tables.read();
        Ok(tables
            .jobs
            .iter()
            .find(|j| j.id == id)
            .filter(|j| tables.job_visible(j, include_deleted))
            .map(|j| tables.job_with_stats(j)))
    }

    async fn list_jobs(&self, filter: &JobFilter) -> StoreResult<Page<JobWithStats>> {
        let tables = self.tables.read();
        let rows: Vec<JobWithStats> = tables
            .jobs
            .iter()
            .rev()
            .filter(|j| tables.job_visible(j, filter.include_deleted))
            .filter(|j| contains_ci(&j.job_role, &filter.job_role))
            .filter(|j| contains_ci(&j.location, &filter.location))
            .filter(|j| filter.is_active.is_none_or(|active| j.is_active == active))
            .filter(|j| filter.company_id.is_none_or(|id| j.company_id == id))
            .map(|j| tables.job_with_stats(j))
            .collect();
        Ok(paginate(rows, &filter.pagination))
    }

    async fn update_job(&self, id: Uuid, changes: &JobChanges) -> StoreResult<Option<Job>> {
        let mut tables = self.tables.write();
        let Some(job) = tables
            .jobs
            .iter_mut()
            .find(|j| j.id == id && j.lifecycle().is_visible())
        else {
            return Ok(None);
        };
        changes.apply(job);
        job.updated_at = Utc::now();
        Ok(Some(job.clone()))
    }

    async fn soft_delete_job(&self, id: Uuid) -> StoreResult<Option<Job>> {
        let mut tables = self.tables.write();
        let Some(job) = tables.jobs.iter_mut().find(|j| j.id == id) else {
            return Ok(None);
        };
        match job.lifecycle().soft_delete() {
            Ok(next) => {
                job.set_lifecycle(next);
                job.updated_at = Utc::now();
                Ok(Some(job.clone()))
            }
            Err(_) => {
                debug!(job_id = %id, "Job already deleted");
                Ok(None)
            }
        }
    }

    async fn job_categories(&self) -> StoreResult<Vec<JobCategory>> {
        let tables = self.tables.read();
        let mut counts: std::collections::BTreeMap<String, i64> = Default::default();
        for job in tables.jobs.iter().filter(|j| tables.job_visible(j, false)) {
            let Some(category) = job.category.as_deref().map(|c| c.trim().to_lowercase()) else {
                continue;
            };
            if category.is_empty() {
                continue;
            }
            *counts.entry(category).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .enumerate()
            .map(|(i, (category, open_position))| JobCategory {
                id: (i + 1).to_string(),
                category,
                open_position,
            })
            .collect())
    }

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        name: Option<String>,
        fields: ProfileFields,
    ) -> StoreResult<ProfileView> {
        let mut tables = self.tables.write();
        let now = Utc::now();

        if let Some(name) = name
            && let Some(user) = tables.users.iter_mut().find(|u| u.id == user_id)
            && user.name != name
        {
            user.name = name;
            user.updated_at = now;
        }

        let index = match tables.profiles.iter().position(|p| p.user_id == user_id) {
            Some(index) => index,
            None => {
                tables.profiles.push(UserProfile::empty(user_id, now));
                tables.profiles.len() - 1
            }
        };
        let profile = &mut tables.profiles[index];
        fields.apply(profile);
        profile.updated_at = now;

        let profile = tables.profiles[index].clone();
        tables
            .profile_view(&profile, None)
            .ok_or_else(|| StoreError::backend(anyhow::anyhow!("profile owner {user_id} missing")))
    }

    async fn find_profile(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> StoreResult<Option<ProfileView>> {
        let tables = self.tables.read();
        Ok(tables
            .profiles
            .iter()
            .find(|p| p.id == id)
            .and_then(|p| tables.profile_view(p, viewer)))
    }

    async fn find_profile_by_user(&self, user_id: Uuid) -> StoreResult<Option<ProfileView>> {
        let tables = self.tables.read();
        Ok(tables
            .profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .and_then(|p| tables.profile_view(p, None)))
    }

    async fn list_profiles(&self, filter: &ProfileFilter) -> StoreResult<Page<ProfileView>> {
        let tables = self.tables.read();
        let rows: Vec<ProfileView> = tables
            .profiles
            .iter()
            .rev()
            .filter(|p| contains_ci(p.profession.as_deref().unwrap_or_default(), &filter.profession))
            .filter_map(|p| tables.profile_view(p, filter.viewer))
            .collect();
        Ok(paginate(rows, &filter.pagination))
    }

    async fn set_profile_documents(
        &self,
        user_id: Uuid,
        documents: &ProfileDocuments,
    ) -> StoreResult<Option<ProfileView>> {
        let mut tables = self.tables.write();
        let Some(profile) = tables.profiles.iter_mut().find(|p| p.user_id == user_id) else {
            return Ok(None);
        };
        documents.apply(profile);
        profile.updated_at = Utc::now();
        let profile = profile.clone();

        if documents.resume.is_some() {
            tables.mark_profile_completed(user_id);
        }
        Ok(tables.profile_view(&profile, None))
    }

    async fn set_favorite(
        &self,
        employer_id: Uuid,
        profile_id: Uuid,
        favorite: bool,
    ) -> StoreResult<()> {
        let mut tables = self.tables.write();
        let entry = (employer_id, profile_id);
        let exists = tables.favorites.contains(&entry);
        match (favorite, exists) {
            (true, false) => tables.favorites.push(entry),
            (false, true) => tables.favorites.retain(|f| *f != entry),
            _ => {}
        }
        Ok(())
    }

    async fn insert_application(
        &self,
        job_id: Uuid,
        profile_id: Uuid,
    ) -> StoreResult<Application> {
        let mut tables = self.tables.write();
        if tables
            .applications
            .iter()
            .any(|a| a.job_id == job_id && a.profile_id == profile_id)
        {
            return Err(StoreError::Conflict(ALREADY_APPLIED_MESSAGE.to_string()));
        }

        let now = Utc::now();
        let record = Application {
            id: Uuid::new_v4(),
            job_id,
            profile_id,
            status: ApplicationStatus::Applied,
            is_active: true,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        tables.applications.push(record.clone());
        Ok(record)
    }

    async fn find_application(&self, id: Uuid) -> StoreResult<Option<ApplicationDetails>> {
        let tables = self.tables.read();
        Ok(tables
            .applications
            .iter()
            .find(|a| a.id == id && !a.is_deleted)
            .and_then(|a| tables.application_details(a)))
    }

    async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> StoreResult<Page<ApplicationDetails>> {
        let tables = self.tables.read();
        let rows: Vec<ApplicationDetails> = tables
            .applications
            .iter()
            .rev()
            .filter(|a| !a.is_deleted)
            .filter(|a| filter.profile_id.is_none_or(|id| a.profile_id == id))
            .filter(|a| filter.job_id.is_none_or(|id| a.job_id == id))
            .filter_map(|a| tables.application_details(a))
            .filter(|d| filter.employer_id.is_none_or(|id| d.employer_id == id))
            .filter(|d| {
                tables
                    .jobs
                    .iter()
                    .any(|j| j.id == d.application.job_id && !j.is_deleted)
            })
            .collect();
        Ok(paginate(rows, &filter.pagination))
    }

    async fn update_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> StoreResult<Option<Application>> {
        let mut tables = self.tables.write();
        let Some(application) = tables
            .applications
            .iter_mut()
            .find(|a| a.id == id && !a.is_deleted)
        else {
            return Ok(None);
        };
        application.status = status;
        application.updated_at = Utc::now();
        Ok(Some(application.clone()))
    }

    async fn application_stats(&self, profile_id: Uuid) -> StoreResult<ApplicationStats> {
        let tables = self.tables.read();
        Ok(ApplicationStats::from_statuses(
            tables
                .applications
                .iter()
                .filter(|a| a.profile_id == profile_id && !a.is_deleted)
                .map(|a| a.status),
        ))
    }

    async fn insert_contact_message(
        &self,
        message: NewContactMessage,
    ) -> StoreResult<ContactMessage> {
        let mut tables = self.tables.write();
        let now = Utc::now();
        let record = ContactMessage {
            id: Uuid::new_v4(),
            full_name: message.full_name,
            email: message.email,
            message: message.message,
            created_at: now,
            updated_at: now,
        };
        tables.contact_messages.push(record.clone());
        Ok(record)
    }

    async fn list_contact_messages(
        &self,
        pagination: &PaginationParams,
    ) -> StoreResult<Page<ContactMessage>> {
        let tables = self.tables.read();
        let rows: Vec<ContactMessage> = tables.contact_messages.iter().rev().cloned().collect();
        Ok(paginate(rows, pagination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireboard_models::JobType;

    fn new_user(email: &str, user_type: UserType) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: "Test User".to_string(),
            password_hash: "hash".to_string(),
            user_type,
            is_moderator: false,
        }
    }

    fn new_company(creator_id: Uuid, name: &str) -> NewCompany {
        NewCompany {
            creator_id,
            name: name.to_string(),
            location: "Lagos".to_string(),
            about: String::new(),
            team_members: None,
            social_profiles: None,
            founded_year: None,
        }
    }

    fn new_job(company_id: Uuid, employer_id: Uuid, category: &str) -> NewJob {
        NewJob {
            company_id,
            employer_id,
            job_role: "Security Engineer".to_string(),
            location: "Remote".to_string(),
            experience: 2,
            job_type: JobType::FullTime,
            vacancy_position: 1,
            industry: "Security".to_string(),
            category: Some(category.to_string()),
            about: "a".to_string(),
            job_responsibilities: "b".to_string(),
            skills_required: "c".to_string(),
            education_or_certifications: "d".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts_case_insensitively() {
        let store = MemoryStore::new();
        store
            .insert_user(new_user("Ada@Example.com", UserType::Employer))
            .await
            .unwrap();
        let err = store
            .insert_user(new_user("ada@example.com", UserType::JobSeeker))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(msg) if msg == DUPLICATE_EMAIL_MESSAGE));
    }

    #[tokio::test]
    async fn test_job_seeker_gets_empty_profile() {
        let store = MemoryStore::new();
        let user = store
            .insert_user(new_user("seeker@example.com", UserType::JobSeeker))
            .await
            .unwrap();
        let view = store.find_profile_by_user(user.id).await.unwrap().unwrap();
        assert_eq!(view.profile.user_id, user.id);
        assert!(view.profile.education.0.is_empty());
    }

    #[tokio::test]
    async fn test_second_company_conflicts_and_first_is_unchanged() {
        let store = MemoryStore::new();
        let employer = store
            .insert_user(new_user("boss@example.com", UserType::Employer))
            .await
            .unwrap();
        let first = store
            .insert_company(new_company(employer.id, "First"))
            .await
            .unwrap();

        let err = store
            .insert_company(new_company(employer.id, "Second"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict(msg) if msg == COMPANY_EXISTS_MESSAGE));

        let stored = store.find_company_by_creator(employer.id).await.unwrap().unwrap();
        assert_eq!(stored, first);
        let user = store.find_user(employer.id).await.unwrap().unwrap();
        assert!(user.is_profile_completed);
    }

    #[tokio::test]
    async fn test_soft_delete_job_twice() {
        let store = MemoryStore::new();
        let employer = store
            .insert_user(new_user("boss@example.com", UserType::Employer))
            .await
            .unwrap();
        let company = store
            .insert_company(new_company(employer.id, "Acme"))
            .await
            .unwrap();
        let job = store
            .insert_job(new_job(company.id, employer.id, "Engineering"))
            .await
            .unwrap();

        let deleted = store.soft_delete_job(job.id).await.unwrap().unwrap();
        assert!(deleted.is_deleted && !deleted.is_created && !deleted.is_active);
        assert!(store.soft_delete_job(job.id).await.unwrap().is_none());
        assert!(store.find_job(job.id, false).await.unwrap().is_none());
        assert!(store.find_job(job.id, true).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_deleted_company_hides_its_jobs() {
        let store = MemoryStore::new();
        let employer = store
            .insert_user(new_user("boss@example.com", UserType::Employer))
            .await
            .unwrap();
        let company = store
            .insert_company(new_company(employer.id, "Acme"))
            .await
            .unwrap();
        store
            .insert_job(new_job(company.id, employer.id, "Engineering"))
            .await
            .unwrap();

        store.soft_delete_company(company.id).await.unwrap().unwrap();

        let page = store.list_jobs(&JobFilter::default()).await.unwrap();
        assert_eq!(page.total, 0);
        let page = store
            .list_jobs(&JobFilter {
                include_deleted: true,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_categories_are_lowercased_and_counted() {
        let store = MemoryStore::new();
        let employer = store
            .insert_user(new_user("boss@example.com", UserType::Employer))
            .await
            .unwrap();
        let company = store
            .insert_company(new_company(employer.id, "Acme"))
            .await
            .unwrap();
        for category in ["Engineering", " engineering ", "Design"] {
            store
                .insert_job(new_job(company.id, employer.id, category))
                .await
                .unwrap();
        }

        let categories = store.job_categories().await.unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, "1");
        assert_eq!(categories[0].category, "design");
        assert_eq!(categories[1].category, "engineering");
        assert_eq!(categories[1].open_position, 2);
    }

    #[tokio::test]
    async fn test_favorites_are_idempotent() {
        let store = MemoryStore::new();
        let employer = store
            .insert_user(new_user("boss@example.com", UserType::Employer))
            .await
            .unwrap();
        let seeker = store
            .insert_user(new_user("seeker@example.com", UserType::JobSeeker))
            .await
            .unwrap();
        let profile = store.find_profile_by_user(seeker.id).await.unwrap().unwrap();

        for _ in 0..2 {
            store
                .set_favorite(employer.id, profile.profile.id, true)
                .await
                .unwrap();
        }
        let view = store
            .find_profile(profile.profile.id, Some(employer.id))
            .await
            .unwrap()
            .unwrap();
        assert!(view.is_favorite);

        for _ in 0..2 {
            store
                .set_favorite(employer.id, profile.profile.id, false)
                .await
                .unwrap();
        }
        let view = store
            .find_profile(profile.profile.id, Some(employer.id))
            .await
            .unwrap()
            .unwrap();
        assert!(!view.is_favorite);
    }

    #[tokio::test]
    async fn test_resume_completes_profile() {
        let store = MemoryStore::new();
        let seeker = store
            .insert_user(new_user("seeker@example.com", UserType::JobSeeker))
            .await
            .unwrap();
        let docs = ProfileDocuments {
            profile_picture: Some("https://files.example/me.png".into()),
            ..Default::default()
        };
        store.set_profile_documents(seeker.id, &docs).await.unwrap();
        assert!(!store.find_user(seeker.id).await.unwrap().unwrap().is_profile_completed);

        let docs = ProfileDocuments {
            resume: Some("https://files.example/cv.pdf".into()),
            ..Default::default()
        };
        store.set_profile_documents(seeker.id, &docs).await.unwrap();
        assert!(store.find_user(seeker.id).await.unwrap().unwrap().is_profile_completed);
    }
}
