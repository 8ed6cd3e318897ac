//! PostgreSQL store.
//!
//! Queries are static SQL with optional filters expressed as nullable
//! parameters (`$1::text IS NULL OR ...`). Uniqueness rules live in unique
//! indexes and surface as [`StoreError::Conflict`]; conditional writes carry
//! their precondition in the `WHERE` clause so they stay atomic.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use tracing::instrument;
use uuid::Uuid;

use hireboard_core::{Page, PaginationParams, StoreError, StoreResult, UserType};
use hireboard_models::applications::ALREADY_APPLIED_MESSAGE;
use hireboard_models::companies::COMPANY_EXISTS_MESSAGE;
use hireboard_models::{
    Application, ApplicationDetails, ApplicationFilter, ApplicationStats, ApplicationStatus,
    Company, CompanyChanges, CompanyFilter, CompanyWithStats, ContactMessage, Job, JobCategory,
    JobChanges, JobFilter, JobWithStats, NewCompany, NewContactMessage, NewJob, NewUser,
    ProfileDocuments, ProfileFields, ProfileFilter, ProfileView, User,
};

use crate::store::{DUPLICATE_EMAIL_MESSAGE, JobBoardStore};

const USER_COLUMNS: &str = "id, email, name, password_hash, user_type, is_moderator, \
     is_profile_completed, created_at, updated_at";

const COMPANY_COLUMNS: &str = "id, creator_id, name, location, about, team_members, \
     social_profiles, founded_year, is_created, is_deleted, created_at, updated_at";

const COMPANY_SELECT: &str = r#"
    SELECT
        c.id, c.creator_id, c.name, c.location, c.about, c.team_members,
        c.social_profiles, c.founded_year, c.is_created, c.is_deleted,
        c.created_at, c.updated_at,
        (SELECT COUNT(*) FROM jobs j
         WHERE j.company_id = c.id AND j.is_active = TRUE AND j.is_deleted = FALSE)::bigint AS active_jobs
    FROM companies c
"#;

const COMPANY_FILTER: &str = r#"
    WHERE ($1 OR c.is_deleted = FALSE)
      AND ($2::text IS NULL OR c.name ILIKE '%' || $2 || '%')
      AND ($3::text IS NULL OR c.location ILIKE '%' || $3 || '%')
"#;

const JOB_COLUMNS: &str = "id, company_id, employer_id, job_role, location, experience, \
     job_type, vacancy_position, industry, category, about, job_responsibilities, \
     skills_required, education_or_certifications, is_active, is_created, is_deleted, \
     created_at, updated_at";

const JOB_SELECT: &str = r#"
    SELECT
        j.id, j.company_id, j.employer_id, j.job_role, j.location, j.experience,
        j.job_type, j.vacancy_position, j.industry, j.category, j.about,
        j.job_responsibilities, j.skills_required, j.education_or_certifications,
        j.is_active, j.is_created, j.is_deleted, j.created_at, j.updated_at,
        c.name AS company_name,
        (SELECT COUNT(*) FROM applications a
         WHERE a.job_id = j.id AND a.is_deleted = FALSE)::bigint AS total_applicants
    FROM jobs j
    JOIN companies c ON c.id = j.company_id
"#;

const JOB_FILTER: &str = r#"
    WHERE ($1 OR (j.is_deleted = FALSE AND c.is_deleted = FALSE))
      AND ($2::text IS NULL OR j.job_role ILIKE '%' || $2 || '%')
      AND ($3::text IS NULL OR j.location ILIKE '%' || $3 || '%')
      AND ($4::boolean IS NULL OR j.is_active = $4)
      AND ($5::uuid IS NULL OR j.company_id = $5)
"#;

/// `$1` is the viewing employer, used for `is_favorite`.
const PROFILE_SELECT: &str = r#"
    SELECT
        p.id, p.user_id, p.age, p.gender, p.address, p.experience, p.profession,
        p.about, p.education, p.professional_skills, p.work_experience, p.phone,
        p.website, p.social_handles, p.resume, p.profile_picture, p.cover_letter,
        p.created_at, p.updated_at,
        u.name, u.email,
        EXISTS (
            SELECT 1 FROM favorite_profiles f
            WHERE f.profile_id = p.id AND f.employer_id = $1::uuid
        ) AS is_favorite
    FROM user_profiles p
    JOIN users u ON u.id = p.user_id
"#;

const APPLICATION_COLUMNS: &str =
    "id, job_id, profile_id, status, is_active, is_deleted, created_at, updated_at";

const APPLICATION_SELECT: &str = r#"
    SELECT
        a.id, a.job_id, a.profile_id, a.status, a.is_active, a.is_deleted,
        a.created_at, a.updated_at,
        j.job_role, j.company_id, j.employer_id,
        u.id AS applicant_id, u.name AS applicant_name, u.email AS applicant_email
    FROM applications a
    JOIN jobs j ON j.id = a.job_id
    JOIN user_profiles p ON p.id = a.profile_id
    JOIN users u ON u.id = p.user_id
"#;

const APPLICATION_FILTER: &str = r#"
    WHERE a.is_deleted = FALSE AND j.is_deleted = FALSE
      AND ($1::uuid IS NULL OR j.employer_id = $1)
      AND ($2::uuid IS NULL OR a.profile_id = $2)
      AND ($3::uuid IS NULL OR a.job_id = $3)
"#;

/// Initializes a PostgreSQL connection pool.
pub async fn init_db_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Maps a unique violation to a conflict carrying `message`.
fn conflict_on_unique(message: &'static str) -> impl Fn(sqlx::Error) -> StoreError {
    move |e| {
        if let sqlx::Error::Database(db_err) = &e
            && db_err.is_unique_violation()
        {
            return StoreError::Conflict(message.to_string());
        }
        StoreError::backend(e)
    }
}

/// PostgreSQL-backed [`JobBoardStore`].
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies the embedded migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }
}

#[async_trait]
impl JobBoardStore for PgStore {
    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut tx = self.pool.begin().await.map_err(StoreError::backend)?;

        let record = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (email, name, password_hash, user_type, is_moderator)
            VALUES (LOWER(TRIM($1)), $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(user.user_type.as_str())
        .bind(user.is_moderator)
        .fetch_one(&mut *tx)
        .await
        .map_err(conflict_on_unique(DUPLICATE_EMAIL_MESSAGE))?;

        if record.user_type == UserType::JobSeeker {
            sqlx::query("INSERT INTO user_profiles (user_id) VALUES ($1)")
                .bind(record.id)
                .execute(&mut *tx)
                .await
                .map_err(StoreError::backend)?;
        }

        tx.commit().await.map_err(StoreError::backend)?;
        Ok(record)
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)
    }

    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = LOWER(TRIM($1))"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    #[instrument(skip(self, company), fields(creator_id = %company.creator_id))]
    async fn insert_company(&self, company: NewCompany) -> StoreResult<Company> {
        let mut tx = self.pool.begin().await.map_err(StoreError::backend)?;

        let record = sqlx::query_as::<_, Company>(&format!(
            r#"
            INSERT INTO companies (creator_id, name, location, about, team_members,
                                   social_profiles, founded_year)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(company.creator_id)
        .bind(&company.name)
        .bind(&company.location)
        .bind(&company.about)
        .bind(company.team_members)
        .bind(&company.social_profiles)
        .bind(company.founded_year)
        .fetch_one(&mut *tx)
        .await
        .map_err(conflict_on_unique(COMPANY_EXISTS_MESSAGE))?;

        sqlx::query(
            "UPDATE users SET is_profile_completed = TRUE, updated_at = NOW() WHERE id = $1",
        )
        .bind(record.creator_id)
        .execute(&mut *tx)
        .await
        .map_err(StoreError::backend)?;

        tx.commit().await.map_err(StoreError::backend)?;
        Ok(record)
    }

    async fn find_company(
        &self,
        id: Uuid,
        include_deleted: bool,
    ) -> StoreResult<Option<CompanyWithStats>> {
        sqlx::query_as::<_, CompanyWithStats>(&format!(
            "{COMPANY_SELECT} WHERE c.id = $1 AND ($2 OR c.is_deleted = FALSE)"
        ))
        .bind(id)
        .bind(include_deleted)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn find_company_by_creator(&self, creator_id: Uuid) -> StoreResult<Option<Company>> {
        sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE creator_id = $1"
        ))
        .bind(creator_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn list_companies(&self, filter: &CompanyFilter) -> StoreResult<Page<CompanyWithStats>> {
        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM companies c {COMPANY_FILTER}"
        ))
        .bind(filter.include_deleted)
        .bind(&filter.name)
        .bind(&filter.location)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        let items = sqlx::query_as::<_, CompanyWithStats>(&format!(
            "{COMPANY_SELECT} {COMPANY_FILTER} ORDER BY c.created_at DESC LIMIT $4 OFFSET $5"
        ))
        .bind(filter.include_deleted)
        .bind(&filter.name)
        .bind(&filter.location)
        .bind(filter.pagination.limit())
        .bind(filter.pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(Page::new(items, total))
    }

    #[instrument(skip(self, changes))]
    async fn update_company(
        &self,
        id: Uuid,
        changes: &CompanyChanges,
    ) -> StoreResult<Option<Company>> {
        sqlx::query_as::<_, Company>(&format!(
            r#"
            UPDATE companies SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                about = COALESCE($4, about),
                team_members = COALESCE($5, team_members),
                social_profiles = COALESCE($6, social_profiles),
                founded_year = COALESCE($7, founded_year),
                updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.location)
        .bind(&changes.about)
        .bind(changes.team_members)
        .bind(&changes.social_profiles)
        .bind(changes.founded_year)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    #[instrument(skip(self))]
    async fn soft_delete_company(&self, id: Uuid) -> StoreResult<Option<Company>> {
        sqlx::query_as::<_, Company>(&format!(
            r#"
            UPDATE companies SET is_created = FALSE, is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    #[instrument(skip(self, job), fields(company_id = %job.company_id))]
    async fn insert_job(&self, job: NewJob) -> StoreResult<Job> {
        sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs (company_id, employer_id, job_role, location, experience, job_type,
                              vacancy_position, industry, category, about, job_responsibilities,
                              skills_required, education_or_certifications)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(job.company_id)
        .bind(job.employer_id)
        .bind(&job.job_role)
        .bind(&job.location)
        .bind(job.experience)
        .bind(job.job_type.as_str())
        .bind(job.vacancy_position)
        .bind(&job.industry)
        .bind(&job.category)
        .bind(&job.about)
        .bind(&job.job_responsibilities)
        .bind(&job.skills_required)
        .bind(&job.education_or_certifications)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn find_job(&self, id: Uuid, include_deleted: bool) -> StoreResult<Option<JobWithStats>> {
        sqlx::query_as::<_, JobWithStats>(&format!(
            "{JOB_SELECT} WHERE j.id = $1 AND ($2 OR (j.is_deleted = FALSE AND c.is_deleted = FALSE))"
        ))
        .bind(id)
        .bind(include_deleted)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn list_jobs(&self, filter: &JobFilter) -> StoreResult<Page<JobWithStats>> {
        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM jobs j JOIN companies c ON c.id = j.company_id {JOB_FILTER}"
        ))
        .bind(filter.include_deleted)
        .bind(&filter.job_role)
        .bind(&filter.location)
        .bind(filter.is_active)
        .bind(filter.company_id)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        let items = sqlx::query_as::<_, JobWithStats>(&format!(
            "{JOB_SELECT} {JOB_FILTER} ORDER BY j.created_at DESC LIMIT $6 OFFSET $7"
        ))
        .bind(filter.include_deleted)
        .bind(&filter.job_role)
        .bind(&filter.location)
        .bind(filter.is_active)
        .bind(filter.company_id)
        .bind(filter.pagination.limit())
        .bind(filter.pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(Page::new(items, total))
    }

    #[instrument(skip(self, changes))]
    async fn update_job(&self, id: Uuid, changes: &JobChanges) -> StoreResult<Option<Job>> {
        sqlx::query_as::<_, Job>(&format!(
            r#"
            UPDATE jobs SET
                job_role = COALESCE($2, job_role),
                location = COALESCE($3, location),
                experience = COALESCE($4, experience),
                job_type = COALESCE($5, job_type),
                vacancy_position = COALESCE($6, vacancy_position),
                industry = COALESCE($7, industry),
                category = COALESCE($8, category),
                about = COALESCE($9, about),
                job_responsibilities = COALESCE($10, job_responsibilities),
                skills_required = COALESCE($11, skills_required),
                education_or_certifications = COALESCE($12, education_or_certifications),
                is_active = COALESCE($13, is_active),
                updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&changes.job_role)
        .bind(&changes.location)
        .bind(changes.experience)
        .bind(changes.job_type.map(|t| t.as_str()))
        .bind(changes.vacancy_position)
        .bind(&changes.industry)
        .bind(&changes.category)
        .bind(&changes.about)
        .bind(&changes.job_responsibilities)
        .bind(&changes.skills_required)
        .bind(&changes.education_or_certifications)
        .bind(changes.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    #[instrument(skip(self))]
    async fn soft_delete_job(&self, id: Uuid) -> StoreResult<Option<Job>> {
        sqlx::query_as::<_, Job>(&format!(
            r#"
            UPDATE jobs
            SET is_created = FALSE, is_deleted = TRUE, is_active = FALSE, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn job_categories(&self) -> StoreResult<Vec<JobCategory>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT LOWER(TRIM(j.category)) AS category, COUNT(*)::bigint AS open_position
            FROM jobs j
            JOIN companies c ON c.id = j.company_id
            WHERE j.is_deleted = FALSE AND c.is_deleted = FALSE
              AND j.category IS NOT NULL AND TRIM(j.category) <> ''
            GROUP BY LOWER(TRIM(j.category))
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(i, (category, open_position))| JobCategory {
                id: (i + 1).to_string(),
                category,
                open_position,
            })
            .collect())
    }

    #[instrument(skip(self, name, fields))]
    async fn upsert_profile(
        &self,
        user_id: Uuid,
        name: Option<String>,
        fields: ProfileFields,
    ) -> StoreResult<ProfileView> {
        let mut tx = self.pool.begin().await.map_err(StoreError::backend)?;

        sqlx::query(
            r#"
            INSERT INTO user_profiles (user_id, age, gender, address, experience, profession,
                                       about, education, professional_skills, work_experience,
                                       phone, website, social_handles)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (user_id) DO UPDATE SET
                age = EXCLUDED.age,
                gender = EXCLUDED.gender,
                address = EXCLUDED.address,
                experience = EXCLUDED.experience,
                profession = EXCLUDED.profession,
                about = EXCLUDED.about,
                education = EXCLUDED.education,
                professional_skills = EXCLUDED.professional_skills,
                work_experience = EXCLUDED.work_experience,
                phone = EXCLUDED.phone,
                website = EXCLUDED.website,
                social_handles = EXCLUDED.social_handles,
                updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(fields.age)
        .bind(&fields.gender)
        .bind(&fields.address)
        .bind(&fields.experience)
        .bind(&fields.profession)
        .bind(&fields.about)
        .bind(Json(&fields.education))
        .bind(Json(&fields.professional_skills))
        .bind(Json(&fields.work_experience))
        .bind(&fields.phone)
        .bind(&fields.website)
        .bind(&fields.social_handles)
        .execute(&mut *tx)
        .await
        .map_err(StoreError::backend)?;

        if let Some(name) = name {
            sqlx::query(
                "UPDATE users SET name = $2, updated_at = NOW() WHERE id = $1 AND name <> $2",
            )
            .bind(user_id)
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::backend)?;
        }

        tx.commit().await.map_err(StoreError::backend)?;

        self.find_profile_by_user(user_id).await?.ok_or_else(|| {
            StoreError::backend(anyhow::anyhow!("profile of user {user_id} vanished after upsert"))
        })
    }

    async fn find_profile(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> StoreResult<Option<ProfileView>> {
        sqlx::query_as::<_, ProfileView>(&format!("{PROFILE_SELECT} WHERE p.id = $2"))
            .bind(viewer)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)
    }

    async fn find_profile_by_user(&self, user_id: Uuid) -> StoreResult<Option<ProfileView>> {
        sqlx::query_as::<_, ProfileView>(&format!("{PROFILE_SELECT} WHERE p.user_id = $2"))
            .bind(None::<Uuid>)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)
    }

    async fn list_profiles(&self, filter: &ProfileFilter) -> StoreResult<Page<ProfileView>> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM user_profiles p
            WHERE ($1::text IS NULL OR p.profession ILIKE '%' || $1 || '%')
            "#,
        )
        .bind(&filter.profession)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        let items = sqlx::query_as::<_, ProfileView>(&format!(
            r#"
            {PROFILE_SELECT}
            WHERE ($2::text IS NULL OR p.profession ILIKE '%' || $2 || '%')
            ORDER BY p.created_at DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(filter.viewer)
        .bind(&filter.profession)
        .bind(filter.pagination.limit())
        .bind(filter.pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(Page::new(items, total))
    }

    #[instrument(skip(self, documents))]
    async fn set_profile_documents(
        &self,
        user_id: Uuid,
        documents: &ProfileDocuments,
    ) -> StoreResult<Option<ProfileView>> {
        let mut tx = self.pool.begin().await.map_err(StoreError::backend)?;

        let updated: Option<Uuid> = sqlx::query_scalar(
            r#"
            UPDATE user_profiles SET
                resume = COALESCE($2, resume),
                profile_picture = COALESCE($3, profile_picture),
                cover_letter = COALESCE($4, cover_letter),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&documents.resume)
        .bind(&documents.profile_picture)
        .bind(&documents.cover_letter)
        .fetch_optional(&mut *tx)
        .await
        .map_err(StoreError::backend)?;

        if updated.is_none() {
            return Ok(None);
        }

        if documents.resume.is_some() {
            sqlx::query(
                "UPDATE users SET is_profile_completed = TRUE, updated_at = NOW() WHERE id = $1",
            )
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::backend)?;
        }

        tx.commit().await.map_err(StoreError::backend)?;
        self.find_profile_by_user(user_id).await
    }

    #[instrument(skip(self))]
    async fn set_favorite(
        &self,
        employer_id: Uuid,
        profile_id: Uuid,
        favorite: bool,
    ) -> StoreResult<()> {
        let query = if favorite {
            r#"
            INSERT INTO favorite_profiles (employer_id, profile_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#
        } else {
            "DELETE FROM favorite_profiles WHERE employer_id = $1 AND profile_id = $2"
        };

        sqlx::query(query)
            .bind(employer_id)
            .bind(profile_id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn insert_application(
        &self,
        job_id: Uuid,
        profile_id: Uuid,
    ) -> StoreResult<Application> {
        sqlx::query_as::<_, Application>(&format!(
            r#"
            INSERT INTO applications (job_id, profile_id, status)
            VALUES ($1, $2, $3)
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(job_id)
        .bind(profile_id)
        .bind(ApplicationStatus::Applied.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(conflict_on_unique(ALREADY_APPLIED_MESSAGE))
    }

    async fn find_application(&self, id: Uuid) -> StoreResult<Option<ApplicationDetails>> {
        sqlx::query_as::<_, ApplicationDetails>(&format!(
            "{APPLICATION_SELECT} WHERE a.id = $1 AND a.is_deleted = FALSE"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn list_applications(
        &self,
        filter: &ApplicationFilter,
    ) -> StoreResult<Page<ApplicationDetails>> {
        let total: i64 = sqlx::query_scalar(&format!(
            r#"
            SELECT COUNT(*)
            FROM applications a
            JOIN jobs j ON j.id = a.job_id
            {APPLICATION_FILTER}
            "#
        ))
        .bind(filter.employer_id)
        .bind(filter.profile_id)
        .bind(filter.job_id)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        let items = sqlx::query_as::<_, ApplicationDetails>(&format!(
            "{APPLICATION_SELECT} {APPLICATION_FILTER} ORDER BY a.created_at DESC LIMIT $4 OFFSET $5"
        ))
        .bind(filter.employer_id)
        .bind(filter.profile_id)
        .bind(filter.job_id)
        .bind(filter.pagination.limit())
        .bind(filter.pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(Page::new(items, total))
    }

    #[instrument(skip(self))]
    async fn update_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> StoreResult<Option<Application>> {
        sqlx::query_as::<_, Application>(&format!(
            r#"
            UPDATE applications SET status = $2, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            RETURNING {APPLICATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn application_stats(&self, profile_id: Uuid) -> StoreResult<ApplicationStats> {
        let statuses: Vec<String> = sqlx::query_scalar(
            "SELECT status FROM applications WHERE profile_id = $1 AND is_deleted = FALSE",
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        let statuses = statuses
            .into_iter()
            .map(|s| s.parse::<ApplicationStatus>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::backend(anyhow::anyhow!(e)))?;

        Ok(ApplicationStats::from_statuses(statuses))
    }

    async fn insert_contact_message(
        &self,
        message: NewContactMessage,
    ) -> StoreResult<ContactMessage> {
        sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (full_name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, email, message, created_at, updated_at
            "#,
        )
        .bind(&message.full_name)
        .bind(&message.email)
        .bind(&message.message)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::backend)
    }

    async fn list_contact_messages(
        &self,
        pagination: &PaginationParams,
    ) -> StoreResult<Page<ContactMessage>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        let items = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, full_name, email, message, created_at, updated_at
            FROM contact_messages
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        Ok(Page::new(items, total))
    }
}
