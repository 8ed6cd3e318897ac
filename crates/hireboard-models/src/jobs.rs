//! Job postings.
//!
//! The four long text fields of a job are returned grouped under a
//! `description` object rather than as top-level keys. See [`JobResponse`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use hireboard_core::serde::{deserialize_optional_bool, deserialize_optional_uuid};
use hireboard_core::{LifecycleState, PaginationMeta, PaginationParams};

use crate::validation::non_blank;

pub const DEFAULT_RESPONSIBILITIES: &str = "No Job Responsibilities provided";
pub const DEFAULT_SKILLS: &str = "No skills details provided";
pub const DEFAULT_EDUCATION: &str = "No Education details provided";
pub const DEFAULT_ABOUT: &str = "No description provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum JobType {
    #[serde(rename = "full time")]
    FullTime,
    #[serde(rename = "part time")]
    PartTime,
    #[serde(rename = "contract")]
    Contract,
    #[serde(rename = "internship")]
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full time",
            JobType::PartTime => "part time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown job type '{s}'"))
    }
}

impl TryFrom<String> for JobType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Job {
    pub id: Uuid,
    pub company_id: Uuid,
    pub employer_id: Uuid,
    pub job_role: String,
    pub location: String,
    pub experience: i32,
    #[sqlx(try_from = "String")]
    pub job_type: JobType,
    pub vacancy_position: i32,
    pub industry: String,
    pub category: Option<String>,
    pub about: String,
    pub job_responsibilities: String,
    pub skills_required: String,
    pub education_or_certifications: String,
    pub is_active: bool,
    pub is_created: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn lifecycle(&self) -> LifecycleState {
        LifecycleState::from_flags(self.is_created, self.is_deleted)
    }

    /// Deleting a job also deactivates it.
    pub fn set_lifecycle(&mut self, state: LifecycleState) {
        (self.is_created, self.is_deleted) = state.flags();
        if state == LifecycleState::Deleted {
            self.is_active = false;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct JobWithStats {
    #[sqlx(flatten)]
    pub job: Job,
    pub company_name: String,
    pub total_applicants: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct JobDescription {
    #[serde(rename = "About")]
    pub about: String,
    #[serde(rename = "Job Responsibilities")]
    pub job_responsibilities: String,
    #[serde(rename = "Skills Required")]
    pub skills_required: String,
    #[serde(rename = "Educations/Certifications")]
    pub education_or_certifications: String,
}

/// The public shape of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct JobResponse {
    pub id: Uuid,
    pub company_id: Uuid,
    pub employer_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub job_role: String,
    pub location: String,
    pub experience: i32,
    pub job_type: JobType,
    pub vacancy_position: i32,
    pub industry: String,
    pub category: Option<String>,
    pub description: JobDescription,
    pub is_active: bool,
    pub is_created: bool,
    pub is_deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_applicants: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            company_id: job.company_id,
            employer_id: job.employer_id,
            company_name: None,
            job_role: job.job_role,
            location: job.location,
            experience: job.experience,
            job_type: job.job_type,
            vacancy_position: job.vacancy_position,
            industry: job.industry,
            category: job.category,
            description: JobDescription {
                about: job.about,
                job_responsibilities: job.job_responsibilities,
                skills_required: job.skills_required,
                education_or_certifications: job.education_or_certifications,
            },
            is_active: job.is_active,
            is_created: job.is_created,
            is_deleted: job.is_deleted,
            total_applicants: None,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

impl From<JobWithStats> for JobResponse {
    fn from(row: JobWithStats) -> Self {
        let mut response = JobResponse::from(row.job);
        response.company_name = Some(row.company_name);
        response.total_applicants = Some(row.total_applicants);
        response
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateJobDto {
    /// Must be the caller's own company when given
    pub company_id: Option<Uuid>,
    #[validate(length(min = 1, max = 100))]
    pub job_role: String,
    #[validate(length(min = 1, max = 100))]
    pub location: String,
    #[validate(range(min = 0, max = 50))]
    #[serde(default)]
    pub experience: i32,
    pub job_type: JobType,
    #[validate(range(min = 1))]
    pub vacancy_position: i32,
    #[validate(length(min = 1, max = 50))]
    pub industry: String,
    #[validate(length(max = 20))]
    pub category: Option<String>,
    #[validate(length(max = 500))]
    pub about: Option<String>,
    #[validate(length(max = 1000))]
    pub job_responsibilities: Option<String>,
    #[validate(length(max = 1000))]
    pub skills_required: Option<String>,
    #[validate(length(max = 1000))]
    pub education_or_certifications: Option<String>,
}

/// Fields of a job about to be inserted.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub company_id: Uuid,
    pub employer_id: Uuid,
    pub job_role: String,
    pub location: String,
    pub experience: i32,
    pub job_type: JobType,
    pub vacancy_position: i32,
    pub industry: String,
    pub category: Option<String>,
    pub about: String,
    pub job_responsibilities: String,
    pub skills_required: String,
    pub education_or_certifications: String,
}

impl CreateJobDto {
    pub fn into_new(self, company_id: Uuid, employer_id: Uuid) -> NewJob {
        NewJob {
            company_id,
            employer_id,
            job_role: self.job_role.trim().to_string(),
            location: self.location.trim().to_string(),
            experience: self.experience,
            job_type: self.job_type,
            vacancy_position: self.vacancy_position,
            industry: self.industry.trim().to_string(),
            category: non_blank(self.category),
            about: non_blank(self.about).unwrap_or_else(|| DEFAULT_ABOUT.to_string()),
            job_responsibilities: non_blank(self.job_responsibilities)
                .unwrap_or_else(|| DEFAULT_RESPONSIBILITIES.to_string()),
            skills_required: non_blank(self.skills_required)
                .unwrap_or_else(|| DEFAULT_SKILLS.to_string()),
            education_or_certifications: non_blank(self.education_or_certifications)
                .unwrap_or_else(|| DEFAULT_EDUCATION.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateJobDto {
    #[validate(length(min = 1, max = 100))]
    pub job_role: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub location: Option<String>,
    #[validate(range(min = 0, max = 50))]
    pub experience: Option<i32>,
    pub job_type: Option<JobType>,
    #[validate(range(min = 1))]
    pub vacancy_position: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub industry: Option<String>,
    #[validate(length(max = 20))]
    pub category: Option<String>,
    #[validate(length(max = 500))]
    pub about: Option<String>,
    #[validate(length(max = 1000))]
    pub job_responsibilities: Option<String>,
    #[validate(length(max = 1000))]
    pub skills_required: Option<String>,
    #[validate(length(max = 1000))]
    pub education_or_certifications: Option<String>,
    pub is_active: Option<bool>,
}

/// A partial job update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobChanges {
    pub job_role: Option<String>,
    pub location: Option<String>,
    pub experience: Option<i32>,
    pub job_type: Option<JobType>,
    pub vacancy_position: Option<i32>,
    pub industry: Option<String>,
    pub category: Option<String>,
    pub about: Option<String>,
    pub job_responsibilities: Option<String>,
    pub skills_required: Option<String>,
    pub education_or_certifications: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateJobDto> for JobChanges {
    fn from(dto: UpdateJobDto) -> Self {
        Self {
            job_role: non_blank(dto.job_role),
            location: non_blank(dto.location),
            experience: dto.experience,
            job_type: dto.job_type,
            vacancy_position: dto.vacancy_position,
            industry: non_blank(dto.industry),
            category: non_blank(dto.category),
            about: non_blank(dto.about),
            job_responsibilities: non_blank(dto.job_responsibilities),
            skills_required: non_blank(dto.skills_required),
            education_or_certifications: non_blank(dto.education_or_certifications),
            is_active: dto.is_active,
        }
    }
}

impl JobChanges {
    pub fn apply(&self, job: &mut Job) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        set(&mut job.job_role, &self.job_role);
        set(&mut job.location, &self.location);
        set(&mut job.experience, &self.experience);
        set(&mut job.job_type, &self.job_type);
        set(&mut job.vacancy_position, &self.vacancy_position);
        set(&mut job.industry, &self.industry);
        if self.category.is_some() {
            job.category = self.category.clone();
        }
        set(&mut job.about, &self.about);
        set(&mut job.job_responsibilities, &self.job_responsibilities);
        set(&mut job.skills_required, &self.skills_required);
        set(
            &mut job.education_or_certifications,
            &self.education_or_certifications,
        );
        set(&mut job.is_active, &self.is_active);
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct JobFilterParams {
    /// Case-insensitive substring match on the role
    pub job_role: Option<String>,
    /// Case-insensitive substring match on the location
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub company_id: Option<Uuid>,
    /// Include deleted jobs (moderators only, ignored otherwise)
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub include_deleted: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Store-level job query.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub job_role: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
    pub company_id: Option<Uuid>,
    pub include_deleted: bool,
    pub pagination: PaginationParams,
}

impl JobFilterParams {
    /// `audit` is whether the caller may see deleted records.
    pub fn into_filter(self, audit: bool) -> JobFilter {
        JobFilter {
            job_role: non_blank(self.job_role),
            location: non_blank(self.location),
            is_active: self.is_active,
            company_id: self.company_id,
            include_deleted: audit && self.include_deleted.unwrap_or(false),
            pagination: self.pagination,
        }
    }
}

/// Open positions per lower-cased category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct JobCategory {
    pub id: String,
    pub category: String,
    pub open_position: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedJobsResponse {
    pub data: Vec<JobResponse>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> Job {
        let now = Utc::now();
        Job {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            employer_id: Uuid::new_v4(),
            job_role: "Backend Engineer".into(),
            location: "Remote".into(),
            experience: 3,
            job_type: JobType::FullTime,
            vacancy_position: 2,
            industry: "Security".into(),
            category: Some("Engineering".into()),
            about: "About us".into(),
            job_responsibilities: "Ship it".into(),
            skills_required: "Rust".into(),
            education_or_certifications: DEFAULT_EDUCATION.into(),
            is_active: true,
            is_created: true,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_response_groups_description() {
        let value = serde_json::to_value(JobResponse::from(job())).unwrap();
        assert_eq!(value["description"]["About"], "About us");
        assert_eq!(value["description"]["Job Responsibilities"], "Ship it");
        assert_eq!(value["description"]["Skills Required"], "Rust");
        assert_eq!(
            value["description"]["Educations/Certifications"],
            DEFAULT_EDUCATION
        );
        assert!(value.get("about").is_none());
        assert!(value.get("skills_required").is_none());
        assert!(value.get("total_applicants").is_none());
        assert_eq!(value["job_type"], "full time");
    }

    #[test]
    fn test_create_defaults_text_fields() {
        let dto: CreateJobDto = serde_json::from_str(
            r#"{"job_role":"SOC Analyst","location":"Lagos","job_type":"contract","vacancy_position":1,"industry":"Security"}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
        let new = dto.into_new(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(new.about, DEFAULT_ABOUT);
        assert_eq!(new.job_responsibilities, DEFAULT_RESPONSIBILITIES);
        assert_eq!(new.skills_required, DEFAULT_SKILLS);
        assert_eq!(new.experience, 0);
    }

    #[test]
    fn test_create_rejects_lifecycle_flags() {
        let json = r#"{"job_role":"x","location":"y","job_type":"contract","vacancy_position":1,"industry":"z","is_deleted":true}"#;
        assert!(serde_json::from_str::<CreateJobDto>(json).is_err());
    }

    #[test]
    fn test_unknown_job_type_is_rejected() {
        let json = r#"{"job_role":"x","location":"y","job_type":"gig","vacancy_position":1,"industry":"z"}"#;
        assert!(serde_json::from_str::<CreateJobDto>(json).is_err());
        assert!("gig".parse::<JobType>().is_err());
    }

    #[test]
    fn test_changes_apply() {
        let mut j = job();
        let changes = JobChanges::from(UpdateJobDto {
            is_active: Some(false),
            vacancy_position: Some(5),
            about: Some("  ".into()),
            ..Default::default()
        });
        changes.apply(&mut j);
        assert!(!j.is_active);
        assert_eq!(j.vacancy_position, 5);
        assert_eq!(j.about, "About us");
    }

    #[test]
    fn test_deleting_deactivates() {
        let mut j = job();
        j.set_lifecycle(LifecycleState::Deleted);
        assert!(j.is_deleted);
        assert!(!j.is_created);
        assert!(!j.is_active);
    }
}
