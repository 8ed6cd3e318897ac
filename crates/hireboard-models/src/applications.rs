use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use hireboard_core::serde::deserialize_optional_uuid;
use hireboard_core::{PaginationMeta, PaginationParams};

pub const ALREADY_APPLIED_MESSAGE: &str = "Already applied to this job";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    UnderReviewed,
    Shortlisted,
    Accepted,
    Rejected,
    OnHold,
    #[default]
    Applied,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::UnderReviewed,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
        ApplicationStatus::OnHold,
        ApplicationStatus::Applied,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::UnderReviewed => "under-reviewed",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::OnHold => "on-hold",
            ApplicationStatus::Applied => "applied",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown application status '{s}'"))
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub profile_id: Uuid,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An application with the job and applicant it links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct ApplicationDetails {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub application: Application,
    pub job_role: String,
    pub company_id: Uuid,
    pub employer_id: Uuid,
    pub applicant_id: Uuid,
    pub applicant_name: String,
    pub applicant_email: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ApplyDto {
    pub job_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateApplicationStatusDto {
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ApplicationFilterParams {
    #[serde(default, deserialize_with = "deserialize_optional_uuid")]
    pub job_id: Option<Uuid>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Store-level application query. Exactly one side is normally set:
/// `employer_id` for the recruiter view, `profile_id` for the applicant view.
#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub employer_id: Option<Uuid>,
    pub profile_id: Option<Uuid>,
    pub job_id: Option<Uuid>,
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ApplicationStats {
    pub applied_jobs: i64,
    /// Applications whose status moved away from `applied`
    pub recruiter_actions: i64,
    pub shortlisted_jobs: i64,
}

impl ApplicationStats {
    pub fn from_statuses<I: IntoIterator<Item = ApplicationStatus>>(statuses: I) -> Self {
        statuses
            .into_iter()
            .fold(ApplicationStats::default(), |mut stats, status| {
                stats.applied_jobs += 1;
                if status != ApplicationStatus::Applied {
                    stats.recruiter_actions += 1;
                }
                if status == ApplicationStatus::Shortlisted {
                    stats.shortlisted_jobs += 1;
                }
                stats
            })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedApplicationsResponse {
    pub data: Vec<ApplicationDetails>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::UnderReviewed).unwrap(),
            "\"under-reviewed\""
        );
        assert_eq!("on-hold".parse(), Ok(ApplicationStatus::OnHold));
        assert!("hired".parse::<ApplicationStatus>().is_err());
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Applied);
    }

    #[test]
    fn test_stats_from_statuses() {
        let stats = ApplicationStats::from_statuses([
            ApplicationStatus::Applied,
            ApplicationStatus::Shortlisted,
            ApplicationStatus::Rejected,
            ApplicationStatus::Shortlisted,
        ]);
        assert_eq!(
            stats,
            ApplicationStats {
                applied_jobs: 4,
                recruiter_actions: 3,
                shortlisted_jobs: 2,
            }
        );
    }

    #[test]
    fn test_status_dto_rejects_unknown_status() {
        assert!(serde_json::from_str::<UpdateApplicationStatusDto>(r#"{"status":"hired"}"#).is_err());
    }
}
