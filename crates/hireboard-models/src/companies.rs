//! Companies.
//!
//! One company per creator. The store enforces that with a unique index and
//! reports a second insert as a conflict.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use hireboard_core::serde::deserialize_optional_bool;
use hireboard_core::{LifecycleState, PaginationMeta, PaginationParams};

use crate::validation::non_blank;

pub const COMPANY_EXISTS_MESSAGE: &str =
    "There is already a company linked with the user profile.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Company {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub name: String,
    pub location: String,
    pub about: String,
    pub team_members: Option<i32>,
    pub social_profiles: Option<String>,
    pub founded_year: Option<i32>,
    pub is_created: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    pub fn lifecycle(&self) -> LifecycleState {
        LifecycleState::from_flags(self.is_created, self.is_deleted)
    }

    pub fn set_lifecycle(&mut self, state: LifecycleState) {
        (self.is_created, self.is_deleted) = state.flags();
    }
}

/// A company with the number of its active, non-deleted jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow, ToSchema)]
pub struct CompanyWithStats {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub company: Company,
    pub active_jobs: i64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCompanyDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub about: Option<String>,
    #[validate(range(min = 0))]
    pub team_members: Option<i32>,
    #[validate(url)]
    pub social_profiles: Option<String>,
    #[validate(range(min = 1800, max = 2100))]
    pub founded_year: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCompanyDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub location: Option<String>,
    #[validate(length(max = 500))]
    pub about: Option<String>,
    #[validate(range(min = 0))]
    pub team_members: Option<i32>,
    #[validate(url)]
    pub social_profiles: Option<String>,
    #[validate(range(min = 1800, max = 2100))]
    pub founded_year: Option<i32>,
}

/// Fields of a company about to be inserted.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub creator_id: Uuid,
    pub name: String,
    pub location: String,
    pub about: String,
    pub team_members: Option<i32>,
    pub social_profiles: Option<String>,
    pub founded_year: Option<i32>,
}

impl CreateCompanyDto {
    pub fn into_new(self, creator_id: Uuid) -> NewCompany {
        NewCompany {
            creator_id,
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            about: non_blank(self.about).unwrap_or_default(),
            team_members: self.team_members,
            social_profiles: non_blank(self.social_profiles),
            founded_year: self.founded_year,
        }
    }
}

/// A partial company update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyChanges {
    pub name: Option<String>,
    pub location: Option<String>,
    pub about: Option<String>,
    pub team_members: Option<i32>,
    pub social_profiles: Option<String>,
    pub founded_year: Option<i32>,
}

impl From<UpdateCompanyDto> for CompanyChanges {
    fn from(dto: UpdateCompanyDto) -> Self {
        Self {
            name: non_blank(dto.name),
            location: non_blank(dto.location),
            about: dto.about.map(|a| a.trim().to_string()),
            team_members: dto.team_members,
            social_profiles: non_blank(dto.social_profiles),
            founded_year: dto.founded_year,
        }
    }
}

impl CompanyChanges {
    pub fn apply(&self, company: &mut Company) {
        if let Some(name) = &self.name {
            company.name = name.clone();
        }
        if let Some(location) = &self.location {
            company.location = location.clone();
        }
        if let Some(about) = &self.about {
            company.about = about.clone();
        }
        if let Some(team_members) = self.team_members {
            company.team_members = Some(team_members);
        }
        if let Some(social_profiles) = &self.social_profiles {
            company.social_profiles = Some(social_profiles.clone());
        }
        if let Some(founded_year) = self.founded_year {
            company.founded_year = Some(founded_year);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct CompanyFilterParams {
    /// Case-insensitive substring match on the name
    pub name: Option<String>,
    /// Case-insensitive substring match on the location
    pub location: Option<String>,
    /// Include deleted companies (moderators only, ignored otherwise)
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub include_deleted: Option<bool>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Store-level company query.
#[derive(Debug, Clone, Default)]
pub struct CompanyFilter {
    pub name: Option<String>,
    pub location: Option<String>,
    pub include_deleted: bool,
    pub pagination: PaginationParams,
}

impl CompanyFilterParams {
    /// `audit` is whether the caller may see deleted records.
    pub fn into_filter(self, audit: bool) -> CompanyFilter {
        CompanyFilter {
            name: non_blank(self.name),
            location: non_blank(self.location),
            include_deleted: audit && self.include_deleted.unwrap_or(false),
            pagination: self.pagination,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedCompaniesResponse {
    pub data: Vec<CompanyWithStats>,
    pub meta: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_rejects_unknown_fields() {
        let json = r#"{"name":"Acme","location":"Lagos","is_deleted":true}"#;
        assert!(serde_json::from_str::<CreateCompanyDto>(json).is_err());
    }

    #[test]
    fn test_into_new_trims_and_defaults() {
        let dto: CreateCompanyDto =
            serde_json::from_str(r#"{"name":" Acme ","location":"Lagos","social_profiles":""}"#)
                .unwrap();
        let creator = Uuid::new_v4();
        let new = dto.into_new(creator);
        assert_eq!(new.creator_id, creator);
        assert_eq!(new.name, "Acme");
        assert_eq!(new.about, "");
        assert_eq!(new.social_profiles, None);
    }

    #[test]
    fn test_include_deleted_needs_audit_rights() {
        let params = CompanyFilterParams {
            include_deleted: Some(true),
            ..Default::default()
        };
        assert!(!params.clone().into_filter(false).include_deleted);
        assert!(params.into_filter(true).include_deleted);
    }

    #[test]
    fn test_changes_apply_only_given_fields() {
        let now = Utc::now();
        let mut company = Company {
            id: Uuid::new_v4(),
            creator_id: Uuid::new_v4(),
            name: "Acme".into(),
            location: "Lagos".into(),
            about: "Widgets".into(),
            team_members: Some(5),
            social_profiles: None,
            founded_year: Some(2001),
            is_created: true,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        let changes = CompanyChanges::from(UpdateCompanyDto {
            location: Some("Abuja".into()),
            ..Default::default()
        });
        changes.apply(&mut company);
        assert_eq!(company.location, "Abuja");
        assert_eq!(company.name, "Acme");
        assert_eq!(company.team_members, Some(5));
    }
}
