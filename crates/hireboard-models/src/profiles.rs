//! Job seeker profiles.
//!
//! A profile belongs to exactly one Job Seeker identity and is written
//! through an upsert keyed by that identity. Profiles are never deleted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use hireboard_core::{PaginationMeta, PaginationParams};

use crate::validation::{non_blank, normalize_experience, validate_experience, validate_plain_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Education {
    #[validate(length(max = 20))]
    pub from_date: Option<String>,
    #[validate(length(max = 20))]
    pub till_date: Option<String>,
    #[validate(length(max = 20))]
    pub grade: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub course: String,
    #[validate(length(min = 1, max = 200))]
    pub university: String,
    #[validate(length(max = 50))]
    pub course_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProfessionalSkill {
    #[validate(length(min = 1, max = 100))]
    pub skill_name: String,
    #[validate(length(max = 20))]
    pub last_used: Option<String>,
    #[validate(range(min = 0, max = 80))]
    pub total_yoe: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct WorkExperience {
    #[serde(rename = "from")]
    #[validate(length(min = 1, max = 20))]
    pub from_date: String,
    #[serde(rename = "till")]
    #[validate(length(min = 1, max = 20))]
    pub till_date: String,
    #[validate(length(min = 1, max = 100))]
    pub designation: String,
    #[validate(length(min = 1, max = 200))]
    pub company_name: String,
    pub company_id: Option<Uuid>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[serde(default)]
    pub found_through_null: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub experience: Option<String>,
    pub profession: Option<String>,
    pub about: Option<String>,
    pub education: Json<Vec<Education>>,
    pub professional_skills: Json<Vec<ProfessionalSkill>>,
    pub work_experience: Json<Vec<WorkExperience>>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub social_handles: Option<String>,
    pub resume: Option<String>,
    pub profile_picture: Option<String>,
    pub cover_letter: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// A profile with no details, created for a new Job Seeker.
    pub fn empty(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            age: None,
            gender: None,
            address: None,
            experience: None,
            profession: None,
            about: None,
            education: Json(Vec::new()),
            professional_skills: Json(Vec::new()),
            work_experience: Json(Vec::new()),
            phone: None,
            website: None,
            social_handles: None,
            resume: None,
            profile_picture: None,
            cover_letter: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A profile joined with its identity and, for employers, whether it is
/// on their favorites list.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProfileView {
    #[sqlx(flatten)]
    pub profile: UserProfile,
    pub name: String,
    pub email: String,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactDetails {
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Website")]
    pub website: Option<String>,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Social Handles")]
    pub social_handles: Vec<String>,
}

/// The public shape of a profile. Contact fields are grouped under
/// `contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub experience: Option<String>,
    pub profession: Option<String>,
    pub about: Option<String>,
    pub education: Vec<Education>,
    pub professional_skills: Vec<ProfessionalSkill>,
    pub work_experience: Vec<WorkExperience>,
    pub resume: Option<String>,
    pub profile_picture: Option<String>,
    pub cover_letter: Option<String>,
    pub contact: ContactDetails,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Splits a stored social handles string into URLs.
pub fn split_social_handles(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

impl From<ProfileView> for ProfileResponse {
    fn from(view: ProfileView) -> Self {
        let p = view.profile;
        let social_handles = split_social_handles(p.social_handles.as_deref());
        Self {
            id: p.id,
            user_id: p.user_id,
            name: view.name,
            age: p.age,
            gender: p.gender,
            experience: p.experience,
            profession: p.profession,
            about: p.about,
            education: p.education.0,
            professional_skills: p.professional_skills.0,
            work_experience: p.work_experience.0,
            resume: p.resume,
            profile_picture: p.profile_picture,
            cover_letter: p.cover_letter,
            contact: ContactDetails {
                address: p.address,
                phone: p.phone,
                website: p.website,
                email: view.email,
                social_handles,
            },
            is_favorite: view.is_favorite,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpsertProfileDto {
    /// Renames the identity when it differs from the stored name
    #[validate(length(min = 1, max = 100), custom(function = "validate_plain_text"))]
    pub name: Option<String>,
    #[validate(range(min = 15, max = 100))]
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    #[validate(length(max = 100))]
    pub address: Option<String>,
    /// Years of experience; values above 15 are stored as "15+"
    #[validate(custom(function = "validate_experience"))]
    pub experience: Option<String>,
    #[validate(length(max = 100))]
    pub profession: Option<String>,
    #[validate(length(max = 500))]
    pub about: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub education: Vec<Education>,
    #[validate(nested)]
    #[serde(default)]
    pub professional_skills: Vec<ProfessionalSkill>,
    #[validate(nested)]
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[validate(length(min = 7, max = 15))]
    pub phone: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[validate(length(max = 500))]
    pub social_handles: Option<String>,
}

/// The full set of profile fields written by an upsert. Every field is
/// overwritten; documents are not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub experience: Option<String>,
    pub profession: Option<String>,
    pub about: Option<String>,
    pub education: Vec<Education>,
    pub professional_skills: Vec<ProfessionalSkill>,
    pub work_experience: Vec<WorkExperience>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub social_handles: Option<String>,
}

impl UpsertProfileDto {
    /// Splits the payload into the identity rename and the profile fields.
    pub fn into_parts(self) -> (Option<String>, ProfileFields) {
        let fields = ProfileFields {
            age: self.age,
            gender: self.gender.map(|g| g.as_str().to_string()),
            address: non_blank(self.address),
            experience: non_blank(self.experience).map(|e| normalize_experience(&e)),
            profession: non_blank(self.profession),
            about: non_blank(self.about),
            education: self.education,
            professional_skills: self.professional_skills,
            work_experience: self.work_experience,
            phone: non_blank(self.phone),
            website: non_blank(self.website),
            social_handles: non_blank(self.social_handles),
        };
        (non_blank(self.name), fields)
    }
}

impl ProfileFields {
    pub fn apply(self, profile: &mut UserProfile) {
        profile.age = self.age;
        profile.gender = self.gender;
        profile.address = self.address;
        profile.experience = self.experience;
        profile.profession = self.profession;
        profile.about = self.about;
        profile.education = Json(self.education);
        profile.professional_skills = Json(self.professional_skills);
        profile.work_experience = Json(self.work_experience);
        profile.phone = self.phone;
        profile.website = self.website;
        profile.social_handles = self.social_handles;
    }
}

/// References to uploaded documents. Attaching a resume completes the
/// owner's profile.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateDocumentsDto {
    #[validate(url)]
    pub resume: Option<String>,
    #[validate(url)]
    pub profile_picture: Option<String>,
    #[validate(url)]
    pub cover_letter: Option<String>,
}

/// Document references to set. `None` keeps the stored reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDocuments {
    pub resume: Option<String>,
    pub profile_picture: Option<String>,
    pub cover_letter: Option<String>,
}

impl From<UpdateDocumentsDto> for ProfileDocuments {
    fn from(dto: UpdateDocumentsDto) -> Self {
        Self {
            resume: non_blank(dto.resume),
            profile_picture: non_blank(dto.profile_picture),
            cover_letter: non_blank(dto.cover_letter),
        }
    }
}

impl ProfileDocuments {
    pub fn is_empty(&self) -> bool {
        self.resume.is_none() && self.profile_picture.is_none() && self.cover_letter.is_none()
    }

    pub fn apply(&self, profile: &mut UserProfile) {
        if let Some(resume) = &self.resume {
            profile.resume = Some(resume.clone());
        }
        if let Some(picture) = &self.profile_picture {
            profile.profile_picture = Some(picture.clone());
        }
        if let Some(letter) = &self.cover_letter {
            profile.cover_letter = Some(letter.clone());
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProfileFilterParams {
    /// Case-insensitive substring match on the profession
    pub profession: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Store-level profile query. `viewer` decides `is_favorite`.
#[derive(Debug, Clone, Default)]
pub struct ProfileFilter {
    pub profession: Option<String>,
    pub viewer: Option<Uuid>,
    pub pagination: PaginationParams,
}

impl ProfileFilterParams {
    pub fn into_filter(self, viewer: Uuid) -> ProfileFilter {
        ProfileFilter {
            profession: non_blank(self.profession),
            viewer: Some(viewer),
            pagination: self.pagination,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedProfilesResponse {
    pub data: Vec<ProfileResponse>,
    pub meta: PaginationMeta,
}
