//! # Hireboard Models
//!
//! Domain records and DTOs for the Hireboard API.
//!
//! Request DTOs reject unknown JSON fields and are turned into store-level
//! field sets through explicit conversions (`CreateJobDto -> NewJob`,
//! `UpdateJobDto -> JobChanges`, ...). Nothing is assigned by name at
//! runtime.
//!
//! # Modules
//!
//! - [`users`]: Identities and their public view
//! - [`auth`]: Registration and login payloads
//! - [`companies`]: Companies
//! - [`jobs`]: Job postings and their response shape
//! - [`profiles`]: Job seeker profiles and favorites
//! - [`applications`]: Job applications
//! - [`contact`]: Contact messages
//! - [`validation`]: Shared field validators

pub mod applications;
pub mod auth;
pub mod companies;
pub mod contact;
pub mod jobs;
pub mod profiles;
pub mod users;
pub mod validation;

pub use applications::{
    Application, ApplicationDetails, ApplicationFilter, ApplicationFilterParams,
    ApplicationStats, ApplicationStatus, ApplyDto, PaginatedApplicationsResponse,
    UpdateApplicationStatusDto,
};
pub use auth::{AuthResponse, LoginDto, RegisterDto};
pub use companies::{
    Company, CompanyChanges, CompanyFilter, CompanyFilterParams, CompanyWithStats,
    CreateCompanyDto, NewCompany, PaginatedCompaniesResponse, UpdateCompanyDto,
};
pub use contact::{ContactMessage, CreateContactMessageDto, NewContactMessage, PaginatedContactMessagesResponse};
pub use jobs::{
    CreateJobDto, Job, JobCategory, JobChanges, JobFilter, JobFilterParams, JobResponse,
    JobType, JobWithStats, NewJob, PaginatedJobsResponse, UpdateJobDto,
};
pub use profiles::{
    Education, Gender, PaginatedProfilesResponse, ProfessionalSkill, ProfileDocuments,
    ProfileFields, ProfileFilter, ProfileFilterParams, ProfileResponse, ProfileView,
    UpdateDocumentsDto, UpsertProfileDto, UserProfile, WorkExperience,
};
pub use users::{NewUser, User, UserResponse};
