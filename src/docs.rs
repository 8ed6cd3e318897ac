use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use hireboard_config::{Catalog, Choice};
use hireboard_core::{PaginationMeta, PaginationParams, UserType};
use hireboard_models::{
    Application, ApplicationDetails, ApplicationStats, ApplicationStatus, ApplyDto,
    AuthResponse, Company, CompanyWithStats, ContactMessage, CreateCompanyDto,
    CreateContactMessageDto, CreateJobDto, Education, Gender, JobCategory, JobResponse, JobType,
    LoginDto, PaginatedApplicationsResponse, PaginatedCompaniesResponse,
    PaginatedContactMessagesResponse, PaginatedJobsResponse, PaginatedProfilesResponse,
    ProfessionalSkill, ProfileResponse, RegisterDto, UpdateApplicationStatusDto,
    UpdateCompanyDto, UpdateDocumentsDto, UpdateJobDto, UpsertProfileDto, UserResponse,
    WorkExperience,
};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::jobs::controller::TrendingKeywordsResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_me,
        crate::modules::jobs::controller::create_job,
        crate::modules::jobs::controller::get_jobs,
        crate::modules::jobs::controller::get_job,
        crate::modules::jobs::controller::update_job,
        crate::modules::jobs::controller::delete_job,
        crate::modules::jobs::controller::get_job_categories,
        crate::modules::jobs::controller::get_trending_keywords,
        crate::modules::companies::controller::create_company,
        crate::modules::companies::controller::get_companies,
        crate::modules::companies::controller::get_my_company,
        crate::modules::companies::controller::get_company,
        crate::modules::companies::controller::get_company_jobs,
        crate::modules::companies::controller::update_company,
        crate::modules::companies::controller::delete_company,
        crate::modules::profiles::controller::create_profile,
        crate::modules::profiles::controller::update_my_profile,
        crate::modules::profiles::controller::get_profiles,
        crate::modules::profiles::controller::get_my_profile,
        crate::modules::profiles::controller::update_my_documents,
        crate::modules::profiles::controller::get_profile,
        crate::modules::profiles::controller::delete_profile,
        crate::modules::profiles::controller::favorite_profile,
        crate::modules::profiles::controller::unfavorite_profile,
        crate::modules::applications::controller::apply_to_job,
        crate::modules::applications::controller::get_applications,
        crate::modules::applications::controller::update_application_status,
        crate::modules::applications::controller::get_applied_jobs,
        crate::modules::applications::controller::get_applied_job,
        crate::modules::applications::controller::get_application_stats,
        crate::modules::contact::controller::create_contact_message,
        crate::modules::contact::controller::get_contact_messages,
        crate::modules::catalog::controller::get_catalog,
    ),
    components(
        schemas(
            RegisterDto,
            LoginDto,
            AuthResponse,
            UserResponse,
            UserType,
            ErrorResponse,
            JobType,
            CreateJobDto,
            UpdateJobDto,
            JobResponse,
            JobCategory,
            PaginatedJobsResponse,
            TrendingKeywordsResponse,
            Company,
            CompanyWithStats,
            CreateCompanyDto,
            UpdateCompanyDto,
            PaginatedCompaniesResponse,
            Gender,
            Education,
            ProfessionalSkill,
            WorkExperience,
            UpsertProfileDto,
            UpdateDocumentsDto,
            ProfileResponse,
            PaginatedProfilesResponse,
            ApplicationStatus,
            ApplyDto,
            UpdateApplicationStatusDto,
            Application,
            ApplicationDetails,
            ApplicationStats,
            PaginatedApplicationsResponse,
            CreateContactMessageDto,
            ContactMessage,
            PaginatedContactMessagesResponse,
            Catalog,
            Choice,
            PaginationMeta,
            PaginationParams,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and the current identity"),
        (name = "Jobs", description = "Job postings"),
        (name = "Companies", description = "Employer companies"),
        (name = "Profiles", description = "Job seeker profiles and employer favorites"),
        (name = "Applications", description = "Job applications and their status"),
        (name = "Contact", description = "Public contact form"),
        (name = "Catalog", description = "Static choice tables")
    ),
    info(
        title = "Hireboard API",
        version = "0.1.0",
        description = "A job board REST API built with Rust, Axum, and PostgreSQL with role-based permissions and soft deletes.",
        contact(
            name = "API Support",
            email = "support@hireboard.dev"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_resource() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/api/auth/register",
            "/api/jobs/{id}",
            "/api/companies/me",
            "/api/profiles/{id}/favorite",
            "/api/applications/{id}/status",
            "/api/contact",
            "/api/catalog",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
