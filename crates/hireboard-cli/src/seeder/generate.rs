//! Fake record generation.

use fake::Fake;
use fake::faker::address::en::{CityName, CountryName};
use fake::faker::company::en::{CatchPhrase, CompanyName, Industry};
use fake::faker::job::en::{Field, Title};
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use uuid::Uuid;

use hireboard_core::UserType;
use hireboard_models::{JobType, NewCompany, NewJob, NewUser, ProfileFields};

use super::models::SEED_EMAIL_DOMAIN;

fn truncate(mut value: String, max: usize) -> String {
    if let Some((idx, _)) = value.char_indices().nth(max) {
        value.truncate(idx);
    }
    value
}

/// A seeded identity. `index` keeps e-mails unique within a run and the
/// run id keeps them unique across runs.
pub fn fake_user(user_type: UserType, run: &str, index: usize, password_hash: &str) -> NewUser {
    let name: String = Name().fake();
    let prefix = match user_type {
        UserType::Employer => "employer",
        UserType::JobSeeker => "seeker",
    };

    NewUser {
        email: format!("{prefix}{index}.{run}@{SEED_EMAIL_DOMAIN}"),
        name,
        password_hash: password_hash.to_string(),
        user_type,
        is_moderator: false,
    }
}

pub fn fake_company(creator_id: Uuid) -> NewCompany {
    let city: String = CityName().fake();
    let country: String = CountryName().fake();
    let phrase: String = CatchPhrase().fake();

    NewCompany {
        creator_id,
        name: truncate(CompanyName().fake(), 255),
        location: format!("{city}, {country}"),
        about: phrase,
        team_members: Some((5..500).fake()),
        social_profiles: None,
        founded_year: Some((1950..2024).fake()),
    }
}

pub fn fake_job(company_id: Uuid, employer_id: Uuid) -> NewJob {
    let job_type = JobType::ALL[(0..JobType::ALL.len()).fake::<usize>()];
    let category: String = Field().fake();

    NewJob {
        company_id,
        employer_id,
        job_role: truncate(Title().fake(), 100),
        location: CityName().fake(),
        experience: (0..10).fake(),
        job_type,
        vacancy_position: (1..5).fake(),
        industry: truncate(Industry().fake(), 50),
        category: Some(truncate(category, 20)),
        about: Sentence(8..16).fake(),
        job_responsibilities: Sentence(10..20).fake(),
        skills_required: Sentence(6..12).fake(),
        education_or_certifications: Sentence(4..8).fake(),
    }
}

pub fn fake_profile() -> ProfileFields {
    let years: u32 = (0..20).fake();
    let experience = if years > hireboard_models::validation::EXPERIENCE_CAP {
        format!("{}+", hireboard_models::validation::EXPERIENCE_CAP)
    } else {
        years.to_string()
    };

    ProfileFields {
        age: Some((18..60).fake()),
        experience: Some(experience),
        profession: Some(truncate(Title().fake(), 100)),
        about: Some(Sentence(8..16).fake()),
        address: Some(CityName().fake()),
        ..Default::default()
    }
}
