//! Seeding configuration.

/// Password shared by every seeded identity.
pub const SEED_PASSWORD: &str = "password123";

/// E-mail domain of seeded identities. `clear-seed` deletes by it.
pub const SEED_EMAIL_DOMAIN: &str = "seed.hireboard.dev";

/// How much fake data to generate.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub employers: usize,
    pub jobs_per_company: usize,
    pub job_seekers: usize,
    /// bcrypt cost for the shared password hash
    pub password_cost: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            employers: 5,
            jobs_per_company: 4,
            job_seekers: 10,
            password_cost: 4,
        }
    }
}

impl SeedConfig {
    /// Creates a configuration with `employers` companies and default
    /// counts for the rest.
    pub fn new(employers: usize) -> Self {
        Self {
            employers,
            ..Default::default()
        }
    }

    pub fn with_jobs_per_company(mut self, jobs: usize) -> Self {
        self.jobs_per_company = jobs;
        self
    }

    pub fn with_job_seekers(mut self, seekers: usize) -> Self {
        self.job_seekers = seekers;
        self
    }

    pub fn total_jobs(&self) -> usize {
        self.employers * self.jobs_per_company
    }
}

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub employers: usize,
    pub companies: usize,
    pub jobs: usize,
    pub job_seekers: usize,
}
