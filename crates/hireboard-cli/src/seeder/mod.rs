//! Fake data seeding.
//!
//! Seeds employers with one company each, jobs under every company, and job
//! seekers with filled-in profiles. All identities share
//! [`SEED_PASSWORD`] and live under [`SEED_EMAIL_DOMAIN`].

mod generate;
mod models;

use std::time::Instant;

use anyhow::{Context, anyhow};
use uuid::Uuid;

use hireboard_auth::hash_password_with_cost;
use hireboard_core::UserType;
use hireboard_db::{JobBoardStore, PgPool};

pub use generate::{fake_company, fake_job, fake_profile, fake_user};
pub use models::{SEED_EMAIL_DOMAIN, SEED_PASSWORD, SeedConfig, SeedSummary};

/// Seeds everything described by `config`.
pub async fn seed_all(store: &dyn JobBoardStore, config: SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();
    let password_hash = hash_password_with_cost(SEED_PASSWORD, config.password_cost)
        .map_err(|e| anyhow!("Failed to hash password: {}", e.error))?;
    let run = Uuid::new_v4().simple().to_string()[..8].to_string();

    let mut summary = SeedSummary::default();

    println!(
        "🏢 Seeding {} employers with {} jobs each...",
        config.employers, config.jobs_per_company
    );
    for index in 0..config.employers {
        let employer = store
            .insert_user(fake_user(UserType::Employer, &run, index, &password_hash))
            .await
            .context("Failed to insert employer")?;
        summary.employers += 1;

        let company = store
            .insert_company(fake_company(employer.id))
            .await
            .context("Failed to insert company")?;
        summary.companies += 1;

        for _ in 0..config.jobs_per_company {
            store
                .insert_job(fake_job(company.id, employer.id))
                .await
                .context("Failed to insert job")?;
            summary.jobs += 1;
        }
    }

    println!("👤 Seeding {} job seekers...", config.job_seekers);
    for index in 0..config.job_seekers {
        let seeker = store
            .insert_user(fake_user(UserType::JobSeeker, &run, index, &password_hash))
            .await
            .context("Failed to insert job seeker")?;
        store
            .upsert_profile(seeker.id, None, fake_profile())
            .await
            .context("Failed to fill profile")?;
        summary.job_seekers += 1;
    }

    println!("   ✓ Seeded {:?} in {:?}", summary, start_time.elapsed());
    println!("   Password for every seeded account: {SEED_PASSWORD}");

    Ok(summary)
}

/// Deletes every seeded identity. Companies, jobs, profiles and
/// applications go with them through the foreign key cascades.
pub async fn clear_seed(pool: &PgPool) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded data...");

    let deleted = sqlx::query("DELETE FROM users WHERE email LIKE $1")
        .bind(format!("%@{SEED_EMAIL_DOMAIN}"))
        .execute(pool)
        .await
        .context("Failed to delete seeded users")?
        .rows_affected();

    println!(
        "   ✓ Deleted {} seeded users in {:?}",
        deleted,
        start_time.elapsed()
    );

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hireboard_core::PaginationParams;
    use hireboard_db::MemoryStore;
    use hireboard_models::{CompanyFilter, JobFilter, ProfileFilter};

    #[tokio::test]
    async fn test_seed_all_counts() {
        let store = MemoryStore::new();
        let config = SeedConfig::new(2).with_jobs_per_company(3).with_job_seekers(4);

        let summary = seed_all(&store, config.clone()).await.unwrap();

        assert_eq!(
            summary,
            SeedSummary {
                employers: 2,
                companies: 2,
                jobs: config.total_jobs(),
                job_seekers: 4,
            }
        );

        let pagination = PaginationParams {
            limit: Some(100),
            ..Default::default()
        };
        let jobs = store
            .list_jobs(&JobFilter {
                pagination: pagination.clone(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(jobs.total, 6);

        let companies = store
            .list_companies(&CompanyFilter {
                pagination: pagination.clone(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(companies.items.iter().all(|c| c.active_jobs == 3));

        let profiles = store
            .list_profiles(&ProfileFilter {
                pagination,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(profiles.total, 4);
        assert!(profiles.items.iter().all(|p| p.profile.profession.is_some()));
    }

    #[tokio::test]
    async fn test_seed_twice_does_not_collide() {
        let store = MemoryStore::new();
        seed_all(&store, SeedConfig::new(1).with_job_seekers(1))
            .await
            .unwrap();
        seed_all(&store, SeedConfig::new(1).with_job_seekers(1))
            .await
            .unwrap();
    }
}
