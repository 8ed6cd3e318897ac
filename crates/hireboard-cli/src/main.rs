use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use hireboard_auth::DEFAULT_COST;
use hireboard_cli::moderator::create_moderator;
use hireboard_cli::seeder::{self, SeedConfig};
use hireboard_config::DatabaseConfig;
use hireboard_db::{PgStore, init_db_pool};

#[derive(Parser)]
#[command(name = "hireboard-cli")]
#[command(about = "Hireboard CLI - Administrative tools for Hireboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new moderator account
    CreateModerator {
        /// Display name of the moderator
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake employers, companies, jobs and job seekers
    Seed {
        /// Number of employers, each with one company
        #[arg(short = 'e', long, default_value = "5")]
        employers: usize,

        /// Number of jobs per company
        #[arg(short = 'j', long, default_value = "4")]
        jobs: usize,

        /// Number of job seekers with filled-in profiles
        #[arg(short = 's', long, default_value = "10")]
        seekers: usize,
    },
    /// Delete every seeded account and the records they own
    ClearSeed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let db_config = DatabaseConfig::from_env();
    let Some(database_url) = db_config.url else {
        anyhow::bail!("DATABASE_URL must be set");
    };

    let pool = init_db_pool(&database_url, 5).await?;
    let store = PgStore::new(pool);
    store.migrate().await?;

    match cli.command {
        Commands::CreateModerator {
            name,
            email,
            password,
        } => handle_create_moderator(&store, name, email, password).await,
        Commands::Seed {
            employers,
            jobs,
            seekers,
        } => {
            let config = SeedConfig::new(employers)
                .with_jobs_per_company(jobs)
                .with_job_seekers(seekers);
            seeder::seed_all(&store, config).await?;
            Ok(())
        }
        Commands::ClearSeed => {
            seeder::clear_seed(store.pool()).await?;
            Ok(())
        }
    }
}

async fn handle_create_moderator(
    store: &PgStore,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::<String>::new().with_prompt("Name").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::<String>::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    let user = create_moderator(store, &name, &email, &password, DEFAULT_COST).await?;

    println!("\n✅ Moderator created successfully!");
    println!("   Email: {}", user.email);
    println!("   Name: {}", user.name);

    Ok(())
}
