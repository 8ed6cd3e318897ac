use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use hireboard::router::init_router;
use hireboard::state::AppState;
use hireboard_auth::{create_access_token, hash_password_with_cost};
use hireboard_core::UserType;
use hireboard_db::{JobBoardStore, MemoryStore};
use hireboard_models::{Company, CreateCompanyDto, CreateJobDto, JobType, NewUser, User};

pub const TEST_PASSWORD: &str = "testpass123";

/// The router over a fresh in-memory store, plus direct access to the store
/// for seeding and inspection.
#[allow(dead_code)]
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub state: AppState,
    pub router: Router,
}

#[allow(dead_code)]
pub struct TestUser {
    pub user: User,
    pub token: String,
}

impl TestUser {
    #[allow(dead_code)]
    pub fn id(&self) -> Uuid {
        self.user.id
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        let store = Arc::new(MemoryStore::new());
        let state = AppState::with_store(store.clone());
        let router = init_router(state.clone());
        Self {
            store,
            state,
            router,
        }
    }

    /// Inserts an identity straight into the store and mints its token.
    /// Uses a cheap bcrypt cost so tests stay fast.
    pub async fn create_user(&self, user_type: UserType, is_moderator: bool) -> TestUser {
        let user = self
            .store
            .insert_user(NewUser {
                email: generate_unique_email(),
                name: "Test User".to_string(),
                password_hash: hash_password_with_cost(TEST_PASSWORD, 4).unwrap(),
                user_type,
                is_moderator,
            })
            .await
            .unwrap();
        let token = create_access_token(user.id, &user.email, &self.state.jwt_config).unwrap();
        TestUser { user, token }
    }

    pub async fn employer(&self) -> TestUser {
        self.create_user(UserType::Employer, false).await
    }

    pub async fn job_seeker(&self) -> TestUser {
        self.create_user(UserType::JobSeeker, false).await
    }

    pub async fn moderator(&self) -> TestUser {
        self.create_user(UserType::Employer, true).await
    }

    /// An employer whose profile is completed by registering a company.
    pub async fn employer_with_company(&self) -> (TestUser, Company) {
        let employer = self.employer().await;
        let company = self
            .store
            .insert_company(company_dto("Acme").into_new(employer.id()))
            .await
            .unwrap();
        (employer, company)
    }

    /// A job seeker whose profile is completed by attaching a resume.
    pub async fn job_seeker_with_resume(&self) -> TestUser {
        let seeker = self.job_seeker().await;
        let (status, _) = self
            .send(
                "PUT",
                "/api/profiles/me/documents",
                Some(&seeker.token),
                Some(json!({ "resume": "https://files.example.com/resume.pdf" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        seeker
    }

    /// Posts a job through the API and returns its id.
    pub async fn post_job(&self, employer: &TestUser) -> Uuid {
        let (status, body) = self
            .send("POST", "/api/jobs", Some(&employer.token), Some(job_body()))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_str().unwrap().parse().unwrap()
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }
}

pub fn company_dto(name: &str) -> CreateCompanyDto {
    CreateCompanyDto {
        name: name.to_string(),
        location: "Lagos".to_string(),
        about: Some("We build things".to_string()),
        team_members: Some(12),
        social_profiles: None,
        founded_year: Some(2015),
    }
}

#[allow(dead_code)]
pub fn company_body(name: &str) -> Value {
    json!({
        "name": name,
        "location": "Lagos",
        "about": "We build things",
        "team_members": 12,
        "founded_year": 2015
    })
}

#[allow(dead_code)]
pub fn job_dto() -> CreateJobDto {
    serde_json::from_value(job_body()).unwrap()
}

pub fn job_body() -> Value {
    json!({
        "job_role": "Backend Engineer",
        "location": "Remote",
        "experience": 3,
        "job_type": JobType::FullTime,
        "vacancy_position": 2,
        "industry": "Software",
        "category": "Engineering"
    })
}
