use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_job, delete_job, get_job, get_job_categories, get_jobs, get_trending_keywords,
    update_job,
};

pub fn init_jobs_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_job).get(get_jobs))
        .route("/categories", get(get_job_categories))
        .route("/trending-keywords", get(get_trending_keywords))
        .route("/{id}", get(get_job).put(update_job).delete(delete_job))
}
