use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    apply_to_job, get_application_stats, get_applications, get_applied_job, get_applied_jobs,
    update_application_status,
};

pub fn init_applications_router() -> Router<AppState> {
    Router::new()
        .route("/", post(apply_to_job).get(get_applications))
        .route("/applied", get(get_applied_jobs))
        .route("/applied/{job_id}", get(get_applied_job))
        .route("/stats", get(get_application_stats))
        .route("/{id}/status", patch(update_application_status))
}
