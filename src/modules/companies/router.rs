use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_company, delete_company, get_companies, get_company, get_company_jobs, get_my_company,
    update_company,
};

pub fn init_companies_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_company).get(get_companies))
        .route("/me", get(get_my_company))
        .route(
            "/{id}",
            get(get_company).put(update_company).delete(delete_company),
        )
        .route("/{id}/jobs", get(get_company_jobs))
}
