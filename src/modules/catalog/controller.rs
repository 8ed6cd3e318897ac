use axum::{Json, extract::State};

use hireboard_config::Catalog;

use crate::state::AppState;

/// Choice tables for job types, application statuses, genders and user
/// types, plus the trending search keywords
#[utoipa::path(
    get,
    path = "/api/catalog",
    responses(
        (status = 200, description = "Static choice tables", body = Catalog)
    ),
    tag = "Catalog"
)]
pub async fn get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog.as_ref().clone())
}
