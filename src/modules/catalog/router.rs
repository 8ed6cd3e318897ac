use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_catalog;

pub fn init_catalog_router() -> Router<AppState> {
    Router::new().route("/", get(get_catalog))
}
