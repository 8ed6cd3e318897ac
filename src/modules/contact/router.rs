use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{create_contact_message, get_contact_messages};

pub fn init_contact_router() -> Router<AppState> {
    Router::new().route("/", post(create_contact_message).get(get_contact_messages))
}
