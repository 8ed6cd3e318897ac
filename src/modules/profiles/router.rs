use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

use super::controller::{
    create_profile, delete_profile, favorite_profile, get_my_profile, get_profile, get_profiles,
    unfavorite_profile, update_my_documents, update_my_profile,
};

pub fn init_profiles_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_profile).get(get_profiles))
        .route("/me", get(get_my_profile).put(update_my_profile))
        .route("/me/documents", put(update_my_documents))
        .route("/{id}", get(get_profile).delete(delete_profile))
        .route(
            "/{id}/favorite",
            post(favorite_profile).delete(unfavorite_profile),
        )
}
