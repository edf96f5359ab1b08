use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{add_form, delete_person, edit_form, home, save_person, update_person},
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/add", get(add_form))
        .route("/save", post(save_person))
        .route("/edit/{id}", get(edit_form))
        .route("/update", post(update_person))
        .route("/delete/{id}", get(delete_person))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
