use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/profiles", post(handlers::form_create_profile))
        .route("/profiles/select", post(handlers::form_select_profile))
        .route("/profiles/switch", post(handlers::form_switch_profile))
        .route("/habits", post(handlers::form_add_habit))
        .route("/habits/:id/toggle", post(handlers::form_toggle_habit))
        .route("/habits/:id/delete", post(handlers::form_delete_habit))
        .route("/streaks/toggle", post(handlers::form_toggle_streaks))
        .route("/api/state", get(handlers::get_state))
        .route("/api/streaks", get(handlers::get_streaks))
        .route("/api/profiles", post(handlers::create_profile))
        .route("/api/profiles/select", post(handlers::select_profile))
        .route("/api/profiles/switch", post(handlers::switch_profile))
        .route("/api/habits", post(handlers::add_habit))
        .route("/api/habits/:id/toggle", post(handlers::toggle_habit))
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .with_state(state)
}
