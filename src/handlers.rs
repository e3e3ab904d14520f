use crate::day::today;
use crate::errors::AppError;
use crate::models::{NameRequest, StateResponse, StreakEntry};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut session = state.session.lock().await;
    let day = today();
    let streaks = session.streaks(day);
    Html(render_index(session.tracker(day), &streaks))
}

// JSON API

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let mut session = state.session.lock().await;
    Json(session.tracker(today()).to_response())
}

pub async fn get_streaks(State(state): State<AppState>) -> Json<Vec<StreakEntry>> {
    let session = state.session.lock().await;
    Json(session.streaks(today()))
}

pub async fn create_profile(
    State(state): State<AppState>,
    Json(payload): Json<NameRequest>,
) -> Result<Json<StateResponse>, AppError> {
    let mut session = state.session.lock().await;
    session.create_profile(&payload.name, Local::now()).await?;
    Ok(Json(session.tracker(today()).to_response()))
}

pub async fn select_profile(
    State(state): State<AppState>,
    Json(payload): Json<NameRequest>,
) -> Json<StateResponse> {
    let mut session = state.session.lock().await;
    session.select_profile(&payload.name, today());
    Json(session.tracker(today()).to_response())
}

pub async fn switch_profile(State(state): State<AppState>) -> Json<StateResponse> {
    let mut session = state.session.lock().await;
    session.switch_profile();
    Json(session.tracker(today()).to_response())
}

pub async fn add_habit(
    State(state): State<AppState>,
    Json(payload): Json<NameRequest>,
) -> Result<Json<StateResponse>, AppError> {
    let mut session = state.session.lock().await;
    session.add_habit(&payload.name, Local::now()).await?;
    Ok(Json(session.tracker(today()).to_response()))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StateResponse>, AppError> {
    let mut session = state.session.lock().await;
    session.toggle_habit(id, today()).await?;
    Ok(Json(session.tracker(today()).to_response()))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StateResponse>, AppError> {
    let mut session = state.session.lock().await;
    session.delete_habit(id, today()).await?;
    Ok(Json(session.tracker(today()).to_response()))
}

// HTML form posts

pub async fn form_create_profile(
    State(state): State<AppState>,
    Form(form): Form<NameRequest>,
) -> Result<Redirect, AppError> {
    let now = Local::now();
    state.session.lock().await.create_profile(&form.name, now).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_select_profile(
    State(state): State<AppState>,
    Form(form): Form<NameRequest>,
) -> Redirect {
    state.session.lock().await.select_profile(&form.name, today());
    Redirect::to("/")
}

pub async fn form_switch_profile(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.switch_profile();
    Redirect::to("/")
}

pub async fn form_add_habit(
    State(state): State<AppState>,
    Form(form): Form<NameRequest>,
) -> Result<Redirect, AppError> {
    let now = Local::now();
    state.session.lock().await.add_habit(&form.name, now).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.session.lock().await.toggle_habit(id, today()).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_delete_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.session.lock().await.delete_habit(id, today()).await?;
    Ok(Redirect::to("/"))
}

pub async fn form_toggle_streaks(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.toggle_streaks();
    Redirect::to("/")
}
