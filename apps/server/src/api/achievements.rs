use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use pushfit_core::achievements::{Achievement, NewAchievement};

use crate::{auth::AuthedUser, error::ApiResult, main_lib::AppState};

async fn log_achievement(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
    Json(payload): Json<NewAchievement>,
) -> ApiResult<Json<Achievement>> {
    let achievement = state
        .achievement_service
        .log_achievement(&authed.user_id, payload)
        .await?;
    Ok(Json(achievement))
}

/// The shared activity log across all users, newest first.
async fn list_achievements(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Achievement>>> {
    let achievements = state.achievement_service.list_all()?;
    Ok(Json(achievements))
}

async fn list_mine(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
) -> ApiResult<Json<Vec<Achievement>>> {
    let achievements = state.achievement_service.list_for_user(&authed.user_id)?;
    Ok(Json(achievements))
}

async fn delete_achievement(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
) -> ApiResult<StatusCode> {
    state
        .achievement_service
        .delete_achievement(&id, &authed.user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/achievements",
            get(list_achievements).post(log_achievement),
        )
        .route("/achievements/mine", get(list_mine))
        .route("/achievements/{id}", delete(delete_achievement))
}
