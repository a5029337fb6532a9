use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use pushfit_core::users::{RegisterUser, User, UserStats, UserSummary};
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, main_lib::AppState};

async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterUser>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.register(payload).await?;
    Ok(Json(user))
}

async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<UserSummary>>> {
    let users = state.user_service.get_all()?;
    Ok(Json(users))
}

#[derive(Deserialize)]
struct HasPasswordQuery {
    name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HasPasswordResponse {
    has_password: bool,
}

async fn has_password(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HasPasswordQuery>,
) -> ApiResult<Json<HasPasswordResponse>> {
    let has_password = state.user_service.has_password(&query.name)?;
    Ok(Json(HasPasswordResponse { has_password }))
}

/// The full snapshot every progress view is computed from: all users with
/// goals and achievements attached.
async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<UserStats>>> {
    let stats = state.user_service.get_stats()?;
    Ok(Json(stats))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/register", post(register))
        .route("/users", get(list_users))
        .route("/users/has-password", get(has_password))
        .route("/stats", get(get_stats))
}
