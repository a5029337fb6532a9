use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use pushfit_core::auth::Credentials;
use pushfit_core::users::User;
use serde::Serialize;

use crate::{auth::AuthedUser, error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
    token_type: String,
    expires_in: u64,
    user: User,
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Credentials>,
) -> ApiResult<Json<LoginResponse>> {
    let user = state.auth_service.login(payload).await?;
    let token = state.auth.issue_token(&user.id)?;
    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth.expires_in().as_secs(),
        user,
    }))
}

async fn me(
    State(state): State<Arc<AppState>>,
    Extension(authed): Extension<AuthedUser>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_by_id(&authed.user_id)?;
    Ok(Json(user))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/login", post(login))
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(me))
}
